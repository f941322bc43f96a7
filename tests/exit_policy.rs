// tests/exit_policy.rs

use std::sync::{Arc, Mutex};

use shellstack::exec::{ExecError, Flow, Verdict, evaluate, exec_action, wrap};
use shellstack::session::{Session, SessionOutcome};
use shellstack::term::LogLine;
use shellstack::types::{ExitPolicy, TERMINATION_CODE};
use shellstack_test_utils::{FakeRunner, Scripted, TestConsole, init_tracing};

fn exited(code: i32) -> ExecError {
    ExecError::Exited {
        command: "ps --invalid-parameter".to_string(),
        code,
    }
}

type Seen = Arc<Mutex<Option<(String, String, Option<i32>)>>>;

#[test]
fn default_policy_is_fatal_for_both_conditions() {
    let policy = ExitPolicy::default();
    assert!(policy.on_error);
    assert!(policy.on_stderr);
    assert_eq!(TERMINATION_CODE, 0);
}

#[test]
fn error_terminates_immediately_and_skips_stderr() {
    init_tracing();
    let mut t = TestConsole::colored();

    let verdict = evaluate(
        &mut t.console,
        Some(&exited(1)),
        "usage: ps\n",
        ExitPolicy::default(),
    );

    assert_eq!(verdict, Verdict::Terminate(0));
    assert_eq!(t.control.codes(), vec![0]);
    let out = t.output.contents();
    assert!(out.starts_with("\x1b[31mError: Command failed: ps --invalid-parameter"));
    assert!(!out.contains("usage: ps"), "stderr must not be printed: {out:?}");
}

#[test]
fn non_fatal_error_falls_through_to_stderr_check() {
    let mut t = TestConsole::plain();

    let verdict = evaluate(
        &mut t.console,
        Some(&exited(2)),
        "usage: ps\n",
        ExitPolicy::default().with_on_error(false),
    );

    assert_eq!(verdict, Verdict::Terminate(0));
    assert_eq!(t.control.codes(), vec![0]);
    assert_eq!(
        t.output.contents(),
        "Error: Command failed: ps --invalid-parameter (exit code 2)\nusage: ps\n\n"
    );
}

#[test]
fn stderr_alone_is_fatal_by_default() {
    let mut t = TestConsole::plain();

    let verdict = evaluate(&mut t.console, None, "warning: odd\n", ExitPolicy::default());

    assert_eq!(verdict, Verdict::Terminate(0));
    assert_eq!(t.output.contents(), "warning: odd\n\n");
}

#[test]
fn clean_completion_proceeds_silently() {
    let mut t = TestConsole::colored();

    let verdict = evaluate(&mut t.console, None, "", ExitPolicy::default());

    assert_eq!(verdict, Verdict::Proceed);
    assert!(t.control.codes().is_empty());
    assert_eq!(t.output.contents(), "");
}

#[test]
fn keep_going_logs_but_proceeds() {
    let mut t = TestConsole::plain();

    let verdict = evaluate(
        &mut t.console,
        Some(&exited(1)),
        "bad flag\n",
        ExitPolicy::keep_going(),
    );

    assert_eq!(verdict, Verdict::Proceed);
    assert!(!t.console.is_terminated());
    let out = t.output.contents();
    assert!(out.contains("Error: Command failed"));
    assert!(out.contains("bad flag"));
}

#[test]
fn adapter_reorders_arguments_for_the_callback() {
    let mut t = TestConsole::plain();
    let seen: Seen = Arc::new(Mutex::new(None));

    let sink = Arc::clone(&seen);
    let action = wrap(
        move |_console, output, stderr, error| {
            *sink.lock().unwrap() = Some((output, stderr, error.and_then(|e| e.exit_code())));
            Flow::Done
        },
        ExitPolicy::keep_going(),
    );

    let flow = action.handle(
        &mut t.console,
        Some(exited(3)),
        "out".to_string(),
        "err".to_string(),
    );

    assert!(matches!(flow, Flow::Done));
    assert_eq!(
        seen.lock().unwrap().clone(),
        Some(("out".to_string(), "err".to_string(), Some(3)))
    );
}

#[test]
fn adapter_skips_callback_when_policy_terminates() {
    let mut t = TestConsole::plain();
    let called = Arc::new(Mutex::new(false));

    let flag = Arc::clone(&called);
    let action = exec_action(move |_console, _output, _stderr, _error| {
        *flag.lock().unwrap() = true;
        Flow::Done
    });

    action.handle(&mut t.console, None, "out".to_string(), "oops".to_string());

    assert!(!*called.lock().unwrap());
    assert_eq!(t.control.codes(), vec![0]);
    assert_eq!(t.console.termination_code(), Some(0));
}

#[test]
fn callback_runs_after_policy_output() {
    let mut t = TestConsole::plain();

    let action = wrap(
        |console, _output, _stderr, _error| {
            console.stack(&[LogLine::from("callback")]);
            Flow::Done
        },
        ExitPolicy::default().with_on_stderr(false),
    );
    action.handle(&mut t.console, None, String::new(), "diag".to_string());

    assert_eq!(t.output.contents(), "diag\ncallback\n");
}

#[test]
fn stop_prints_message_then_terminates_with_zero() {
    let mut t = TestConsole::plain();

    t.console.stop(Some(LogLine::from("bye")));

    assert_eq!(t.output.contents(), "bye\n");
    assert_eq!(t.control.codes(), vec![0]);
}

#[test]
fn stop_without_message_prints_nothing() {
    let mut t = TestConsole::plain();

    t.console.stop(None);
    t.console.stop(Some(LogLine::default()));

    assert_eq!(t.output.contents(), "");
    // first termination wins; the second request is ignored
    assert_eq!(t.control.codes(), vec![0]);
}

#[tokio::test]
async fn output_after_stop_never_reaches_the_terminal() {
    let t = TestConsole::plain();
    let output = t.output.clone();
    let runner = FakeRunner::new().with("ps", Scripted::ok("PID\n"));
    let mut session = Session::new(runner, t.console);

    let action = exec_action(|console, _output, _stderr, _error| {
        console.stop(Some(LogLine::from("stopping")));
        console.stack(&[LogLine::from("AFTER STOP")]);
        Flow::Done
    });
    let outcome = session.exec("ps", action).await;

    assert_eq!(outcome, SessionOutcome::Terminated(0));
    assert_eq!(output.contents(), "stopping\n");
}

#[test]
fn spawn_failure_is_reported_and_fatal() {
    let mut t = TestConsole::plain();
    let error = ExecError::Spawn {
        command: "missing-binary".to_string(),
        source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
    };

    let verdict = evaluate(&mut t.console, Some(&error), "", ExitPolicy::default());

    assert_eq!(verdict, Verdict::Terminate(0));
    assert_eq!(error.exit_code(), None);
    assert_eq!(
        t.output.contents(),
        "Error: Command failed to start: missing-binary: no such file\n"
    );
}
