// tests/log_stack.rs

use shellstack::term::{
    ANSI_FG_GREEN, ANSI_FG_NC, ANSI_FG_RED, ANSI_FG_YELLOW, EMPTY_LINE, EMPTY_STRING, LogLine,
    Logger, strip_ansi,
};
use shellstack::types::ColorMode;
use shellstack_test_utils::{SharedBuffer, TestConsole, init_tracing};

#[test]
fn color_constants_are_standard_sequences() {
    assert_eq!(ANSI_FG_RED, "\x1b[31m");
    assert_eq!(ANSI_FG_YELLOW, "\x1b[33m");
    assert_eq!(ANSI_FG_GREEN, "\x1b[32m");
    assert_eq!(ANSI_FG_NC, "\x1b[0m");
    assert_eq!(EMPTY_LINE, "\n");
    assert_eq!(EMPTY_STRING, "");
}

#[test]
fn template_substitutes_placeholders_in_order() {
    let line = LogLine::template("%s scored %d of %i").arg("ann").arg("7").arg("10");
    assert_eq!(line.render(), "ann scored 7 of 10");
}

#[test]
fn leftover_arguments_are_space_appended() {
    let line = LogLine::template("%s:").arg("files").arg("a.txt").arg("b.txt");
    assert_eq!(line.render(), "files: a.txt b.txt");
}

#[test]
fn missing_arguments_leave_placeholder_literal() {
    let line = LogLine::template("%s and %s").arg("one");
    assert_eq!(line.render(), "one and %s");
}

#[test]
fn percent_escapes_and_unknown_specifiers() {
    assert_eq!(LogLine::template("100%% done").render(), "100% done");
    assert_eq!(LogLine::template("50%x").render(), "50%x");
    assert_eq!(LogLine::template("trailing %").render(), "trailing %");
}

#[test]
fn plain_line_joins_without_interpreting_placeholders() {
    let line = LogLine::plain(["%s is literal", "here"]);
    assert_eq!(line.render(), "%s is literal here");
}

#[test]
fn colored_line_wraps_text_in_color_and_reset() {
    let line = LogLine::colored(ANSI_FG_GREEN, "Response:");
    assert_eq!(line.render(), "\x1b[32mResponse:\x1b[0m");
}

#[test]
fn empty_lines() {
    assert!(LogLine::default().is_empty());
    assert!(LogLine::plain(Vec::<String>::new()).is_empty());
    assert!(!LogLine::template("").is_empty());
    assert!(!LogLine::plain([EMPTY_STRING]).is_empty());
}

#[test]
fn stack_prints_lines_in_order() {
    init_tracing();
    let mut t = TestConsole::colored();

    t.console.stack(&[
        LogLine::colored(ANSI_FG_GREEN, "Response:"),
        LogLine::plain(["PID TTY", EMPTY_LINE]),
        LogLine::from("last"),
    ]);

    assert_eq!(
        t.output.contents(),
        "\x1b[32mResponse:\x1b[0m\nPID TTY \n\nlast\n"
    );
}

#[test]
fn stack_is_idempotent() {
    let mut t = TestConsole::colored();
    let lines = [
        LogLine::colored(ANSI_FG_RED, "Error:"),
        LogLine::plain(["No Error", EMPTY_LINE]),
    ];

    t.console.stack(&lines);
    let first = t.output.contents();
    t.output.clear();
    t.console.stack(&lines);
    let second = t.output.contents();

    assert_eq!(first, second);
    assert_eq!(t.console.logger().render_stack(&lines), first);
}

#[test]
fn never_mode_prints_the_same_text_without_sequences() {
    let lines = [
        LogLine::colored(ANSI_FG_YELLOW, "warning"),
        LogLine::template(format!("{ANSI_FG_RED}%s{ANSI_FG_NC} tail")).arg("bad"),
    ];

    let mut colored = TestConsole::colored();
    colored.console.stack(&lines);
    let mut plain = TestConsole::plain();
    plain.console.stack(&lines);

    assert_eq!(plain.output.contents(), "warning\nbad tail\n");
    assert_eq!(strip_ansi(&colored.output.contents()), plain.output.contents());
    assert!(!plain.console.logger().color_enabled());
}

#[test]
fn css_placeholder_swallows_its_argument() {
    let line = LogLine::template("%cbold%s").arg("color: red").arg("!");
    assert_eq!(line.render(), "bold!");
    assert_eq!(LogLine::template("%c").render(), "%c");
}

#[test]
fn auto_mode_follows_the_terminal_check() {
    let lines = [LogLine::colored(ANSI_FG_GREEN, "ok")];

    let on_tty = Logger::with_terminal(Box::new(SharedBuffer::new()), ColorMode::Auto, true);
    let piped = Logger::with_terminal(Box::new(SharedBuffer::new()), ColorMode::Auto, false);
    let forced = Logger::with_terminal(Box::new(SharedBuffer::new()), ColorMode::Always, false);

    assert!(on_tty.color_enabled());
    assert_eq!(on_tty.render_stack(&lines), "\x1b[32mok\x1b[0m\n");
    assert!(!piped.color_enabled());
    assert_eq!(piped.render_stack(&lines), "ok\n");
    assert!(forced.color_enabled());
}
