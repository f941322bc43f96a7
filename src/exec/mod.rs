// src/exec/mod.rs

//! Command execution layer.
//!
//! - [`runner`] provides the `CommandRunner` trait and the `ShellRunner`
//!   used in production; tests replace it with a scripted fake.
//! - [`result`] holds `CommandResult` and `ExecError`.
//! - [`policy`] evaluates the exit policy for one completion.
//! - [`adapter`] turns a user callback into an `ExecAction` continuation.

pub mod adapter;
pub mod policy;
pub mod result;
pub mod runner;

pub use adapter::{ExecAction, Flow, Step, exec_action, wrap};
pub use policy::{Verdict, evaluate};
pub use result::{CommandResult, ExecError};
pub use runner::{CommandRunner, ShellRunner, run_shell};
