//! Logo Diagnostic - error reporting for the Logo interpreter.
//!
//! Two error families, both carrying a typed kind plus a formatted message:
//!
//! - [`SyntaxError`]: raised by the parser; carries the source text, offset,
//!   line, column and offending line for caret-style reporting.
//! - [`RuntimeError`]: raised during evaluation; carries the call trace of
//!   enclosing user procedures captured when the error was built.
//!
//! [`LogoError`] unifies both for hosts that parse and run in one step.
//!
//! Runtime errors abort the current run. The host must call
//! `Environment::reset` before executing anything else.

mod line_index;
mod runtime;
mod syntax;

pub use line_index::{locate, SourceLocation};
pub use runtime::{EvalResult, RuntimeError, RuntimeErrorKind};
pub use syntax::{SyntaxError, SyntaxErrorKind};

/// Any error the interpreter can report.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LogoError {
    #[error("syntax error: {0}")]
    Syntax(#[from] SyntaxError),
    #[error("runtime error: {0}")]
    Runtime(#[from] RuntimeError),
}
