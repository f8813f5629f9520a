//! Evaluation-time errors.

use std::fmt::Write as _;

use logo_ir::Atom;

/// Result type for evaluation.
pub type EvalResult<T = ()> = Result<T, RuntimeError>;

/// What went wrong during evaluation.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RuntimeErrorKind {
    /// The scope stack grew past the recursion limit.
    #[error("Stack overflow!")]
    StackOverflow,
    /// A value was produced where nothing was waiting for one.
    #[error("I don't know what to do with '{0}'!")]
    UnusedValue(Atom),
    #[error("The word '{0}' is primitive and cannot be reassigned.")]
    MutatePrimitive(String),
    #[error("'{0}' has no value!")]
    UndefinedName(String),
    #[error("I don't know how to '{0}'!")]
    UndefinedProcedure(String),
    /// A procedure's body ended before its pending call was saturated.
    #[error("Not enough arguments for '{0}'!")]
    NotEnoughArguments(String),
    /// `stop` or `output` at top level. Carries the attempted action.
    #[error("I can't {0}; I'm not running a procedure!")]
    OutsideProcedure(&'static str),
    #[error("I cannot divide by zero.")]
    DivideByZero,
    #[error("'{value}' is not a {expected}!")]
    TypeMismatch { value: Atom, expected: &'static str },
    /// A list exceeded the configured load limit.
    #[error("Ran out of memory.")]
    OutOfMemory,
}

/// A runtime error plus the call trace at the point it was raised.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{kind}")]
pub struct RuntimeError {
    pub kind: RuntimeErrorKind,
    /// Enclosing user procedures, innermost first.
    pub trace: Vec<Atom>,
}

impl RuntimeError {
    pub fn new(kind: RuntimeErrorKind, trace: Vec<Atom>) -> Self {
        RuntimeError { kind, trace }
    }

    /// Shorthand for a type mismatch on `value`.
    pub fn type_mismatch(value: Atom, expected: &'static str, trace: Vec<Atom>) -> Self {
        Self::new(RuntimeErrorKind::TypeMismatch { value, expected }, trace)
    }

    /// The message followed by one `  in <procedure>` line per trace entry.
    pub fn render(&self) -> String {
        let mut out = self.kind.to_string();
        for entry in &self.trace {
            // Writing to a String cannot fail.
            let _ = write!(out, "\n  in {entry}");
        }
        out
    }
}

#[cfg(test)]
mod tests;
