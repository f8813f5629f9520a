use super::*;
use logo_ir::{List, Word};
use pretty_assertions::assert_eq;

#[test]
fn messages() {
    let cases = [
        (RuntimeErrorKind::StackOverflow, "Stack overflow!"),
        (
            RuntimeErrorKind::UnusedValue(Atom::Number(3)),
            "I don't know what to do with '3'!",
        ),
        (
            RuntimeErrorKind::MutatePrimitive("sum".into()),
            "The word 'sum' is primitive and cannot be reassigned.",
        ),
        (
            RuntimeErrorKind::UndefinedName("x".into()),
            "'x' has no value!",
        ),
        (
            RuntimeErrorKind::UndefinedProcedure("frob".into()),
            "I don't know how to 'frob'!",
        ),
        (
            RuntimeErrorKind::NotEnoughArguments("sum".into()),
            "Not enough arguments for 'sum'!",
        ),
        (
            RuntimeErrorKind::OutsideProcedure("stop"),
            "I can't stop; I'm not running a procedure!",
        ),
        (RuntimeErrorKind::DivideByZero, "I cannot divide by zero."),
        (RuntimeErrorKind::OutOfMemory, "Ran out of memory."),
    ];
    for (kind, message) in cases {
        assert_eq!(kind.to_string(), message);
    }
}

#[test]
fn type_mismatch_shows_value_form() {
    let err = RuntimeError::type_mismatch(Atom::Word(Word::name("abc")), "number", Vec::new());
    assert_eq!(err.to_string(), "''abc' is not a number!");

    let list = List::from_vec(vec![Atom::Number(1), Atom::Number(2)]);
    let err = RuntimeError::type_mismatch(Atom::List(list), "word", Vec::new());
    assert_eq!(err.to_string(), "'[1 2]' is not a word!");
}

#[test]
fn render_includes_trace() {
    let err = RuntimeError::new(
        RuntimeErrorKind::DivideByZero,
        vec![Atom::Word(Word::call("inner")), Atom::Word(Word::call("outer"))],
    );
    assert_eq!(
        err.render(),
        "I cannot divide by zero.\n  in inner\n  in outer"
    );
}

#[test]
fn render_without_trace_is_the_message() {
    let err = RuntimeError::new(RuntimeErrorKind::StackOverflow, Vec::new());
    assert_eq!(err.render(), "Stack overflow!");
}

#[test]
fn logo_error_wraps_both() {
    use crate::{LogoError, SyntaxError, SyntaxErrorKind};

    let runtime: LogoError = RuntimeError::new(RuntimeErrorKind::OutOfMemory, Vec::new()).into();
    assert_eq!(runtime.to_string(), "runtime error: Ran out of memory.");

    let syntax: LogoError = SyntaxError::new(SyntaxErrorKind::MissingName, "to", 2).into();
    assert_eq!(syntax.to_string(), "syntax error: word name expected!");
}
