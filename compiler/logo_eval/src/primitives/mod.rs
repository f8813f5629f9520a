//! The primitive kernel, and helpers for writing primitives.
//!
//! Every primitive is a one-element procedure body holding a fresh
//! primitive word, bound globally under its name. Parameters are named
//! `argument1` and `argument2`; the logic reads them back with `thing`.

mod arith;
mod control;
mod lists;
mod scope;

use logo_diagnostic::EvalResult;
use logo_ir::{Atom, List, Number, Word};
use tracing::debug;

use crate::Environment;

/// Name of the first parameter of every kernel primitive.
pub const ARGUMENT1: &str = "argument1";
/// Name of the second parameter of every kernel primitive.
pub const ARGUMENT2: &str = "argument2";

const ONE: &[&str] = &[ARGUMENT1];
const TWO: &[&str] = &[ARGUMENT1, ARGUMENT2];

/// Install the kernel into a fresh environment.
pub(crate) fn install(env: &mut Environment) {
    arith::install(env);
    lists::install(env);
    scope::install(env);
    control::install(env);
    debug!(count = env.primitive_count(), "kernel installed");
}

/// The value of parameter `param`.
pub fn arg(env: &Environment, param: &str) -> EvalResult<Atom> {
    env.thing(&Word::name(param))
}

/// The value of parameter `param`, which must be a number.
pub fn number(env: &Environment, param: &str) -> EvalResult<Number> {
    match arg(env, param)? {
        Atom::Number(n) => Ok(n),
        other => Err(env.type_mismatch(other, "number")),
    }
}

/// The value of parameter `param`, which must be a list.
pub fn list(env: &Environment, param: &str) -> EvalResult<List> {
    match arg(env, param)? {
        Atom::List(list) => Ok(list),
        other => Err(env.type_mismatch(other, "list")),
    }
}

/// The value of parameter `param`, which must be a word.
pub fn word(env: &Environment, param: &str) -> EvalResult<Word> {
    match arg(env, param)? {
        Atom::Word(word) => Ok(word),
        other => Err(env.type_mismatch(other, "word")),
    }
}

#[cfg(test)]
mod tests;
