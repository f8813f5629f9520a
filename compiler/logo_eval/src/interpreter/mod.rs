//! The step-wise evaluator.
//!
//! A program runs one tick at a time. Each tick does exactly one of:
//!
//! 1. enter a procedure whose pending frame has all its arguments,
//! 2. finish the current scope once its code is exhausted,
//! 3. evaluate the next atom of the current scope.
//!
//! Hosts either [`run`] a program to completion or [`init`] it and drive it
//! with [`run_until`] / [`run_for`], which return control when a primitive
//! pauses the environment.

mod call;

use logo_diagnostic::{EvalResult, RuntimeErrorKind};
use logo_ir::{Atom, List, Word, WordKind};

use crate::environment::Frame;
use crate::Environment;

/// Why a driver returned.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Progress {
    /// The program ran to its end.
    Complete,
    /// A primitive paused the environment.
    Paused,
    /// The tick budget ran out.
    Yielded,
}

/// Run `code` to completion, ignoring pauses.
pub fn run(code: &List, env: &mut Environment) -> EvalResult {
    init(code, env);
    while tick(env)? {}
    Ok(())
}

/// Prepare `env` to run `code` without executing anything.
pub fn init(code: &List, env: &mut Environment) {
    env.install(code.clone());
    env.notify(|tracer| tracer.begin());
}

/// Tick until the program completes or pauses.
pub fn run_until(env: &mut Environment) -> EvalResult<Progress> {
    while tick(env)? {
        if env.is_paused() {
            return Ok(Progress::Paused);
        }
    }
    Ok(Progress::Complete)
}

/// Tick at most `max_ticks` times.
pub fn run_for(env: &mut Environment, max_ticks: usize) -> EvalResult<Progress> {
    for _ in 0..max_ticks {
        if !tick(env)? {
            return Ok(Progress::Complete);
        }
        if env.is_paused() {
            return Ok(Progress::Paused);
        }
    }
    Ok(Progress::Yielded)
}

/// Perform one step. Returns whether there is more work to do.
pub fn tick(env: &mut Environment) -> EvalResult<bool> {
    env.notify(|tracer| tracer.tick());

    if env.current().frames.last().is_some_and(Frame::is_gravid) {
        if let Some(frame) = env.current_mut().frames.pop() {
            call::enter(env, frame)?;
        }
        return Ok(true);
    }

    if env.current().is_exhausted() {
        return finish_scope(env);
    }

    let scope = env.current_mut();
    let atom = match scope.code.as_ref().and_then(|code| code.get(scope.cursor)) {
        Some(atom) => atom.clone(),
        None => return Ok(true),
    };
    scope.cursor += 1;
    eval(env, atom)?;
    Ok(true)
}

/// The current scope has run out of code.
fn finish_scope(env: &mut Environment) -> EvalResult<bool> {
    if let Some(frame) = env.current().frames.last() {
        let name = env.name_of(&frame.code).to_string();
        return Err(env.error(RuntimeErrorKind::NotEnoughArguments(name)));
    }

    if env.depth() <= 1 {
        env.notify(|tracer| tracer.end());
        return Ok(false);
    }

    let scope = env.current();
    if env.has_tracer() && scope.is_user_procedure() && !scope.yielded {
        let name = scope
            .code
            .as_ref()
            .map(|code| env.name_of(code).to_string())
            .unwrap_or_default();
        env.notify(|tracer| tracer.stop(&name, true));
    }
    env.pop();
    Ok(true)
}

/// Evaluate a single atom in the current scope.
fn eval(env: &mut Environment, atom: Atom) -> EvalResult {
    match atom {
        Atom::Number(_) | Atom::List(_) => env.value(atom),
        Atom::Word(word) => eval_word(env, &word),
    }
}

fn eval_word(env: &mut Environment, word: &Word) -> EvalResult {
    match word.kind() {
        WordKind::Value => {
            let value = env.thing(word)?;
            env.value(value)
        }
        WordKind::Name => env.value(Atom::Word(word.clone())),
        WordKind::Call => env.call(word),
        WordKind::Prim(id) => match env.primitive(id) {
            Some(callback) => callback(env),
            None => Err(env.error(RuntimeErrorKind::UndefinedProcedure(
                word.text().to_string(),
            ))),
        },
    }
}
