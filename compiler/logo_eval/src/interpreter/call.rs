//! Entering procedures, with tail-call elision.

use logo_diagnostic::EvalResult;
use logo_ir::{Atom, List, Word};
use smallvec::SmallVec;
use tracing::trace;

use crate::environment::Frame;
use crate::Environment;

/// Enter the procedure of a saturated frame.
///
/// Reuses the enclosing procedure scope when the call is a self tail call,
/// otherwise pushes a new procedure scope. Parameters are bound in the
/// resulting scope.
pub(super) fn enter(env: &mut Environment, frame: Frame) -> EvalResult {
    let Frame { code, params, args } = frame;

    let tail = match tail_scope(env, &code) {
        Some(index) => {
            trace!(depth = env.depth(), reused = index, "tail call");
            env.scopes.truncate(index + 1);
            env.current_mut().restart(code.clone());
            true
        }
        None => {
            env.push(code.clone(), true)?;
            false
        }
    };

    let mut bound: SmallVec<[(Word, Atom); 2]> = SmallVec::new();
    for (param, arg) in params.iter().zip(args) {
        let Atom::Word(name) = param else {
            return Err(env.type_mismatch(param.clone(), "word"));
        };
        if env.has_tracer() {
            bound.push((name.clone(), arg.clone()));
        }
        env.current_mut().bindings.insert(name.clone(), arg);
    }

    if env.has_tracer() {
        match code.primitive() {
            Some(primitive) => {
                let name = primitive.text().to_string();
                env.notify(|tracer| tracer.call_primitive(&name, &bound));
            }
            None => {
                let name = env.name_of(&code).to_string();
                env.notify(|tracer| tracer.call(&name, &bound, tail));
            }
        }
    }
    Ok(())
}

/// The scope a call to `code` may reuse, if the call is in tail position.
///
/// The candidate is the nearest user procedure scope above the global one.
/// It must be running `code`, it and every scope stacked on it must have
/// nothing left to do but an optional `stop`, and no frame may be waiting
/// on them except a single `output` that the result flows straight into.
fn tail_scope(env: &Environment, code: &List) -> Option<usize> {
    let index = (1..env.scopes.len())
        .rev()
        .find(|&z| env.scopes[z].is_user_procedure())?;

    let scopes = &env.scopes[index..];
    if scopes[0].code.as_ref() != Some(code) {
        return None;
    }
    if !scopes.iter().all(|scope| scope.is_finishing()) {
        return None;
    }

    let mut pending = scopes.iter().flat_map(|scope| scope.frames.iter());
    match (pending.next(), pending.next()) {
        (None, _) => Some(index),
        (Some(frame), None) if frame.is_pending_output() => Some(index),
        _ => None,
    }
}
