//! Control flow: leaving procedures and running blocks.

use logo_diagnostic::{EvalResult, RuntimeErrorKind};
use logo_ir::{Atom, Word};

use super::{arg, list, number, ARGUMENT1, ARGUMENT2, ONE, TWO};
use crate::Environment;

pub(super) fn install(env: &mut Environment) {
    env.register_primitive("stop", &[], |env| {
        let name = unwind_to_procedure(env, "stop")?;
        env.notify(|tracer| tracer.stop(&name, false));
        env.pop();
        Ok(())
    });
    env.register_primitive("output", ONE, |env| {
        let value = arg(env, ARGUMENT1)?;
        let name = unwind_to_procedure(env, "output")?;
        env.notify(|tracer| tracer.output(&name, &value, false));
        env.pop();
        env.value(value)
    });

    env.register_primitive("run", ONE, |env| {
        let code = list(env, ARGUMENT1)?;
        env.push(code, false)
    });
    env.register_primitive("if", TWO, |env| {
        if arg(env, ARGUMENT1)?.is_truthy() {
            let code = list(env, ARGUMENT2)?;
            env.push(code, false)?;
        }
        Ok(())
    });
    env.register_primitive("unless", TWO, |env| {
        if !arg(env, ARGUMENT1)?.is_truthy() {
            let code = list(env, ARGUMENT2)?;
            env.push(code, false)?;
        }
        Ok(())
    });

    // Each pass counts down, rewinds this primitive's own scope and runs the
    // block on top of it, so the stack stays flat across iterations.
    env.register_primitive("repeat", TWO, |env| {
        let count = number(env, ARGUMENT1)?;
        if count <= 0 {
            env.pop();
            return Ok(());
        }
        let code = list(env, ARGUMENT2)?;
        let scope = env.current_mut();
        scope
            .bindings
            .insert(Word::name(ARGUMENT1), Atom::Number(count - 1));
        scope.cursor = 0;
        env.push(code, false)
    });
}

/// Pop the calling primitive's scope and any block or primitive scopes
/// above the nearest user procedure, leaving that procedure on top.
///
/// Returns the procedure's name when a tracer wants it.
fn unwind_to_procedure(env: &mut Environment, action: &'static str) -> EvalResult<String> {
    env.pop();
    while !env.current().is_user_procedure() {
        if env.depth() <= 1 {
            return Err(env.error(RuntimeErrorKind::OutsideProcedure(action)));
        }
        env.pop();
    }
    if !env.has_tracer() {
        return Ok(String::new());
    }
    Ok(env
        .current()
        .code()
        .map(|code| env.name_of(code).to_string())
        .unwrap_or_default())
}
