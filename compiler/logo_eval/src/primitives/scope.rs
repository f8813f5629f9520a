//! Bindings and procedure construction.

use logo_ir::Atom;

use super::{arg, list, word, ARGUMENT1, ARGUMENT2, ONE, TWO};
use crate::Environment;

pub(super) fn install(env: &mut Environment) {
    env.register_primitive("local", TWO, |env| {
        let name = word(env, ARGUMENT1)?;
        let value = arg(env, ARGUMENT2)?;
        env.local(&name, value)
    });
    env.register_primitive("make", TWO, |env| {
        let name = word(env, ARGUMENT1)?;
        let value = arg(env, ARGUMENT2)?;
        env.make(&name, value)
    });
    env.register_primitive("thing", ONE, |env| {
        let name = word(env, ARGUMENT1)?;
        let value = env.thing(&name)?;
        env.output(value)
    });
    env.register_primitive("erase", ONE, |env| {
        let name = word(env, ARGUMENT1)?;
        env.thing(&name)?;
        env.erase(&name);
        Ok(())
    });

    // bind params body
    env.register_primitive("bind", TWO, |env| {
        let params = list(env, ARGUMENT1)?;
        let body = list(env, ARGUMENT2)?;
        env.output(Atom::List(body.with_arguments(params)))
    });
    env.register_primitive("args", ONE, |env| {
        let code = list(env, ARGUMENT1)?;
        let params = code.arguments().cloned().unwrap_or_default();
        env.output(Atom::List(params))
    });
}
