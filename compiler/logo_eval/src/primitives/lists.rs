//! Type predicates, word-kind conversions and list operations.

use logo_ir::{Atom, List, Number, WordKind};

use super::{arg, list, number, word, ARGUMENT1, ARGUMENT2, ONE, TWO};
use crate::Environment;

pub(super) fn install(env: &mut Environment) {
    predicate(env, "word?", |atom| matches!(atom, Atom::Word(_)));
    predicate(env, "list?", |atom| matches!(atom, Atom::List(_)));
    predicate(env, "num?", |atom| matches!(atom, Atom::Number(_)));

    convert(env, "asname", WordKind::Name);
    convert(env, "asvalue", WordKind::Value);
    convert(env, "ascall", WordKind::Call);

    env.register_primitive("size", ONE, |env| {
        let len = list(env, ARGUMENT1)?.len();
        env.output(Atom::Number(Number::try_from(len).unwrap_or(Number::MAX)))
    });
    unary(env, "first", List::first);
    unary(env, "last", List::last);
    unary(env, "butfirst", |l| Atom::List(l.butfirst()));
    unary(env, "butlast", |l| Atom::List(l.butlast()));
    unary(env, "flatten", |l| Atom::List(l.flatten()));

    env.register_primitive("item", TWO, |env| {
        let index = number(env, ARGUMENT1)?;
        let items = list(env, ARGUMENT2)?;
        env.output(items.item(index))
    });
    env.register_primitive("fput", TWO, |env| {
        let x = arg(env, ARGUMENT1)?;
        let items = list(env, ARGUMENT2)?;
        env.output(Atom::List(items.fput(x)))
    });
    env.register_primitive("lput", TWO, |env| {
        let x = arg(env, ARGUMENT1)?;
        let items = list(env, ARGUMENT2)?;
        env.output(Atom::List(items.lput(x)))
    });
    env.register_primitive("join", TWO, |env| {
        let a = list(env, ARGUMENT1)?;
        let b = list(env, ARGUMENT2)?;
        env.output(Atom::List(a.join(&b)))
    });
    env.register_primitive("member", TWO, |env| {
        let x = arg(env, ARGUMENT1)?;
        let items = list(env, ARGUMENT2)?;
        env.output(Atom::List(items.member(&x)))
    });
}

fn predicate(env: &mut Environment, name: &str, test: fn(&Atom) -> bool) {
    env.register_primitive(name, ONE, move |env| {
        let x = arg(env, ARGUMENT1)?;
        env.output(Atom::boolean(test(&x)))
    });
}

fn convert(env: &mut Environment, name: &str, kind: WordKind) {
    env.register_primitive(name, ONE, move |env| {
        let w = word(env, ARGUMENT1)?;
        env.output(Atom::Word(w.with_kind(kind)))
    });
}

fn unary(env: &mut Environment, name: &str, op: fn(&List) -> Atom) {
    env.register_primitive(name, ONE, move |env| {
        let items = list(env, ARGUMENT1)?;
        env.output(op(&items))
    });
}
