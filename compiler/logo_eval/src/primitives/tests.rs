#![allow(clippy::unwrap_used, clippy::expect_used)]

use logo_diagnostic::{EvalResult, RuntimeErrorKind};
use logo_ir::{Atom, List, Word};
use pretty_assertions::assert_eq;

use crate::{run, Environment};

fn exec(env: &mut Environment, source: &str) -> EvalResult {
    let code = logo_parse::parse(source).expect("program should parse");
    run(&code, env)
}

/// Run `make 'r <expr>` and return the printed value of `r`.
fn eval(expr: &str) -> String {
    let mut env = Environment::builder().seed(3).build();
    exec(&mut env, &format!("make 'r {expr}")).unwrap();
    env.thing(&Word::name("r")).unwrap().to_string()
}

fn error_of(source: &str) -> RuntimeErrorKind {
    match exec(&mut Environment::new(), source) {
        Ok(()) => panic!("expected {source:?} to fail"),
        Err(err) => err.kind,
    }
}

// === Arithmetic ===

#[test]
fn arithmetic() {
    assert_eq!(eval("sum 2 3"), "5");
    assert_eq!(eval("difference 2 3"), "-1");
    assert_eq!(eval("product -4 3"), "-12");
    assert_eq!(eval("quotient 7 2"), "3");
    assert_eq!(eval("quotient -7 2"), "-3");
    assert_eq!(eval("remainder -7 3"), "2");
    assert_eq!(eval("remainder 7 -3"), "-2");
    assert_eq!(eval("negate 5"), "-5");
}

#[test]
fn arithmetic_wraps() {
    assert_eq!(eval("sum 9223372036854775807 1"), "-9223372036854775808");
    assert_eq!(eval("negate -9223372036854775808"), "-9223372036854775808");
}

#[test]
fn division_by_zero() {
    assert_eq!(error_of("make 'r quotient 1 0"), RuntimeErrorKind::DivideByZero);
    assert_eq!(error_of("make 'r remainder 1 0"), RuntimeErrorKind::DivideByZero);
}

#[test]
fn comparisons() {
    assert_eq!(eval("less? 1 2"), "'true");
    assert_eq!(eval("less? 2 2"), "'false");
    assert_eq!(eval("greater? 3 2"), "'true");
    assert_eq!(eval("equal? [1 [a]] [1 [a]]"), "'true");
    assert_eq!(eval("equal? 'a 'b"), "'false");
    assert_eq!(eval("equal? 'abc 'abc"), "'true");
}

#[test]
fn arithmetic_type_errors() {
    assert_eq!(
        error_of("make 'r sum 1 [2]"),
        RuntimeErrorKind::TypeMismatch {
            value: Atom::List(List::from_vec(vec![Atom::Number(2)])),
            expected: "number",
        }
    );
    assert_eq!(
        error_of("make 'r less? 'a 1"),
        RuntimeErrorKind::TypeMismatch {
            value: Atom::Word(Word::name("a")),
            expected: "number",
        }
    );
}

#[test]
fn random_is_in_range() {
    let mut env = Environment::builder().seed(11).build();
    for _ in 0..50 {
        exec(&mut env, "make 'r random 10").unwrap();
        let r = env.thing(&Word::name("r")).unwrap();
        let n = r.as_number().expect("random yields a number");
        assert!((0..10).contains(&n));
    }
    assert_eq!(eval("random 0"), "0");
    assert_eq!(eval("random -5"), "0");
}

// === Predicates and conversions ===

#[test]
fn type_predicates() {
    assert_eq!(eval("word? 'a"), "'true");
    assert_eq!(eval("word? 1"), "'false");
    assert_eq!(eval("list? []"), "'true");
    assert_eq!(eval("num? 4"), "'true");
    assert_eq!(eval("num? [4]"), "'false");
}

#[test]
fn word_kind_conversions() {
    assert_eq!(eval("asname asvalue 'fd"), "'fd");
    assert_eq!(eval("asvalue 'fd"), ":fd");
    assert_eq!(eval("ascall 'fd"), "fd");
    assert_eq!(
        error_of("make 'r ascall 1"),
        RuntimeErrorKind::TypeMismatch {
            value: Atom::Number(1),
            expected: "word",
        }
    );
}

#[test]
fn ascall_builds_runnable_code() {
    let mut env = Environment::new();
    exec(&mut env, "make 'r 0 run fput ascall 'make ['r 5]").unwrap();
    assert_eq!(env.thing(&Word::name("r")).unwrap(), Atom::Number(5));
}

// === Lists ===

#[test]
fn list_access() {
    assert_eq!(eval("size [a b c]"), "3");
    assert_eq!(eval("first [a b c]"), "a");
    assert_eq!(eval("last [a b c]"), "c");
    assert_eq!(eval("butfirst [a b c]"), "[b c]");
    assert_eq!(eval("butlast [a b c]"), "[a b]");
    assert_eq!(eval("item 1 [a b c]"), "b");
}

#[test]
fn list_access_out_of_range() {
    assert_eq!(eval("first []"), "[]");
    assert_eq!(eval("last []"), "[]");
    assert_eq!(eval("butfirst []"), "[]");
    assert_eq!(eval("item 5 [a b]"), "[]");
    assert_eq!(eval("item -1 [a b]"), "[]");
}

#[test]
fn list_construction() {
    assert_eq!(eval("fput 1 [2 3]"), "[1 2 3]");
    assert_eq!(eval("lput 1 [2 3]"), "[2 3 1]");
    assert_eq!(eval("join [1 2] [3]"), "[1 2 3]");
    assert_eq!(eval("flatten [1 [2 [3]] [] 4]"), "[1 2 3 4]");
    assert_eq!(eval("member 'food [dog food in cans]"), "[food in cans]");
    assert_eq!(eval("member 'cat [dog food]"), "[]");
}

#[test]
fn list_type_errors() {
    assert_eq!(
        error_of("make 'r first 'a"),
        RuntimeErrorKind::TypeMismatch {
            value: Atom::Word(Word::name("a")),
            expected: "list",
        }
    );
}

// === Bindings ===

#[test]
fn make_thing_erase() {
    assert_eq!(eval("thing 'sum"), "[@sum]");
    let mut env = Environment::new();
    exec(&mut env, "make 'x 1 make 'y thing 'x").unwrap();
    assert_eq!(env.thing(&Word::name("y")).unwrap(), Atom::Number(1));

    assert_eq!(
        error_of("make 'x 1 erase 'x make 'r :x"),
        RuntimeErrorKind::UndefinedName("x".into())
    );
    assert_eq!(
        error_of("erase 'ghost"),
        RuntimeErrorKind::UndefinedName("ghost".into())
    );
}

#[test]
fn local_inside_procedure_is_scoped() {
    let mut env = Environment::new();
    exec(
        &mut env,
        "make 'x 1\nto f\n  local 'x 2\n  make 'seen :x\nend\nf",
    )
    .unwrap();
    assert_eq!(env.thing(&Word::name("x")).unwrap(), Atom::Number(1));
    assert_eq!(env.thing(&Word::name("seen")).unwrap(), Atom::Number(2));
}

#[test]
fn make_inside_procedure_updates_caller() {
    let mut env = Environment::new();
    exec(
        &mut env,
        "to bump\n  make 'n sum :n 1\nend\n\
         to outer :n\n  bump bump\n  make 'result :n\nend\n\
         outer 5",
    )
    .unwrap();
    assert_eq!(env.thing(&Word::name("result")).unwrap(), Atom::Number(7));
    assert!(env.thing(&Word::name("n")).is_err());
}

#[test]
fn primitives_are_protected() {
    assert_eq!(
        error_of("make 'sum 1"),
        RuntimeErrorKind::MutatePrimitive("sum".into())
    );
    assert_eq!(
        error_of("local 'repeat 1"),
        RuntimeErrorKind::MutatePrimitive("repeat".into())
    );
}

#[test]
fn bind_and_args() {
    assert_eq!(eval("args bind [a b] [c]"), "[a b]");
    assert_eq!(eval("args [c]"), "[]");
    assert_eq!(eval("args thing 'sum"), "['argument1 'argument2]");
}

// === Control ===

#[test]
fn if_and_unless() {
    assert_eq!(eval("0 if (1 < 2) [make 'r 1]"), "1");
    assert_eq!(eval("0 if (1 > 2) [make 'r 1]"), "0");
    assert_eq!(eval("0 unless [] [make 'r 1]"), "1");
    assert_eq!(eval("0 unless 'false [make 'r 1]"), "1");
    assert_eq!(eval("0 unless 7 [make 'r 1]"), "0");
}

#[test]
fn untaken_branch_is_not_type_checked() {
    assert_eq!(eval("0 if 0 'oops"), "0");
    assert_eq!(
        error_of("if 1 'oops"),
        RuntimeErrorKind::TypeMismatch {
            value: Atom::Word(Word::name("oops")),
            expected: "list",
        }
    );
}

#[test]
fn repeat_runs_block() {
    assert_eq!(eval("0 repeat 5 [make 'r sum :r 1]"), "5");
    assert_eq!(eval("0 repeat 0 [make 'r 1]"), "0");
    assert_eq!(eval("0 repeat -3 [make 'r 1]"), "0");
}

#[test]
fn repeat_keeps_the_stack_flat() {
    let mut env = Environment::builder().recursion_limit(10).build();
    exec(&mut env, "make 'r 0 repeat 1000 [make 'r sum :r 1]").unwrap();
    assert_eq!(env.thing(&Word::name("r")).unwrap(), Atom::Number(1000));
}

#[test]
fn run_evaluates_a_list() {
    assert_eq!(eval("0 run [make 'r 7]"), "7");
    assert_eq!(eval("0 run []"), "0");
}

#[test]
fn stop_and_output_need_a_procedure() {
    assert_eq!(error_of("stop"), RuntimeErrorKind::OutsideProcedure("stop"));
    assert_eq!(
        error_of("make 'r output 1"),
        RuntimeErrorKind::OutsideProcedure("output")
    );
    assert_eq!(
        error_of("repeat 2 [stop]"),
        RuntimeErrorKind::OutsideProcedure("stop")
    );
}

#[test]
fn stop_leaves_nested_blocks() {
    let mut env = Environment::new();
    exec(
        &mut env,
        "make 'n 0\nto f\n  repeat 10 [make 'n sum :n 1 if (:n = 3) [stop]]\n  make 'n 100\nend\nf",
    )
    .unwrap();
    assert_eq!(env.thing(&Word::name("n")).unwrap(), Atom::Number(3));
}

#[test]
fn output_from_inside_repeat() {
    let mut env = Environment::new();
    exec(
        &mut env,
        "to find\n  make 'i 0\n  repeat 10 [make 'i sum :i 1 if (:i = 4) [output :i]]\n  output 'none\nend\n\
         make 'r find",
    )
    .unwrap();
    assert_eq!(env.thing(&Word::name("r")).unwrap(), Atom::Number(4));
}
