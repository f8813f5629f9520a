use super::*;
use crate::PrimId;

#[test]
fn truthiness() {
    assert!(!Atom::Number(0).is_truthy());
    assert!(Atom::Number(-3).is_truthy());
    assert!(!Atom::List(List::new()).is_truthy());
    assert!(Atom::List(List::from_vec(vec![Atom::Number(0)])).is_truthy());
    assert!(!Atom::boolean(false).is_truthy());
    assert!(Atom::boolean(true).is_truthy());
    assert!(Atom::Word(Word::call("anything")).is_truthy());
}

#[test]
fn variants_never_compare_equal() {
    assert_ne!(Atom::Number(1), Atom::Word(Word::name("1")));
    assert_ne!(Atom::List(List::new()), Atom::Word(Word::name("")));
}

#[test]
fn kind_names() {
    assert_eq!(Atom::Number(1).kind_name(), "number");
    assert_eq!(Atom::Word(Word::name("a")).kind_name(), "word");
    assert_eq!(Atom::List(List::new()).kind_name(), "list");
}

#[test]
fn accessors() {
    let list = Atom::List(List::new());
    assert_eq!(Atom::Number(7).as_number(), Some(7));
    assert!(list.as_list().is_some());
    assert!(list.as_word().is_none());
    assert_eq!(
        Atom::Word(Word::name("x")).as_word().map(Word::text),
        Some("x")
    );
}

#[test]
fn conversions() {
    assert_eq!(Atom::from(5), Atom::Number(5));
    assert_eq!(Atom::from(true), Atom::Word(Word::name("true")));
    assert_eq!(Atom::from(Word::call("go")), Atom::Word(Word::call("go")));
}

#[test]
fn display() {
    let prim = Word::primitive("sum", PrimId::fresh());
    let list = List::from_vec(vec![
        Atom::Number(-4),
        Atom::Word(Word::value("x")),
        Atom::List(List::from_vec(vec![Atom::Word(prim)])),
    ]);
    assert_eq!(Atom::List(list).to_string(), "[-4 :x [@sum]]");
}
