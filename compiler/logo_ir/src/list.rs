//! Immutable lists, which double as procedure bodies.

use std::cell::OnceCell;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::rc::Rc;

use logo_stack::ensure_sufficient_stack;

use crate::{Atom, Number, Word};

/// An immutable Logo list.
///
/// Cloning is a reference-count bump. Every operation that "changes" a list
/// builds a new one.
///
/// A list with [`arguments`](List::arguments) is a procedure: invoking it
/// binds each parameter name to an argument and evaluates the elements as
/// code. A list whose only element is a primitive word is a *primitive body*
/// (see [`List::primitive`]).
#[derive(Clone)]
pub struct List(Rc<ListData>);

struct ListData {
    items: Vec<Atom>,
    /// Parameter names when this list is a procedure body.
    arguments: Option<List>,
    /// Source of the `to ... end` block this body was desugared from.
    source: Option<Rc<str>>,
    /// Memoized [`List::load`].
    load: OnceCell<usize>,
}

impl List {
    /// Create an empty list.
    pub fn new() -> Self {
        Self::from_vec(Vec::new())
    }

    pub fn from_vec(items: Vec<Atom>) -> Self {
        Self::build(items, None, None)
    }

    /// Create a procedure body with the given parameter list.
    pub fn procedure(items: Vec<Atom>, arguments: List) -> Self {
        Self::build(items, Some(arguments), None)
    }

    fn build(items: Vec<Atom>, arguments: Option<List>, source: Option<Rc<str>>) -> Self {
        List(Rc::new(ListData {
            items,
            arguments,
            source,
            load: OnceCell::new(),
        }))
    }

    /// The same elements as a procedure taking `arguments`.
    ///
    /// The cached source text is kept.
    #[must_use]
    pub fn with_arguments(&self, arguments: List) -> Self {
        Self::build(
            self.0.items.clone(),
            Some(arguments),
            self.0.source.clone(),
        )
    }

    /// The same list with its original source text attached.
    #[must_use]
    pub fn with_source(&self, source: impl Into<Rc<str>>) -> Self {
        Self::build(
            self.0.items.clone(),
            self.0.arguments.clone(),
            Some(source.into()),
        )
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.items.is_empty()
    }

    #[inline]
    pub fn as_slice(&self) -> &[Atom] {
        &self.0.items
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Atom> {
        self.0.items.iter()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Atom> {
        self.0.items.get(index)
    }

    /// Parameter names, if this list is a procedure.
    #[inline]
    pub fn arguments(&self) -> Option<&List> {
        self.0.arguments.as_ref()
    }

    /// Original `to ... end` source, or `""`.
    pub fn source_text(&self) -> &str {
        self.0.source.as_deref().unwrap_or("")
    }

    /// The primitive marker, if this list is a primitive body.
    ///
    /// This is the only test for "built-in-ness" anywhere in the interpreter.
    pub fn primitive(&self) -> Option<&Word> {
        match self.as_slice() {
            [Atom::Word(word)] if word.is_primitive() => Some(word),
            _ => None,
        }
    }

    /// Whether both handles point at the same allocation.
    #[inline]
    pub fn ptr_eq(&self, other: &List) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    /// The element at a zero-based index, or the empty list when out of range.
    pub fn item(&self, index: Number) -> Atom {
        usize::try_from(index)
            .ok()
            .and_then(|i| self.get(i))
            .cloned()
            .unwrap_or_else(|| Atom::List(List::new()))
    }

    /// The first element, or the empty list.
    pub fn first(&self) -> Atom {
        self.0
            .items
            .first()
            .cloned()
            .unwrap_or_else(|| Atom::List(List::new()))
    }

    /// The last element, or the empty list.
    pub fn last(&self) -> Atom {
        self.0
            .items
            .last()
            .cloned()
            .unwrap_or_else(|| Atom::List(List::new()))
    }

    #[must_use]
    pub fn butfirst(&self) -> Self {
        self.as_slice().iter().skip(1).cloned().collect()
    }

    #[must_use]
    pub fn butlast(&self) -> Self {
        let items = self.as_slice();
        items[..items.len().saturating_sub(1)].iter().cloned().collect()
    }

    /// A new list with `atom` in front.
    #[must_use]
    pub fn fput(&self, atom: Atom) -> Self {
        std::iter::once(atom).chain(self.iter().cloned()).collect()
    }

    /// A new list with `atom` at the end.
    #[must_use]
    pub fn lput(&self, atom: Atom) -> Self {
        self.iter().cloned().chain(std::iter::once(atom)).collect()
    }

    #[must_use]
    pub fn join(&self, after: &List) -> Self {
        self.iter().chain(after.iter()).cloned().collect()
    }

    /// Recursively splice nested lists into a single level.
    ///
    /// `[1 2 [[3] 4] [[] 5]]` flattens to `[1 2 3 4 5]`.
    #[must_use]
    pub fn flatten(&self) -> Self {
        fn collect(list: &List, out: &mut Vec<Atom>) {
            ensure_sufficient_stack(|| {
                for atom in list.iter() {
                    match atom {
                        Atom::List(inner) => collect(inner, out),
                        other => out.push(other.clone()),
                    }
                }
            });
        }
        let mut out = Vec::with_capacity(self.len());
        collect(self, &mut out);
        Self::from_vec(out)
    }

    /// The suffix starting at the first element equal to `atom`, or `[]`.
    ///
    /// Looking for `'food` in `[dog food in cans]` gives `[food in cans]`.
    #[must_use]
    pub fn member(&self, atom: &Atom) -> Self {
        match self.iter().position(|item| item == atom) {
            Some(start) => self.as_slice()[start..].iter().cloned().collect(),
            None => List::new(),
        }
    }

    /// Structural size used by memory quotas: one for the list itself plus
    /// the load of every element. Computed once.
    pub fn load(&self) -> usize {
        *self.0.load.get_or_init(|| {
            ensure_sufficient_stack(|| {
                self.iter()
                    .fold(1usize, |total, atom| total.saturating_add(atom.load()))
            })
        })
    }
}

impl Default for List {
    fn default() -> Self {
        Self::new()
    }
}

impl FromIterator<Atom> for List {
    fn from_iter<I: IntoIterator<Item = Atom>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a List {
    type Item = &'a Atom;
    type IntoIter = std::slice::Iter<'a, Atom>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl PartialEq for List {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other) || self.0.items == other.0.items
    }
}

impl Eq for List {}

impl Hash for List {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.items.hash(state);
    }
}

impl fmt::Display for List {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ensure_sufficient_stack(|| {
            f.write_str("[")?;
            for (i, atom) in self.iter().enumerate() {
                if i > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{atom}")?;
            }
            f.write_str("]")
        })
    }
}

impl fmt::Debug for List {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.arguments() {
            Some(arguments) => write!(f, "List({arguments}{self})"),
            None => write!(f, "List({self})"),
        }
    }
}
