//! The universal value type.

use std::fmt;

use crate::{List, Word};

/// Logo numbers are signed integers.
///
/// Arithmetic on them wraps on overflow.
pub type Number = i64;

/// Any Logo value.
#[derive(Clone, PartialEq, Eq, Hash)]
pub enum Atom {
    Number(Number),
    Word(Word),
    List(List),
}

impl Atom {
    /// The boolean sentinel word for `value`.
    pub fn boolean(value: bool) -> Self {
        Atom::Word(Word::boolean(value))
    }

    /// Logo truthiness: the word `false`, the empty list and `0` are false.
    pub fn is_truthy(&self) -> bool {
        match self {
            Atom::Number(n) => *n != 0,
            Atom::Word(word) => !word.is_false(),
            Atom::List(list) => !list.is_empty(),
        }
    }

    /// Human name of the variant, as used in type-mismatch errors.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Atom::Number(_) => "number",
            Atom::Word(_) => "word",
            Atom::List(_) => "list",
        }
    }

    #[inline]
    pub fn as_number(&self) -> Option<Number> {
        match self {
            Atom::Number(n) => Some(*n),
            _ => None,
        }
    }

    #[inline]
    pub fn as_word(&self) -> Option<&Word> {
        match self {
            Atom::Word(word) => Some(word),
            _ => None,
        }
    }

    #[inline]
    pub fn as_list(&self) -> Option<&List> {
        match self {
            Atom::List(list) => Some(list),
            _ => None,
        }
    }

    /// Structural size for memory quotas; words and numbers count one.
    pub fn load(&self) -> usize {
        match self {
            Atom::Number(_) | Atom::Word(_) => 1,
            Atom::List(list) => list.load(),
        }
    }
}

impl From<Number> for Atom {
    fn from(n: Number) -> Self {
        Atom::Number(n)
    }
}

impl From<Word> for Atom {
    fn from(word: Word) -> Self {
        Atom::Word(word)
    }
}

impl From<List> for Atom {
    fn from(list: List) -> Self {
        Atom::List(list)
    }
}

impl From<bool> for Atom {
    fn from(value: bool) -> Self {
        Atom::boolean(value)
    }
}

impl fmt::Display for Atom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Atom::Number(n) => write!(f, "{n}"),
            Atom::Word(word) => write!(f, "{word}"),
            Atom::List(list) => write!(f, "{list}"),
        }
    }
}

impl fmt::Debug for Atom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Atom::Number(n) => write!(f, "Number({n})"),
            Atom::Word(word) => write!(f, "{word:?}"),
            Atom::List(list) => write!(f, "{list:?}"),
        }
    }
}

#[cfg(test)]
mod tests;
