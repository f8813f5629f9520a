//! Words: symbols tagged with the context they are evaluated in.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::rc::Rc;
use std::sync::atomic::{AtomicU32, Ordering};

/// Identity of a registered primitive.
///
/// Allocated from a process-wide counter, so two primitives registered
/// separately (even under the same name, even in different environments)
/// never share an id.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct PrimId(u32);

impl PrimId {
    /// Allocate a new, never-before-seen id.
    pub fn fresh() -> Self {
        static NEXT: AtomicU32 = AtomicU32::new(0);
        PrimId(NEXT.fetch_add(1, Ordering::Relaxed))
    }

    /// Get raw u32 value.
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

/// How a word is interpreted when evaluated.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum WordKind {
    /// `foo` - the name of a procedure to invoke.
    Call,
    /// `:foo` - the name of a binding to dereference.
    Value,
    /// `'foo` - a literal symbol.
    Name,
    /// `@foo` - a primitive marker; evaluating it runs built-in logic.
    Prim(PrimId),
}

/// A Logo word.
///
/// Cloning shares the text. See the crate docs for the equality rules.
#[derive(Clone)]
pub struct Word {
    text: Rc<str>,
    kind: WordKind,
}

impl Word {
    /// Text of the `true` sentinel.
    pub const TRUE: &'static str = "true";
    /// Text of the `false` sentinel.
    pub const FALSE: &'static str = "false";

    pub fn new(kind: WordKind, text: impl Into<Rc<str>>) -> Self {
        Word {
            text: text.into(),
            kind,
        }
    }

    #[inline]
    pub fn call(text: impl Into<Rc<str>>) -> Self {
        Self::new(WordKind::Call, text)
    }

    #[inline]
    pub fn value(text: impl Into<Rc<str>>) -> Self {
        Self::new(WordKind::Value, text)
    }

    #[inline]
    pub fn name(text: impl Into<Rc<str>>) -> Self {
        Self::new(WordKind::Name, text)
    }

    #[inline]
    pub fn primitive(text: impl Into<Rc<str>>, id: PrimId) -> Self {
        Self::new(WordKind::Prim(id), text)
    }

    /// The boolean sentinel for `value` (a Name word).
    pub fn boolean(value: bool) -> Self {
        Self::name(if value { Self::TRUE } else { Self::FALSE })
    }

    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[inline]
    pub fn kind(&self) -> WordKind {
        self.kind
    }

    /// The primitive id, if this is a primitive marker.
    #[inline]
    pub fn prim_id(&self) -> Option<PrimId> {
        match self.kind {
            WordKind::Prim(id) => Some(id),
            _ => None,
        }
    }

    #[inline]
    pub fn is_primitive(&self) -> bool {
        self.prim_id().is_some()
    }

    /// The same text reinterpreted under another kind.
    #[must_use]
    pub fn with_kind(&self, kind: WordKind) -> Self {
        Word {
            text: Rc::clone(&self.text),
            kind,
        }
    }

    /// Whether this is the `false` sentinel.
    pub fn is_false(&self) -> bool {
        !self.is_primitive() && &*self.text == Self::FALSE
    }
}

impl PartialEq for Word {
    fn eq(&self, other: &Self) -> bool {
        match (self.kind, other.kind) {
            (WordKind::Prim(a), WordKind::Prim(b)) => a == b,
            (WordKind::Prim(_), _) | (_, WordKind::Prim(_)) => false,
            _ => self.text == other.text,
        }
    }
}

impl Eq for Word {}

// Hash the text only: words of different kinds with equal text must land in
// the same bucket, and equal primitives always share their text.
impl Hash for Word {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.text.hash(state);
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            WordKind::Call => write!(f, "{}", self.text),
            WordKind::Value => write!(f, ":{}", self.text),
            WordKind::Name => write!(f, "'{}", self.text),
            WordKind::Prim(_) => write!(f, "@{}", self.text),
        }
    }
}

impl fmt::Debug for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Word({self})")
    }
}
