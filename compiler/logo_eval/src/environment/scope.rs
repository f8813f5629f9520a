//! Scopes and pending call frames.

use logo_ir::{Atom, List, Word, WordKind};
use rustc_hash::FxHashMap;
use smallvec::SmallVec;

/// A procedure invocation that is still collecting its arguments.
#[derive(Clone, Debug)]
pub struct Frame {
    /// The code that runs once the frame is saturated.
    pub code: List,
    /// Parameter names, in order.
    pub params: List,
    /// Argument values collected so far.
    pub args: SmallVec<[Atom; 2]>,
}

impl Frame {
    pub fn new(code: List) -> Self {
        let params = code.arguments().cloned().unwrap_or_default();
        Frame {
            code,
            params,
            args: SmallVec::new(),
        }
    }

    /// Whether every parameter has a value.
    #[inline]
    pub fn is_gravid(&self) -> bool {
        self.args.len() >= self.params.len()
    }

    /// An `output` primitive still waiting for its value.
    pub(crate) fn is_pending_output(&self) -> bool {
        self.args.is_empty()
            && self
                .code
                .primitive()
                .is_some_and(|word| word.text() == "output")
    }
}

/// One level of dynamic scope plus the code running in it.
#[derive(Debug, Default)]
pub struct Scope {
    pub(crate) bindings: FxHashMap<Word, Atom>,
    pub(crate) frames: Vec<Frame>,
    /// Pushed to run a procedure body rather than a block.
    pub(crate) procedure: bool,
    /// Absent on a global scope that has not been given a program.
    pub(crate) code: Option<List>,
    /// Index of the next atom to evaluate.
    pub(crate) cursor: usize,
    /// Set once this scope has delivered an implicit output.
    pub(crate) yielded: bool,
}

impl Scope {
    pub(crate) fn new(code: List, procedure: bool) -> Self {
        Scope {
            code: Some(code),
            procedure,
            ..Scope::default()
        }
    }

    pub fn code(&self) -> Option<&List> {
        self.code.as_ref()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_procedure(&self) -> bool {
        self.procedure
    }

    pub fn bindings(&self) -> &FxHashMap<Word, Atom> {
        &self.bindings
    }

    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    #[inline]
    pub(crate) fn code_len(&self) -> usize {
        self.code.as_ref().map_or(0, List::len)
    }

    #[inline]
    pub(crate) fn is_exhausted(&self) -> bool {
        self.cursor >= self.code_len()
    }

    pub(crate) fn is_primitive_body(&self) -> bool {
        self.code.as_ref().and_then(List::primitive).is_some()
    }

    /// Running the body of a procedure written in Logo.
    pub(crate) fn is_user_procedure(&self) -> bool {
        self.procedure && !self.is_primitive_body()
    }

    /// Nothing left to do here except possibly an explicit `stop`.
    pub(crate) fn is_finishing(&self) -> bool {
        if self.is_exhausted() {
            return true;
        }
        matches!(
            self.code.as_ref().and_then(|code| code.get(self.cursor)),
            Some(Atom::Word(word)) if word.kind() == WordKind::Call && word.text() == "stop"
        )
    }

    /// Reuse this scope for a fresh activation of its procedure.
    pub(crate) fn restart(&mut self, code: List) {
        self.bindings.clear();
        self.frames.clear();
        self.cursor = 0;
        self.yielded = false;
        self.code = Some(code);
    }
}
