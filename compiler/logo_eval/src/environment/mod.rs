//! The complete state of a running Logo program.
//!
//! Scopes form a stack with the global scope at the bottom. Name lookup is
//! dynamic: it walks the stack from the innermost scope outward, so a
//! procedure sees the bindings of whoever called it.

mod builder;
mod scope;

pub use builder::{EnvironmentBuilder, DEFAULT_RECURSION_LIMIT};
pub use scope::{Frame, Scope};

use std::fmt;
use std::rc::Rc;

use logo_diagnostic::{EvalResult, RuntimeError, RuntimeErrorKind};
use logo_ir::{Atom, List, PrimId, Word, WordKind};
use rand::rngs::StdRng;
use rand::Rng;
use rustc_hash::{FxHashMap, FxHashSet};
use tracing::debug;

use crate::tracer::Tracer;

/// Native logic behind a primitive procedure.
///
/// The callback reads its parameters with [`Environment::thing`] and
/// finishes with at most one [`Environment::output`].
pub type PrimitiveFn = Rc<dyn Fn(&mut Environment) -> EvalResult>;

struct Primitive {
    name: Rc<str>,
    callback: PrimitiveFn,
}

/// Interpreter state: scopes, primitives, configuration and hooks.
pub struct Environment {
    /// Scope stack; index 0 is the global scope and is never popped.
    pub(crate) scopes: Vec<Scope>,
    paused: bool,
    tracer: Option<Box<dyn Tracer>>,
    primitives: FxHashMap<PrimId, Primitive>,
    recursion_limit: usize,
    load_limit: usize,
    rng: StdRng,
}

impl Environment {
    /// An environment with the primitive kernel installed.
    pub fn new() -> Self {
        EnvironmentBuilder::new().build()
    }

    pub fn builder() -> EnvironmentBuilder {
        EnvironmentBuilder::new()
    }

    fn from_parts(
        recursion_limit: usize,
        load_limit: usize,
        rng: StdRng,
        tracer: Option<Box<dyn Tracer>>,
    ) -> Self {
        Environment {
            scopes: vec![Scope::default()],
            paused: false,
            tracer,
            primitives: FxHashMap::default(),
            recursion_limit,
            load_limit,
            rng,
        }
    }

    /// Current scope-stack depth, counting the global scope.
    #[inline]
    pub fn depth(&self) -> usize {
        self.scopes.len()
    }

    pub fn recursion_limit(&self) -> usize {
        self.recursion_limit
    }

    pub fn load_limit(&self) -> usize {
        self.load_limit
    }

    /// The innermost scope.
    #[inline]
    pub fn current(&self) -> &Scope {
        // The global scope is never popped.
        &self.scopes[self.scopes.len() - 1]
    }

    #[inline]
    pub(crate) fn current_mut(&mut self) -> &mut Scope {
        let top = self.scopes.len() - 1;
        &mut self.scopes[top]
    }

    pub fn global(&self) -> &Scope {
        &self.scopes[0]
    }

    // === Errors ===

    /// Build a runtime error carrying the current call trace.
    pub fn error(&self, kind: RuntimeErrorKind) -> RuntimeError {
        RuntimeError::new(kind, self.trace())
    }

    pub(crate) fn type_mismatch(&self, value: Atom, expected: &'static str) -> RuntimeError {
        RuntimeError::type_mismatch(value, expected, self.trace())
    }

    // === Scope stack ===

    /// Push a scope to run `code`.
    pub fn push(&mut self, code: List, procedure: bool) -> EvalResult {
        if self.recursion_limit != 0 && self.scopes.len() >= self.recursion_limit {
            return Err(self.error(RuntimeErrorKind::StackOverflow));
        }
        self.scopes.push(Scope::new(code, procedure));
        Ok(())
    }

    /// Pop the innermost scope. The global scope stays put.
    pub fn pop(&mut self) -> Option<Scope> {
        if self.scopes.len() > 1 {
            self.scopes.pop()
        } else {
            None
        }
    }

    /// Install `code` as the program of the global scope.
    ///
    /// Anything left over from a previous run is discarded.
    pub(crate) fn install(&mut self, code: List) {
        self.scopes.truncate(1);
        let global = &mut self.scopes[0];
        global.code = Some(code);
        global.cursor = 0;
        global.frames.clear();
        global.yielded = false;
    }

    /// Unwind to the global scope and clear all pending work.
    ///
    /// This is the only way to recover after a runtime error.
    pub fn reset(&mut self) {
        debug!(depth = self.scopes.len(), "reset");
        self.scopes.truncate(1);
        let global = &mut self.scopes[0];
        global.frames.clear();
        global.code = None;
        global.cursor = 0;
        global.yielded = false;
        self.resume();
    }

    // === Values ===

    /// Deliver a produced value to whoever is waiting for it.
    ///
    /// With no pending frame in the current scope this is an implicit
    /// output: the current scope must have consumed its last atom and the
    /// scope below it must have a pending frame.
    pub fn value(&mut self, atom: Atom) -> EvalResult {
        if let Atom::List(list) = &atom {
            if self.load_limit != 0 && list.load() > self.load_limit {
                return Err(self.error(RuntimeErrorKind::OutOfMemory));
            }
        }

        if let Some(frame) = self.current_mut().frames.last_mut() {
            frame.args.push(atom);
            return Ok(());
        }

        let depth = self.scopes.len();
        let implicit = depth >= 2
            && self.current().is_exhausted()
            && !self.scopes[depth - 2].frames.is_empty();
        if !implicit {
            return Err(self.error(RuntimeErrorKind::UnusedValue(atom)));
        }

        if self.current().is_user_procedure() {
            if self.tracer.is_some() {
                let name = self.name_of_current();
                self.notify(|tracer| tracer.output(&name, &atom, true));
            }
            self.current_mut().yielded = true;
        }
        if let Some(frame) = self.scopes[depth - 2].frames.last_mut() {
            frame.args.push(atom);
        }
        Ok(())
    }

    /// Finish the current primitive with a result: pop its scope, then
    /// deliver `atom` via [`value`](Self::value).
    pub fn output(&mut self, atom: Atom) -> EvalResult {
        self.pop();
        self.value(atom)
    }

    // === Bindings ===

    fn set(&mut self, index: usize, name: &Word, value: Atom) -> EvalResult {
        let existing = self.scopes[index].bindings.get(name);
        if let Some(Atom::List(list)) = existing {
            if list.primitive().is_some() {
                return Err(self.error(RuntimeErrorKind::MutatePrimitive(
                    name.text().to_string(),
                )));
            }
        }
        self.scopes[index].bindings.insert(name.clone(), value);
        Ok(())
    }

    /// Bind in the scope one below the current one.
    ///
    /// Called from inside a primitive, that is the primitive's caller.
    pub fn local(&mut self, name: &Word, value: Atom) -> EvalResult {
        let index = self.scopes.len().saturating_sub(2);
        self.set(index, name, value)
    }

    /// Rebind the nearest existing binding below the current scope, or
    /// create a global one.
    pub fn make(&mut self, name: &Word, value: Atom) -> EvalResult {
        let below = self.scopes.len().saturating_sub(1);
        let index = (1..below)
            .rev()
            .find(|&z| self.scopes[z].bindings.contains_key(name))
            .unwrap_or(0);
        self.set(index, name, value)
    }

    fn lookup(&self, name: &Word) -> Option<&Atom> {
        self.scopes
            .iter()
            .rev()
            .find_map(|scope| scope.bindings.get(name))
    }

    /// Dereference `name`, innermost scope first.
    pub fn thing(&self, name: &Word) -> EvalResult<Atom> {
        match self.lookup(name) {
            Some(atom) => Ok(atom.clone()),
            None => Err(self.error(RuntimeErrorKind::UndefinedName(
                name.text().to_string(),
            ))),
        }
    }

    /// Start collecting arguments for the procedure bound to `name`.
    pub fn call(&mut self, name: &Word) -> EvalResult {
        let code = match self.lookup(name) {
            Some(Atom::List(code)) => code.clone(),
            Some(other) => return Err(self.type_mismatch(other.clone(), "list")),
            None => {
                return Err(self.error(RuntimeErrorKind::UndefinedProcedure(
                    name.text().to_string(),
                )))
            }
        };
        self.current_mut().frames.push(Frame::new(code));
        Ok(())
    }

    /// Remove every binding of `name`.
    pub fn erase(&mut self, name: &Word) {
        for scope in &mut self.scopes {
            scope.bindings.remove(name);
        }
    }

    /// Every bound name.
    pub fn words(&self) -> FxHashSet<Word> {
        self.scopes
            .iter()
            .flat_map(|scope| scope.bindings.keys().cloned())
            .collect()
    }

    /// The name bound to `code`, or the code itself when it has none.
    pub fn name_of(&self, code: &List) -> Atom {
        let target = Atom::List(code.clone());
        let bound = self
            .scopes
            .iter()
            .rev()
            .flat_map(|scope| scope.bindings.iter())
            .find(|(_, value)| **value == target)
            .map(|(name, _)| name.with_kind(WordKind::Call));
        match bound {
            Some(name) => Atom::Word(name),
            None => target,
        }
    }

    fn name_of_current(&self) -> String {
        match self.current().code() {
            Some(code) => self.name_of(code).to_string(),
            None => String::new(),
        }
    }

    /// Enclosing user procedures, innermost first.
    pub fn trace(&self) -> Vec<Atom> {
        self.scopes
            .iter()
            .rev()
            .filter(|scope| scope.is_user_procedure())
            .filter_map(|scope| scope.code.as_ref())
            .map(|code| self.name_of(code))
            .collect()
    }

    // === Primitives ===

    /// Register a primitive procedure under `name`.
    ///
    /// Fails with `MutatePrimitive` when `name` already names a primitive.
    pub fn bind_primitive(
        &mut self,
        name: &str,
        params: &[&str],
        callback: impl Fn(&mut Environment) -> EvalResult + 'static,
    ) -> EvalResult<PrimId> {
        let (id, body) = primitive_body(name, params);
        self.make(&Word::call(name), Atom::List(body))?;
        self.primitives.insert(
            id,
            Primitive {
                name: name.into(),
                callback: Rc::new(callback),
            },
        );
        Ok(id)
    }

    /// Kernel registration into a fresh global scope.
    pub(crate) fn register_primitive(
        &mut self,
        name: &str,
        params: &[&str],
        callback: impl Fn(&mut Environment) -> EvalResult + 'static,
    ) {
        let (id, body) = primitive_body(name, params);
        self.scopes[0]
            .bindings
            .insert(Word::call(name), Atom::List(body));
        self.primitives.insert(
            id,
            Primitive {
                name: name.into(),
                callback: Rc::new(callback),
            },
        );
    }

    pub(crate) fn primitive(&self, id: PrimId) -> Option<PrimitiveFn> {
        self.primitives
            .get(&id)
            .map(|primitive| Rc::clone(&primitive.callback))
    }

    /// Number of registered primitives.
    pub fn primitive_count(&self) -> usize {
        self.primitives.len()
    }

    // === Scheduling ===

    /// Ask the driver to stop after the current tick.
    pub fn pause(&mut self) {
        self.paused = true;
    }

    pub fn resume(&mut self) {
        self.paused = false;
    }

    #[inline]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    // === Randomness ===

    /// A uniform number in `[0, bound)`, or 0 for a non-positive bound.
    pub fn random_below(&mut self, bound: i64) -> i64 {
        if bound <= 0 {
            0
        } else {
            self.rng.gen_range(0..bound)
        }
    }

    // === Tracing ===

    /// Attach a tracer, returning the previous one.
    pub fn set_tracer(&mut self, tracer: impl Tracer + 'static) -> Option<Box<dyn Tracer>> {
        self.tracer.replace(Box::new(tracer))
    }

    pub fn take_tracer(&mut self) -> Option<Box<dyn Tracer>> {
        self.tracer.take()
    }

    #[inline]
    pub(crate) fn has_tracer(&self) -> bool {
        self.tracer.is_some()
    }

    #[inline]
    pub(crate) fn notify(&mut self, event: impl FnOnce(&mut dyn Tracer)) {
        if let Some(tracer) = self.tracer.as_deref_mut() {
            event(tracer);
        }
    }
}

fn primitive_body(name: &str, params: &[&str]) -> (PrimId, List) {
    let id = PrimId::fresh();
    let params: List = params
        .iter()
        .map(|param| Atom::Word(Word::name(*param)))
        .collect();
    let body = List::procedure(vec![Atom::Word(Word::primitive(name, id))], params);
    (id, body)
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<&str> = self.primitives.values().map(|p| &*p.name).collect();
        names.sort_unstable();
        f.debug_struct("Environment")
            .field("depth", &self.scopes.len())
            .field("paused", &self.paused)
            .field("primitives", &names)
            .field("recursion_limit", &self.recursion_limit)
            .field("load_limit", &self.load_limit)
            .field("traced", &self.tracer.is_some())
            .finish_non_exhaustive()
    }
}
