//! Stack growth for recursive walks over Logo source and values.
//!
//! The interpreter itself never recurses: evaluation is driven one tick at a
//! time over an explicit scope stack. The remaining native recursion lives in
//! the parser (nested `[...]`, `(...)` and `to` blocks) and in structural
//! operations over nested lists (`flatten`, `load`, display). Both follow the
//! nesting depth of user data, so they are wrapped in
//! [`ensure_sufficient_stack`].
//!
//! On wasm32 the guard is a passthrough.

/// Grow when less than this much stack remains (100KB).
const RED_ZONE: usize = 100 * 1024;

/// Size of each newly allocated stack segment (1MB).
const STACK_PER_RECURSION: usize = 1024 * 1024;

/// Run `f`, first growing the native stack if the red zone has been reached.
///
/// ```text
/// fn parse_list(&mut self) -> Result<List, SyntaxError> {
///     ensure_sufficient_stack(|| {
///         // ... may recurse into parse_list again ...
///     })
/// }
/// ```
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

/// wasm32: call `f` directly.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A nested bracket structure, like `[[[[...]]]]`, counted recursively.
    enum Nest {
        Leaf,
        Inner(Box<Nest>),
    }

    fn build(depth: usize) -> Nest {
        let mut nest = Nest::Leaf;
        for _ in 0..depth {
            nest = Nest::Inner(Box::new(nest));
        }
        nest
    }

    fn depth_of(nest: &Nest) -> usize {
        ensure_sufficient_stack(|| match nest {
            Nest::Leaf => 0,
            Nest::Inner(inner) => depth_of(inner) + 1,
        })
    }

    fn unwind(nest: Nest) {
        let mut current = nest;
        while let Nest::Inner(inner) = current {
            current = *inner;
        }
    }

    #[test]
    fn shallow_nesting() {
        let nest = build(8);
        assert_eq!(depth_of(&nest), 8);
        unwind(nest);
    }

    #[test]
    fn deep_nesting_does_not_overflow() {
        let nest = build(100_000);
        assert_eq!(depth_of(&nest), 100_000);
        unwind(nest);
    }

    #[test]
    fn passes_results_through() {
        let result: Result<u8, &str> = ensure_sufficient_stack(|| Err("missing ']'?"));
        assert_eq!(result, Err("missing ']'?"));
    }
}
