//! `EnvironmentBuilder` for creating environments with various configurations.

use rand::rngs::StdRng;
use rand::SeedableRng;

use super::Environment;
use crate::primitives;
use crate::tracer::Tracer;

/// Scope-stack depth allowed when no limit is configured.
///
/// Every scope counts, including the global scope and the short-lived
/// scopes that primitives and blocks run in, so this is not strictly the
/// number of procedure calls in flight.
pub const DEFAULT_RECURSION_LIMIT: usize = 1000;

/// Builder for creating Environment instances.
///
/// ```ignore
/// let env = Environment::builder()
///     .recursion_limit(200)
///     .seed(7)
///     .tracer(LogTracer)
///     .build();
/// ```
pub struct EnvironmentBuilder {
    recursion_limit: usize,
    load_limit: usize,
    seed: Option<u64>,
    tracer: Option<Box<dyn Tracer>>,
}

impl EnvironmentBuilder {
    pub fn new() -> Self {
        Self {
            recursion_limit: DEFAULT_RECURSION_LIMIT,
            load_limit: 0,
            seed: None,
            tracer: None,
        }
    }

    /// Maximum scope-stack depth; 0 disables the check.
    #[must_use]
    pub fn recursion_limit(mut self, limit: usize) -> Self {
        self.recursion_limit = limit;
        self
    }

    /// Largest list load a program may produce; 0 disables the check.
    #[must_use]
    pub fn load_limit(mut self, limit: usize) -> Self {
        self.load_limit = limit;
        self
    }

    /// Seed the random source so `random` is reproducible.
    #[must_use]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    #[must_use]
    pub fn tracer(mut self, tracer: impl Tracer + 'static) -> Self {
        self.tracer = Some(Box::new(tracer));
        self
    }

    /// Build an environment with the primitive kernel installed.
    pub fn build(self) -> Environment {
        let mut env = self.build_bare();
        primitives::install(&mut env);
        env
    }

    /// Build an environment with no bindings at all.
    pub fn build_bare(self) -> Environment {
        let rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Environment::from_parts(self.recursion_limit, self.load_limit, rng, self.tracer)
    }
}

impl Default for EnvironmentBuilder {
    fn default() -> Self {
        Self::new()
    }
}
