//! Logo Eval - the step-wise interpreter for Logo programs.
//!
//! # Architecture
//!
//! - [`Environment`]: the scope stack, primitive registry and configuration
//! - [`interpreter`]: the tick function and the drivers built on it
//! - [`primitives`]: the kernel, plus helpers for host-defined primitives
//! - [`Tracer`]: optional observer of procedure entry and exit
//!
//! Evaluation is cooperative. A host that animates or waits on input binds
//! its own primitives with [`Environment::bind_primitive`], has them call
//! [`Environment::pause`], and resumes the program with [`run_until`] or
//! [`run_for`] when it is ready.
//!
//! ```ignore
//! let mut env = Environment::new();
//! let code = logo_parse::parse("make 'x sum 1 2")?;
//! logo_eval::run(&code, &mut env)?;
//! ```

mod environment;
pub mod interpreter;
pub mod primitives;
mod tracer;

pub use environment::{
    Environment, EnvironmentBuilder, Frame, PrimitiveFn, Scope, DEFAULT_RECURSION_LIMIT,
};
pub use interpreter::{init, run, run_for, run_until, tick, Progress};
pub use tracer::{LogTracer, RecordingTracer, TraceEvent, Tracer};

pub use logo_diagnostic::{EvalResult, RuntimeError, RuntimeErrorKind};
