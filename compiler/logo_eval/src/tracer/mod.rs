//! Execution observers.
//!
//! A [`Tracer`] attached to an environment is told about every tick and
//! every procedure entry and exit, for debuggers, logs or visualizations.
//!
//! - [`LogTracer`]: reports events through `tracing`
//! - [`RecordingTracer`]: captures events into a shared buffer (tests, hosts)

use std::cell::RefCell;
use std::fmt::Write as _;
use std::rc::Rc;

use logo_ir::{Atom, Word};
use tracing::{debug, trace};

/// Receives execution events. Every method defaults to doing nothing.
///
/// Procedure names are the name bound to the procedure's code or, for an
/// anonymous procedure, the printed code itself. Arguments are
/// `(parameter, value)` pairs in parameter order.
pub trait Tracer {
    /// A program was installed by `run` or `init`.
    fn begin(&mut self) {}

    /// Before every tick.
    fn tick(&mut self) {}

    /// The program finished without error.
    fn end(&mut self) {}

    /// Before a primitive's logic runs.
    fn call_primitive(&mut self, _name: &str, _args: &[(Word, Atom)]) {}

    /// Before a user procedure's body runs. `tail` is set when the call
    /// reuses the caller's scope.
    fn call(&mut self, _name: &str, _args: &[(Word, Atom)], _tail: bool) {}

    /// A user procedure is returning `value`, explicitly via `output` or
    /// implicitly by ending on a value.
    fn output(&mut self, _name: &str, _value: &Atom, _implicit: bool) {}

    /// A user procedure is returning without a value.
    fn stop(&mut self, _name: &str, _implicit: bool) {}
}

/// Render arguments as `a=1 b=[x y]`.
fn format_args(args: &[(Word, Atom)]) -> String {
    let mut out = String::new();
    for (i, (param, value)) in args.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        let _ = write!(out, "{}={value}", param.text());
    }
    out
}

/// Tracer that emits `tracing` events.
///
/// Procedure traffic is logged at `debug`, ticks at `trace`.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogTracer;

impl Tracer for LogTracer {
    fn begin(&mut self) {
        debug!("begin");
    }

    fn tick(&mut self) {
        trace!("tick");
    }

    fn end(&mut self) {
        debug!("end");
    }

    fn call_primitive(&mut self, name: &str, args: &[(Word, Atom)]) {
        debug!(primitive = name, args = %format_args(args), "prim");
    }

    fn call(&mut self, name: &str, args: &[(Word, Atom)], tail: bool) {
        debug!(procedure = name, args = %format_args(args), tail, "call");
    }

    fn output(&mut self, name: &str, value: &Atom, implicit: bool) {
        debug!(procedure = name, value = %value, implicit, "return");
    }

    fn stop(&mut self, name: &str, implicit: bool) {
        debug!(procedure = name, implicit, "stop");
    }
}

/// One observed event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TraceEvent {
    Begin,
    Tick,
    End,
    CallPrimitive {
        name: String,
        args: Vec<(Word, Atom)>,
    },
    Call {
        name: String,
        args: Vec<(Word, Atom)>,
        tail: bool,
    },
    Output {
        name: String,
        value: Atom,
        implicit: bool,
    },
    Stop {
        name: String,
        implicit: bool,
    },
}

/// Tracer that captures events to a buffer.
///
/// Clones share the buffer, so a host can keep one handle and attach the
/// other to an environment. Ticks are only recorded when asked for.
#[derive(Clone, Debug, Default)]
pub struct RecordingTracer {
    events: Rc<RefCell<Vec<TraceEvent>>>,
    ticks: bool,
}

impl RecordingTracer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Also record a [`TraceEvent::Tick`] per tick.
    #[must_use]
    pub fn with_ticks(mut self) -> Self {
        self.ticks = true;
        self
    }

    /// Everything recorded so far.
    pub fn events(&self) -> Vec<TraceEvent> {
        self.events.borrow().clone()
    }

    pub fn clear(&self) {
        self.events.borrow_mut().clear();
    }

    fn record(&self, event: TraceEvent) {
        self.events.borrow_mut().push(event);
    }
}

impl Tracer for RecordingTracer {
    fn begin(&mut self) {
        self.record(TraceEvent::Begin);
    }

    fn tick(&mut self) {
        if self.ticks {
            self.record(TraceEvent::Tick);
        }
    }

    fn end(&mut self) {
        self.record(TraceEvent::End);
    }

    fn call_primitive(&mut self, name: &str, args: &[(Word, Atom)]) {
        self.record(TraceEvent::CallPrimitive {
            name: name.to_string(),
            args: args.to_vec(),
        });
    }

    fn call(&mut self, name: &str, args: &[(Word, Atom)], tail: bool) {
        self.record(TraceEvent::Call {
            name: name.to_string(),
            args: args.to_vec(),
            tail,
        });
    }

    fn output(&mut self, name: &str, value: &Atom, implicit: bool) {
        self.record(TraceEvent::Output {
            name: name.to_string(),
            value: value.clone(),
            implicit,
        });
    }

    fn stop(&mut self, name: &str, implicit: bool) {
        self.record(TraceEvent::Stop {
            name: name.to_string(),
            implicit,
        });
    }
}
