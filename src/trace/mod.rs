//! Sphere tracing over a scene field
//!
//! Traces borrow the scene immutably, so any number of them can run against
//! the same scene (including from several threads). Edits to the scene have to
//! wait until no trace holds it.

pub mod fan;
pub mod march;
pub mod observer;

pub use fan::{fan_directions, march_fan};
pub use march::{Ray, TraceOutcome, TraceResult, march};
pub use observer::{NoopObserver, StepCircle, StepObserver, StepRecorder};
