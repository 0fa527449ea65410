pub mod interruptible;
pub mod sequential;
pub mod tap;
pub mod unified;

use crate::stage::Stage;

/// The execution strategy behind a pipeline.
///
/// A processor folds an ordered stage list over a traveler and returns the
/// final value, or the value at the point of an early interrupt. The contract
/// defines no error channel: stages, guards, hooks and interrupt predicates
/// are infallible by type, and a panic inside one of them unwinds through
/// `process` unmodified.
///
/// Processors carry no per-call state: an instance may be reused across any
/// number of `process` calls, and borrows neither the traveler nor the stage
/// list beyond the duration of one call.
pub trait Processor<T> {
    fn process(&self, traveler: T, stages: &[Stage<T>]) -> T;
}
