//! Inspection stages for pipelines

use std::marker::PhantomData;
use voyage_core::Transform;

/// A generic pass-through stage that lets an observer look at the traveler
/// without changing it.
///
/// Useful for wiring logging or metrics into a pipeline run by a strategy
/// without hooks, where a tap processor is not in play.
pub struct InspectStage<T, F>
where
    F: Fn(&T),
{
    observer: F,
    _phantom: PhantomData<T>,
}

impl<T, F> InspectStage<T, F>
where
    F: Fn(&T),
{
    /// Creates a new inspect stage with the given observer
    #[must_use]
    pub const fn new(observer: F) -> Self {
        Self {
            observer,
            _phantom: PhantomData,
        }
    }
}

impl<T, F> Transform<T> for InspectStage<T, F>
where
    F: Fn(&T),
{
    fn apply(&self, traveler: T) -> T {
        (self.observer)(&traveler);
        traveler
    }
}
