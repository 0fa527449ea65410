use super::Processor;
use crate::stage::Stage;

/// Folds every stage in order, with no hooks and no early exit.
///
/// This is the default strategy of a [`Pipeline`](crate::Pipeline). An empty
/// stage list returns the traveler unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct SequentialProcessor;

impl SequentialProcessor {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl<T> Processor<T> for SequentialProcessor {
    fn process(&self, traveler: T, stages: &[Stage<T>]) -> T {
        stages
            .iter()
            .fold(traveler, |traveler, stage| stage.apply(traveler))
    }
}
