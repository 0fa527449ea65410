pub mod builder;

use std::rc::Rc;

use crate::processor::{sequential::SequentialProcessor, Processor};
use crate::stage::{transform::Transform, Stage};
use tracing::debug;

/// An ordered stage list paired with the processor that executes it.
///
/// A pipeline is immutable: [`pipe`](Self::pipe) and
/// [`with_processor`](Self::with_processor) return a new pipeline and leave
/// the receiver untouched, sharing the unchanged stage handles. Execution is
/// delegated to the processor as-is.
///
/// A pipeline implements [`Transform`] itself, so it can be piped into
/// another pipeline as a single stage.
///
/// # Examples
///
/// ```
/// use voyage_core::Pipeline;
///
/// let pipeline = Pipeline::new()
///     .pipe(|v: i32| v + 2)
///     .pipe(|v: i32| v * 10);
///
/// assert_eq!(pipeline.process(5), 70);
///
/// // `pipe` never mutates the receiver.
/// let extended = pipeline.pipe(|v: i32| v - 1);
/// assert_eq!(pipeline.process(5), 70);
/// assert_eq!(extended.process(5), 69);
/// ```
pub struct Pipeline<T> {
    processor: Rc<dyn Processor<T>>,
    stages: Vec<Stage<T>>,
}

impl<T> Pipeline<T> {
    /// Creates an empty pipeline backed by the sequential strategy.
    #[must_use]
    pub fn new() -> Self {
        Self {
            processor: Rc::new(SequentialProcessor::new()),
            stages: Vec::new(),
        }
    }

    /// Returns a new pipeline with the transform appended as an
    /// unconditional stage.
    #[must_use]
    pub fn pipe(&self, transform: impl Transform<T> + 'static) -> Self {
        self.pipe_stage(Stage::new(transform))
    }

    /// Returns a new pipeline with the pre-built stage appended. This is the
    /// entry point for guarded stages.
    #[must_use]
    pub fn pipe_stage(&self, stage: Stage<T>) -> Self {
        let mut stages = self.stages.clone();
        stages.push(stage);

        Self {
            processor: Rc::clone(&self.processor),
            stages,
        }
    }

    /// Returns a new pipeline executing the same stages with a different
    /// strategy.
    #[must_use]
    pub fn with_processor(&self, processor: impl Processor<T> + 'static) -> Self {
        Self {
            processor: Rc::new(processor),
            stages: self.stages.clone(),
        }
    }

    /// Runs the traveler through the pipeline and returns the result.
    pub fn process(&self, traveler: T) -> T {
        debug!(stages = self.stages.len(), "processing traveler");
        self.processor.process(traveler, &self.stages)
    }
}

impl<T> Clone for Pipeline<T> {
    fn clone(&self) -> Self {
        Self {
            processor: Rc::clone(&self.processor),
            stages: self.stages.clone(),
        }
    }
}

impl<T> Default for Pipeline<T> {
    fn default() -> Self {
        Self::new()
    }
}

// A pipeline is itself a stage, which enables nesting.
impl<T> Transform<T> for Pipeline<T> {
    fn apply(&self, traveler: T) -> T {
        self.process(traveler)
    }
}
