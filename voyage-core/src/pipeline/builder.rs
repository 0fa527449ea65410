use super::Pipeline;
use crate::processor::{sequential::SequentialProcessor, Processor};
use crate::stage::{transform::Transform, Stage};
use std::rc::Rc;
use tracing::debug;

/// Accumulates stages one at a time, then materializes them into a
/// [`Pipeline`].
///
/// Unlike a pipeline, the builder mutates in place: [`add`](Self::add)
/// appends to the builder itself and returns it for chaining. Building
/// borrows the builder, so one builder can produce several pipelines; the
/// built pipelines share the accumulated stage handles.
///
/// # Examples
///
/// ```
/// use voyage_core::PipelineBuilder;
///
/// let mut builder = PipelineBuilder::new();
/// builder.add(|v: i32| v + 2).add(|v: i32| v * 10);
///
/// let pipeline = builder.build();
/// assert_eq!(pipeline.process(5), 70);
/// ```
pub struct PipelineBuilder<T> {
    stages: Vec<Stage<T>>,
}

impl<T> PipelineBuilder<T> {
    #[must_use]
    pub fn new() -> Self {
        Self { stages: Vec::new() }
    }

    /// Appends a transform as an unconditional stage.
    pub fn add(&mut self, transform: impl Transform<T> + 'static) -> &mut Self {
        self.add_stage(Stage::new(transform))
    }

    /// Appends a pre-built stage, guarded or not.
    pub fn add_stage(&mut self, stage: Stage<T>) -> &mut Self {
        self.stages.push(stage);
        self
    }

    /// Builds a pipeline running the accumulated stages sequentially.
    #[must_use]
    pub fn build(&self) -> Pipeline<T> {
        debug!(stages = self.stages.len(), "building pipeline");
        Pipeline {
            processor: Rc::new(SequentialProcessor::new()),
            stages: self.stages.clone(),
        }
    }

    /// Builds a pipeline running the accumulated stages with the supplied
    /// strategy.
    #[must_use]
    pub fn build_with(&self, processor: impl Processor<T> + 'static) -> Pipeline<T> {
        debug!(stages = self.stages.len(), "building pipeline with custom processor");
        Pipeline {
            processor: Rc::new(processor),
            stages: self.stages.clone(),
        }
    }
}

impl<T> Default for PipelineBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}
