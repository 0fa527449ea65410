//! Ready-made generic stage components for voyage pipelines.

pub mod inspect;
pub mod transform;

pub use inspect::InspectStage;
pub use transform::TransformStage;
