pub mod error;
pub mod pipeline;
pub mod processor;
pub mod stage;

// Re-export main types for easier access
pub use error::InvalidConfiguration;
pub use pipeline::builder::PipelineBuilder;
pub use pipeline::Pipeline;
pub use processor::interruptible::InterruptibleProcessor;
pub use processor::sequential::SequentialProcessor;
pub use processor::tap::TapProcessor;
pub use processor::unified::UnifiedProcessor;
pub use processor::Processor;
pub use stage::condition::Condition;
pub use stage::hook::Hook;
pub use stage::transform::Transform;
pub use stage::Stage;
