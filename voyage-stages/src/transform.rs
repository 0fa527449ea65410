//! Transform stages for pipelines

use std::marker::PhantomData;
use voyage_core::Transform;

/// A generic named stage that transforms the traveler with a caller-supplied
/// function.
///
/// Functionally identical to piping the closure directly; the named wrapper
/// is useful where a stage is constructed in one place and wired into a
/// pipeline in another.
pub struct TransformStage<T, F>
where
    F: Fn(T) -> T,
{
    transform: F,
    _phantom: PhantomData<T>,
}

impl<T, F> TransformStage<T, F>
where
    F: Fn(T) -> T,
{
    /// Creates a new transform stage with the given function
    #[must_use]
    pub const fn new(transform: F) -> Self {
        Self {
            transform,
            _phantom: PhantomData,
        }
    }
}

impl<T, F> Transform<T> for TransformStage<T, F>
where
    F: Fn(T) -> T,
{
    fn apply(&self, traveler: T) -> T {
        (self.transform)(traveler)
    }
}
