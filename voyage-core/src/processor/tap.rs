use super::Processor;
use crate::error::InvalidConfiguration;
use crate::stage::{hook::Hook, Stage};

/// Folds all stages while firing optional side-effect hooks around each one:
/// the before-hook sees the pre-stage traveler, the after-hook the post-stage
/// traveler. Has no interruption capability.
///
/// At least one hook must be supplied at construction. Either hook can be
/// replaced later through [`before_each`](Self::before_each) and
/// [`after_each`](Self::after_each); a replacement takes effect on the next
/// `process` call.
///
/// # Examples
///
/// ```
/// use voyage_core::{Pipeline, TapProcessor};
///
/// let tap = TapProcessor::new(
///     Some(Box::new(|v: &i32| println!("entering stage with {v}"))),
///     None,
/// )?;
///
/// let result = Pipeline::new()
///     .with_processor(tap)
///     .pipe(|v: i32| v * 2)
///     .process(21);
///
/// assert_eq!(result, 42);
/// # Ok::<(), voyage_core::InvalidConfiguration>(())
/// ```
pub struct TapProcessor<T> {
    before: Option<Box<dyn Hook<T>>>,
    after: Option<Box<dyn Hook<T>>>,
}

impl<T> TapProcessor<T> {
    /// Creates a tap processor from optional before/after hooks.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidConfiguration::MissingHooks`] when both hooks are
    /// absent; a tap with nothing to fire would be indistinguishable from
    /// the sequential strategy.
    pub fn new(
        before: Option<Box<dyn Hook<T>>>,
        after: Option<Box<dyn Hook<T>>>,
    ) -> Result<Self, InvalidConfiguration> {
        if before.is_none() && after.is_none() {
            return Err(InvalidConfiguration::MissingHooks);
        }

        Ok(Self { before, after })
    }

    /// Replaces the hook fired before each stage.
    pub fn before_each(&mut self, hook: impl Hook<T> + 'static) -> &mut Self {
        self.before = Some(Box::new(hook));
        self
    }

    /// Replaces the hook fired after each stage.
    pub fn after_each(&mut self, hook: impl Hook<T> + 'static) -> &mut Self {
        self.after = Some(Box::new(hook));
        self
    }
}

impl<T> Processor<T> for TapProcessor<T> {
    fn process(&self, mut traveler: T, stages: &[Stage<T>]) -> T {
        for stage in stages {
            if let Some(before) = &self.before {
                before.call(&traveler);
            }

            traveler = stage.apply(traveler);

            if let Some(after) = &self.after {
                after.call(&traveler);
            }
        }

        traveler
    }
}
