use super::Processor;
use crate::stage::{condition::Condition, hook::Hook, Stage};
use tracing::debug;

/// The superset strategy: combines early interruption, before/after hooks and
/// per-stage conditional skipping behind one mutable, fluent configuration
/// surface.
///
/// A fresh instance carries no predicate and no hooks, which makes it behave
/// exactly like the sequential strategy. Every setter takes `&mut self` and
/// returns the same instance for chaining; configuration can be changed
/// between `process` calls and is read as it stands when a call begins.
///
/// This is the only strategy that consults stage guards. For each stage:
///
/// 1. the before-hook fires with the current traveler,
/// 2. if the stage has a guard rejecting the traveler, the transform is
///    skipped, but the after-hook and the interrupt check still run against
///    the unchanged traveler,
/// 3. otherwise the transform is applied,
/// 4. the after-hook fires with the current traveler,
/// 5. if an interrupt predicate is set and its (possibly inverted) outcome is
///    true, the traveler is returned immediately.
///
/// # Examples
///
/// ```
/// use voyage_core::{Pipeline, Stage, UnifiedProcessor};
///
/// let mut processor = UnifiedProcessor::new();
/// processor
///     .continue_unless(|v: &i32| *v > 100)
///     .after_each(|v: &i32| println!("stage produced {v}"));
///
/// let result = Pipeline::new()
///     .with_processor(processor)
///     .pipe_stage(Stage::guarded(|v: i32| v * 2, |v: &i32| v % 2 == 0))
///     .pipe(|v: i32| v + 1)
///     .process(4);
///
/// assert_eq!(result, 9);
/// ```
pub struct UnifiedProcessor<T> {
    interrupt: Option<Box<dyn Condition<T>>>,
    inverted: bool,
    before: Option<Box<dyn Hook<T>>>,
    after: Option<Box<dyn Hook<T>>>,
}

impl<T> UnifiedProcessor<T> {
    /// Creates an unconfigured processor: no interruption, no hooks.
    #[must_use]
    pub fn new() -> Self {
        Self {
            interrupt: None,
            inverted: false,
            before: None,
            after: None,
        }
    }

    /// Sets the interrupt predicate: processing stops once it turns true.
    /// Clears any inversion set previously.
    pub fn continue_unless(&mut self, interrupt: impl Condition<T> + 'static) -> &mut Self {
        self.interrupt = Some(Box::new(interrupt));
        self.inverted = false;
        self
    }

    /// Sets the interrupt predicate: processing continues only while it
    /// holds. Stored as the same predicate plus an inversion flag.
    pub fn continue_when(&mut self, interrupt: impl Condition<T> + 'static) -> &mut Self {
        self.interrupt = Some(Box::new(interrupt));
        self.inverted = true;
        self
    }

    /// Toggles the interrupt direction of the current predicate, however it
    /// was set.
    pub fn invert(&mut self) -> &mut Self {
        self.inverted = !self.inverted;
        self
    }

    /// Sets the hook fired before each stage.
    pub fn before_each(&mut self, hook: impl Hook<T> + 'static) -> &mut Self {
        self.before = Some(Box::new(hook));
        self
    }

    /// Sets the hook fired after each stage.
    pub fn after_each(&mut self, hook: impl Hook<T> + 'static) -> &mut Self {
        self.after = Some(Box::new(hook));
        self
    }

    /// Whether the predicate outcome is currently inverted.
    #[must_use]
    pub fn is_inverted(&self) -> bool {
        self.inverted
    }
}

impl<T> Default for UnifiedProcessor<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Processor<T> for UnifiedProcessor<T> {
    fn process(&self, mut traveler: T, stages: &[Stage<T>]) -> T {
        for (index, stage) in stages.iter().enumerate() {
            if let Some(before) = &self.before {
                before.call(&traveler);
            }

            // A rejecting guard skips the transform only. Hooks and the
            // interrupt check still run against the unchanged traveler.
            let skipped = stage
                .guard()
                .is_some_and(|guard| !guard.evaluate(&traveler));

            if skipped {
                debug!(stage = index, "guard rejected traveler, skipping transform");
            } else {
                traveler = stage.apply(traveler);
            }

            if let Some(after) = &self.after {
                after.call(&traveler);
            }

            if let Some(interrupt) = &self.interrupt {
                if interrupt.evaluate(&traveler) ^ self.inverted {
                    debug!(stage = index, "interrupt predicate met, stopping early");
                    return traveler;
                }
            }
        }

        traveler
    }
}
