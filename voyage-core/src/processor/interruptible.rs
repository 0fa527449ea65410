use super::Processor;
use crate::stage::{condition::Condition, Stage};
use tracing::debug;

/// Folds stages in order but may stop early, based on an interrupt predicate
/// evaluated against the traveler after each stage.
///
/// The two constructors fix the interrupt direction:
///
/// * [`continue_unless`](Self::continue_unless) stops as soon as the
///   predicate becomes true.
/// * [`continue_when`](Self::continue_when) stops as soon as the predicate
///   becomes false.
///
/// `continue_when` stores the same predicate with an inversion flag rather
/// than wrapping it in a negating closure, so the stored predicate stays
/// inspectable as supplied. The flag can be toggled again after construction
/// with [`invert`](Self::invert).
///
/// # Examples
///
/// ```
/// use voyage_core::{InterruptibleProcessor, Pipeline};
///
/// let pipeline = Pipeline::new()
///     .with_processor(InterruptibleProcessor::continue_unless(|v: &i32| *v > 10))
///     .pipe(|v: i32| v + 2)
///     .pipe(|v: i32| v * 10)
///     .pipe(|v: i32| v * 10);
///
/// // Interrupts after the second stage: (5 + 2) * 10 = 70.
/// assert_eq!(pipeline.process(5), 70);
/// ```
pub struct InterruptibleProcessor<T> {
    interrupt: Box<dyn Condition<T>>,
    inverted: bool,
}

impl<T> InterruptibleProcessor<T> {
    /// Creates a processor that keeps going unless the predicate turns true.
    #[must_use]
    pub fn continue_unless(interrupt: impl Condition<T> + 'static) -> Self {
        Self {
            interrupt: Box::new(interrupt),
            inverted: false,
        }
    }

    /// Creates a processor that keeps going only while the predicate holds.
    #[must_use]
    pub fn continue_when(interrupt: impl Condition<T> + 'static) -> Self {
        Self {
            interrupt: Box::new(interrupt),
            inverted: true,
        }
    }

    /// Toggles the interrupt direction.
    pub fn invert(&mut self) -> &mut Self {
        self.inverted = !self.inverted;
        self
    }

    /// Whether the predicate outcome is currently inverted.
    #[must_use]
    pub fn is_inverted(&self) -> bool {
        self.inverted
    }
}

impl<T> Processor<T> for InterruptibleProcessor<T> {
    fn process(&self, mut traveler: T, stages: &[Stage<T>]) -> T {
        for (index, stage) in stages.iter().enumerate() {
            traveler = stage.apply(traveler);

            if self.interrupt.evaluate(&traveler) ^ self.inverted {
                debug!(stage = index, "interrupt predicate met, stopping early");
                return traveler;
            }
        }

        traveler
    }
}
