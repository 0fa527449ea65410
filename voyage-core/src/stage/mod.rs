pub mod condition;
pub mod hook;
pub mod transform;

use std::rc::Rc;

use condition::Condition;
use transform::Transform;

enum StageKind<T> {
    Unconditional(Box<dyn Transform<T>>),
    Conditional {
        transform: Box<dyn Transform<T>>,
        guard: Box<dyn Condition<T>>,
    },
}

/// A single step in a pipeline: a transformation, optionally paired with a
/// guard that decides whether the transformation runs for a given traveler.
///
/// Whether a stage is conditional is fixed at construction time:
/// [`Stage::new`] builds an unconditional stage, [`Stage::guarded`] a
/// conditional one. Guards are only consulted by the
/// [`UnifiedProcessor`](crate::UnifiedProcessor); every other strategy applies
/// the transform regardless.
///
/// A `Stage` is a cheap handle: cloning shares the underlying transform, so
/// pipelines can copy stage lists without re-boxing anything.
pub struct Stage<T> {
    kind: Rc<StageKind<T>>,
}

impl<T> Stage<T> {
    /// Creates an unconditional stage from a transform.
    #[must_use]
    pub fn new(transform: impl Transform<T> + 'static) -> Self {
        Self {
            kind: Rc::new(StageKind::Unconditional(Box::new(transform))),
        }
    }

    /// Creates a conditional stage whose transform only runs when the guard
    /// accepts the traveler.
    #[must_use]
    pub fn guarded(
        transform: impl Transform<T> + 'static,
        guard: impl Condition<T> + 'static,
    ) -> Self {
        Self {
            kind: Rc::new(StageKind::Conditional {
                transform: Box::new(transform),
                guard: Box::new(guard),
            }),
        }
    }

    /// Applies the stage's transform to the traveler, unconditionally.
    pub fn apply(&self, traveler: T) -> T {
        match &*self.kind {
            StageKind::Unconditional(transform)
            | StageKind::Conditional { transform, .. } => transform.apply(traveler),
        }
    }

    /// Returns the stage's guard, if it has one.
    pub fn guard(&self) -> Option<&dyn Condition<T>> {
        match &*self.kind {
            StageKind::Unconditional(_) => None,
            StageKind::Conditional { guard, .. } => Some(guard.as_ref()),
        }
    }
}

impl<T> Clone for Stage<T> {
    fn clone(&self) -> Self {
        Self {
            kind: Rc::clone(&self.kind),
        }
    }
}
