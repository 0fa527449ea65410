/// A boolean test against the current traveler.
///
/// Conditions serve two roles: as a stage guard deciding whether the stage's
/// transform runs, and as an interrupt predicate deciding whether a processor
/// stops early.
pub trait Condition<T> {
    fn evaluate(&self, traveler: &T) -> bool;
}

impl<T, F> Condition<T> for F
where
    F: Fn(&T) -> bool,
{
    fn evaluate(&self, traveler: &T) -> bool {
        self(traveler)
    }
}
