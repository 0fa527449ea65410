/// A single transformation applied to a traveler.
pub trait Transform<T> {
    fn apply(&self, traveler: T) -> T;
}

impl<T, F> Transform<T> for F
where
    F: Fn(T) -> T,
{
    fn apply(&self, traveler: T) -> T {
        self(traveler)
    }
}
