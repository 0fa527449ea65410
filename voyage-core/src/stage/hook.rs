/// A side-effect-only callback invoked around a stage's application.
pub trait Hook<T> {
    fn call(&self, traveler: &T);
}

impl<T, F> Hook<T> for F
where
    F: Fn(&T),
{
    fn call(&self, traveler: &T) {
        self(traveler)
    }
}
