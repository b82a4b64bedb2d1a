/// A type that collects the steps taken by an algorithm, such as the rules applied by
/// [`simplify_with`](crate::symbolic::simplify::simplify_with).
///
/// [`StepCollector`] is implemented for the unit type `()`, which discards every step, and for
/// [`Vec`], which records them in order. The training loop simplifies one gradient per weight and
/// has no use for the steps, so it passes `()`.
pub trait StepCollector<S> {
    /// Adds a step to the collector.
    fn push(&mut self, step: S);
}

impl<S> StepCollector<S> for () {
    #[inline]
    fn push(&mut self, _: S) {}
}

impl<S> StepCollector<S> for Vec<S> {
    #[inline]
    fn push(&mut self, step: S) {
        Vec::push(self, step);
    }
}
