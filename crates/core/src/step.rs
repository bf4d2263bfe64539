/// A state that a fixed-step solver can advance with its derivative.
///
/// `step` returns `self + derivative * delta`. Nothing else is assumed about
/// the state: it may be a scalar, a struct of named coordinates, or a vector.
/// `Delta` is usually elapsed time in seconds, but any independent variable
/// works.
pub trait StepIntegrable<Delta> {
    /// The rate of change of the state with respect to `Delta`.
    type Derivative;

    /// Returns the state advanced by `derivative * delta`.
    #[must_use]
    fn step(&self, derivative: Self::Derivative, delta: Delta) -> Self;
}

/// Shorthand for [`StepIntegrable::Derivative`].
pub type DerivativeOf<T, Delta> = <T as StepIntegrable<Delta>>::Derivative;
