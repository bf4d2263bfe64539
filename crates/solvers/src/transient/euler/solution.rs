/// Indicates how the solver terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Ran every requested step without the observer intervening.
    Complete,

    /// An observer returned [`Action::StopEarly`] or [`Action::Reject`].
    ///
    /// [`Action::StopEarly`]: super::Action::StopEarly
    /// [`Action::Reject`]: super::Action::Reject
    StoppedByObserver,
}

/// The result of an Euler integration.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution<S> {
    /// How the solver terminated.
    pub status: Status,

    /// Every kept state, starting with the initial one.
    pub history: Vec<S>,

    /// Number of integration steps whose result was kept.
    pub steps: usize,
}
