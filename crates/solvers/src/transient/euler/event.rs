/// Event emitted by the Euler solver for each state it produces.
///
/// Step 0 carries the initial state. Step `n` carries the state reached after
/// `n` integration steps, at `time = n * dt`.
#[derive(Debug, Clone, PartialEq)]
pub struct Event<S> {
    /// The step number.
    pub step: usize,

    /// Elapsed time since the initial state.
    pub time: f64,

    /// The state at this step.
    pub state: S,
}
