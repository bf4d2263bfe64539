/// Control actions understood by the Euler solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop after keeping the state that was just observed.
    StopEarly,

    /// Stop and drop the state that was just observed from the history.
    Reject,
}
