use pendula_solvers::transient::euler;

use crate::{Instability, Trajectory};

/// Errors that can occur while measuring a period.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid configuration: {reason}")]
    InvalidConfiguration { reason: &'static str },

    #[error("pendulum starts at rest in equilibrium and never swings")]
    DegenerateMotion,

    #[error("no period detected within {steps} steps")]
    NonConvergence {
        steps: usize,
        trajectory: Trajectory,
        instability: Option<Instability>,
    },

    #[error("stopped by observer after {steps} steps before a period was detected")]
    Interrupted { steps: usize, trajectory: Trajectory },

    #[error("integration failed")]
    Solver(#[from] euler::Error),
}

impl Error {
    /// Returns the partial trajectory carried by a failed run, if any.
    #[must_use]
    pub fn trajectory(&self) -> Option<&Trajectory> {
        match self {
            Error::NonConvergence { trajectory, .. } | Error::Interrupted { trajectory, .. } => {
                Some(trajectory)
            }
            Error::InvalidConfiguration { .. } | Error::DegenerateMotion | Error::Solver(_) => None,
        }
    }
}
