use std::error::Error as StdError;

/// Errors that can occur during Euler integration.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("step size must be finite and positive, got {dt}")]
    InvalidStepSize { dt: f64 },

    #[error("derivative evaluation failed at step {step}")]
    Derivative {
        step: usize,
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },
}

impl Error {
    pub(crate) fn derivative<E: StdError + Send + Sync + 'static>(step: usize, err: E) -> Self {
        Self::Derivative {
            step,
            source: Box::new(err),
        }
    }
}
