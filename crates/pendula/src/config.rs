#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Run limits for a simulation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct Config {
    /// Integration steps allowed before giving up on detecting a period.
    pub max_steps: usize,
    /// Relative energy drift, in units of `g·L`, that raises an
    /// [`Instability`](crate::Instability) warning.
    pub drift_tolerance: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_steps: 1_000_000,
            drift_tolerance: 0.25,
        }
    }
}

impl Config {
    /// Validates the step budget and drift tolerance.
    ///
    /// # Errors
    ///
    /// Returns an error if `max_steps` is zero or the drift tolerance is
    /// negative or non-finite.
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.max_steps == 0 {
            return Err("max_steps must be at least 1");
        }
        if !self.drift_tolerance.is_finite() || self.drift_tolerance < 0.0 {
            return Err("drift_tolerance must be finite and non-negative");
        }
        Ok(())
    }
}
