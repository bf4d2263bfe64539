//! Detects the end of the first full oscillation.
//!
//! A bob released from a turning point passes through zero velocity once at
//! the far turning point (half a period) and again when it returns. The
//! detector watches the solver's stream of states and fires on the first
//! velocity sign change after a guard time has elapsed:
//!
//! ```text
//! t > guard_time  &&  velocity_new * velocity_old < 0
//! ```
//!
//! The guard time is the harmonic period `2π·sqrt(L/g)`. It masks the
//! half-period crossing, and any rounding-noise sign flips near `t = 0` when
//! the release angle is tiny. The state that triggers detection is rejected,
//! so the kept trajectory ends on the last step before the crossing.

use pendula_core::Observer;
use pendula_solvers::transient::euler::{Action, Event};
use uom::si::{f64::Time, time::second};

use crate::{State, reference};

/// Guard time and last seen velocity used to test for a completed period.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TerminationCriterion {
    /// Minimum elapsed time before a crossing counts (s).
    pub guard_time: f64,
    /// Velocity at the previous step (m/s).
    pub previous_velocity: f64,
}

impl TerminationCriterion {
    /// Returns `true` if a state at `time` with `velocity` completes a period.
    #[must_use]
    pub fn is_met(&self, time: f64, velocity: f64) -> bool {
        time > self.guard_time && velocity * self.previous_velocity < 0.0
    }
}

/// Solver observer that stops integration after one full period.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PeriodDetector {
    criterion: TerminationCriterion,
    detected_at: Option<usize>,
}

impl PeriodDetector {
    /// Creates a detector that ignores crossings before `guard_time`.
    #[must_use]
    pub fn new(guard_time: Time) -> Self {
        Self {
            criterion: TerminationCriterion {
                guard_time: guard_time.get::<second>(),
                previous_velocity: 0.0,
            },
            detected_at: None,
        }
    }

    /// Creates a detector guarded by the harmonic period of `params`.
    #[must_use]
    pub fn harmonic(params: &crate::Parameters) -> Self {
        Self::new(reference::harmonic_period(params))
    }

    /// Returns the guard time.
    #[must_use]
    pub fn guard_time(&self) -> Time {
        Time::new::<second>(self.criterion.guard_time)
    }

    /// Returns the step whose state triggered detection, if any.
    #[must_use]
    pub fn detected_at(&self) -> Option<usize> {
        self.detected_at
    }
}

impl Observer<Event<State>, Action> for PeriodDetector {
    fn observe(&mut self, event: &Event<State>) -> Option<Action> {
        let velocity = event.state.velocity;

        if event.step > 0 && self.criterion.is_met(event.time, velocity) {
            self.detected_at = Some(event.step);
            return Some(Action::Reject);
        }

        self.criterion.previous_velocity = velocity;
        None
    }
}
