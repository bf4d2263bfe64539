//! Energy drift monitoring.
//!
//! Forward Euler pumps energy into the pendulum on every step. A little
//! drift is expected; a lot means `dt` is too coarse for the swing and the
//! measured period should not be trusted. The monitor compares the specific
//! energy `½v² − g·L·cos θ` of every state to that of the release state,
//! normalized by `g·L`, and remembers the first step past tolerance.

use uom::si::{acceleration::meter_per_second_squared, length::meter};

use crate::{Parameters, State};

/// Advisory warning that the integration is drifting away from the physics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Instability {
    /// First kept step whose drift exceeded the tolerance.
    pub step: usize,
    /// Relative energy drift at that step.
    pub drift: f64,
}

/// Tracks relative energy drift over a run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnergyMonitor {
    length: f64,
    gravity: f64,
    baseline: f64,
    tolerance: f64,
    instability: Option<Instability>,
}

impl EnergyMonitor {
    /// Creates a monitor anchored to the release state of `params`.
    #[must_use]
    pub fn new(params: &Parameters, tolerance: f64) -> Self {
        let length = params.length.get::<meter>();
        let gravity = params.gravity.get::<meter_per_second_squared>();

        Self {
            length,
            gravity,
            baseline: params.initial_state().specific_energy(length, gravity),
            tolerance,
            instability: None,
        }
    }

    /// Returns `|e − e₀| / (g·L)` for `state`.
    #[must_use]
    pub fn drift(&self, state: &State) -> f64 {
        let energy = state.specific_energy(self.length, self.gravity);
        (energy - self.baseline).abs() / (self.gravity * self.length)
    }

    /// Checks one state, recording it if it is the first out of tolerance.
    ///
    /// Non-finite drift counts as out of tolerance.
    pub fn record(&mut self, step: usize, state: &State) {
        if self.instability.is_some() {
            return;
        }

        let drift = self.drift(state);
        if drift.is_nan() || drift > self.tolerance {
            self.instability = Some(Instability { step, drift });
        }
    }

    /// Returns the first recorded instability, if any.
    #[must_use]
    pub fn instability(&self) -> Option<Instability> {
        self.instability
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::integrator;

    #[test]
    fn release_state_has_no_drift() {
        let params = Parameters::default();
        let monitor = EnergyMonitor::new(&params, 0.1);
        assert_relative_eq!(monitor.drift(&params.initial_state()), 0.0);
    }

    #[test]
    fn drift_is_normalized_by_g_times_l() {
        let params = Parameters::default()
            .initial_angle_si(0.0)
            .initial_velocity_si(0.0);
        let monitor = EnergyMonitor::new(&params, 0.1);

        // ½v² = 0.49 J/kg against g·L = 0.98 J/kg.
        let state = State {
            angle: 0.0,
            velocity: 0.98_f64.sqrt(),
        };
        assert_relative_eq!(monitor.drift(&state), 0.5, epsilon = 1e-12);
    }

    #[test]
    fn records_only_the_first_violation() {
        let params = Parameters::default();
        let mut monitor = EnergyMonitor::new(&params, 0.01);

        monitor.record(1, &params.initial_state());
        assert_eq!(monitor.instability(), None);

        let fast = State {
            angle: params.initial_state().angle,
            velocity: 1.0,
        };
        monitor.record(7, &fast);
        monitor.record(8, &fast);

        let instability = monitor.instability().expect("drift recorded");
        assert_eq!(instability.step, 7);
        assert_relative_eq!(instability.drift, 0.5 / 0.98, epsilon = 1e-12);
    }

    #[test]
    fn non_finite_states_are_flagged() {
        let params = Parameters::default();
        let mut monitor = EnergyMonitor::new(&params, 10.0);

        let broken = State {
            angle: f64::NAN,
            velocity: 0.0,
        };
        monitor.record(3, &broken);

        assert_eq!(monitor.instability().map(|i| i.step), Some(3));
    }

    #[test]
    fn euler_drift_grows_with_step_size() {
        let fine = Parameters::default().time_step_si(0.0005);
        let coarse = Parameters::default().time_step_si(0.005);

        let drift_after = |params: &Parameters, seconds: f64| {
            let monitor = EnergyMonitor::new(params, 1.0);
            let dt = params.time_step.get::<uom::si::time::second>();
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let steps = (seconds / dt).round() as usize;
            let state = (0..steps).fold(params.initial_state(), |state, _| {
                integrator::step(state, params)
            });
            monitor.drift(&state)
        };

        assert!(drift_after(&coarse, 0.3) > drift_after(&fine, 0.3));
    }
}
