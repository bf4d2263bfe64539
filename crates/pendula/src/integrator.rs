//! One forward Euler step of the pendulum's equations of motion.
//!
//! The second-order equation is split into two first-order ones, both
//! evaluated at the current state:
//!
//! ```text
//! angle'    = angle    - (velocity / L) * dt
//! velocity' = velocity + g * sin(angle) * dt
//! ```
//!
//! The angle decreases while the tangential velocity is positive. Forward
//! Euler does not conserve energy, so the swing amplitude slowly grows.

use pendula_core::StepIntegrable;
use uom::si::{acceleration::meter_per_second_squared, length::meter, time::second};

use crate::{Parameters, Rates, State};

/// Evaluates the state's time derivative.
#[must_use]
pub fn rates(state: &State, params: &Parameters) -> Rates {
    let length = params.length.get::<meter>();
    let gravity = params.gravity.get::<meter_per_second_squared>();

    let omega = state.velocity / length;

    Rates {
        angle: -omega,
        velocity: gravity * state.angle.sin(),
    }
}

/// Advances `current` by one time step.
#[must_use]
pub fn step(current: State, params: &Parameters) -> State {
    let dt = params.time_step.get::<second>();
    current.step(rates(&current, params), dt)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn params() -> Parameters {
        Parameters::default()
            .length_si(0.1)
            .gravity_si(9.8)
            .time_step_si(0.01)
    }

    #[test]
    fn single_step_from_known_state() {
        let next = step(
            State {
                angle: 0.5,
                velocity: 0.2,
            },
            &params(),
        );

        assert_relative_eq!(next.angle, 0.48, epsilon = 1e-15);
        assert_relative_eq!(next.velocity, 0.2 + 9.8 * 0.5_f64.sin() * 0.01);
    }

    #[test]
    fn release_from_rest_keeps_angle_on_first_step() {
        let start = State {
            angle: 1.0,
            velocity: 0.0,
        };

        let once = step(start, &params());
        let twice = step(once, &params());

        assert_eq!(once.angle, start.angle);
        assert!(once.velocity > 0.0);
        assert!(twice.angle < once.angle);
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn matches_the_textbook_update_bit_for_bit() {
        let (length, gravity, dt) = (0.1, 9.8, 0.01);
        let params = params();

        let mut state = State {
            angle: 1.2,
            velocity: -0.05,
        };
        let (mut angle, mut velocity) = (state.angle, state.velocity);

        for _ in 0..500 {
            let omega = velocity / length;
            let accel = gravity * f64::sin(angle);
            angle -= omega * dt;
            velocity += accel * dt;

            state = step(state, &params);

            assert_eq!(state.angle, angle);
            assert_eq!(state.velocity, velocity);
        }
    }

    #[test]
    fn is_deterministic() {
        let start = State {
            angle: 0.7,
            velocity: 0.1,
        };
        assert_eq!(step(start, &params()), step(start, &params()));
    }
}
