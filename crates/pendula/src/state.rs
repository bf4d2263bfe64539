use pendula_core::StepIntegrable;

/// Instantaneous configuration of the bob.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct State {
    /// Angular displacement from vertical (rad).
    pub angle: f64,
    /// Tangential velocity of the bob (m/s).
    ///
    /// Positive velocity carries the bob toward smaller angles.
    pub velocity: f64,
}

/// Time derivative of a [`State`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rates {
    /// Rate of change of the angle (rad/s).
    pub angle: f64,
    /// Tangential acceleration (m/s²).
    pub velocity: f64,
}

impl StepIntegrable<f64> for State {
    type Derivative = Rates;

    fn step(&self, derivative: Rates, dt: f64) -> Self {
        State {
            angle: self.angle + derivative.angle * dt,
            velocity: self.velocity + derivative.velocity * dt,
        }
    }
}

impl State {
    /// Mechanical energy per unit mass, `½v² − g·L·cos θ` (J/kg).
    ///
    /// Constant along exact trajectories; forward Euler lets it grow.
    #[must_use]
    pub fn specific_energy(&self, length: f64, gravity: f64) -> f64 {
        0.5 * self.velocity * self.velocity - gravity * length * self.angle.cos()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn step_moves_both_coordinates() {
        let state = State {
            angle: 0.5,
            velocity: -1.0,
        };
        let rates = Rates {
            angle: 2.0,
            velocity: 4.0,
        };

        let next = state.step(rates, 0.25);

        assert_relative_eq!(next.angle, 1.0);
        assert_relative_eq!(next.velocity, 0.0);
    }

    #[test]
    fn energy_is_lowest_hanging_at_rest() {
        let hanging = State {
            angle: 0.0,
            velocity: 0.0,
        };
        let raised = State {
            angle: 1.0,
            velocity: 0.0,
        };
        let swinging = State {
            angle: 0.0,
            velocity: 0.3,
        };

        assert_relative_eq!(hanging.specific_energy(0.1, 9.8), -0.98);
        assert!(raised.specific_energy(0.1, 9.8) > hanging.specific_energy(0.1, 9.8));
        assert_relative_eq!(swinging.specific_energy(0.1, 9.8), 0.045 - 0.98);
    }
}
