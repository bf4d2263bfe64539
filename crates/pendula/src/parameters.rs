use uom::si::{
    acceleration::meter_per_second_squared,
    angle::{degree, radian},
    f64::{Acceleration, Angle, Length, Mass, Time, Velocity},
    length::meter,
    mass::kilogram,
    time::second,
    velocity::meter_per_second,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::State;

/// Physical and numerical constants for one pendulum run.
///
/// The bob mass does not enter the dynamics (the period of a simple pendulum
/// is independent of mass) but is carried along with the rest of the setup.
///
/// With the `serde` feature, quantities (de)serialize as SI base values and
/// missing fields fall back to [`Parameters::default`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct Parameters {
    pub mass: Mass,
    pub length: Length,
    pub gravity: Acceleration,
    pub time_step: Time,
    /// Angular displacement from vertical at release.
    pub initial_angle: Angle,
    /// Tangential velocity of the bob at release.
    pub initial_velocity: Velocity,
}

impl Default for Parameters {
    /// A 10 cm pendulum released from rest at 60°, stepped every millisecond.
    fn default() -> Self {
        Self {
            mass: Mass::new::<kilogram>(0.1),
            length: Length::new::<meter>(0.1),
            gravity: Acceleration::new::<meter_per_second_squared>(9.8),
            time_step: Time::new::<second>(0.001),
            initial_angle: Angle::new::<degree>(60.0),
            initial_velocity: Velocity::new::<meter_per_second>(0.0),
        }
    }
}

impl Parameters {
    /// Returns the state the bob is released from.
    #[must_use]
    pub fn initial_state(&self) -> State {
        State {
            angle: self.initial_angle.get::<radian>(),
            velocity: self.initial_velocity.get::<meter_per_second>(),
        }
    }

    /// Returns `true` if the bob starts at rest in the equilibrium position.
    ///
    /// Such a pendulum never moves, so no period can be observed.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn is_at_rest(&self) -> bool {
        let State { angle, velocity } = self.initial_state();
        angle == 0.0 && velocity == 0.0
    }

    /// Validates that every quantity is usable for a simulation.
    ///
    /// # Errors
    ///
    /// Returns a reason if mass, length, gravity or time step is not finite
    /// and positive, or if the initial angle or velocity is not finite.
    pub fn validate(&self) -> Result<(), &'static str> {
        if !is_positive(self.mass.get::<kilogram>()) {
            return Err("mass must be finite and positive");
        }
        if !is_positive(self.length.get::<meter>()) {
            return Err("length must be finite and positive");
        }
        if !is_positive(self.gravity.get::<meter_per_second_squared>()) {
            return Err("gravity must be finite and positive");
        }
        if !is_positive(self.time_step.get::<second>()) {
            return Err("time step must be finite and positive");
        }
        if !self.initial_angle.get::<radian>().is_finite() {
            return Err("initial angle must be finite");
        }
        if !self.initial_velocity.get::<meter_per_second>().is_finite() {
            return Err("initial velocity must be finite");
        }
        Ok(())
    }

    /// Sets mass using a `uom::Mass`.
    #[must_use]
    pub fn mass(mut self, mass: Mass) -> Self {
        self.mass = mass;
        self
    }

    /// Sets mass in SI units (kg).
    #[must_use]
    pub fn mass_si(self, mass: f64) -> Self {
        self.mass(Mass::new::<kilogram>(mass))
    }

    /// Sets rod length using a `uom::Length`.
    #[must_use]
    pub fn length(mut self, length: Length) -> Self {
        self.length = length;
        self
    }

    /// Sets rod length in SI units (m).
    #[must_use]
    pub fn length_si(self, length: f64) -> Self {
        self.length(Length::new::<meter>(length))
    }

    /// Sets gravitational acceleration using a `uom::Acceleration`.
    #[must_use]
    pub fn gravity(mut self, gravity: Acceleration) -> Self {
        self.gravity = gravity;
        self
    }

    /// Sets gravitational acceleration in SI units (m/s²).
    #[must_use]
    pub fn gravity_si(self, gravity: f64) -> Self {
        self.gravity(Acceleration::new::<meter_per_second_squared>(gravity))
    }

    /// Sets the integration step using a `uom::Time`.
    #[must_use]
    pub fn time_step(mut self, time_step: Time) -> Self {
        self.time_step = time_step;
        self
    }

    /// Sets the integration step in SI units (s).
    #[must_use]
    pub fn time_step_si(self, time_step: f64) -> Self {
        self.time_step(Time::new::<second>(time_step))
    }

    /// Sets the release angle using a `uom::Angle`.
    #[must_use]
    pub fn initial_angle(mut self, angle: Angle) -> Self {
        self.initial_angle = angle;
        self
    }

    /// Sets the release angle in SI units (rad).
    #[must_use]
    pub fn initial_angle_si(self, angle: f64) -> Self {
        self.initial_angle(Angle::new::<radian>(angle))
    }

    /// Sets the release velocity using a `uom::Velocity`.
    #[must_use]
    pub fn initial_velocity(mut self, velocity: Velocity) -> Self {
        self.initial_velocity = velocity;
        self
    }

    /// Sets the release velocity in SI units (m/s).
    #[must_use]
    pub fn initial_velocity_si(self, velocity: f64) -> Self {
        self.initial_velocity(Velocity::new::<meter_per_second>(velocity))
    }
}

fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::length::centimeter;

    #[test]
    fn default_is_the_sixty_degree_release() {
        let params = Parameters::default();

        assert_relative_eq!(params.length.get::<meter>(), 0.1);
        assert_relative_eq!(params.initial_angle.get::<radian>(), std::f64::consts::FRAC_PI_3);
        assert_eq!(params.initial_state().velocity, 0.0);
        assert!(params.validate().is_ok());
        assert!(!params.is_at_rest());
    }

    #[test]
    fn setters_accept_other_units() {
        let params = Parameters::default()
            .length(Length::new::<centimeter>(25.0))
            .initial_angle(Angle::new::<degree>(90.0));

        assert_relative_eq!(params.length.get::<meter>(), 0.25);
        assert_relative_eq!(params.initial_state().angle, std::f64::consts::FRAC_PI_2);
    }

    #[test]
    fn rest_at_equilibrium_is_detected() {
        let params = Parameters::default()
            .initial_angle_si(0.0)
            .initial_velocity_si(0.0);
        assert!(params.is_at_rest());

        assert!(!params.initial_velocity_si(0.1).is_at_rest());
        assert!(!params.initial_angle_si(1e-9).is_at_rest());
    }

    #[test]
    fn rejects_non_positive_constants() {
        let base = Parameters::default();

        assert_eq!(
            base.length_si(0.0).validate(),
            Err("length must be finite and positive")
        );
        assert_eq!(
            base.gravity_si(-9.8).validate(),
            Err("gravity must be finite and positive")
        );
        assert_eq!(
            base.time_step_si(0.0).validate(),
            Err("time step must be finite and positive")
        );
        assert_eq!(
            base.mass_si(f64::NAN).validate(),
            Err("mass must be finite and positive")
        );
    }

    #[test]
    fn rejects_non_finite_initial_conditions() {
        let base = Parameters::default();

        assert_eq!(
            base.initial_angle_si(f64::INFINITY).validate(),
            Err("initial angle must be finite")
        );
        assert_eq!(
            base.initial_velocity_si(f64::NAN).validate(),
            Err("initial velocity must be finite")
        );
    }
}
