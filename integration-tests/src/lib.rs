//! Shared setups for the cross-crate tests.

pub mod setups {
    use pendula::Parameters;
    use uom::si::{angle::degree, f64::Angle};

    /// The reference 60° release with a 1 ms step.
    #[must_use]
    pub fn reference() -> Parameters {
        Parameters::default()
    }

    /// A nearly linear swing from 0.001 rad.
    #[must_use]
    pub fn small_angle() -> Parameters {
        Parameters::default().initial_angle_si(0.001)
    }

    /// A release from `degrees` with a fine 0.1 ms step.
    #[must_use]
    pub fn fine(degrees: f64) -> Parameters {
        Parameters::default()
            .initial_angle(Angle::new::<degree>(degrees))
            .time_step_si(1e-4)
    }
}

/// Counts velocity sign changes along a sequence of states.
#[must_use]
pub fn turning_points(states: &[pendula::State]) -> usize {
    states
        .windows(2)
        .filter(|pair| pair[0].velocity * pair[1].velocity < 0.0)
        .count()
}
