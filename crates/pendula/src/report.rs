use std::fmt;

use uom::si::{f64::Time, time::second};

use crate::{Config, Error, Measurement, Parameters, ReferencePeriods, simulate};

/// The three period estimates for one setup.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Report {
    /// Period measured by integration.
    pub numerical: Time,
    /// Small-angle approximation.
    pub harmonic: Time,
    /// Elliptic-integral period.
    pub exact: Time,
}

impl Report {
    /// Simulates `params` and pairs the result with the reference periods.
    ///
    /// # Errors
    ///
    /// Returns any error from [`simulate`].
    pub fn generate(params: &Parameters, config: &Config) -> Result<Self, Error> {
        let measurement = simulate(params, config)?;
        Ok(Self::new(&measurement, &ReferencePeriods::estimate(params)))
    }

    #[must_use]
    pub fn new(measurement: &Measurement, reference: &ReferencePeriods) -> Self {
        Self {
            numerical: measurement.period,
            harmonic: reference.harmonic,
            exact: reference.exact,
        }
    }

    /// Returns `(numerical − exact) / exact`.
    #[must_use]
    pub fn relative_error(&self) -> f64 {
        let exact = self.exact.get::<second>();
        (self.numerical.get::<second>() - exact) / exact
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "numerical period: {} s", self.numerical.get::<second>())?;
        writeln!(f, "harmonic period:  {} s", self.harmonic.get::<second>())?;
        write!(f, "elliptic period:  {} s", self.exact.get::<second>())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn report_lists_three_labeled_periods() {
        let report = Report {
            numerical: Time::new::<second>(0.683),
            harmonic: Time::new::<second>(0.6347),
            exact: Time::new::<second>(0.6811),
        };

        let text = report.to_string();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "numerical period: 0.683 s");
        assert_eq!(lines[1], "harmonic period:  0.6347 s");
        assert_eq!(lines[2], "elliptic period:  0.6811 s");
    }

    #[test]
    fn generated_report_is_close_to_exact() {
        let report = Report::generate(&Parameters::default(), &Config::default()).expect("report");

        assert!(report.numerical > report.harmonic);
        assert!(report.relative_error().abs() < 0.01);
        assert_relative_eq!(report.harmonic.get::<second>(), 0.634_697_562_594_052_3);
    }

    #[test]
    fn generate_propagates_simulation_errors() {
        let params = Parameters::default()
            .initial_angle_si(0.0)
            .initial_velocity_si(0.0);

        let result = Report::generate(&params, &Config::default());

        assert!(matches!(result, Err(Error::DegenerateMotion)));
    }
}
