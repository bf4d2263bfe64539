//! Runs the pendulum until one full period has been observed.

use std::convert::Infallible;

use pendula_core::Observer;
use pendula_solvers::transient::euler::{self, Action, Event, Status};
use uom::si::{f64::Time, time::second};

use crate::{
    Config, EnergyMonitor, Error, Instability, Parameters, PeriodDetector, State, Trajectory,
    integrator,
};

/// A successfully measured period.
#[derive(Debug, Clone, PartialEq)]
pub struct Measurement {
    /// Time spanned by the kept trajectory, `len(trajectory) * dt`.
    pub period: Time,
    /// Every state from release up to the step before the closing crossing.
    pub trajectory: Trajectory,
    /// Set if energy drift exceeded the configured tolerance.
    pub instability: Option<Instability>,
}

/// Integrates the pendulum and measures one period of oscillation.
///
/// # Errors
///
/// - [`Error::InvalidConfiguration`] if `params` or `config` fail validation.
/// - [`Error::DegenerateMotion`] if the bob starts at rest hanging straight
///   down.
/// - [`Error::NonConvergence`] if `config.max_steps` runs out first. The
///   error carries the partial trajectory.
pub fn simulate(params: &Parameters, config: &Config) -> Result<Measurement, Error> {
    simulate_observed(params, config, ())
}

/// Like [`simulate`], but also hands every solver event to `observer`.
///
/// Events reach the observer after the period detector has seen them; the
/// event that completes the period is not forwarded. If the observer returns
/// an action, the run stops.
///
/// # Errors
///
/// As [`simulate`], plus [`Error::Interrupted`] if the observer stops the run
/// before a period is detected.
pub fn simulate_observed<Obs>(
    params: &Parameters,
    config: &Config,
    mut observer: Obs,
) -> Result<Measurement, Error>
where
    Obs: Observer<Event<State>, Action>,
{
    params
        .validate()
        .map_err(|reason| Error::InvalidConfiguration { reason })?;
    config
        .validate()
        .map_err(|reason| Error::InvalidConfiguration { reason })?;

    if params.is_at_rest() {
        return Err(Error::DegenerateMotion);
    }

    let dt = params.time_step.get::<second>();
    let mut detector = PeriodDetector::harmonic(params);
    let mut monitor = EnergyMonitor::new(params, config.drift_tolerance);

    let solution = euler::solve(
        params.initial_state(),
        dt,
        config.max_steps,
        |state: &State| Ok::<_, Infallible>(integrator::rates(state, params)),
        |event: &Event<State>| {
            let action = detector.observe(event).or_else(|| observer.observe(event));
            if action != Some(Action::Reject) {
                monitor.record(event.step, &event.state);
            }
            action
        },
    )?;

    let steps = solution.steps;
    let trajectory = Trajectory::new(solution.history, dt);
    let instability = monitor.instability();

    if detector.detected_at().is_some() {
        return Ok(Measurement {
            period: trajectory.elapsed(),
            trajectory,
            instability,
        });
    }

    match solution.status {
        Status::StoppedByObserver => Err(Error::Interrupted { steps, trajectory }),
        Status::Complete => Err(Error::NonConvergence {
            steps,
            trajectory,
            instability,
        }),
    }
}
