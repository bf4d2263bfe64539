//! Forward Euler solver for fixed-step initial value problems.
//!
//! Each step evaluates the derivative at the current state and moves along it:
//!
//! ```text
//! state_{n+1} = state_n + derivative(state_n) * dt
//! ```
//!
//! An [`Observer`] sees every produced state and can end the run, either
//! keeping the state it just saw ([`Action::StopEarly`]) or discarding it
//! ([`Action::Reject`]).
//!
//! # Example
//!
//! ```ignore
//! use pendula_solvers::transient::euler;
//!
//! let solution = euler::solve_unobserved(initial, dt, steps, |state| rates(state))?;
//!
//! for state in &solution.history {
//!     println!("{state:?}");
//! }
//! ```

mod action;
mod error;
mod event;
mod solution;

pub use action::Action;
pub use error::Error;
pub use event::Event;
pub use solution::{Solution, Status};

use std::error::Error as StdError;

use pendula_core::{DerivativeOf, Observer, StepIntegrable};

/// Integrates from `initial` using forward Euler.
///
/// # Algorithm
///
/// 1. Emit step 0 with the initial state.
/// 2. For each step `n` in `1..=steps`:
///    - Evaluate the derivative at the current state.
///    - Step the state forward: `state + derivative * dt`.
///    - Emit an [`Event`] with `time = n * dt`.
///    - On [`Action::StopEarly`], keep the state and stop.
///    - On [`Action::Reject`], drop the state and stop.
///    - Otherwise keep the state and continue.
/// 3. Return the solution with every kept state.
///
/// Rejecting step 0 leaves the history empty.
///
/// # Errors
///
/// Returns an error if `dt` is not finite and positive, or if the derivative
/// function fails.
pub fn solve<S, F, E, Obs>(
    initial: S,
    dt: f64,
    steps: usize,
    mut derivative: F,
    mut observer: Obs,
) -> Result<Solution<S>, Error>
where
    S: StepIntegrable<f64> + Clone,
    F: FnMut(&S) -> Result<DerivativeOf<S, f64>, E>,
    E: StdError + Send + Sync + 'static,
    Obs: Observer<Event<S>, Action>,
{
    if !dt.is_finite() || dt <= 0.0 {
        return Err(Error::InvalidStepSize { dt });
    }

    let mut history = Vec::new();

    let event = Event {
        step: 0,
        time: 0.0,
        state: initial,
    };
    match observer.observe(&event) {
        Some(Action::Reject) => return Ok(stopped(history, 0)),
        Some(Action::StopEarly) => {
            history.push(event.state);
            return Ok(stopped(history, 0));
        }
        None => history.push(event.state.clone()),
    }

    let mut current = event.state;

    for step in 1..=steps {
        let rates = derivative(&current).map_err(|err| Error::derivative(step, err))?;
        let next = current.step(rates, dt);

        #[allow(clippy::cast_precision_loss)]
        let event = Event {
            step,
            time: step as f64 * dt,
            state: next,
        };

        match observer.observe(&event) {
            Some(Action::Reject) => return Ok(stopped(history, step - 1)),
            Some(Action::StopEarly) => {
                history.push(event.state);
                return Ok(stopped(history, step));
            }
            None => {}
        }

        history.push(event.state.clone());
        current = event.state;
    }

    Ok(Solution {
        status: Status::Complete,
        history,
        steps,
    })
}

/// Integrates from `initial` using forward Euler without observation.
///
/// This is a convenience wrapper around [`solve`] that never stops early.
///
/// # Errors
///
/// Returns an error if `dt` is not finite and positive, or if the derivative
/// function fails.
pub fn solve_unobserved<S, F, E>(
    initial: S,
    dt: f64,
    steps: usize,
    derivative: F,
) -> Result<Solution<S>, Error>
where
    S: StepIntegrable<f64> + Clone,
    F: FnMut(&S) -> Result<DerivativeOf<S, f64>, E>,
    E: StdError + Send + Sync + 'static,
{
    solve(initial, dt, steps, derivative, ())
}

fn stopped<S>(history: Vec<S>, steps: usize) -> Solution<S> {
    Solution {
        status: Status::StoppedByObserver,
        history,
        steps,
    }
}
