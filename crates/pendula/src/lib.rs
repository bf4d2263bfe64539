//! Simple gravity pendulum: forward Euler simulation and period detection.
//!
//! A pendulum is released from rest (or with a push) and integrated with
//! explicit Euler until the velocity changes sign for the second time after
//! release, which marks one full oscillation. The measured period can be
//! compared with the small-angle harmonic period and the exact period from
//! the complete elliptic integral of the first kind.
//!
//! - [`Parameters`]: the physical setup and time step
//! - [`integrator`]: one Euler step of the equations of motion
//! - [`PeriodDetector`]: solver observer that ends the run after one period
//! - [`simulate`]: runs the solver on validated inputs and returns a [`Measurement`]
//! - [`Trajectory`]: every kept state, plus bob coordinates for playback
//! - [`reference`]: harmonic and elliptic-integral periods
//! - [`Report`]: the three periods side by side
//!
//! # Example
//!
//! ```
//! use pendula::{Config, Parameters, Report};
//!
//! let report = Report::generate(&Parameters::default(), &Config::default())?;
//! assert!(report.numerical > report.harmonic);
//! # Ok::<(), pendula::Error>(())
//! ```

mod config;
mod detector;
mod error;
pub mod integrator;
mod monitor;
mod parameters;
pub mod reference;
mod report;
mod simulate;
mod state;
mod trajectory;

pub use config::Config;
pub use detector::{PeriodDetector, TerminationCriterion};
pub use error::Error;
pub use monitor::{EnergyMonitor, Instability};
pub use parameters::Parameters;
pub use reference::{CompleteEllipticK, Ellip, ReferencePeriods};
pub use report::Report;
pub use simulate::{Measurement, simulate, simulate_observed};
pub use state::{Rates, State};
pub use trajectory::{Frame, Trajectory};

pub use pendula_core::Observer;
pub use pendula_solvers::transient::euler::{Action, Event};
