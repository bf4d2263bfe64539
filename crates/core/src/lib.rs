//! Core traits for the Pendula workspace.
//!
//! The solver crate and the pendulum model both build on two small seams:
//!
//! - [`StepIntegrable`]: a state that can be advanced by `derivative * delta`
//! - [`Observer`]: receives solver events and optionally returns a control action

mod observer;
mod step;

pub use observer::Observer;
pub use step::{DerivativeOf, StepIntegrable};
