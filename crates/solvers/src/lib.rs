//! Numerical solvers for the Pendula workspace.
//!
//! - [`transient::euler`]: fixed-step forward Euler with observer control

pub mod transient;
