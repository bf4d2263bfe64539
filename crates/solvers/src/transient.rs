//! Time-marching solvers for initial value problems.

pub mod euler;
