//! Closed-form reference periods, used only for comparison.
//!
//! - Harmonic (small-angle) period: `T₀ = 2π·sqrt(L/g)`
//! - Exact period for release from rest at `θ₀`:
//!   `T = 2·T₀/π · K(k²)` with `k = sin(θ₀/2)`
//!
//! `K` is the complete elliptic integral of the first kind in the parameter
//! convention `m = k²`. It is supplied by a [`CompleteEllipticK`]
//! implementation; [`Ellip`] is the default.

use std::f64::consts::{PI, TAU};

use uom::si::{
    acceleration::meter_per_second_squared, angle::radian, f64::Time, length::meter, time::second,
};

use crate::Parameters;

/// Provider of the complete elliptic integral of the first kind.
pub trait CompleteEllipticK {
    /// Returns `K(m) = ∫₀^{π/2} dφ / sqrt(1 − m·sin²φ)`.
    fn complete_elliptic_k(&self, m: f64) -> f64;
}

/// `K(m)` from the [`ellip`] special-function crate.
///
/// Returns infinity for `m ≥ 1` and NaN wherever `ellip` reports a domain
/// error.
#[derive(Debug, Clone, Copy, Default)]
pub struct Ellip;

impl CompleteEllipticK for Ellip {
    fn complete_elliptic_k(&self, m: f64) -> f64 {
        if m >= 1.0 {
            return f64::INFINITY;
        }
        ellip::ellipk(m).unwrap_or(f64::NAN)
    }
}

/// The two reference periods for one setup.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReferencePeriods {
    /// Small-angle approximation, independent of amplitude.
    pub harmonic: Time,
    /// Exact period from the complete elliptic integral.
    pub exact: Time,
}

impl ReferencePeriods {
    /// Computes both periods using the [`Ellip`] elliptic integral.
    #[must_use]
    pub fn estimate(params: &Parameters) -> Self {
        Self::estimate_with(params, &Ellip)
    }

    /// Computes both periods using the given elliptic integral provider.
    #[must_use]
    pub fn estimate_with(params: &Parameters, provider: &impl CompleteEllipticK) -> Self {
        Self {
            harmonic: harmonic_period(params),
            exact: elliptic_period(params, provider),
        }
    }
}

/// Returns the small-angle period `2π·sqrt(L/g)`.
#[must_use]
pub fn harmonic_period(params: &Parameters) -> Time {
    let length = params.length.get::<meter>();
    let gravity = params.gravity.get::<meter_per_second_squared>();

    Time::new::<second>(TAU * (length / gravity).sqrt())
}

/// Returns the exact period for release from the initial angle.
///
/// Only the initial angle enters; the initial velocity is ignored.
#[must_use]
pub fn elliptic_period(params: &Parameters, provider: &impl CompleteEllipticK) -> Time {
    let harmonic = harmonic_period(params).get::<second>();
    let k = (0.5 * params.initial_angle.get::<radian>()).sin();

    Time::new::<second>(2.0 * harmonic / PI * provider.complete_elliptic_k(k * k))
}
