//! Odd-harmonic Fourier synthesis of the Schoen gyroid.

use crate::catalog;
use crate::float_types::{PI, Real, TAU};
use crate::tpms;
use crate::tpms::gradient;
use nalgebra::Vector3;

/// Number of harmonic terms kept in the truncated series.
const TERMS: u32 = 4;

/// Base frequency of the series: one period per natural domain width.
const BASE_FREQUENCY: Real = 1.0 / TAU;

/// Approximates a square-wave-like profile along x by summing the Schoen
/// gyroid at odd multiples of the base frequency:
///
/// `(4/π) · Σ_{k=1..4} gyroid(2π(2k−1)·f₀·x, y, z) / (2k−1)`
///
/// Only the x argument is scaled by the harmonic; y and z pass through to
/// the base field unchanged, and the gradient applies the chain rule to the
/// x component alone.
#[derive(Debug, Clone)]
pub struct FourierField;

impl FourierField {
    pub fn new() -> Self {
        Self
    }

    pub fn evaluate(&self, x: Real, y: Real, z: Real) -> Real {
        let mut r = 0.0;
        for k in 1..=TERMS {
            let harmonic = (2 * k - 1) as Real;
            let angular = TAU * harmonic * BASE_FREQUENCY;
            r += tpms::schoen_gyroid(angular * x, y, z) / harmonic;
        }
        4.0 / PI * r
    }

    pub fn gradient(&self, x: Real, y: Real, z: Real) -> Vector3<Real> {
        let mut r = Vector3::zeros();
        for k in 1..=TERMS {
            let harmonic = (2 * k - 1) as Real;
            let angular = TAU * harmonic * BASE_FREQUENCY;
            let mut g = gradient::schoen_gyroid_gradient(angular * x, y, z) / harmonic;
            // Chain rule applies to x only; y and z pass through unscaled.
            g.x *= angular;
            r += g;
        }
        4.0 / PI * r
    }

    pub fn domain(&self) -> Vector3<Real> {
        catalog::natural_domain()
    }
}

impl Default for FourierField {
    fn default() -> Self {
        Self::new()
    }
}
