//! Octant-wise sigmoid blending of the differentiable catalog fields.

use crate::catalog::{self, GRADIENT_CATALOG};
use crate::float_types::Real;
use nalgebra::Vector3;

/// The logistic gate σ(t) = 1 / (1 + e^(−t)), steepness 1.
fn sigmoid(t: Real) -> Real {
    1.0 / (1.0 + (-t).exp())
}

/// Derivative of [`sigmoid`]: σ(t)·(1 − σ(t)).
fn sigmoid_gradient(t: Real) -> Real {
    let s = sigmoid(t);
    s * (1.0 - s)
}

/// Axis signs (±1 each) of octant `i`, from the high bit (x) to the low
/// bit (z).
fn octant_signs(i: usize) -> (Real, Real, Real) {
    let sign = |bit: usize| 2.0 * (((i >> bit) & 1) as Real) - 1.0;
    (sign(2), sign(1), sign(0))
}

/// Blends all eight differentiable catalog fields, one per octant of ℝ³.
///
/// Each field dominates smoothly inside its own octant and fades out
/// across the coordinate planes through the sigmoid gate:
///
/// `Σᵢ σ(sxᵢ·x)·σ(syᵢ·y)·σ(szᵢ·z)·fᵢ(x, y, z)`
///
/// At a coordinate plane the gate is exactly 0.5, so neighboring octants
/// hand over continuously. The gradient follows the product rule across the
/// three gate factors and the field factor.
#[derive(Debug, Clone)]
pub struct SpatiallyVaryingField {
    /// Octant-plane offsets; fixed at the origin for now.
    offset: Vector3<Real>,
}

impl SpatiallyVaryingField {
    pub fn new() -> Self {
        Self {
            offset: Vector3::zeros(),
        }
    }

    pub fn evaluate(&self, x: Real, y: Real, z: Real) -> Real {
        let mut r = 0.0;
        for (i, entry) in GRADIENT_CATALOG.iter().enumerate() {
            let (sx, sy, sz) = octant_signs(i);
            r += sigmoid(sx * (x - self.offset.x))
                * sigmoid(sy * (y - self.offset.y))
                * sigmoid(sz * (z - self.offset.z))
                * (entry.eval)(x, y, z);
        }
        r
    }

    pub fn gradient(&self, x: Real, y: Real, z: Real) -> Vector3<Real> {
        let mut r = Vector3::zeros();
        for (i, entry) in GRADIENT_CATALOG.iter().enumerate() {
            let (sx, sy, sz) = octant_signs(i);
            let tx = sx * (x - self.offset.x);
            let ty = sy * (y - self.offset.y);
            let tz = sz * (z - self.offset.z);
            let gate_x = sigmoid(tx);
            let gate_y = sigmoid(ty);
            let gate_z = sigmoid(tz);

            let value = (entry.eval)(x, y, z);
            let grad = (entry.gradient)(x, y, z);

            r += gate_x * gate_y * gate_z * grad;
            // d/dx σ(s·x) = s·σ'(s·x), and likewise for y and z.
            r.x += sx * sigmoid_gradient(tx) * gate_y * gate_z * value;
            r.y += sy * sigmoid_gradient(ty) * gate_x * gate_z * value;
            r.z += sz * sigmoid_gradient(tz) * gate_x * gate_y * value;
        }
        r
    }

    /// Four times the natural catalog domain, covering the octant
    /// transition region.
    pub fn domain(&self) -> Vector3<Real> {
        4.0 * catalog::natural_domain()
    }
}

impl Default for SpatiallyVaryingField {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sigmoid_is_half_at_zero() {
        assert!((sigmoid(0.0) - 0.5).abs() < 1e-15);
    }

    #[test]
    fn sigmoid_symmetry() {
        for t in [-3.0, -0.7, 0.2, 1.9] {
            assert!((sigmoid(-t) - (1.0 - sigmoid(t))).abs() < 1e-15);
        }
    }

    #[test]
    fn sigmoid_gradient_matches_central_difference() {
        let h = 1e-6;
        for t in [-2.5, -0.3, 0.0, 0.8, 3.1] {
            let numeric = (sigmoid(t + h) - sigmoid(t - h)) / (2.0 * h);
            assert!((sigmoid_gradient(t) - numeric).abs() < 1e-9);
        }
    }

    #[test]
    fn octant_signs_cover_all_corners() {
        let mut seen = [false; 8];
        for i in 0..8 {
            let (sx, sy, sz) = octant_signs(i);
            assert!(sx.abs() == 1.0 && sy.abs() == 1.0 && sz.abs() == 1.0);
            let corner = (((sx > 0.0) as usize) << 2)
                | (((sy > 0.0) as usize) << 1)
                | ((sz > 0.0) as usize);
            seen[corner] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }
}
