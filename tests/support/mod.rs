//! Test support library
//! Provides various helper functions & utilities for tests.

use nalgebra::Vector3;
use tpmsrs::float_types::Real;

/// Quick helper to compare floating-point results with an acceptable tolerance.
pub fn approx_eq(a: Real, b: Real, eps: Real) -> bool {
    (a - b).abs() < eps
}

/// Sample points on a coarse grid spanning several periods of the catalog
/// fields, offset from the lattice symmetry points.
pub fn sample_grid() -> Vec<(Real, Real, Real)> {
    const STEPS: [Real; 5] = [-8.9, -4.1, -0.7, 2.3, 7.9];
    let mut points = Vec::with_capacity(STEPS.len().pow(3));
    for &x in &STEPS {
        for &y in &STEPS {
            for &z in &STEPS {
                points.push((x, y, z));
            }
        }
    }
    points
}

/// Central-difference estimate of a scalar field's gradient at a point.
pub fn central_difference<F>(f: F, x: Real, y: Real, z: Real, h: Real) -> Vector3<Real>
where
    F: Fn(Real, Real, Real) -> Real,
{
    Vector3::new(
        (f(x + h, y, z) - f(x - h, y, z)) / (2.0 * h),
        (f(x, y + h, z) - f(x, y - h, z)) / (2.0 * h),
        (f(x, y, z + h) - f(x, y, z - h)) / (2.0 * h),
    )
}
