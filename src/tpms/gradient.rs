//! Hand-derived analytic gradients for the differentiable TPMS formulas.
//!
//! Exact closed forms, never finite differences; composition propagates them
//! algebraically. `tests/gradient_tests.rs` checks each against a
//! central-difference estimate over a grid spanning several periods.

use crate::float_types::Real;
use nalgebra::Vector3;

/// Gradient of [`schoen_gyroid`](crate::tpms::schoen_gyroid).
pub fn schoen_gyroid_gradient(x: Real, y: Real, z: Real) -> Vector3<Real> {
    let (sx, cx) = x.sin_cos();
    let (sy, cy) = y.sin_cos();
    let (sz, cz) = z.sin_cos();
    Vector3::new(cx * cy - sx * sz, cy * cz - sx * sy, cx * cz - sy * sz)
}

/// Gradient of [`schwarz_diamond`](crate::tpms::schwarz_diamond).
pub fn schwarz_diamond_gradient(x: Real, y: Real, z: Real) -> Vector3<Real> {
    let (sx, cx) = x.sin_cos();
    let (sy, cy) = y.sin_cos();
    let (sz, cz) = z.sin_cos();
    Vector3::new(
        -sx * cy * cz - cx * sy * sz,
        -cx * sy * cz - sx * cy * sz,
        -cx * cy * sz - sx * sy * cz,
    )
}

/// Gradient of [`schwarz_primitive`](crate::tpms::schwarz_primitive).
pub fn schwarz_primitive_gradient(x: Real, y: Real, z: Real) -> Vector3<Real> {
    Vector3::new(-x.sin(), -y.sin(), -z.sin())
}

/// Gradient of [`schoen_iwp`](crate::tpms::schoen_iwp).
pub fn schoen_iwp_gradient(x: Real, y: Real, z: Real) -> Vector3<Real> {
    let (sx, cx) = x.sin_cos();
    let (sy, cy) = y.sin_cos();
    let (sz, cz) = z.sin_cos();
    Vector3::new(
        2.0 * ((2.0 * x).sin() - sx * (cy + cz)),
        2.0 * ((2.0 * y).sin() - sy * (cx + cz)),
        2.0 * ((2.0 * z).sin() - sz * (cx + cy)),
    )
}

/// Gradient of [`neovius`](crate::tpms::neovius).
pub fn neovius_gradient(x: Real, y: Real, z: Real) -> Vector3<Real> {
    let (sx, cx) = x.sin_cos();
    let (sy, cy) = y.sin_cos();
    let (sz, cz) = z.sin_cos();
    Vector3::new(
        -(3.0 + 4.0 * cy * cz) * sx,
        -(3.0 + 4.0 * cx * cz) * sy,
        -(3.0 + 4.0 * cx * cy) * sz,
    )
}

/// Gradient of [`fischer_koch_s`](crate::tpms::fischer_koch_s).
pub fn fischer_koch_s_gradient(x: Real, y: Real, z: Real) -> Vector3<Real> {
    let (sx, cx) = x.sin_cos();
    let (sy, cy) = y.sin_cos();
    let (sz, cz) = z.sin_cos();
    let (s2x, c2x) = (2.0 * x).sin_cos();
    let (s2y, c2y) = (2.0 * y).sin_cos();
    let (s2z, c2z) = (2.0 * z).sin_cos();
    Vector3::new(
        -2.0 * s2x * sy * cz - sx * c2y * sz + cx * cy * c2z,
        c2x * cy * cz - 2.0 * cx * s2y * sz - sx * sy * c2z,
        -c2x * sy * sz + cx * c2y * cz - 2.0 * sx * cy * s2z,
    )
}

/// Gradient of [`schoen_frd`](crate::tpms::schoen_frd).
pub fn schoen_frd_gradient(x: Real, y: Real, z: Real) -> Vector3<Real> {
    let (sx, cx) = x.sin_cos();
    let (sy, cy) = y.sin_cos();
    let (sz, cz) = z.sin_cos();
    let (s2x, c2x) = (2.0 * x).sin_cos();
    let (s2y, c2y) = (2.0 * y).sin_cos();
    let (s2z, c2z) = (2.0 * z).sin_cos();
    Vector3::new(
        2.0 * s2x * (c2y + c2z) - 4.0 * sx * cy * cz,
        2.0 * s2y * (c2x + c2z) - 4.0 * cx * sy * cz,
        2.0 * s2z * (c2x + c2y) - 4.0 * cx * cy * sz,
    )
}

/// Gradient of [`pmy`](crate::tpms::pmy).
pub fn pmy_gradient(x: Real, y: Real, z: Real) -> Vector3<Real> {
    let (sx, cx) = x.sin_cos();
    let (sy, cy) = y.sin_cos();
    let (sz, cz) = z.sin_cos();
    let (s2x, c2x) = (2.0 * x).sin_cos();
    let (s2y, c2y) = (2.0 * y).sin_cos();
    let (s2z, c2z) = (2.0 * z).sin_cos();
    Vector3::new(
        2.0 * c2x * sy + cx * s2z - 2.0 * sx * cy * cz,
        s2x * cy + 2.0 * c2y * sz - 2.0 * cx * sy * cz,
        s2y * cz + 2.0 * sx * c2z - 2.0 * cx * cy * sz,
    )
}
