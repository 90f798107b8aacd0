//! Scalar type and math constants shared across the crate.

/// Our Real scalar type. The evaluation interface is 64-bit floating point
/// throughout.
pub type Real = f64;

/// Archimedes' constant (π)
pub const PI: Real = core::f64::consts::PI;

/// The full circle constant (τ), one natural period of the catalog formulas
pub const TAU: Real = core::f64::consts::TAU;

/// Default tolerance for approximate floating-point comparisons
pub const EPSILON: Real = 1e-8;
