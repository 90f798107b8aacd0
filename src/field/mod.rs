//! Implicit field variants and their single dispatch entry point.
//!
//! Every field shape the crate can produce is one variant of [`Field`]:
//! a catalog leaf, or one of the four compositions. Each variant struct
//! holds exactly the state it needs and is immutable once built, so a field
//! constructed without a scalar function simply cannot exist. The only
//! runtime "not implemented" left is a missing gradient.

pub mod fourier;
pub mod interpolated;
pub mod shell;
pub mod spatially_varying;

pub use fourier::FourierField;
pub use interpolated::InterpolatedField;
pub use shell::ShellField;
pub use spatially_varying::SpatiallyVaryingField;

use crate::catalog::{GradientFn, ScalarFn};
use crate::errors::FieldError;
use crate::float_types::Real;
use nalgebra::Vector3;

/// A leaf implicit field: one scalar formula, an optional analytic
/// gradient, and its periodic bounding box.
///
/// Leaves are normally built over catalog entries via
/// [`TpmsEntry::field`](crate::catalog::TpmsEntry::field), but any pair of
/// free functions works.
#[derive(Debug, Clone)]
pub struct LeafField {
    eval: ScalarFn,
    gradient: Option<GradientFn>,
    domain: Vector3<Real>,
}

impl LeafField {
    pub fn new(eval: ScalarFn, gradient: Option<GradientFn>, domain: Vector3<Real>) -> Self {
        Self {
            eval,
            gradient,
            domain,
        }
    }

    pub fn evaluate(&self, x: Real, y: Real, z: Real) -> Real {
        (self.eval)(x, y, z)
    }

    /// Fails with [`FieldError::GradientNotImplemented`] for evaluation-only
    /// formulas.
    pub fn gradient(&self, x: Real, y: Real, z: Real) -> Result<Vector3<Real>, FieldError> {
        match self.gradient {
            Some(df) => Ok(df(x, y, z)),
            None => Err(FieldError::GradientNotImplemented),
        }
    }

    pub fn domain(&self) -> Vector3<Real> {
        self.domain
    }
}

/// Any implicit field this crate can evaluate.
///
/// The enum is the uniform call surface: every variant answers
/// [`evaluate`](Field::evaluate), [`evaluate_batch`](Field::evaluate_batch),
/// [`gradient`](Field::gradient) and [`domain`](Field::domain), and every
/// composition accepts a `Field`, so compositions close over each other
/// (e.g. a shell of a Fourier field).
#[derive(Debug, Clone)]
pub enum Field {
    Leaf(LeafField),
    Shell(ShellField),
    Interpolated(InterpolatedField),
    SpatiallyVarying(SpatiallyVaryingField),
    Fourier(FourierField),
}

impl Field {
    /// Evaluate the scalar field at a point.
    ///
    /// Infallible for every variant except [`ShellField`], whose value
    /// depends on the wrapped field's gradient.
    pub fn evaluate(&self, x: Real, y: Real, z: Real) -> Result<Real, FieldError> {
        match self {
            Field::Leaf(f) => Ok(f.evaluate(x, y, z)),
            Field::Shell(f) => f.evaluate(x, y, z),
            Field::Interpolated(f) => Ok(f.evaluate(x, y, z)),
            Field::SpatiallyVarying(f) => Ok(f.evaluate(x, y, z)),
            Field::Fourier(f) => Ok(f.evaluate(x, y, z)),
        }
    }

    /// Evaluate at each point of three equal-length coordinate slices.
    ///
    /// Points are independent, so with the `parallel` feature the map runs
    /// on rayon; the output order matches the input either way. Mismatched
    /// slice lengths are rejected up front.
    pub fn evaluate_batch(
        &self,
        xs: &[Real],
        ys: &[Real],
        zs: &[Real],
    ) -> Result<Vec<Real>, FieldError> {
        if xs.len() != ys.len() || ys.len() != zs.len() {
            return Err(FieldError::BatchLengthMismatch {
                x: xs.len(),
                y: ys.len(),
                z: zs.len(),
            });
        }
        self.evaluate_points(xs, ys, zs)
    }

    #[cfg(not(feature = "parallel"))]
    fn evaluate_points(
        &self,
        xs: &[Real],
        ys: &[Real],
        zs: &[Real],
    ) -> Result<Vec<Real>, FieldError> {
        xs.iter()
            .zip(ys)
            .zip(zs)
            .map(|((&x, &y), &z)| self.evaluate(x, y, z))
            .collect()
    }

    #[cfg(feature = "parallel")]
    fn evaluate_points(
        &self,
        xs: &[Real],
        ys: &[Real],
        zs: &[Real],
    ) -> Result<Vec<Real>, FieldError> {
        use rayon::prelude::*;
        xs.par_iter()
            .zip(ys)
            .zip(zs)
            .map(|((&x, &y), &z)| self.evaluate(x, y, z))
            .collect()
    }

    /// Evaluate the gradient at a point.
    ///
    /// Fails with [`FieldError::GradientNotImplemented`] for evaluation-only
    /// leaves and for shells; the shell transform defines no gradient of
    /// its own, an asymmetry callers must work around themselves.
    pub fn gradient(&self, x: Real, y: Real, z: Real) -> Result<Vector3<Real>, FieldError> {
        match self {
            Field::Leaf(f) => f.gradient(x, y, z),
            Field::Shell(_) => Err(FieldError::GradientNotImplemented),
            Field::Interpolated(f) => Ok(f.gradient(x, y, z)),
            Field::SpatiallyVarying(f) => Ok(f.gradient(x, y, z)),
            Field::Fourier(f) => Ok(f.gradient(x, y, z)),
        }
    }

    /// The field's periodic bounding box, for downstream sampling.
    pub fn domain(&self) -> Vector3<Real> {
        match self {
            Field::Leaf(f) => f.domain(),
            Field::Shell(f) => f.domain(),
            Field::Interpolated(f) => f.domain(),
            Field::SpatiallyVarying(f) => f.domain(),
            Field::Fourier(f) => f.domain(),
        }
    }
}

impl From<LeafField> for Field {
    fn from(f: LeafField) -> Self {
        Field::Leaf(f)
    }
}

impl From<ShellField> for Field {
    fn from(f: ShellField) -> Self {
        Field::Shell(f)
    }
}

impl From<InterpolatedField> for Field {
    fn from(f: InterpolatedField) -> Self {
        Field::Interpolated(f)
    }
}

impl From<SpatiallyVaryingField> for Field {
    fn from(f: SpatiallyVaryingField) -> Self {
        Field::SpatiallyVarying(f)
    }
}

impl From<FourierField> for Field {
    fn from(f: FourierField) -> Self {
        Field::Fourier(f)
    }
}
