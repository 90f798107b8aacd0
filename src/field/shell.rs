//! Two-sided offset (shell) of an implicit field.

use crate::errors::FieldError;
use crate::field::Field;
use crate::float_types::Real;
use nalgebra::Vector3;

/// Thickens the zero level set of a wrapped field into a shell of finite
/// wall thickness.
///
/// With `t = thickness/2 · ‖∇f‖`, the shell value at a point is
/// `(f − t)(f + t)`: negative between the two offset surfaces bracketing
/// the wrapped zero level set, positive outside. The offset distance is a
/// first-order linearization along the local gradient direction, so the
/// walls sit approximately `thickness` apart.
///
/// The shell exposes no gradient of its own.
#[derive(Debug, Clone)]
pub struct ShellField {
    field: Box<Field>,
    thickness: Real,
}

impl ShellField {
    /// Wrap `field` in a shell of the given wall `thickness` (assumed
    /// non-negative). Any field variant can be wrapped, including another
    /// composition.
    pub fn new(field: impl Into<Field>, thickness: Real) -> Self {
        Self {
            field: Box::new(field.into()),
            thickness,
        }
    }

    /// Evaluate the shell field at a point.
    ///
    /// Fails with [`FieldError::GradientNotImplemented`] when the wrapped
    /// field has no gradient; the offset distance needs `‖∇f‖`.
    pub fn evaluate(&self, x: Real, y: Real, z: Real) -> Result<Real, FieldError> {
        let value = self.field.evaluate(x, y, z)?;
        let grad = self.field.gradient(x, y, z)?;
        let t = self.thickness / 2.0 * grad.norm();
        Ok((value - t) * (value + t))
    }

    /// Wall thickness the shell was built with.
    pub fn thickness(&self) -> Real {
        self.thickness
    }

    /// The wrapped field's domain, unchanged.
    pub fn domain(&self) -> Vector3<Real> {
        self.field.domain()
    }
}
