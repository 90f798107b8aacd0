//! Validation and evaluation errors

use crate::float_types::Real;

/// All the ways a field construction or evaluation can fail.
///
/// Every error is raised synchronously at the offending call; there is no
/// retry or cross-component recovery. Construction errors (`Weight*`) fail
/// fast, before any partially valid field exists.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FieldError {
    /// The field carries no analytic gradient. Raised by evaluation-only
    /// catalog fields, by the shell field (which defines no gradient of its
    /// own), and by shell evaluation over a gradient-less field.
    #[error("gradient not implemented for this field")]
    GradientNotImplemented,

    /// An interpolation weight vector has the wrong length.
    #[error("expected {expected} interpolation weights, got {got}")]
    WeightCountMismatch { expected: usize, got: usize },

    /// An interpolation weight lies outside [0, 1].
    #[error("interpolation weight {weight} at index {index} is outside [0, 1]")]
    WeightOutOfRange { index: usize, weight: Real },

    /// Interpolation weights do not sum to one within tolerance.
    #[error("interpolation weights sum to {sum}, expected 1")]
    WeightSumInvalid { sum: Real },

    /// Batched evaluation was handed coordinate slices of different lengths.
    #[error("coordinate slices have mismatched lengths: x={x}, y={y}, z={z}")]
    BatchLengthMismatch { x: usize, y: usize, z: usize },
}
