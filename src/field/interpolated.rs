//! Convex interpolation of the differentiable catalog fields.

use crate::catalog::{DifferentiableEntry, GRADIENT_CATALOG};
use crate::errors::FieldError;
use crate::float_types::Real;
use nalgebra::Vector3;

/// Tolerance for the weights-sum-to-one check.
const WEIGHT_SUM_TOLERANCE: Real = 1e-10;

/// A weighted sum of the differentiable catalog fields, selected by a
/// probability-simplex weight vector over
/// [`GRADIENT_CATALOG`](crate::catalog::GRADIENT_CATALOG).
///
/// Value and gradient are both weighted sums. Differentiation is linear,
/// so the combined gradient is exact, not approximate.
#[derive(Debug, Clone)]
pub struct InterpolatedField {
    terms: Vec<Term>,
    domain: Vector3<Real>,
}

#[derive(Debug, Clone)]
struct Term {
    weight: Real,
    entry: &'static DifferentiableEntry,
}

impl InterpolatedField {
    /// Build from one weight per [`GRADIENT_CATALOG`] entry, in catalog
    /// order.
    ///
    /// Weights must lie in [0, 1] and sum to 1 within 1e-10; any violation
    /// fails construction before a field exists. Zero-weight entries are
    /// dropped up front; they contribute nothing either way, so the
    /// sparsification is not observable.
    pub fn new(weights: &[Real]) -> Result<Self, FieldError> {
        if weights.len() != GRADIENT_CATALOG.len() {
            return Err(FieldError::WeightCountMismatch {
                expected: GRADIENT_CATALOG.len(),
                got: weights.len(),
            });
        }
        for (index, &weight) in weights.iter().enumerate() {
            if !(0.0..=1.0).contains(&weight) {
                return Err(FieldError::WeightOutOfRange { index, weight });
            }
        }
        let sum: Real = weights.iter().sum();
        if (sum - 1.0).abs() >= WEIGHT_SUM_TOLERANCE {
            return Err(FieldError::WeightSumInvalid { sum });
        }

        let mut terms = Vec::new();
        for (&weight, entry) in weights.iter().zip(GRADIENT_CATALOG.iter()) {
            if weight != 0.0 {
                terms.push(Term { weight, entry });
            }
        }

        // Elementwise max over the contributing entries' domains, folded
        // from zero.
        let domain = terms
            .iter()
            .fold(Vector3::zeros(), |acc: Vector3<Real>, term| {
                acc.sup(&term.entry.domain())
            });

        Ok(Self { terms, domain })
    }

    /// The catalog entries a weight vector selects over, in order.
    pub fn catalog() -> &'static [DifferentiableEntry] {
        &GRADIENT_CATALOG
    }

    /// Σ wᵢ·fᵢ(x, y, z) over the nonzero-weight entries.
    pub fn evaluate(&self, x: Real, y: Real, z: Real) -> Real {
        self.terms
            .iter()
            .map(|term| term.weight * (term.entry.eval)(x, y, z))
            .sum()
    }

    /// Σ wᵢ·∇fᵢ(x, y, z) over the nonzero-weight entries.
    pub fn gradient(&self, x: Real, y: Real, z: Real) -> Vector3<Real> {
        self.terms
            .iter()
            .fold(Vector3::zeros(), |acc, term| {
                acc + term.weight * (term.entry.gradient)(x, y, z)
            })
    }

    pub fn domain(&self) -> Vector3<Real> {
        self.domain
    }
}
