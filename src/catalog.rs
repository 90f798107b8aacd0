//! The process-wide TPMS catalog.
//!
//! Two immutable `static` tables registering every formula in
//! [`crate::tpms`] by name: the full [`CATALOG`], and the
//! [`GRADIENT_CATALOG`] subset whose entries carry a registered analytic
//! gradient and are therefore eligible for gradient-dependent composition.
//! Composed fields reference these entries; they never copy them.
//!
//! Being plain `static` data built from function pointers, the catalog
//! exists before any field can be constructed and is safe for
//! unsynchronized concurrent reads.

use crate::field::LeafField;
use crate::float_types::{Real, TAU};
use crate::tpms;
use crate::tpms::gradient;
use nalgebra::Vector3;

/// A scalar field formula f(x, y, z).
pub type ScalarFn = fn(Real, Real, Real) -> Real;

/// An analytic gradient ∇f(x, y, z).
pub type GradientFn = fn(Real, Real, Real) -> Vector3<Real>;

/// One named catalog formula, with its gradient when one is registered.
#[derive(Debug, Clone, Copy)]
pub struct TpmsEntry {
    pub name: &'static str,
    pub eval: ScalarFn,
    pub gradient: Option<GradientFn>,
}

/// A catalog formula together with its registered gradient.
///
/// Gradient eligibility is a property of the type: holding a
/// `DifferentiableEntry` is proof the gradient exists.
#[derive(Debug, Clone, Copy)]
pub struct DifferentiableEntry {
    pub name: &'static str,
    pub eval: ScalarFn,
    pub gradient: GradientFn,
}

/// The natural periodic bounding box shared by every catalog formula:
/// (2π, 2π, 2π). Purely advisory for downstream sampling; the formulas are
/// periodic and evaluable anywhere.
pub fn natural_domain() -> Vector3<Real> {
    Vector3::new(TAU, TAU, TAU)
}

impl TpmsEntry {
    /// Wrap this entry in a leaf field over the natural domain.
    pub fn field(&self) -> LeafField {
        LeafField::new(self.eval, self.gradient, natural_domain())
    }

    /// This entry's periodic bounding box.
    pub fn domain(&self) -> Vector3<Real> {
        natural_domain()
    }
}

impl DifferentiableEntry {
    /// Wrap this entry in a leaf field over the natural domain.
    pub fn field(&self) -> LeafField {
        LeafField::new(self.eval, Some(self.gradient), natural_domain())
    }

    /// This entry's periodic bounding box.
    pub fn domain(&self) -> Vector3<Real> {
        natural_domain()
    }
}

/// The formulas with registered gradients, in the order expected by
/// [`InterpolatedField`](crate::InterpolatedField) weight vectors and by the
/// octant assignment of
/// [`SpatiallyVaryingField`](crate::SpatiallyVaryingField).
pub static GRADIENT_CATALOG: [DifferentiableEntry; 8] = [
    DifferentiableEntry {
        name: "schoen_gyroid",
        eval: tpms::schoen_gyroid,
        gradient: gradient::schoen_gyroid_gradient,
    },
    DifferentiableEntry {
        name: "schwarz_diamond",
        eval: tpms::schwarz_diamond,
        gradient: gradient::schwarz_diamond_gradient,
    },
    DifferentiableEntry {
        name: "schwarz_primitive",
        eval: tpms::schwarz_primitive,
        gradient: gradient::schwarz_primitive_gradient,
    },
    DifferentiableEntry {
        name: "schoen_iwp",
        eval: tpms::schoen_iwp,
        gradient: gradient::schoen_iwp_gradient,
    },
    DifferentiableEntry {
        name: "neovius",
        eval: tpms::neovius,
        gradient: gradient::neovius_gradient,
    },
    DifferentiableEntry {
        name: "fischer_koch_s",
        eval: tpms::fischer_koch_s,
        gradient: gradient::fischer_koch_s_gradient,
    },
    DifferentiableEntry {
        name: "schoen_frd",
        eval: tpms::schoen_frd,
        gradient: gradient::schoen_frd_gradient,
    },
    DifferentiableEntry {
        name: "pmy",
        eval: tpms::pmy,
        gradient: gradient::pmy_gradient,
    },
];

/// Every catalog formula. The differentiable entries come first, in
/// [`GRADIENT_CATALOG`] order; the rest are evaluation-only.
pub static CATALOG: [TpmsEntry; 15] = [
    TpmsEntry {
        name: "schoen_gyroid",
        eval: tpms::schoen_gyroid,
        gradient: Some(gradient::schoen_gyroid_gradient),
    },
    TpmsEntry {
        name: "schwarz_diamond",
        eval: tpms::schwarz_diamond,
        gradient: Some(gradient::schwarz_diamond_gradient),
    },
    TpmsEntry {
        name: "schwarz_primitive",
        eval: tpms::schwarz_primitive,
        gradient: Some(gradient::schwarz_primitive_gradient),
    },
    TpmsEntry {
        name: "schoen_iwp",
        eval: tpms::schoen_iwp,
        gradient: Some(gradient::schoen_iwp_gradient),
    },
    TpmsEntry {
        name: "neovius",
        eval: tpms::neovius,
        gradient: Some(gradient::neovius_gradient),
    },
    TpmsEntry {
        name: "fischer_koch_s",
        eval: tpms::fischer_koch_s,
        gradient: Some(gradient::fischer_koch_s_gradient),
    },
    TpmsEntry {
        name: "schoen_frd",
        eval: tpms::schoen_frd,
        gradient: Some(gradient::schoen_frd_gradient),
    },
    TpmsEntry {
        name: "pmy",
        eval: tpms::pmy,
        gradient: Some(gradient::pmy_gradient),
    },
    TpmsEntry {
        name: "double_schoen_gyroid",
        eval: tpms::double_schoen_gyroid,
        gradient: None,
    },
    TpmsEntry {
        name: "double_schwarz_diamond",
        eval: tpms::double_schwarz_diamond,
        gradient: None,
    },
    TpmsEntry {
        name: "double_schwarz_primitive",
        eval: tpms::double_schwarz_primitive,
        gradient: None,
    },
    TpmsEntry {
        name: "lipnoid",
        eval: tpms::lipnoid,
        gradient: None,
    },
    TpmsEntry {
        name: "tubular_g_ab",
        eval: tpms::tubular_g_ab,
        gradient: None,
    },
    TpmsEntry {
        name: "tubular_g_c",
        eval: tpms::tubular_g_c,
        gradient: None,
    },
    TpmsEntry {
        name: "bcc",
        eval: tpms::bcc,
        gradient: None,
    },
];
