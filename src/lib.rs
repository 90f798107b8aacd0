//! Evaluation and composition of **Triply Periodic Minimal Surface (TPMS)**
//! implicit fields: closed-form trigonometric functions f(x, y, z) whose zero
//! level sets define minimal-surface lattices.
//!
//! The crate ships a fixed [catalog](catalog) of base formulas with exact
//! analytic gradients, and four composition strategies that are themselves
//! implicit fields:
//!
//! - [`ShellField`]: a two-sided offset producing a wall of finite thickness
//!   around the zero level set,
//! - [`InterpolatedField`]: a convex combination of the differentiable
//!   catalog fields selected by a simplex weight vector,
//! - [`SpatiallyVaryingField`]: a sigmoid-gated blend assigning one catalog
//!   field to each octant,
//! - [`FourierField`]: a truncated odd-harmonic series built from the Schoen
//!   gyroid.
//!
//! All fields are immutable once constructed and safe to evaluate from many
//! threads at once.
//!
//! ```
//! use tpmsrs::{Field, InterpolatedField, ShellField};
//!
//! let weights = [0.4, 0.0, 0.6, 0.0, 0.0, 0.0, 0.0, 0.0];
//! let blend = InterpolatedField::new(&weights)?;
//! let shell = Field::from(ShellField::new(blend, 0.5));
//! let inside = shell.evaluate(0.3, 0.1, -0.2)? < 0.0;
//! # let _ = inside;
//! # Ok::<(), tpmsrs::errors::FieldError>(())
//! ```
//!
//! # Features
//! - **parallel**: use rayon to spread batched evaluation across threads

#![forbid(unsafe_code)]
#![warn(clippy::all)]

pub mod catalog;
pub mod errors;
pub mod field;
pub mod float_types;
pub mod tpms;

pub use field::{
    Field, FourierField, InterpolatedField, LeafField, ShellField, SpatiallyVaryingField,
};
