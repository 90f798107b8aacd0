//! Closed-form TPMS formulas.
//!
//! Each function evaluates one documented minimal-surface identity at a
//! point; the zero level set is the surface. All formulas are pure,
//! deterministic, and periodic: they stay evaluable arbitrarily far outside
//! the natural (2π, 2π, 2π) period recorded in [`crate::catalog`].
//!
//! Eight of the formulas have hand-derived analytic gradients in
//! [`gradient`]; the rest are evaluation-only.

pub mod gradient;

use crate::float_types::Real;

/// Schoen Gyroid:  `sin x cos y + sin y cos z + sin z cos x`
pub fn schoen_gyroid(x: Real, y: Real, z: Real) -> Real {
    x.sin() * y.cos() + y.sin() * z.cos() + z.sin() * x.cos()
}

/// Schwarz Diamond:  `cos x cos y cos z − sin x sin y sin z`
pub fn schwarz_diamond(x: Real, y: Real, z: Real) -> Real {
    x.cos() * y.cos() * z.cos() - x.sin() * y.sin() * z.sin()
}

/// Schwarz Primitive:  `cos x + cos y + cos z`
pub fn schwarz_primitive(x: Real, y: Real, z: Real) -> Real {
    x.cos() + y.cos() + z.cos()
}

/// Schoen I-WP:  `2(cos x cos y + cos y cos z + cos z cos x) − (cos 2x + cos 2y + cos 2z)`
pub fn schoen_iwp(x: Real, y: Real, z: Real) -> Real {
    let (cx, cy, cz) = (x.cos(), y.cos(), z.cos());
    2.0 * (cx * cy + cy * cz + cz * cx) - ((2.0 * x).cos() + (2.0 * y).cos() + (2.0 * z).cos())
}

/// Neovius:  `3(cos x + cos y + cos z) + 4 cos x cos y cos z`
pub fn neovius(x: Real, y: Real, z: Real) -> Real {
    let (cx, cy, cz) = (x.cos(), y.cos(), z.cos());
    3.0 * (cx + cy + cz) + 4.0 * cx * cy * cz
}

/// Fischer–Koch S:  `cos 2x sin y cos z + cos x cos 2y sin z + sin x cos y cos 2z`
pub fn fischer_koch_s(x: Real, y: Real, z: Real) -> Real {
    (2.0 * x).cos() * y.sin() * z.cos()
        + x.cos() * (2.0 * y).cos() * z.sin()
        + x.sin() * y.cos() * (2.0 * z).cos()
}

/// Schoen F-RD:  `4 cos x cos y cos z − (cos 2x cos 2y + cos 2y cos 2z + cos 2z cos 2x)`
pub fn schoen_frd(x: Real, y: Real, z: Real) -> Real {
    let (c2x, c2y, c2z) = ((2.0 * x).cos(), (2.0 * y).cos(), (2.0 * z).cos());
    4.0 * x.cos() * y.cos() * z.cos() - (c2x * c2y + c2y * c2z + c2z * c2x)
}

/// PMY:  `2 cos x cos y cos z + sin 2x sin y + sin x sin 2z + sin 2y sin z`
pub fn pmy(x: Real, y: Real, z: Real) -> Real {
    2.0 * x.cos() * y.cos() * z.cos()
        + (2.0 * x).sin() * y.sin()
        + x.sin() * (2.0 * z).sin()
        + (2.0 * y).sin() * z.sin()
}

/// Double Gyroid:
/// `2.75(sin 2x sin z cos y + sin 2y sin x cos z + sin 2z sin y cos x)
///  − (cos 2x cos 2y + cos 2y cos 2z + cos 2z cos 2x)`
pub fn double_schoen_gyroid(x: Real, y: Real, z: Real) -> Real {
    let (c2x, c2y, c2z) = ((2.0 * x).cos(), (2.0 * y).cos(), (2.0 * z).cos());
    2.75
        * ((2.0 * x).sin() * z.sin() * y.cos()
            + (2.0 * y).sin() * x.sin() * z.cos()
            + (2.0 * z).sin() * y.sin() * x.cos())
        - (c2x * c2y + c2y * c2z + c2z * c2x)
}

/// Double Diamond:
/// `sin 2x sin 2y + sin 2y sin 2z + sin 2z sin 2x + cos 2x cos 2y cos 2z`
pub fn double_schwarz_diamond(x: Real, y: Real, z: Real) -> Real {
    let (s2x, c2x) = (2.0 * x).sin_cos();
    let (s2y, c2y) = (2.0 * y).sin_cos();
    let (s2z, c2z) = (2.0 * z).sin_cos();
    s2x * s2y + s2y * s2z + s2z * s2x + c2x * c2y * c2z
}

/// Double Primitive:
/// `sin x sin y sin z + sin x cos y cos z + cos x sin y cos z + cos x cos y sin z`
pub fn double_schwarz_primitive(x: Real, y: Real, z: Real) -> Real {
    let (sx, cx) = x.sin_cos();
    let (sy, cy) = y.sin_cos();
    let (sz, cz) = z.sin_cos();
    sx * sy * sz + sx * cy * cz + cx * sy * cz + cx * cy * sz
}

/// Lipnoid:
/// `sin 2x cos y sin z + sin 2y cos z sin x + sin 2z cos x sin y
///  + cos 2x cos 2y + cos 2y cos 2z + cos 2z cos 2x`
pub fn lipnoid(x: Real, y: Real, z: Real) -> Real {
    let (c2x, c2y, c2z) = ((2.0 * x).cos(), (2.0 * y).cos(), (2.0 * z).cos());
    (2.0 * x).sin() * y.cos() * z.sin()
        + (2.0 * y).sin() * z.cos() * x.sin()
        + (2.0 * z).sin() * x.cos() * y.sin()
        + c2x * c2y
        + c2y * c2z
        + c2z * c2x
}

/// Tubular G AB:
/// `20(cos x sin y + cos y sin z + cos z sin x)
///  − 0.5(cos 2x cos 2y + cos 2y cos 2z + cos 2z cos 2x) − 4`
pub fn tubular_g_ab(x: Real, y: Real, z: Real) -> Real {
    let (c2x, c2y, c2z) = ((2.0 * x).cos(), (2.0 * y).cos(), (2.0 * z).cos());
    20.0 * (x.cos() * y.sin() + y.cos() * z.sin() + z.cos() * x.sin())
        - 0.5 * (c2x * c2y + c2y * c2z + c2z * c2x)
        - 4.0
}

/// Tubular G C:
/// `−10(cos x sin y + cos y sin z + cos z sin x)
///  + 2(cos 2x cos 2y + cos 2y cos 2z + cos 2z cos 2x) + 12`
pub fn tubular_g_c(x: Real, y: Real, z: Real) -> Real {
    let (c2x, c2y, c2z) = ((2.0 * x).cos(), (2.0 * y).cos(), (2.0 * z).cos());
    -10.0 * (x.cos() * y.sin() + y.cos() * z.sin() + z.cos() * x.sin())
        + 2.0 * (c2x * c2y + c2y * c2z + c2z * c2x)
        + 12.0
}

/// BCC:
/// `cos x + cos y + cos z − 2(cos x/2 cos y/2 + cos y/2 cos z/2 + cos z/2 cos x/2)`
pub fn bcc(x: Real, y: Real, z: Real) -> Real {
    let (hx, hy, hz) = ((x / 2.0).cos(), (y / 2.0).cos(), (z / 2.0).cos());
    x.cos() + y.cos() + z.cos() - 2.0 * (hx * hy + hy * hz + hz * hx)
}
