mod support;

use support::{approx_eq, central_difference, sample_grid};
use tpmsrs::SpatiallyVaryingField;
use tpmsrs::catalog::natural_domain;

#[test]
fn blend_is_continuous_across_octant_planes() {
    let field = SpatiallyVaryingField::new();
    let eps = 1e-9;

    // Approaching a coordinate plane from either side converges to the
    // same limit; the gate sits at exactly 0.5 on the plane.
    for &(_, y, z) in &sample_grid() {
        let below = field.evaluate(-eps, y, z);
        let at = field.evaluate(0.0, y, z);
        let above = field.evaluate(eps, y, z);
        assert!(approx_eq(below, at, 1e-6));
        assert!(approx_eq(above, at, 1e-6));
    }
}

#[test]
fn gradient_matches_central_differences() {
    let field = SpatiallyVaryingField::new();
    for &(x, y, z) in &sample_grid() {
        let analytic = field.gradient(x, y, z);
        let numeric = central_difference(|x, y, z| field.evaluate(x, y, z), x, y, z, 1e-5);
        for axis in 0..3 {
            assert!(
                (analytic[axis] - numeric[axis]).abs() < 1e-5,
                "gradient mismatch at ({x}, {y}, {z}) axis {axis}: {} vs {}",
                analytic[axis],
                numeric[axis],
            );
        }
    }
}

#[test]
fn deep_octant_interior_is_dominated_by_its_field() {
    // Far from every coordinate plane the other octants' gates vanish, so
    // the blend approaches the octant's own catalog field.
    let field = SpatiallyVaryingField::new();
    let catalog = tpmsrs::catalog::GRADIENT_CATALOG;

    // Octant index 0b111 has all-positive signs.
    let (x, y, z) = (20.0, 20.3, 19.7);
    let expected = (catalog[7].eval)(x, y, z);
    assert!(approx_eq(field.evaluate(x, y, z), expected, 1e-6));

    // Octant index 0b000 has all-negative signs.
    let (x, y, z) = (-20.0, -20.3, -19.7);
    let expected = (catalog[0].eval)(x, y, z);
    assert!(approx_eq(field.evaluate(x, y, z), expected, 1e-6));
}

#[test]
fn domain_is_four_periods() {
    let field = SpatiallyVaryingField::default();
    assert_eq!(field.domain(), 4.0 * natural_domain());
}
