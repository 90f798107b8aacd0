mod support;

use support::approx_eq;
use tpmsrs::catalog::{CATALOG, natural_domain};
use tpmsrs::errors::FieldError;
use tpmsrs::{Field, FourierField, InterpolatedField};

#[test]
fn leaf_field_evaluates_its_formula() {
    let gyroid = CATALOG[0].field();
    assert!(approx_eq(gyroid.evaluate(0.0, 0.0, 0.0), 0.0, 1e-12));
    assert_eq!(gyroid.domain(), natural_domain());

    let g = gyroid.gradient(0.3, -0.8, 1.4).unwrap();
    assert_eq!(g.len(), 3);
}

#[test]
fn evaluation_only_leaf_has_no_gradient() {
    let bcc = CATALOG
        .iter()
        .find(|entry| entry.name == "bcc")
        .unwrap()
        .field();
    assert!(bcc.evaluate(1.0, 2.0, 3.0).is_finite());
    assert_eq!(
        bcc.gradient(1.0, 2.0, 3.0),
        Err(FieldError::GradientNotImplemented)
    );
}

#[test]
fn dispatch_matches_inherent_methods() {
    let field = Field::from(CATALOG[2].field());
    let (x, y, z) = (0.4, -1.1, 2.6);
    assert_eq!(
        field.evaluate(x, y, z).unwrap(),
        CATALOG[2].field().evaluate(x, y, z)
    );
    assert_eq!(field.domain(), natural_domain());
}

#[test]
fn batch_evaluation_is_elementwise() {
    let field = Field::from(FourierField::new());
    let xs = [0.0, 0.5, -1.2, 3.3];
    let ys = [0.1, -0.4, 2.2, 0.0];
    let zs = [1.0, 0.0, -0.6, 0.9];

    let batch = field.evaluate_batch(&xs, &ys, &zs).unwrap();
    assert_eq!(batch.len(), xs.len());
    for i in 0..xs.len() {
        let pointwise = field.evaluate(xs[i], ys[i], zs[i]).unwrap();
        assert_eq!(batch[i], pointwise);
    }
}

#[test]
fn batch_evaluation_rejects_mismatched_lengths() {
    let field = Field::from(CATALOG[0].field());
    let result = field.evaluate_batch(&[0.0, 1.0], &[0.0], &[0.0, 1.0]);
    assert_eq!(
        result,
        Err(FieldError::BatchLengthMismatch { x: 2, y: 1, z: 2 })
    );
}

#[test]
fn batch_evaluation_of_empty_slices() {
    let field = Field::from(CATALOG[0].field());
    assert_eq!(field.evaluate_batch(&[], &[], &[]).unwrap(), Vec::<f64>::new());
}

#[test]
fn composed_fields_convert_into_the_dispatch_enum() {
    let weights = [1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0];
    let field = Field::from(InterpolatedField::new(&weights).unwrap());
    let value = field.evaluate(0.2, 0.3, 0.4).unwrap();
    assert!(approx_eq(value, (CATALOG[0].eval)(0.2, 0.3, 0.4), 1e-14));
}
