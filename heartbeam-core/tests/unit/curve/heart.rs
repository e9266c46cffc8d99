use super::*;
use crate::foundation::error::HeartError;

fn expected_point(i: usize, n: usize) -> Point {
    let t = 2.0 * std::f64::consts::PI * (i as f64) / (n as f64);
    let x = 16.0 * t.sin().powi(3);
    let y = 13.0 * t.cos() - 5.0 * (2.0 * t).cos() - 2.0 * (3.0 * t).cos() - (4.0 * t).cos();
    Point::new(x, y)
}

#[test]
fn generate_zero_is_rejected() {
    assert!(matches!(
        HeartCurve::generate(0),
        Err(HeartError::Validation(_))
    ));
}

#[test]
fn generate_returns_exactly_n_points() {
    for n in [1, 2, 4, 7, 1000] {
        let curve = HeartCurve::generate(n).unwrap();
        assert_eq!(curve.len(), n);
        assert!(!curve.is_empty());
    }
}

#[test]
fn samples_satisfy_the_closed_form() {
    let n = 360;
    let curve = HeartCurve::generate(n).unwrap();
    for (i, p) in curve.points().iter().enumerate() {
        let e = expected_point(i, n);
        assert!((p.x - e.x).abs() < 1e-9, "x mismatch at sample {i}");
        assert!((p.y - e.y).abs() < 1e-9, "y mismatch at sample {i}");
    }
}

#[test]
fn generate_four_hits_the_quarter_turns() {
    let curve = HeartCurve::generate(4).unwrap();
    for i in 0..4 {
        let e = expected_point(i, 4);
        let p = curve.points()[i];
        assert!((p.x - e.x).abs() < 1e-12);
        assert!((p.y - e.y).abs() < 1e-12);
    }
    // t = 0 is exact: sin(0) = 0, cos(0) = 1.
    assert_eq!(curve.points()[0], Point::new(0.0, 5.0));
}

#[test]
fn generate_is_deterministic() {
    assert_eq!(
        HeartCurve::generate(100).unwrap(),
        HeartCurve::generate(100).unwrap()
    );
}

#[test]
fn marker_wraps_modulo_point_count() {
    let curve = HeartCurve::generate(12).unwrap();
    assert_eq!(curve.marker_point(FrameIndex(0)), curve.points()[0]);
    assert_eq!(curve.marker_point(FrameIndex(5)), curve.points()[5]);
    assert_eq!(curve.marker_point(FrameIndex(12)), curve.points()[0]);
    assert_eq!(curve.marker_point(FrameIndex(29)), curve.points()[5]);
}

#[test]
fn margined_bounds_add_three_units_per_side() {
    let curve = HeartCurve::generate(1000).unwrap();
    let tight = curve.bounds();
    let margined = curve.margined_bounds();
    assert!((margined.width() - (tight.width() + 2.0 * BOUNDS_MARGIN)).abs() < 1e-12);
    assert!((margined.height() - (tight.height() + 2.0 * BOUNDS_MARGIN)).abs() < 1e-12);

    // The sin^3 heart spans exactly [-16, 16] horizontally.
    assert!((tight.x0 + 16.0).abs() < 1e-6);
    assert!((tight.x1 - 16.0).abs() < 1e-6);
}

#[test]
fn one_point_curve_is_degenerate_but_valid() {
    let curve = HeartCurve::generate(1).unwrap();
    assert_eq!(curve.len(), 1);
    assert_eq!(curve.points()[0], Point::new(0.0, 5.0));
    assert_eq!(curve.marker_point(FrameIndex(41)), curve.points()[0]);
}

#[test]
fn from_points_rejects_empty() {
    assert!(matches!(
        HeartCurve::from_points(Vec::new()),
        Err(HeartError::Validation(_))
    ));
}
