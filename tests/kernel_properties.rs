//! Property-based tests for the curve evaluators and the matrix kernel.
//!
//! Run with: cargo test --test kernel_properties

#![allow(clippy::unwrap_used)]

use approx::{abs_diff_eq, assert_abs_diff_eq};
use curvelis::geometry::{cubic_curve, evaluate_elliptical_arc, evaluate_polynomial_curve, quadratic_curve};
use curvelis::math::{Matrix4, Point2, Vector2, Vector3, Vector4};
use curvelis::tessellation::{PathCommand, TessellatePath, TessellationParams};
use proptest::prelude::*;

fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into());
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_test_writer()
        .try_init();
}

// =============================================================================
// Strategies
// =============================================================================

fn arb_point() -> impl Strategy<Value = Point2<f64>> {
    prop::array::uniform2(-10.0..10.0f64).prop_map(Point2::from_array)
}

/// Diagonally dominant, hence comfortably invertible.
fn arb_invertible() -> impl Strategy<Value = Matrix4<f64>> {
    prop::array::uniform4(prop::array::uniform4(-1.0..1.0f64)).prop_map(|mut rows| {
        for (i, row) in rows.iter_mut().enumerate() {
            row[i] += if row[i] < 0.0 { -5.0 } else { 5.0 };
        }
        Matrix4::from_rows(rows)
    })
}

fn arb_matrix_f32() -> impl Strategy<Value = Matrix4<f32>> {
    prop::array::uniform4(prop::array::uniform4(-10.0..10.0f32)).prop_map(Matrix4::from_rows)
}

// =============================================================================
// Curves
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn quadratic_matches_generic(p0 in arb_point(), p1 in arb_point(), p2 in arb_point(), t in 0.0..=1.0f64) {
        let generic = evaluate_polynomial_curve(&[p0, p1, p2], t).unwrap();
        prop_assert_eq!(quadratic_curve(p0, p1, p2, t).to_array(), generic.to_array());
    }

    #[test]
    fn cubic_matches_generic(
        p0 in arb_point(),
        p1 in arb_point(),
        p2 in arb_point(),
        p3 in arb_point(),
        t in 0.0..=1.0f64,
    ) {
        let generic = evaluate_polynomial_curve(&[p0, p1, p2, p3], t).unwrap();
        prop_assert_eq!(cubic_curve(p0, p1, p2, p3, t).to_array(), generic.to_array());
    }

    #[test]
    fn polynomial_endpoints_are_exact(points in prop::collection::vec(arb_point(), 2..8)) {
        let first = evaluate_polynomial_curve(&points, 0.0).unwrap();
        let last = evaluate_polynomial_curve(&points, 1.0).unwrap();
        prop_assert_eq!(first.to_array(), points[0].to_array());
        prop_assert_eq!(last.to_array(), points[points.len() - 1].to_array());
    }

    #[test]
    fn arc_endpoints(
        p0 in arb_point(),
        p1 in arb_point(),
        rx in 0.1..5.0f64,
        ry in 0.1..5.0f64,
        rotation in -3.0..3.0f64,
        large_arc in any::<bool>(),
        sweep in any::<bool>(),
    ) {
        prop_assume!(p0.distance(p1) > 1e-2);
        let radii = Vector2::new(rx, ry);
        let start = evaluate_elliptical_arc(p0, p1, radii, large_arc, sweep, rotation, 0.0).unwrap();
        let end = evaluate_elliptical_arc(p0, p1, radii, large_arc, sweep, rotation, 1.0).unwrap();
        prop_assert!(abs_diff_eq!(start, p0, epsilon = 1e-6), "{} != {}", start, p0);
        prop_assert!(abs_diff_eq!(end, p1, epsilon = 1e-6), "{} != {}", end, p1);
    }
}

// =============================================================================
// Vectors and matrices
// =============================================================================

proptest! {
    #[test]
    fn normalization_gives_unit_size(c in prop::array::uniform3(-100.0..100.0f64)) {
        let v = Vector3::from_array(c);
        prop_assume!(v.size() > 1e-3);
        let n = v.normalized().unwrap();
        prop_assert!((n.size() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn inverse_round_trip(m in arb_invertible()) {
        let inv = m.inverse().unwrap();
        prop_assert!(abs_diff_eq!(m * inv, Matrix4::identity(), epsilon = 1e-9));
        prop_assert!(abs_diff_eq!(inv.inverse().unwrap(), m, epsilon = 1e-8));
    }

    #[test]
    fn simd_and_portable_products_agree(a in arb_matrix_f32(), b in arb_matrix_f32()) {
        prop_assert!(abs_diff_eq!(a * b, a.mul_portable(&b), epsilon = 1e-3));
    }
}

// =============================================================================
// Scenarios
// =============================================================================

#[test]
fn linear_curve_midpoint() {
    let p = evaluate_polynomial_curve(&[Point2::new(0.0, 0.0), Point2::new(1.0, 1.0)], 0.5).unwrap();
    assert_abs_diff_eq!(p, Point2::new(0.5, 0.5));
}

#[test]
fn diagonal_inverse() {
    let m = Matrix4::from_diagonal(Vector4::splat(2.0));
    let expected = Matrix4::from_diagonal(Vector4::splat(0.5));
    assert_abs_diff_eq!(m.inverse().unwrap(), expected, epsilon = 1e-12);
}

#[test]
fn singular_matrix_is_rejected() {
    let m = Matrix4::from_rows([
        [1.0, 2.0, 3.0, 4.0],
        [2.0, 4.0, 6.0, 8.0],
        [0.0, 1.0, 0.0, 1.0],
        [1.0, 0.0, 1.0, 0.0],
    ]);
    assert!(m.inverse().is_err());
}

#[test]
fn flattened_path_ends_where_commands_end() {
    init_tracing();
    let commands = vec![
        PathCommand::MoveTo(Point2::new(0.0, 0.0)),
        PathCommand::QuadTo {
            control: Point2::new(1.0, 2.0),
            to: Point2::new(2.0, 0.0),
        },
        PathCommand::ArcTo {
            radii: Vector2::new(1.0, 1.0),
            x_axis_rotation: 0.0,
            large_arc: false,
            sweep: false,
            to: Point2::new(4.0, 0.0),
        },
        PathCommand::MoveTo(Point2::new(10.0, 10.0)),
        PathCommand::LineTo(Point2::new(11.0, 10.0)),
    ];
    let polylines = TessellatePath::new(commands, TessellationParams::default())
        .execute()
        .unwrap();
    assert_eq!(polylines.len(), 2);
    assert_eq!(polylines[0].points.len(), 1 + 10 + 10);
    assert_abs_diff_eq!(polylines[0].points[20], Point2::new(4.0, 0.0), epsilon = 1e-9);
    assert_eq!(polylines[1].points.len(), 2);
}
