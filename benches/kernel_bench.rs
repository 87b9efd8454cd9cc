//! Benchmarks for the 4x4 product paths and curve evaluation.
//!
//! Run with: cargo bench --bench kernel_bench

#![allow(missing_docs, clippy::unwrap_used)]

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use curvelis::geometry::{cubic_curve, evaluate_elliptical_arc, evaluate_polynomial_curve};
use curvelis::math::{Matrix4, Point2, Vector2};

fn sample_matrix(offset: f32) -> Matrix4<f32> {
    Matrix4::from_rows([
        [1.0 + offset, 2.0, 3.0, 4.0],
        [0.5, -1.0 + offset, 0.0, 2.0],
        [3.0, 0.0, 1.0 + offset, -2.0],
        [0.0, 1.5, 2.5, 1.0 + offset],
    ])
}

fn bench_matrix_product(c: &mut Criterion) {
    let a = sample_matrix(0.25);
    let b = sample_matrix(-0.75);
    let mut group = c.benchmark_group("matrix4_f32_product");
    group.bench_function("operator", |bench| {
        bench.iter(|| black_box(black_box(a) * black_box(b)));
    });
    group.bench_function("portable", |bench| {
        bench.iter(|| black_box(black_box(a).mul_portable(&black_box(b))));
    });
    group.finish();
}

fn bench_curves(c: &mut Criterion) {
    let points = [
        Point2::new(0.0, 0.0),
        Point2::new(1.0, 4.0),
        Point2::new(3.0, -2.0),
        Point2::new(4.0, 1.0),
    ];
    let mut group = c.benchmark_group("curve_evaluation");
    group.bench_function("cubic_stack", |bench| {
        bench.iter(|| cubic_curve(points[0], points[1], points[2], points[3], black_box(0.37)));
    });
    group.bench_function("cubic_generic", |bench| {
        bench.iter(|| evaluate_polynomial_curve(&points, black_box(0.37)).unwrap());
    });
    group.bench_function("elliptical_arc", |bench| {
        bench.iter(|| {
            evaluate_elliptical_arc(
                points[0],
                points[3],
                Vector2::new(3.0, 2.0),
                false,
                true,
                0.4,
                black_box(0.37),
            )
            .unwrap()
        });
    });
    group.finish();
}

criterion_group!(benches, bench_matrix_product, bench_curves);
criterion_main!(benches);
