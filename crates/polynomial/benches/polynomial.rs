// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use num_bigint::BigInt;
use symbolic_polynomial::Polynomial;

fn create_test_polynomials(degree: usize) -> (Polynomial<f64>, Polynomial<f64>) {
    let coeffs1 = (0..=degree).map(|i| i as f64 + 1.0).collect();
    let coeffs2 = (0..=degree).map(|i| (i + 1) as f64 * 0.5).collect();

    (
        Polynomial::new(coeffs1).expect("non-empty coefficients"),
        Polynomial::new(coeffs2).expect("non-empty coefficients"),
    )
}

fn create_bigint_polynomial(degree: usize) -> Polynomial<BigInt> {
    let coeffs = (0..=degree)
        .map(|i| BigInt::from(i as i64 + 1) << 64)
        .collect();
    Polynomial::new(coeffs).expect("non-empty coefficients")
}

fn benchmark_polynomial_addition(c: &mut Criterion) {
    let mut group = c.benchmark_group("polynomial_addition");

    for degree in [10, 50, 100, 500] {
        let (poly1, poly2) = create_test_polynomials(degree);

        group.bench_function(format!("degree_{}", degree), |b| {
            b.iter(|| black_box(poly1.add(&poly2)))
        });
    }

    group.finish();
}

fn benchmark_polynomial_multiplication(c: &mut Criterion) {
    let mut group = c.benchmark_group("polynomial_multiplication");

    for degree in [5, 10, 20, 50] {
        let (poly1, poly2) = create_test_polynomials(degree);

        group.bench_function(format!("degree_{}", degree), |b| {
            b.iter(|| black_box(poly1.multiply(&poly2)))
        });
    }

    for degree in [5, 20] {
        let poly = create_bigint_polynomial(degree);

        group.bench_function(format!("bigint_degree_{}", degree), |b| {
            b.iter(|| black_box(poly.multiply(&poly)))
        });
    }

    group.finish();
}

fn benchmark_polynomial_negation(c: &mut Criterion) {
    let mut group = c.benchmark_group("polynomial_negation");

    for degree in [10, 100, 500] {
        let (poly1, _) = create_test_polynomials(degree);

        group.bench_function(format!("degree_{}", degree), |b| {
            b.iter(|| black_box(poly1.negate()))
        });
    }

    group.finish();
}

fn benchmark_polynomial_evaluation(c: &mut Criterion) {
    let mut group = c.benchmark_group("polynomial_evaluation");

    for degree in [10, 50, 100, 500] {
        let (poly1, _) = create_test_polynomials(degree);
        let x = 0.75;

        group.bench_function(format!("degree_{}", degree), |b| {
            b.iter(|| black_box(poly1.evaluate(&x)))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_polynomial_addition,
    benchmark_polynomial_multiplication,
    benchmark_polynomial_negation,
    benchmark_polynomial_evaluation
);
criterion_main!(benches);
