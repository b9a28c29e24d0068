// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Utility functions over coefficient slices.
//!
//! All slices here are in descending order of degree (leading coefficient
//! first, constant term last), the same layout `Polynomial` stores.

use crate::coefficient::Coefficient;
use std::mem;

/// Adds two coefficient sequences aligned by degree.
///
/// The shorter sequence is padded with zeros on the high-degree side, so the
/// constant terms line up and the result has `max(lhs.len(), rhs.len())`
/// entries.
///
/// # Arguments
///
/// * `lhs` - Coefficients of the first operand.
/// * `rhs` - Coefficients of the second operand.
///
/// # Returns
///
/// The coefficient-wise sum.
pub fn add_aligned<T: Coefficient>(lhs: &[T], rhs: &[T]) -> Vec<T> {
    let max_length = std::cmp::max(lhs.len(), rhs.len());
    let mut result = vec![T::zero(); max_length];

    for (slot, coeff) in result[max_length - lhs.len()..].iter_mut().zip(lhs) {
        *slot = coeff.clone();
    }

    for (slot, coeff) in result[max_length - rhs.len()..].iter_mut().zip(rhs) {
        let acc = mem::replace(slot, T::zero());
        *slot = acc + coeff.clone();
    }

    result
}

/// Discrete convolution of two coefficient sequences.
///
/// `result[k]` is the sum of `lhs[i] * rhs[j]` over every `i + j == k`. For
/// non-empty inputs the result has `lhs.len() + rhs.len() - 1` entries; an
/// empty input yields an empty result.
///
/// # Arguments
///
/// * `lhs` - Coefficients of the first factor.
/// * `rhs` - Coefficients of the second factor.
///
/// # Returns
///
/// The coefficients of the product.
pub fn convolve<T: Coefficient>(lhs: &[T], rhs: &[T]) -> Vec<T> {
    if lhs.is_empty() || rhs.is_empty() {
        return Vec::new();
    }

    let product_len = lhs.len() + rhs.len() - 1;
    let mut product = vec![T::zero(); product_len];

    for (i, a) in lhs.iter().enumerate() {
        for (j, b) in rhs.iter().enumerate() {
            let acc = mem::replace(&mut product[i + j], T::zero());
            product[i + j] = acc + a.clone() * b.clone();
        }
    }

    product
}

/// Multiplies every coefficient by `scalar`.
pub fn scale<T: Coefficient>(coefficients: &[T], scalar: &T) -> Vec<T> {
    coefficients
        .iter()
        .map(|c| c.clone() * scalar.clone())
        .collect()
}

/// Flips the sign of every coefficient.
pub fn negated<T: Coefficient>(coefficients: &[T]) -> Vec<T> {
    coefficients.iter().map(|c| -c.clone()).collect()
}

/// Index of the first coefficient that is not a real number, if any.
pub fn first_ill_formed<T: Coefficient>(coefficients: &[T]) -> Option<usize> {
    coefficients.iter().position(|c| !c.is_well_formed())
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_bigint::BigInt;

    fn big(values: &[i64]) -> Vec<BigInt> {
        values.iter().map(|&v| BigInt::from(v)).collect()
    }

    #[test]
    fn test_add_aligned_pads_high_degree_side() {
        // (2x^2 + 3x + 4) + (5x + 6)
        let sum = add_aligned(&big(&[2, 3, 4]), &big(&[5, 6]));
        assert_eq!(sum, big(&[2, 8, 10]));

        let sum = add_aligned(&big(&[5, 6]), &big(&[2, 3, 4]));
        assert_eq!(sum, big(&[2, 8, 10]));
    }

    #[test]
    fn test_add_aligned_keeps_zero_leading_terms() {
        let sum = add_aligned(&big(&[0, 3]), &big(&[4]));
        assert_eq!(sum, big(&[0, 7]));
    }

    #[test]
    fn test_add_aligned_does_not_overflow() {
        let sum = add_aligned(&big(&[i64::MAX]), &big(&[1]));
        assert_eq!(sum, vec![BigInt::from(i64::MAX) + 1]);
    }

    #[test]
    fn test_convolve() {
        // (x + 5)(5x + 4) = 5x^2 + 29x + 20
        assert_eq!(convolve(&big(&[1, 5]), &big(&[5, 4])), big(&[5, 29, 20]));
        // (x + 2)(x + 3) = x^2 + 5x + 6
        assert_eq!(convolve(&big(&[1, 2]), &big(&[1, 3])), big(&[1, 5, 6]));
    }

    #[test]
    fn test_convolve_lengths() {
        assert_eq!(convolve(&big(&[1, 2, 3]), &big(&[4])).len(), 3);
        assert_eq!(
            convolve(&big(&[0, 0]), &big(&[1, 1, 1])),
            big(&[0, 0, 0, 0])
        );
        assert!(convolve(&[], &big(&[1, 2])).is_empty());
    }

    #[test]
    fn test_scale_and_negate() {
        assert_eq!(
            scale(&big(&[1, -2, 3]), &BigInt::from(-1)),
            negated(&big(&[1, -2, 3]))
        );
        assert_eq!(scale(&[1.5, 2.0], &2.0), vec![3.0, 4.0]);
        assert_eq!(negated(&big(&[i64::MIN])), vec![-BigInt::from(i64::MIN)]);
    }

    #[test]
    fn test_first_ill_formed() {
        assert_eq!(first_ill_formed(&[1.0, 2.0]), None);
        assert_eq!(first_ill_formed(&[1.0, f64::NAN, f64::INFINITY]), Some(1));
    }
}
