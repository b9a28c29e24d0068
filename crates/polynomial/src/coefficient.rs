// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Numeric types usable as polynomial coefficients.

use num_bigint::BigInt;
use num_traits::Num;
use std::fmt;
use std::ops::Neg;

/// A numeric value that can serve as a polynomial coefficient.
///
/// `BigInt` gives exact arithmetic that never overflows. Floating-point types
/// are accepted as real coefficients, with the usual caveat that addition and
/// multiplication of floats are only approximately associative and may round
/// to an infinity. Fixed-width integers do not implement this trait: their
/// `+` and `*` can overflow.
pub trait Coefficient: Clone + fmt::Debug + Num + Neg<Output = Self> {
    /// Returns `false` for values that do not denote a real number (NaN, infinities).
    fn is_well_formed(&self) -> bool {
        true
    }
}

impl Coefficient for BigInt {}

macro_rules! impl_float_coefficient {
    ($($t:ty),*) => {
        $(
            impl Coefficient for $t {
                fn is_well_formed(&self) -> bool {
                    self.is_finite()
                }
            }
        )*
    };
}

impl_float_coefficient!(f32, f64);
