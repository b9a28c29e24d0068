//! Polynomial arithmetic implementation.

use crate::coefficient::Coefficient;
use crate::errors::PolynomialError;
use crate::utils::{add_aligned, convolve, first_ill_formed, negated, scale};
use std::fmt;
use tracing::{debug, trace};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A single-variable polynomial represented by its coefficients in descending order of degree.
///
/// The polynomial `a_n * x^n + a_{n-1} * x^{n-1} + ... + a_1 * x + a_0` is stored as
/// `[a_n, a_{n-1}, ..., a_1, a_0]`. The coefficient vector is never empty and is never
/// trimmed by arithmetic: its length alone determines the degree, so `[0, 3]` has
/// degree 1 even though its leading coefficient is zero.
///
/// Values are immutable. Every operation borrows its operands and returns a new
/// polynomial, so a `Polynomial` can be shared freely across threads.
///
/// Constructors reject NaN and infinite coefficients. Floating-point arithmetic can
/// still round a finite result to an infinity; such a value stays usable but will
/// not pass `Polynomial::new` or deserialization again. Use
/// [`Polynomial::is_well_formed`] to check a computed result.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(
        try_from = "Vec<T>",
        into = "Vec<T>",
        bound(
            serialize = "T: Coefficient + Serialize",
            deserialize = "T: Coefficient + Deserialize<'de>"
        )
    )
)]
pub struct Polynomial<T = f64> {
    /// Coefficients in descending order (highest degree first). Never empty.
    coefficients: Vec<T>,
}

impl<T: Coefficient> Polynomial<T> {
    /// Creates a new polynomial from a vector of coefficients.
    ///
    /// # Arguments
    ///
    /// * `coefficients` - Vector of coefficients in descending order of degree.
    ///
    /// # Errors
    ///
    /// Returns `PolynomialError::InvalidArgument` if `coefficients` is empty or
    /// holds a value that is not a real number (NaN or an infinity).
    pub fn new(coefficients: Vec<T>) -> Result<Self, PolynomialError> {
        if coefficients.is_empty() {
            debug!("Rejecting empty coefficient sequence");
            return Err(PolynomialError::invalid_argument(
                "coefficient sequence must not be empty",
            ));
        }

        if let Some(index) = first_ill_formed(&coefficients) {
            debug!(index, len = coefficients.len(), "Rejecting non-finite coefficient");
            return Err(PolynomialError::invalid_argument(format!(
                "coefficient at index {index} is not a finite number"
            )));
        }

        Ok(Self { coefficients })
    }

    /// Creates a polynomial from coefficients in ascending order format.
    ///
    /// This method converts from ascending order coefficient ordering (constant term first)
    /// to this library's ordering (highest degree first).
    ///
    /// # Errors
    ///
    /// Same as [`Polynomial::new`].
    pub fn from_ascending_coefficients(
        ascending_coefficients: Vec<T>,
    ) -> Result<Self, PolynomialError> {
        let mut coefficients = ascending_coefficients;
        coefficients.reverse();
        Self::new(coefficients)
    }

    /// Converts the polynomial to ascending order coefficient format.
    pub fn to_ascending_coefficients(&self) -> Vec<T> {
        self.coefficients.iter().rev().cloned().collect()
    }

    /// Returns the canonical zero polynomial `[0]`.
    pub fn zero() -> Self {
        Self {
            coefficients: vec![T::zero()],
        }
    }

    /// Creates a constant polynomial.
    ///
    /// # Errors
    ///
    /// Returns `PolynomialError::InvalidArgument` if `constant` is not a finite number.
    pub fn constant(constant: T) -> Result<Self, PolynomialError> {
        Self::new(vec![constant])
    }

    /// Returns the coefficients of the polynomial, highest degree first.
    pub fn coefficients(&self) -> &[T] {
        &self.coefficients
    }

    /// Returns the degree of the polynomial.
    ///
    /// The degree is structural: the number of stored coefficients minus one.
    /// By convention the zero polynomial `[0]` has degree 0 rather than being
    /// left undefined; mathematically its degree is often taken as -∞.
    pub fn degree(&self) -> usize {
        self.coefficients.len() - 1
    }

    /// Checks if every coefficient is zero.
    pub fn is_zero(&self) -> bool {
        self.coefficients.iter().all(|c| c.is_zero())
    }

    /// Checks that every coefficient is a finite number, i.e. that the coefficients
    /// would be accepted by [`Polynomial::new`].
    pub fn is_well_formed(&self) -> bool {
        first_ill_formed(&self.coefficients).is_none()
    }

    fn is_canonical_zero(&self) -> bool {
        self.coefficients.len() == 1 && self.coefficients[0].is_zero()
    }

    /// Returns the leading (first stored) coefficient, which may be zero.
    pub fn leading_coefficient(&self) -> &T {
        &self.coefficients[0]
    }

    /// Removes leading zero coefficients from the polynomial.
    ///
    /// At least one coefficient is always kept, so an all-zero polynomial
    /// becomes `[0]`. Arithmetic never does this on its own.
    pub fn trim_leading_zeros(mut self) -> Self {
        let first_nonzero = self
            .coefficients
            .iter()
            .position(|c| !c.is_zero())
            .unwrap_or(self.coefficients.len() - 1);
        self.coefficients.drain(..first_nonzero);
        self
    }

    /// Adds two polynomials together.
    ///
    /// The coefficient sequences are aligned by degree: the shorter one is padded
    /// with zeros on the high-degree side before the term-by-term sum. The result
    /// has `max(self.degree(), other.degree())` as its degree.
    /// Float coefficients that exceed the type's range become infinite.
    ///
    /// # Arguments
    ///
    /// * `other` - A reference to the polynomial to add to `self`.
    ///
    /// # Returns
    ///
    /// A new polynomial containing the sum of the two polynomials.
    pub fn add(&self, other: &Self) -> Self {
        Self {
            coefficients: add_aligned(&self.coefficients, &other.coefficients),
        }
    }

    /// Subtracts one polynomial from another.
    ///
    /// # Arguments
    ///
    /// * `other` - A reference to the polynomial to subtract from `self`.
    ///
    /// # Returns
    ///
    /// A new polynomial containing the difference.
    pub fn subtract(&self, other: &Self) -> Self {
        self.add(&other.negate())
    }

    /// Negates all coefficients of the polynomial.
    ///
    /// The result always equals `self.multiply_scalar(&-T::one())`. Negation never
    /// overflows, so a well-formed polynomial stays well-formed.
    pub fn negate(&self) -> Self {
        Self {
            coefficients: negated(&self.coefficients),
        }
    }

    /// Multiplies two polynomials by discrete convolution of their coefficients.
    ///
    /// For operands of degree `m` and `n` the product has degree `m + n`, except
    /// when either operand is the canonical zero polynomial `[0]`: the product
    /// then collapses to `[0]` instead of following the degree-sum rule.
    ///
    /// With floating-point coefficients the result is associative only up to
    /// rounding and may overflow to an infinity.
    ///
    /// # Arguments
    ///
    /// * `other` - A reference to the polynomial to multiply with `self`.
    ///
    /// # Returns
    ///
    /// A new polynomial containing the product.
    pub fn multiply(&self, other: &Self) -> Self {
        if self.is_canonical_zero() || other.is_canonical_zero() {
            trace!("Multiplication by the zero polynomial collapses to [0]");
            return Self::zero();
        }

        trace!(
            lhs_degree = self.degree(),
            rhs_degree = other.degree(),
            "Convolving polynomials"
        );
        Self {
            coefficients: convolve(&self.coefficients, &other.coefficients),
        }
    }

    /// Multiplies each coefficient of the polynomial by a scalar.
    ///
    /// Equivalent to `self.multiply(&Polynomial::constant(scalar)?)`: a zero scalar
    /// collapses the result to `[0]`, any other scalar preserves the degree.
    ///
    /// # Arguments
    ///
    /// * `scalar` - The scalar to multiply with each coefficient.
    ///
    /// # Errors
    ///
    /// Returns `PolynomialError::InvalidArgument` if `scalar` is not a finite number.
    pub fn multiply_scalar(&self, scalar: &T) -> Result<Self, PolynomialError> {
        if !scalar.is_well_formed() {
            debug!("Rejecting non-finite scalar");
            return Err(PolynomialError::invalid_argument(
                "scalar is not a finite number",
            ));
        }

        if scalar.is_zero() {
            trace!("Multiplication by a zero scalar collapses to [0]");
            return Ok(Self::zero());
        }

        Ok(Self {
            coefficients: scale(&self.coefficients, scalar),
        })
    }

    /// Evaluates the polynomial at a given point using Horner's method.
    ///
    /// # Arguments
    ///
    /// * `x` - The point at which to evaluate the polynomial.
    pub fn evaluate(&self, x: &T) -> T {
        let mut coefficients = self.coefficients.iter();
        let mut result = match coefficients.next() {
            Some(leading) => leading.clone(),
            None => return T::zero(),
        };
        for coeff in coefficients {
            result = result * x.clone() + coeff.clone();
        }
        result
    }
}

impl<T: Coefficient> TryFrom<Vec<T>> for Polynomial<T> {
    type Error = PolynomialError;

    fn try_from(coefficients: Vec<T>) -> Result<Self, Self::Error> {
        Self::new(coefficients)
    }
}

impl<T> From<Polynomial<T>> for Vec<T> {
    fn from(polynomial: Polynomial<T>) -> Self {
        polynomial.coefficients
    }
}

impl<T: Coefficient + fmt::Display + PartialOrd> fmt::Display for Polynomial<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (i, coeff) in self.coefficients.iter().enumerate() {
            let degree = self.coefficients.len() - 1 - i;

            if coeff.is_zero() {
                continue;
            }

            let negative = *coeff < T::zero();
            if first {
                if negative {
                    write!(f, "-")?;
                }
            } else if negative {
                write!(f, " - ")?;
            } else {
                write!(f, " + ")?;
            }
            first = false;

            let abs_coeff = if negative { -coeff.clone() } else { coeff.clone() };

            if degree == 0 || !abs_coeff.is_one() {
                write!(f, "{abs_coeff}")?;
            }

            if degree > 0 {
                write!(f, "x")?;
                if degree > 1 {
                    write!(f, "^{degree}")?;
                }
            }
        }

        if first {
            write!(f, "0")?;
        }

        Ok(())
    }
}
