// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! # Symbolic Polynomial Library
//!
//! Exact single-variable polynomial algebra over real-valued coefficients.
//!
//! ## Features
//!
//! - Immutable `Polynomial<T>` value type, generic over the coefficient type
//!   (`f64` by default; `num-bigint` for exact arithmetic).
//! - Arithmetic: addition aligned by degree, multiplication by convolution,
//!   scalar multiplication, negation and subtraction.
//! - Introspection: degree, coefficients, evaluation and display.
//! - Serialization: Optional serde support with bincode integration.
//!
//! ## Conventions
//!
//! Coefficients are stored highest degree first. The degree is the length of
//! the coefficient vector minus one and no operation trims leading zeros, so
//! `[0, 3]` has degree 1. The zero polynomial is `[0]` with degree 0, and
//! multiplying anything by it yields `[0]` again.

pub mod coefficient;
pub mod errors;
pub mod polynomial;
pub mod utils;

pub use coefficient::Coefficient;
pub use errors::PolynomialError;
pub use polynomial::Polynomial;
