//! # longdiv-poly
//!
//! Single-variable polynomial arithmetic over `f64` coefficients.
//!
//! This crate provides:
//! - Dense polynomials stored highest degree first, with `+`, `-`, `*`,
//!   scalar `*` and exact structural equality
//! - Polynomial long division with remainder
//! - Sparse term lists with merge-by-exponent accumulation
//! - A validated term set that builds both representations consistently
//!
//! ## Example
//!
//! ```
//! use longdiv_poly::{long_division, DensePoly};
//!
//! // x^2 - 1 = (x + 1)(x - 1)
//! let dividend = DensePoly::new(vec![1.0, 0.0, -1.0]);
//! let divisor = DensePoly::new(vec![1.0, -1.0]);
//!
//! let division = long_division(&dividend, &divisor).unwrap();
//! assert_eq!(division.quotient, DensePoly::new(vec![1.0, 1.0]));
//! assert!(division.remainder.is_zero());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod dense;
pub mod division;
pub mod error;
pub mod sparse;
pub mod term_set;

#[cfg(test)]
mod proptests;

pub use dense::DensePoly;
pub use division::{long_division, Division};
pub use error::PolyError;
pub use sparse::{Term, TermList};
pub use term_set::TermSet;
