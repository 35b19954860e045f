//! # longdiv-parse
//!
//! Parser for single-variable polynomial expressions.
//!
//! Accepts text such as `2*x^3-x+4` and produces a validated
//! [`TermSet`](longdiv_poly::TermSet): unique exponents, nonzero integer
//! coefficients.
//!
//! ```
//! use longdiv_parse::parse_polynomial;
//!
//! let terms = parse_polynomial("2*x^3-x+4", 64).unwrap();
//! assert_eq!(terms.to_dense().to_string(), "2*x^3-1*x+4");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod parser;

pub use error::ParseError;
pub use parser::{parse_polynomial, DEFAULT_MAX_DEGREE};
