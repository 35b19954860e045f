//! Parse errors.

use thiserror::Error;

/// Errors raised while reading a polynomial expression.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The token does not match any accepted term shape.
    #[error("{0} is not a valid term")]
    InvalidTerm(String),

    /// The token's coefficient has a fractional part.
    #[error("{0} is not a valid term: coefficients must be integers")]
    NonIntegerCoefficient(String),

    /// The token spells out a zero coefficient.
    #[error("{0} has a zero coefficient")]
    ZeroCoefficient(String),

    /// The token's exponent is above the configured limit.
    #[error("degree {degree} exceeds the maximum of {max}")]
    DegreeTooLarge {
        /// Exponent found in the input.
        degree: u32,
        /// Largest exponent allowed.
        max: u32,
    },

    /// The input contains no terms.
    #[error("expression has no terms")]
    EmptyExpression,
}
