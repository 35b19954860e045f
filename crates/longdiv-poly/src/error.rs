//! Errors raised by polynomial operations.

use thiserror::Error;

/// Errors that can occur during polynomial division.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum PolyError {
    /// The divisor is the zero polynomial.
    #[error("division by the zero polynomial")]
    DivisionByZero,

    /// The divisor's structural leading coefficient is zero, so no quotient
    /// term can eliminate the remainder's leading term.
    #[error("divisor of degree {degree} has a zero leading coefficient")]
    ZeroLeadingCoefficient {
        /// Structural degree of the offending divisor.
        degree: usize,
    },
}
