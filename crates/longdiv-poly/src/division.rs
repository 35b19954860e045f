//! Polynomial long division.
//!
//! Repeatedly eliminates the remainder's leading term with a scaled copy of
//! the divisor until the remainder is zero or its structural degree drops
//! below the divisor's.

use num_traits::Zero;
use tracing::trace;

use crate::dense::DensePoly;
use crate::error::PolyError;

/// Quotient and remainder of a long division.
#[derive(Clone, Debug, PartialEq)]
pub struct Division {
    /// The quotient `Q` in `A = Q*D + R`.
    pub quotient: DensePoly,
    /// The remainder `R`, zero or of lower structural degree than `D`.
    pub remainder: DensePoly,
}

/// Divides `dividend` by `divisor`, returning quotient and remainder.
///
/// Degrees are structural (see [`DensePoly::degree`]). A dividend of lower
/// degree than the divisor is returned unchanged as the remainder.
///
/// # Errors
///
/// Returns [`PolyError::DivisionByZero`] if the divisor is the zero
/// polynomial, and [`PolyError::ZeroLeadingCoefficient`] if its leading slot
/// is zero while some other slot is not.
pub fn long_division(dividend: &DensePoly, divisor: &DensePoly) -> Result<Division, PolyError> {
    if divisor.is_zero() {
        return Err(PolyError::DivisionByZero);
    }

    if divisor.leading_coeff().is_zero() {
        return Err(PolyError::ZeroLeadingCoefficient {
            degree: divisor.degree(),
        });
    }

    if dividend.is_zero() {
        return Ok(Division {
            quotient: DensePoly::zero(),
            remainder: DensePoly::zero(),
        });
    }

    if dividend.degree() < divisor.degree() {
        return Ok(Division {
            quotient: DensePoly::zero(),
            remainder: dividend.clone(),
        });
    }

    let divisor_lead = divisor.leading_coeff();
    let mut quotient = DensePoly::zero();
    let mut remainder = dividend.clone();

    while !remainder.is_zero() && remainder.degree() >= divisor.degree() {
        let size = remainder.degree() - divisor.degree() + 1;
        let term = DensePoly::leading_term(remainder.leading_coeff() / divisor_lead, size);

        quotient += &term;
        remainder -= &(&term * divisor);

        // Leading slot is cancelled by construction, up to float residue.
        remainder.eliminate_leading();

        trace!(
            term = %term,
            remainder_degree = remainder.degree(),
            "long division step"
        );
    }

    Ok(Division {
        quotient,
        remainder,
    })
}
