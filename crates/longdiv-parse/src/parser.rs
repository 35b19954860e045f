//! Expression parser.
//!
//! The expression is a sum of terms. Every `-` starts a new term, so
//! `x^2-3` reads as `x^2 + -3`. Each term is one of
//!
//! ```text
//! <int>*x^<uint>   <int>*x   <int>
//! -x^<uint>        -x
//! x^<uint>         x
//! ```
//!
//! where `<int>` is an optional `-` followed by decimal digits.

use nom::{
    branch::alt,
    character::complete::{char, digit1},
    combinator::{all_consuming, map, map_res, opt, recognize},
    sequence::{pair, preceded, terminated},
    IResult,
};
use tracing::trace;

use longdiv_poly::TermSet;

use crate::error::ParseError;

/// Largest exponent accepted when no other limit is configured.
pub const DEFAULT_MAX_DEGREE: u32 = 1024;

/// Parses a signed decimal integer.
fn integer(input: &str) -> IResult<&str, i64> {
    map_res(recognize(pair(opt(char('-')), digit1)), |s: &str| {
        s.parse::<i64>()
    })(input)
}

/// Parses `x` or `x^<uint>`, returning the exponent.
fn power(input: &str) -> IResult<&str, u32> {
    map(
        preceded(
            char('x'),
            opt(preceded(
                char('^'),
                map_res(digit1, |s: &str| s.parse::<u32>()),
            )),
        ),
        |exponent| exponent.unwrap_or(1),
    )(input)
}

/// Parses one term into `(coefficient, exponent)`.
fn term(input: &str) -> IResult<&str, (i64, u32)> {
    alt((
        pair(terminated(integer, char('*')), power),
        map(preceded(char('-'), power), |exponent| (-1, exponent)),
        map(power, |exponent| (1, exponent)),
        map(integer, |coeff| (coeff, 0)),
    ))(input)
}

/// Validates a single `+`-separated token.
#[allow(clippy::cast_precision_loss)]
fn parse_token(token: &str) -> Result<(f64, u32), ParseError> {
    let coeff_part = token.split_once('x').map_or(token, |(before, _)| before);
    if coeff_part.contains('.') {
        return Err(ParseError::NonIntegerCoefficient(token.to_string()));
    }

    let (coeff, exponent) = match all_consuming(term)(token) {
        Ok((_, parsed)) => parsed,
        Err(_) => return Err(ParseError::InvalidTerm(token.to_string())),
    };

    if coeff == 0 {
        return Err(ParseError::ZeroCoefficient(token.to_string()));
    }

    Ok((coeff as f64, exponent))
}

/// Parses a polynomial expression into a validated term set.
///
/// Whitespace is ignored and empty terms (as in `x++1`) are skipped.
/// Repeated exponents are summed, and exponents that cancel out are absent
/// from the result.
///
/// # Errors
///
/// Returns the first [`ParseError`] met: an unrecognised or non-integer
/// term, an explicit zero coefficient, an exponent above `max_degree`, or an
/// input with no terms at all.
pub fn parse_polynomial(input: &str, max_degree: u32) -> Result<TermSet, ParseError> {
    let compact: String = input.chars().filter(|c| !c.is_whitespace()).collect();
    let expanded = compact.replace('-', "+-");

    let mut terms = TermSet::new();
    let mut seen_any = false;

    for token in expanded.split('+').filter(|t| !t.is_empty()) {
        let (coeff, exponent) = parse_token(token)?;
        if exponent > max_degree {
            return Err(ParseError::DegreeTooLarge {
                degree: exponent,
                max: max_degree,
            });
        }

        trace!(token, coeff, exponent, "parsed term");
        terms.insert(exponent, coeff);
        seen_any = true;
    }

    if !seen_any {
        return Err(ParseError::EmptyExpression);
    }

    Ok(terms)
}
