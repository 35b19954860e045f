//! Interactive division session.
//!
//! Prompts for a dividend and a divisor, divides them with the dense
//! representation, and optionally prints the sum of both as a term list.

use std::io::{self, BufRead, Write};

use longdiv_parse::{parse_polynomial, ParseError};
use longdiv_poly::{long_division, DensePoly, PolyError, TermList, TermSet};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::config::Config;

/// Errors that end an interactive session.
#[derive(Debug, Error)]
pub enum SessionError {
    /// An expression could not be parsed.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// The divisor is the zero polynomial.
    #[error("Divisor is not allowed to be 0")]
    DivisionByZero,

    /// Division failed for another reason.
    #[error(transparent)]
    Division(PolyError),

    /// Standard input closed before a prompt was answered.
    #[error("no {0} was entered")]
    MissingInput(&'static str),

    /// Reading or writing the terminal failed.
    #[error(transparent)]
    Io(#[from] io::Error),
}

impl From<PolyError> for SessionError {
    fn from(err: PolyError) -> Self {
        match err {
            PolyError::DivisionByZero => SessionError::DivisionByZero,
            other => SessionError::Division(other),
        }
    }
}

/// Renders a polynomial for display, writing `0` for the zero polynomial.
#[must_use]
pub fn render(poly: &DensePoly) -> String {
    if poly.is_zero() {
        "0".to_string()
    } else {
        poly.to_string()
    }
}

/// Writes `prompt`, reads one line and parses it.
fn prompt_polynomial<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
    what: &'static str,
    config: &Config,
) -> Result<TermSet, SessionError> {
    write!(output, "{prompt}")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(SessionError::MissingInput(what));
    }

    let terms = parse_polynomial(line.trim(), config.max_degree)?;
    debug!(what, terms = terms.len(), "parsed input");
    Ok(terms)
}

/// Warns when the term-list sum disagrees with the dense sum.
fn cross_check(sum: &TermList, dividend: &DensePoly, divisor: &DensePoly) {
    let dense_sum = dividend + divisor;
    if (&sum.to_dense() - &dense_sum).is_zero() {
        debug!("term list sum agrees with dense sum");
    } else {
        warn!(
            term_list = %sum.to_dense(),
            dense = %dense_sum,
            "term list sum disagrees with dense sum"
        );
    }
}

/// Runs one prompt-divide-print cycle.
///
/// # Errors
///
/// Returns a [`SessionError`] if either input line is missing or fails to
/// parse, if the divisor is zero, or if writing the output fails.
pub fn run<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    config: &Config,
) -> Result<(), SessionError> {
    let dividend_terms = prompt_polynomial(input, output, "Enter dividend: ", "dividend", config)?;
    let divisor_terms = prompt_polynomial(input, output, "Enter divisor: ", "divisor", config)?;

    let dividend = dividend_terms.to_dense();
    let divisor = divisor_terms.to_dense();
    info!(dividend = %render(&dividend), divisor = %render(&divisor), "dividing");

    let division = long_division(&dividend, &divisor)?;

    writeln!(output, "Method 1: Dense Array")?;
    writeln!(output, "Quotient = {}", render(&division.quotient))?;
    writeln!(output, "Remainder = {}", render(&division.remainder))?;

    if config.show_term_list || config.cross_check {
        let mut sum = dividend_terms.to_term_list();
        sum += &divisor_terms.to_term_list();

        if config.cross_check {
            cross_check(&sum, &dividend, &divisor);
        }

        if config.show_term_list {
            writeln!(output, "Method 2: Term List")?;
            write!(output, "{sum}")?;
        }
    }

    output.flush()?;
    Ok(())
}
