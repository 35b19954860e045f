//! Sparse term lists.
//!
//! A [`TermList`] is a chain of `(coefficient, exponent)` terms owned by
//! value. Insertion prepends without merging; `+=` collapses equal
//! exponents and rebuilds the chain in descending exponent order.

use std::cmp::Reverse;
use std::collections::{BTreeMap, VecDeque};
use std::fmt;
use std::ops::AddAssign;

use num_traits::Zero;
use tracing::debug;

use crate::dense::DensePoly;

/// A single `coeff * x^exponent` term.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Term {
    /// The coefficient.
    pub coeff: f64,
    /// The exponent of `x`.
    pub exponent: u32,
}

impl Term {
    /// Creates a new term.
    #[must_use]
    pub fn new(coeff: f64, exponent: u32) -> Self {
        Self { coeff, exponent }
    }
}

/// A polynomial stored as an explicit list of terms, head first.
///
/// Until the list is accumulated it may hold several terms with the same
/// exponent, in insertion order reversed.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TermList {
    /// Terms from head to tail.
    terms: VecDeque<Term>,
}

impl TermList {
    /// Creates an empty list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Prepends a term. Existing terms with the same exponent are left alone.
    pub fn add(&mut self, coeff: f64, exponent: u32) {
        self.terms.push_front(Term::new(coeff, exponent));
    }

    /// Returns the number of terms.
    #[must_use]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Returns true if the list holds no terms.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Iterates over the terms from head to tail.
    pub fn iter(&self) -> impl Iterator<Item = &Term> {
        self.terms.iter()
    }

    /// Returns the head term.
    #[must_use]
    pub fn head(&self) -> Option<&Term> {
        self.terms.front()
    }

    /// Converts to a dense polynomial sized by the largest exponent.
    ///
    /// Repeated exponents are summed. An empty list yields the zero
    /// polynomial.
    #[must_use]
    pub fn to_dense(&self) -> DensePoly {
        let Some(degree) = self.terms.iter().map(|t| t.exponent).max() else {
            return DensePoly::zero();
        };

        let degree = degree as usize;
        let mut coeffs = vec![0.0; degree + 1];
        for term in &self.terms {
            coeffs[degree - term.exponent as usize] += term.coeff;
        }

        DensePoly::new(coeffs)
    }
}

impl FromIterator<Term> for TermList {
    /// Collects terms in iteration order, the first item becoming the head.
    fn from_iter<I: IntoIterator<Item = Term>>(iter: I) -> Self {
        Self {
            terms: iter.into_iter().collect(),
        }
    }
}

/// Adds `rhs` into `self`, collapsing shared exponents.
///
/// `self` is drained into an exponent-keyed accumulator, `rhs` is folded in
/// by value, and `self` is rebuilt with one term per exponent in strictly
/// descending order. Exponents whose coefficients cancel to exactly zero are
/// dropped from the rebuilt list.
impl AddAssign<&TermList> for TermList {
    fn add_assign(&mut self, rhs: &TermList) {
        let mut accumulated: BTreeMap<Reverse<u32>, f64> = BTreeMap::new();

        for term in self.terms.drain(..).chain(rhs.terms.iter().copied()) {
            *accumulated.entry(Reverse(term.exponent)).or_insert(0.0) += term.coeff;
        }

        let distinct = accumulated.len();
        self.terms = accumulated
            .into_iter()
            .filter(|(_, coeff)| !coeff.is_zero())
            .map(|(Reverse(exponent), coeff)| Term::new(coeff, exponent))
            .collect();

        debug!(
            distinct,
            kept = self.terms.len(),
            "accumulated term lists"
        );
    }
}

impl AddAssign for TermList {
    fn add_assign(&mut self, rhs: TermList) {
        *self += &rhs;
    }
}

/// Writes one `coeff: <c> pow: <e>` line per term, head to tail.
impl fmt::Display for TermList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for term in &self.terms {
            writeln!(f, "coeff: {} pow: {}", term.coeff, term.exponent)?;
        }
        Ok(())
    }
}
