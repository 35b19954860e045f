//! Validated exponent to coefficient mappings.

use std::collections::btree_map::{self, BTreeMap, Entry};

use num_traits::Zero;

use crate::dense::DensePoly;
use crate::sparse::TermList;

/// A set of terms with unique exponents and nonzero coefficients.
///
/// This is the common source both polynomial representations are built
/// from, so a dense and a sparse polynomial built from the same set always
/// describe the same value.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TermSet {
    terms: BTreeMap<u32, f64>,
}

impl TermSet {
    /// Creates an empty term set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `coeff` to the coefficient of `x^exponent`.
    ///
    /// An entry whose coefficient cancels to zero is removed, and a zero
    /// `coeff` for a fresh exponent is ignored.
    pub fn insert(&mut self, exponent: u32, coeff: f64) {
        match self.terms.entry(exponent) {
            Entry::Vacant(entry) => {
                if !coeff.is_zero() {
                    entry.insert(coeff);
                }
            }
            Entry::Occupied(mut entry) => {
                *entry.get_mut() += coeff;
                if entry.get().is_zero() {
                    entry.remove();
                }
            }
        }
    }

    /// Returns the coefficient of `x^exponent`, if present.
    #[must_use]
    pub fn get(&self, exponent: u32) -> Option<f64> {
        self.terms.get(&exponent).copied()
    }

    /// Returns the largest exponent, or `None` for an empty set.
    #[must_use]
    pub fn degree(&self) -> Option<u32> {
        self.terms.keys().next_back().copied()
    }

    /// Returns the number of terms.
    #[must_use]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Returns true if the set holds no terms.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Iterates over `(exponent, coeff)` pairs in ascending exponent order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (u32, f64)> + '_ {
        self.terms.iter().map(|(&e, &c)| (e, c))
    }

    /// Builds the dense form, sized by the largest exponent.
    #[must_use]
    pub fn to_dense(&self) -> DensePoly {
        DensePoly::from(self)
    }

    /// Builds the sparse form, highest exponent at the head.
    #[must_use]
    pub fn to_term_list(&self) -> TermList {
        TermList::from(self)
    }
}

impl From<&TermSet> for DensePoly {
    fn from(set: &TermSet) -> Self {
        let Some(degree) = set.degree() else {
            return DensePoly::zero();
        };

        let degree = degree as usize;
        let mut coeffs = vec![0.0; degree + 1];
        for (exponent, coeff) in set.iter() {
            coeffs[degree - exponent as usize] = coeff;
        }

        DensePoly::new(coeffs)
    }
}

impl From<&TermSet> for TermList {
    fn from(set: &TermSet) -> Self {
        let mut list = TermList::new();
        for (exponent, coeff) in set.iter() {
            list.add(coeff, exponent);
        }
        list
    }
}

impl FromIterator<(u32, f64)> for TermSet {
    fn from_iter<I: IntoIterator<Item = (u32, f64)>>(iter: I) -> Self {
        let mut set = Self::new();
        for (exponent, coeff) in iter {
            set.insert(exponent, coeff);
        }
        set
    }
}

impl IntoIterator for TermSet {
    type Item = (u32, f64);
    type IntoIter = btree_map::IntoIter<u32, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.terms.into_iter()
    }
}
