//! Dense univariate polynomials.
//!
//! Coefficients live in a single owned `Vec<f64>` ordered from the highest
//! exponent down to the constant term. The length of that vector, not the
//! position of the first nonzero coefficient, defines the degree.

use std::fmt;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};

use num_traits::Zero;

/// A dense univariate polynomial with real coefficients.
///
/// The coefficient at index `i` belongs to exponent `len - 1 - i`, so
/// `[2.0, 0.0, -1.0]` is `2*x^2-1`. The vector is never empty.
#[derive(Clone, PartialEq, Debug)]
pub struct DensePoly {
    /// Coefficients in descending degree order.
    coeffs: Vec<f64>,
}

impl DensePoly {
    /// Creates a new polynomial from coefficients, highest degree first.
    ///
    /// Leading zeros are kept: they count towards the structural degree.
    /// An empty vector becomes the zero polynomial.
    #[must_use]
    pub fn new(mut coeffs: Vec<f64>) -> Self {
        if coeffs.is_empty() {
            coeffs.push(0.0);
        }
        Self { coeffs }
    }

    /// Creates a polynomial by copying a coefficient slice, highest degree first.
    #[must_use]
    pub fn from_slice(coeffs: &[f64]) -> Self {
        Self::new(coeffs.to_vec())
    }

    /// Creates the zero polynomial `[0.0]`.
    #[must_use]
    pub fn zero() -> Self {
        Self { coeffs: vec![0.0] }
    }

    /// Creates a polynomial of `size` slots whose only nonzero slot is the
    /// leading one, i.e. `coeff * x^(size - 1)`.
    #[must_use]
    pub fn leading_term(coeff: f64, size: usize) -> Self {
        let mut coeffs = vec![0.0; size.max(1)];
        coeffs[0] = coeff;
        Self { coeffs }
    }

    /// Returns the structural degree, `len - 1`.
    ///
    /// This is not the mathematical degree: `[0.0, 0.0, 3.0]` has degree 2
    /// even though it represents the constant 3. Division and addition rely
    /// on the structural value to align exponents.
    #[must_use]
    pub fn degree(&self) -> usize {
        self.coeffs.len() - 1
    }

    /// Returns the number of coefficient slots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.coeffs.len()
    }

    /// Always false; kept for symmetry with [`DensePoly::len`].
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.coeffs.is_empty()
    }

    /// Returns true if every coefficient is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.coeffs.iter().all(Zero::is_zero)
    }

    /// Returns the coefficient in the highest structural slot.
    #[must_use]
    pub fn leading_coeff(&self) -> f64 {
        self.coeffs[0]
    }

    /// Returns all coefficients, highest degree first.
    #[must_use]
    pub fn coeffs(&self) -> &[f64] {
        &self.coeffs
    }

    /// Returns the coefficient of `x^exponent`, or zero past the degree.
    #[must_use]
    pub fn coeff(&self, exponent: usize) -> f64 {
        if exponent > self.degree() {
            return 0.0;
        }
        self.coeffs[self.degree() - exponent]
    }

    /// Evaluates the polynomial at a point using Horner's method.
    #[must_use]
    pub fn eval(&self, x: f64) -> f64 {
        self.coeffs.iter().fold(0.0, |acc, c| acc * x + c)
    }

    /// Multiplies every coefficient by `c`.
    ///
    /// The length is preserved, so scaling by zero yields an all-zero
    /// polynomial of the same structural degree.
    #[must_use]
    pub fn scale(&self, c: f64) -> Self {
        Self {
            coeffs: self.coeffs.iter().map(|x| x * c).collect(),
        }
    }

    /// Drops the leading slot after it has been cancelled.
    ///
    /// A single-slot polynomial is reset to `[0.0]` instead, keeping the
    /// vector non-empty.
    pub(crate) fn eliminate_leading(&mut self) {
        if self.coeffs.len() > 1 {
            self.coeffs.remove(0);
        } else {
            self.coeffs[0] = 0.0;
        }
    }

    /// Re-aligns `self` and `rhs` by exponent into a buffer of the larger
    /// length and accumulates `rhs * sign` into it.
    fn combine(&mut self, rhs: &Self, sign: f64) {
        let len = self.coeffs.len().max(rhs.coeffs.len());
        let mut coeffs = vec![0.0; len];

        // Exponent e lands at index len - e - 1, i.e. shifted by the length gap.
        let offset = len - self.coeffs.len();
        for (i, c) in self.coeffs.iter().enumerate() {
            coeffs[offset + i] += c;
        }

        let offset = len - rhs.coeffs.len();
        for (i, c) in rhs.coeffs.iter().enumerate() {
            coeffs[offset + i] += sign * c;
        }

        self.coeffs = coeffs;
    }

    /// Schoolbook convolution: O(n*m).
    fn convolve(&self, other: &Self) -> Self {
        let mut coeffs = vec![0.0; self.coeffs.len() + other.coeffs.len() - 1];

        for (i, a) in self.coeffs.iter().enumerate() {
            for (j, b) in other.coeffs.iter().enumerate() {
                coeffs[i + j] += a * b;
            }
        }

        Self { coeffs }
    }
}

impl AddAssign<&DensePoly> for DensePoly {
    fn add_assign(&mut self, rhs: &DensePoly) {
        self.combine(rhs, 1.0);
    }
}

impl AddAssign for DensePoly {
    fn add_assign(&mut self, rhs: DensePoly) {
        self.combine(&rhs, 1.0);
    }
}

impl SubAssign<&DensePoly> for DensePoly {
    fn sub_assign(&mut self, rhs: &DensePoly) {
        self.combine(rhs, -1.0);
    }
}

impl SubAssign for DensePoly {
    fn sub_assign(&mut self, rhs: DensePoly) {
        self.combine(&rhs, -1.0);
    }
}

impl Add<&DensePoly> for &DensePoly {
    type Output = DensePoly;

    fn add(self, rhs: &DensePoly) -> DensePoly {
        let mut result = self.clone();
        result += rhs;
        result
    }
}

impl Add<&DensePoly> for DensePoly {
    type Output = DensePoly;

    fn add(mut self, rhs: &DensePoly) -> DensePoly {
        self += rhs;
        self
    }
}

impl Add for DensePoly {
    type Output = DensePoly;

    fn add(mut self, rhs: DensePoly) -> DensePoly {
        self += &rhs;
        self
    }
}

impl Sub<&DensePoly> for &DensePoly {
    type Output = DensePoly;

    fn sub(self, rhs: &DensePoly) -> DensePoly {
        let mut result = self.clone();
        result -= rhs;
        result
    }
}

impl Sub<&DensePoly> for DensePoly {
    type Output = DensePoly;

    fn sub(mut self, rhs: &DensePoly) -> DensePoly {
        self -= rhs;
        self
    }
}

impl Sub for DensePoly {
    type Output = DensePoly;

    fn sub(mut self, rhs: DensePoly) -> DensePoly {
        self -= &rhs;
        self
    }
}

impl Mul<&DensePoly> for &DensePoly {
    type Output = DensePoly;

    fn mul(self, rhs: &DensePoly) -> DensePoly {
        self.convolve(rhs)
    }
}

impl Mul<&DensePoly> for DensePoly {
    type Output = DensePoly;

    fn mul(self, rhs: &DensePoly) -> DensePoly {
        self.convolve(rhs)
    }
}

impl Mul for DensePoly {
    type Output = DensePoly;

    fn mul(self, rhs: DensePoly) -> DensePoly {
        self.convolve(&rhs)
    }
}

impl Mul<f64> for &DensePoly {
    type Output = DensePoly;

    fn mul(self, rhs: f64) -> DensePoly {
        self.scale(rhs)
    }
}

impl Mul<f64> for DensePoly {
    type Output = DensePoly;

    fn mul(self, rhs: f64) -> DensePoly {
        self.scale(rhs)
    }
}

/// Writes terms as `2*x^3-1*x+4`.
///
/// Zero coefficients are skipped, so an all-zero polynomial writes nothing;
/// callers that need a visible `0` must special-case [`DensePoly::is_zero`].
impl fmt::Display for DensePoly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let degree = self.degree();
        let mut first = true;

        for (i, c) in self.coeffs.iter().enumerate() {
            if c.is_zero() {
                continue;
            }

            if first {
                write!(f, "{c}")?;
                first = false;
            } else {
                write!(f, "{c:+}")?;
            }

            match degree - i {
                0 => {}
                1 => write!(f, "*x")?,
                exponent => write!(f, "*x^{exponent}")?,
            }
        }

        Ok(())
    }
}
