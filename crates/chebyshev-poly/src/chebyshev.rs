//! Polynomials in the Chebyshev basis.
//!
//! A [`ChebyshevPoly`] is a finite series `sum c_k T_k(x)` where `T_k` is the
//! Chebyshev polynomial of the first kind of degree `k`. Every value is kept
//! in canonical form: the coefficient sequence is either empty or ends in a
//! non-zero coefficient.

use std::borrow::Cow;
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use crate::algorithms::clenshaw::{clenshaw, try_clenshaw};
use crate::algorithms::product::chebyshev_mul;
use crate::error::Result;

/// A real polynomial expressed in the Chebyshev basis.
///
/// Coefficients are stored in ascending degree order, index `i` holding the
/// coefficient of `T_i`. The field is private and every constructor trims
/// trailing zeros, so no value of this type is ever non-canonical.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "Vec<f64>", into = "Vec<f64>"))]
pub struct ChebyshevPoly {
    /// Coefficients in ascending degree order.
    coeffs: Cow<'static, [f64]>,
}

/// The zero polynomial (empty coefficient sequence).
pub const ZERO: ChebyshevPoly = ChebyshevPoly::from_static(&[]);
/// The constant polynomial 1, equal to `T0`.
pub const ONE: ChebyshevPoly = T0;
/// The polynomial x, equal to `T1`.
pub const X: ChebyshevPoly = T1;

/// T0(x) = 1.
pub const T0: ChebyshevPoly = ChebyshevPoly::from_static(&[1.0]);
/// T1(x) = x.
pub const T1: ChebyshevPoly = ChebyshevPoly::from_static(&[0.0, 1.0]);
/// T2(x) = 2x² - 1.
pub const T2: ChebyshevPoly = ChebyshevPoly::from_static(&[0.0, 0.0, 1.0]);
/// T3(x) = 4x³ - 3x.
pub const T3: ChebyshevPoly = ChebyshevPoly::from_static(&[0.0, 0.0, 0.0, 1.0]);
/// T4(x) = 8x⁴ - 8x² + 1.
pub const T4: ChebyshevPoly = ChebyshevPoly::from_static(&[0.0, 0.0, 0.0, 0.0, 1.0]);
/// T5(x) = 16x⁵ - 20x³ + 5x.
pub const T5: ChebyshevPoly = ChebyshevPoly::from_static(&[0.0, 0.0, 0.0, 0.0, 0.0, 1.0]);
/// T6.
pub const T6: ChebyshevPoly =
    ChebyshevPoly::from_static(&[0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0]);
/// T7.
pub const T7: ChebyshevPoly =
    ChebyshevPoly::from_static(&[0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0]);
/// T8.
pub const T8: ChebyshevPoly =
    ChebyshevPoly::from_static(&[0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0]);
/// T9.
pub const T9: ChebyshevPoly =
    ChebyshevPoly::from_static(&[0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0]);

/// Length of the canonical prefix of `coeffs`.
fn canonical_len(coeffs: &[f64]) -> usize {
    coeffs.iter().rposition(|&c| c != 0.0).map_or(0, |i| i + 1)
}

/// Builds the canonical polynomial for a raw coefficient sequence.
///
/// Strips the trailing run of zero coefficients. An empty or all-zero input
/// yields [`ZERO`].
#[must_use]
pub fn normalize(coeffs: &[f64]) -> ChebyshevPoly {
    ChebyshevPoly {
        coeffs: Cow::Owned(coeffs[..canonical_len(coeffs)].to_vec()),
    }
}

impl ChebyshevPoly {
    /// Wraps a static sequence that is already canonical.
    const fn from_static(coeffs: &'static [f64]) -> Self {
        Self {
            coeffs: Cow::Borrowed(coeffs),
        }
    }

    /// Creates a new polynomial from coefficients.
    ///
    /// The input need not be canonical; trailing zeros are removed.
    #[must_use]
    pub fn new(mut coeffs: Vec<f64>) -> Self {
        coeffs.truncate(canonical_len(&coeffs));
        Self {
            coeffs: Cow::Owned(coeffs),
        }
    }

    /// Creates the basis polynomial `T_n` for any degree.
    #[must_use]
    pub fn basis(n: usize) -> Self {
        let mut coeffs = vec![0.0; n + 1];
        coeffs[n] = 1.0;
        Self::new(coeffs)
    }

    /// Returns all coefficients in ascending degree order.
    #[must_use]
    pub fn coefficients(&self) -> &[f64] {
        &self.coeffs
    }

    /// Returns the coefficient of `T_i`, which is 0 past the end.
    #[must_use]
    pub fn coeff(&self, i: usize) -> f64 {
        self.coeffs.get(i).copied().unwrap_or(0.0)
    }

    /// Returns the number of stored coefficients.
    #[must_use]
    pub fn len(&self) -> usize {
        self.coeffs.len()
    }

    /// Returns true if no coefficients are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.coeffs.is_empty()
    }

    /// Returns the degree, or `None` for the zero polynomial.
    #[must_use]
    pub fn degree(&self) -> Option<usize> {
        self.coeffs.len().checked_sub(1)
    }

    /// Returns the leading coefficient, or `None` for the zero polynomial.
    #[must_use]
    pub fn leading_coeff(&self) -> Option<f64> {
        self.coeffs.last().copied()
    }

    /// Returns true if every coefficient is exactly zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.coeffs.iter().all(|&c| c == 0.0)
    }

    /// Exact coefficient-wise comparison.
    ///
    /// Two polynomials are equal iff they have the same length and identical
    /// coefficients. No tolerance is applied.
    #[must_use]
    pub fn equals(&self, other: &Self) -> bool {
        self.coeffs.len() == other.coeffs.len()
            && self.coeffs.iter().zip(other.coeffs.iter()).all(|(a, b)| a == b)
    }

    /// Combines two coefficient sequences index by index, reading missing
    /// indices as zero.
    fn zip_with(&self, other: &Self, f: impl Fn(f64, f64) -> f64) -> Self {
        let len = self.coeffs.len().max(other.coeffs.len());
        let coeffs = (0..len).map(|i| f(self.coeff(i), other.coeff(i))).collect();
        Self::new(coeffs)
    }

    /// Adds two polynomials.
    #[allow(clippy::should_implement_trait)]
    #[must_use]
    pub fn add(&self, other: &Self) -> Self {
        self.zip_with(other, |a, b| a + b)
    }

    /// Subtracts `other` from `self`.
    #[must_use]
    pub fn subtract(&self, other: &Self) -> Self {
        self.zip_with(other, |a, b| a - b)
    }

    /// Multiplies every coefficient by `k`.
    #[must_use]
    pub fn scale(&self, k: f64) -> Self {
        Self::new(self.coeffs.iter().map(|&c| c * k).collect())
    }

    /// Negates a polynomial.
    #[must_use]
    pub fn negate(&self) -> Self {
        self.scale(-1.0)
    }

    /// Multiplies two polynomials in the Chebyshev basis.
    #[must_use]
    pub fn multiply(&self, other: &Self) -> Self {
        if self.coeffs.is_empty() || other.coeffs.is_empty() {
            return ZERO;
        }
        Self::new(chebyshev_mul(&self.coeffs, &other.coeffs))
    }

    /// Raises the polynomial to a non-negative integer power.
    #[must_use]
    pub fn pow(&self, n: u32) -> Self {
        let mut result = ONE;
        let mut base = self.clone();
        let mut exp = n;

        while exp > 0 {
            if exp & 1 == 1 {
                result = result.multiply(&base);
            }
            exp >>= 1;
            if exp > 0 {
                base = base.multiply(&base);
            }
        }

        result
    }

    /// Computes the derivative, expressed in the Chebyshev basis.
    ///
    /// Uses the backward recurrence `d_{k-1} = d_{k+1} + 2k c_k`, with the
    /// constant term halved at the end.
    #[must_use]
    pub fn derivative(&self) -> Self {
        let n = self.coeffs.len();
        if n <= 1 {
            return ZERO;
        }

        // Two trailing slots stand in for d_{n-1} and d_n.
        let mut d = vec![0.0; n + 1];
        for k in (1..n).rev() {
            #[allow(clippy::cast_precision_loss)]
            let two_k = 2.0 * k as f64;
            d[k - 1] = d[k + 1] + two_k * self.coeffs[k];
        }
        d[0] /= 2.0;

        Self::new(d)
    }

    /// Evaluates the polynomial at `x` using Clenshaw's recurrence.
    ///
    /// # Panics
    ///
    /// Panics if `x` is outside [-1, 1] or is NaN. Use
    /// [`try_interpolate`](Self::try_interpolate) to get an error instead.
    #[must_use]
    pub fn interpolate(&self, x: f64) -> f64 {
        match self.try_interpolate(x) {
            Ok(y) => y,
            Err(e) => panic!("{e}"),
        }
    }

    /// Evaluates the polynomial at `x`, rejecting points outside [-1, 1].
    ///
    /// # Errors
    ///
    /// Returns [`ChebyshevError::OutOfDomain`](crate::ChebyshevError::OutOfDomain)
    /// if `x` is outside [-1, 1].
    pub fn try_interpolate(&self, x: f64) -> Result<f64> {
        try_clenshaw(&self.coeffs, x)
    }

    /// Evaluates the polynomial at `x` without a domain check.
    ///
    /// The recurrence itself is valid for any real `x`; outside [-1, 1] the
    /// basis is no longer well conditioned.
    #[must_use]
    pub fn interpolate_unchecked(&self, x: f64) -> f64 {
        clenshaw(&self.coeffs, x)
    }
}

impl Default for ChebyshevPoly {
    fn default() -> Self {
        ZERO
    }
}

impl From<Vec<f64>> for ChebyshevPoly {
    fn from(coeffs: Vec<f64>) -> Self {
        Self::new(coeffs)
    }
}

impl From<&[f64]> for ChebyshevPoly {
    fn from(coeffs: &[f64]) -> Self {
        normalize(coeffs)
    }
}

impl From<ChebyshevPoly> for Vec<f64> {
    fn from(p: ChebyshevPoly) -> Self {
        p.coeffs.into_owned()
    }
}

impl FromIterator<f64> for ChebyshevPoly {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl Add for &ChebyshevPoly {
    type Output = ChebyshevPoly;

    fn add(self, rhs: Self) -> ChebyshevPoly {
        ChebyshevPoly::add(self, rhs)
    }
}

impl Sub for &ChebyshevPoly {
    type Output = ChebyshevPoly;

    fn sub(self, rhs: Self) -> ChebyshevPoly {
        self.subtract(rhs)
    }
}

impl Mul for &ChebyshevPoly {
    type Output = ChebyshevPoly;

    fn mul(self, rhs: Self) -> ChebyshevPoly {
        self.multiply(rhs)
    }
}

impl Mul<f64> for &ChebyshevPoly {
    type Output = ChebyshevPoly;

    fn mul(self, rhs: f64) -> ChebyshevPoly {
        self.scale(rhs)
    }
}

impl Neg for &ChebyshevPoly {
    type Output = ChebyshevPoly;

    fn neg(self) -> ChebyshevPoly {
        self.negate()
    }
}

impl fmt::Display for ChebyshevPoly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return write!(f, "0");
        }

        let terms: Vec<String> = self
            .coeffs
            .iter()
            .enumerate()
            .filter(|(_, c)| **c != 0.0)
            .map(|(i, c)| format!("{c}*T{i}"))
            .collect();

        write!(f, "{}", terms.join(" + "))
    }
}
