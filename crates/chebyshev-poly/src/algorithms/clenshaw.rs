//! Clenshaw's recurrence for evaluating Chebyshev series.
//!
//! Evaluating `sum c_k T_k(x)` term by term requires forming every `T_k(x)`.
//! Clenshaw's backward recurrence folds the coefficients into two running
//! accumulators instead, in O(n) time and O(1) extra space.

use crate::error::{ChebyshevError, Result};

/// Returns true if `x` lies in the closed interval [-1, 1].
///
/// NaN is never in the domain.
#[must_use]
pub fn in_domain(x: f64) -> bool {
    (-1.0..=1.0).contains(&x)
}

/// Evaluates a Chebyshev series at `x`, checking the domain first.
///
/// # Errors
///
/// Returns [`ChebyshevError::OutOfDomain`] if `x` is outside [-1, 1].
pub fn try_clenshaw(coeffs: &[f64], x: f64) -> Result<f64> {
    if !in_domain(x) {
        log::debug!("rejecting Chebyshev evaluation at x = {x}");
        return Err(ChebyshevError::OutOfDomain { x });
    }
    Ok(clenshaw(coeffs, x))
}

/// Evaluates a Chebyshev series at `x` without a domain check.
///
/// An empty series is 0 and a single coefficient is returned as is.
#[must_use]
pub fn clenshaw(coeffs: &[f64], x: f64) -> f64 {
    match coeffs {
        [] => 0.0,
        [c0] => *c0,
        [c0, rest @ ..] => {
            let x2 = 2.0 * x;
            let mut b0 = 0.0;
            let mut b1 = 0.0;

            for &c in rest.iter().rev() {
                let next = c + x2 * b0 - b1;
                b1 = b0;
                b0 = next;
            }

            c0 + x * b0 - b1
        }
    }
}
