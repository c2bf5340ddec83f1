//! Product of Chebyshev series via the product-to-sum identity.
//!
//! Two Chebyshev polynomials of the first kind multiply as
//!
//! ```text
//! T_n * T_m = (T_{n+m} + T_{|n-m|}) / 2
//! ```
//!
//! so a product can be accumulated directly in the Chebyshev basis without a
//! round trip through monomials.

/// Multiplies two Chebyshev coefficient slices.
///
/// Returns the raw accumulator of length `a.len() + b.len() - 1`, or an empty
/// vector if either operand is empty. The result is not trimmed; callers
/// normalize it.
#[must_use]
pub fn chebyshev_mul(a: &[f64], b: &[f64]) -> Vec<f64> {
    if a.is_empty() || b.is_empty() {
        return Vec::new();
    }

    let mut result = vec![0.0; a.len() + b.len() - 1];

    for (i, &ai) in a.iter().enumerate() {
        if ai == 0.0 {
            continue;
        }
        for (j, &bj) in b.iter().enumerate() {
            if bj == 0.0 {
                continue;
            }
            let half = ai * bj / 2.0;
            result[i + j] += half;
            result[i.abs_diff(j)] += half;
        }
    }

    result
}
