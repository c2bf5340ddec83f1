//! Property-based tests for Chebyshev polynomial arithmetic.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::chebyshev::{normalize, ChebyshevPoly, ONE, ZERO};

    // Integer-valued coefficients keep every sum and half-product exact, so
    // exact equality is meaningful.
    fn small_coeff() -> impl Strategy<Value = f64> {
        (-100i32..100i32).prop_map(f64::from)
    }

    // Raw sequences, often with trailing zeros.
    fn raw_coeffs() -> impl Strategy<Value = Vec<f64>> {
        (
            proptest::collection::vec(small_coeff(), 0..=6),
            0usize..=3,
        )
            .prop_map(|(mut v, zeros)| {
                v.extend(std::iter::repeat(0.0).take(zeros));
                v
            })
    }

    // Polynomials of degree at most 5, including zero.
    fn small_poly() -> impl Strategy<Value = ChebyshevPoly> {
        raw_coeffs().prop_map(ChebyshevPoly::new)
    }

    fn nonzero_poly() -> impl Strategy<Value = ChebyshevPoly> {
        small_poly().prop_filter("polynomial must be non-zero", |p| !p.is_zero())
    }

    fn point() -> impl Strategy<Value = f64> {
        -1.0f64..=1.0f64
    }

    fn is_canonical(p: &ChebyshevPoly) -> bool {
        p.coefficients().last().map_or(true, |&c| c != 0.0)
    }

    proptest! {
        // Canonical form

        #[test]
        fn normalize_is_canonical(v in raw_coeffs()) {
            prop_assert!(is_canonical(&normalize(&v)));
        }

        #[test]
        fn normalize_idempotent(v in raw_coeffs()) {
            let once = normalize(&v);
            let twice = normalize(once.coefficients());
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn normalize_preserves_prefix(v in raw_coeffs()) {
            let p = normalize(&v);
            prop_assert_eq!(p.coefficients(), &v[..p.len()]);
            prop_assert!(v[p.len()..].iter().all(|&c| c == 0.0));
        }

        #[test]
        fn operations_stay_canonical(a in small_poly(), b in small_poly(), k in small_coeff()) {
            prop_assert!(is_canonical(&a.add(&b)));
            prop_assert!(is_canonical(&a.subtract(&b)));
            prop_assert!(is_canonical(&a.scale(k)));
            prop_assert!(is_canonical(&a.multiply(&b)));
            prop_assert!(is_canonical(&a.derivative()));
        }

        // Zero and equality

        #[test]
        fn is_zero_iff_equals_zero(a in small_poly()) {
            prop_assert_eq!(a.is_zero(), a.equals(&ZERO));
        }

        #[test]
        fn equals_matches_partial_eq(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(a.equals(&b), a == b);
        }

        // Additive group laws

        #[test]
        fn add_commutative(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(a.add(&b), b.add(&a));
        }

        #[test]
        fn add_associative(a in small_poly(), b in small_poly(), c in small_poly()) {
            prop_assert_eq!(a.add(&b).add(&c), a.add(&b.add(&c)));
        }

        #[test]
        fn add_identity(a in small_poly()) {
            prop_assert_eq!(a.add(&ZERO), a.clone());
            prop_assert_eq!(ZERO.add(&a), a);
        }

        #[test]
        fn additive_inverse(a in small_poly()) {
            prop_assert!(a.add(&a.scale(-1.0)).is_zero());
            prop_assert!(a.add(&a.negate()).is_zero());
        }

        // Subtraction

        #[test]
        fn subtract_antisymmetric(a in small_poly(), b in small_poly()) {
            prop_assert!(a.subtract(&b).add(&b.subtract(&a)).is_zero());
        }

        #[test]
        fn subtract_zero(a in small_poly()) {
            prop_assert_eq!(a.subtract(&ZERO), a);
        }

        // Scaling

        #[test]
        fn scale_by_zero(a in small_poly()) {
            prop_assert!(a.scale(0.0).is_zero());
            prop_assert!(a.scale(0.0).is_empty());
        }

        #[test]
        fn scale_by_one(a in small_poly()) {
            prop_assert_eq!(a.scale(1.0), a);
        }

        #[test]
        fn scale_zero_poly(k in small_coeff()) {
            prop_assert!(ZERO.scale(k).is_zero());
        }

        // Multiplication

        #[test]
        fn mul_zero(a in small_poly()) {
            prop_assert!(a.multiply(&ZERO).is_zero());
            prop_assert!(ZERO.multiply(&a).is_zero());
        }

        #[test]
        fn mul_identity(a in small_poly()) {
            prop_assert_eq!(a.multiply(&ONE), a.clone());
            prop_assert_eq!(ONE.multiply(&a), a);
        }

        #[test]
        fn mul_commutative(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(a.multiply(&b), b.multiply(&a));
        }

        #[test]
        fn mul_degree(a in nonzero_poly(), b in nonzero_poly()) {
            let product = a.multiply(&b);
            prop_assert_eq!(
                product.degree(),
                Some(a.degree().unwrap() + b.degree().unwrap())
            );
        }

        #[test]
        fn mul_distributive(a in small_poly(), b in small_poly(), c in small_poly()) {
            let left = a.multiply(&b.add(&c));
            let right = a.multiply(&b).add(&a.multiply(&c));
            prop_assert_eq!(left, right);
        }

        // Evaluation

        #[test]
        fn eval_add(a in small_poly(), b in small_poly(), x in point()) {
            let sum = a.add(&b).interpolate(x);
            prop_assert!((sum - (a.interpolate(x) + b.interpolate(x))).abs() < 1e-9);
        }

        #[test]
        fn eval_mul(a in small_poly(), b in small_poly(), x in point()) {
            let product = a.multiply(&b).interpolate(x);
            let expected = a.interpolate(x) * b.interpolate(x);
            prop_assert!((product - expected).abs() < 1e-6 * (1.0 + expected.abs()));
        }

        #[test]
        fn eval_rejects_outside_domain(a in small_poly(), x in 1.000_001f64..1e6) {
            prop_assert!(a.try_interpolate(x).is_err());
            prop_assert!(a.try_interpolate(-x).is_err());
        }
    }
}
