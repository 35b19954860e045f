//! Property-based tests for polynomial arithmetic and division.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::dense::DensePoly;
    use crate::division::long_division;
    use crate::error::PolyError;
    use crate::term_set::TermSet;

    // Small integer-valued coefficients keep every f64 operation exact.
    fn small_coeff() -> impl Strategy<Value = f64> {
        (-10i32..=10).prop_map(f64::from)
    }

    // Polynomials of structural degree 0-5, leading zeros allowed.
    fn small_poly() -> impl Strategy<Value = DensePoly> {
        proptest::collection::vec(small_coeff(), 1..=6).prop_map(DensePoly::new)
    }

    // Divisors with a leading coefficient of +-1, so quotients stay integral.
    fn unit_lead_poly() -> impl Strategy<Value = DensePoly> {
        (
            prop_oneof![Just(1.0), Just(-1.0)],
            proptest::collection::vec(small_coeff(), 0..=3),
        )
            .prop_map(|(lead, rest)| {
                let mut coeffs = vec![lead];
                coeffs.extend(rest);
                DensePoly::new(coeffs)
            })
    }

    // Divisors whose leading coefficient does not divide evenly, so
    // cancellation of the leading slot is only exact up to rounding.
    fn non_unit_lead_poly() -> impl Strategy<Value = DensePoly> {
        (
            (2i32..=9, prop::bool::ANY),
            proptest::collection::vec(small_coeff(), 0..=3),
        )
            .prop_map(|((lead, negative), rest)| {
                let lead = f64::from(if negative { -lead } else { lead });
                let mut coeffs = vec![lead];
                coeffs.extend(rest);
                DensePoly::new(coeffs)
            })
    }

    fn max_abs(poly: &DensePoly) -> f64 {
        poly.coeffs().iter().fold(0.0, |m, c| m.max(c.abs()))
    }

    fn term_set() -> impl Strategy<Value = TermSet> {
        proptest::collection::vec((0u32..6, small_coeff()), 0..6)
            .prop_map(|terms| terms.into_iter().collect())
    }

    proptest! {
        // Division

        #[test]
        fn division_identity(a in small_poly(), d in unit_lead_poly()) {
            let division = long_division(&a, &d).unwrap();
            let rebuilt = &(&division.quotient * &d) + &division.remainder;

            prop_assert!((&rebuilt - &a).is_zero());
            if !a.is_zero() && a.degree() >= d.degree() {
                prop_assert_eq!(rebuilt, a);
            }
        }

        #[test]
        fn division_remainder_is_reduced(a in small_poly(), d in unit_lead_poly()) {
            let division = long_division(&a, &d).unwrap();
            let r = &division.remainder;
            prop_assert!(r.is_zero() || r.degree() < d.degree());
        }

        #[test]
        fn division_identity_non_unit_lead(a in small_poly(), d in non_unit_lead_poly()) {
            let division = long_division(&a, &d).unwrap();
            let r = &division.remainder;
            prop_assert!(r.is_zero() || r.degree() < d.degree());

            let product = &division.quotient * &d;
            let residue = &(&product + r) - &a;
            let tolerance = 1e-9 * (1.0 + max_abs(&product).max(max_abs(&a)));
            prop_assert!(max_abs(&residue) <= tolerance);
        }

        #[test]
        fn division_by_zero_always_fails(a in small_poly(), len in 1usize..5) {
            let zero = DensePoly::new(vec![0.0; len]);
            prop_assert_eq!(long_division(&a, &zero), Err(PolyError::DivisionByZero));
        }

        #[test]
        fn division_lower_degree_returns_dividend(
            a in proptest::collection::vec(small_coeff(), 1..=3),
            d in proptest::collection::vec(small_coeff(), 4..=6),
        ) {
            let a = DensePoly::new(a);
            let mut d = d;
            d[0] = 1.0;
            let d = DensePoly::new(d);

            let division = long_division(&a, &d).unwrap();
            prop_assert!(division.quotient.is_zero());
            if a.is_zero() {
                prop_assert!(division.remainder.is_zero());
            } else {
                prop_assert_eq!(division.remainder, a);
            }
        }

        // Ring behaviour

        #[test]
        fn poly_add_commutative(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(&a + &b, &b + &a);
        }

        #[test]
        fn poly_mul_commutative(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(&a * &b, &b * &a);
        }

        #[test]
        fn poly_distributive(a in small_poly(), b in small_poly(), c in small_poly()) {
            // (a + b) * c = a * c + b * c
            let left = &(&a + &b) * &c;
            let right = &(&a * &c) + &(&b * &c);
            prop_assert_eq!(left, right);
        }

        #[test]
        fn poly_sub_inverts_add(a in small_poly(), b in small_poly()) {
            let roundtrip = &(&a + &b) - &b;
            prop_assert!((&roundtrip - &a).is_zero());
        }

        #[test]
        fn poly_scale_by_zero_keeps_length(a in small_poly()) {
            let scaled = &a * 0.0;
            prop_assert_eq!(scaled.len(), a.len());
            prop_assert_eq!(scaled.degree(), a.degree());
            prop_assert!(scaled.is_zero());
        }

        #[test]
        fn poly_scale_eval(a in small_poly(), c in small_coeff(), x in -3i32..=3) {
            let x = f64::from(x);
            prop_assert_eq!((&a * c).eval(x), a.eval(x) * c);
        }

        #[test]
        fn poly_scale_matches_constant_mul(a in small_poly(), c in small_coeff()) {
            prop_assert_eq!(&a * c, &a * &DensePoly::new(vec![c]));
        }

        #[test]
        fn poly_mul_degree_is_structural(a in small_poly(), b in small_poly()) {
            prop_assert_eq!((&a * &b).degree(), a.degree() + b.degree());
        }

        #[test]
        fn poly_eval_mul(a in small_poly(), b in small_poly(), x in -3i32..=3) {
            let x = f64::from(x);
            prop_assert_eq!((&a * &b).eval(x), a.eval(x) * b.eval(x));
        }

        // Equality

        #[test]
        fn equality_is_an_equivalence(a in small_poly(), b in small_poly()) {
            let a2 = a.clone();
            let a3 = a2.clone();
            prop_assert_eq!(&a, &a);
            prop_assert_eq!(a == b, b == a);
            prop_assert!(a == a2 && a2 == a3 && a == a3);
        }

        #[test]
        fn equality_requires_equal_length(a in small_poly()) {
            let mut padded = vec![0.0];
            padded.extend_from_slice(a.coeffs());
            prop_assert_ne!(DensePoly::new(padded), a);
        }

        // Sparse and dense addition agree

        #[test]
        fn sparse_sum_matches_dense_sum(a in term_set(), b in term_set()) {
            let mut sparse = a.to_term_list();
            sparse += &b.to_term_list();

            let dense = &a.to_dense() + &b.to_dense();
            prop_assert!((&sparse.to_dense() - &dense).is_zero());

            let exponents: Vec<u32> = sparse.iter().map(|t| t.exponent).collect();
            prop_assert!(exponents.windows(2).all(|w| w[0] > w[1]));
            prop_assert!(sparse.iter().all(|t| t.coeff != 0.0));
        }
    }
}
