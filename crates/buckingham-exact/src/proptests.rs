//! Property-based tests for exact exponent arithmetic.

#[cfg(test)]
mod tests {
    use num_traits::{One, Zero};
    use proptest::prelude::*;

    use crate::{Integer, Rational};

    fn small_int() -> impl Strategy<Value = i64> {
        -1000i64..1000i64
    }

    fn non_zero_int() -> impl Strategy<Value = i64> {
        prop_oneof![(-1000i64..=-1i64), (1i64..=1000i64)]
    }

    fn rational() -> impl Strategy<Value = Rational> {
        (small_int(), non_zero_int()).prop_map(|(n, d)| Rational::from_i64(n, d))
    }

    proptest! {
        #[test]
        fn gcd_divides_both(a in non_zero_int(), b in non_zero_int()) {
            let a = Integer::new(a);
            let b = Integer::new(b);
            let g = a.gcd(&b);
            prop_assert!((&a % &g).is_zero());
            prop_assert!((&b % &g).is_zero());
            prop_assert!(!g.is_negative());
        }

        #[test]
        fn lcm_is_multiple_of_both(a in non_zero_int(), b in non_zero_int()) {
            let a = Integer::new(a);
            let b = Integer::new(b);
            let l = a.lcm(&b);
            prop_assert!((&l % &a).is_zero());
            prop_assert!((&l % &b).is_zero());
            prop_assert_eq!(&l * &a.gcd(&b), (&a * &b).abs());
        }

        #[test]
        fn rational_add_sub_inverse(a in rational(), b in rational()) {
            prop_assert_eq!(&(&a + &b) - &b, a);
        }

        #[test]
        fn rational_distributive(a in rational(), b in rational(), c in rational()) {
            prop_assert_eq!(
                &a * &(&b + &c),
                &(&a * &b) + &(&a * &c)
            );
        }

        #[test]
        fn rational_multiplicative_inverse(num in non_zero_int(), den in non_zero_int()) {
            let a = Rational::from_i64(num, den);
            let inv = a.checked_recip().unwrap();
            prop_assert!((a * inv).is_one());
        }

        #[test]
        fn rational_display_parses_back(a in rational()) {
            let text = a.to_string();
            prop_assert_eq!(text.parse::<Rational>().unwrap(), a);
        }

        #[test]
        fn rational_denominator_positive(num in small_int(), den in non_zero_int()) {
            let a = Rational::from_i64(num, den);
            prop_assert!(!a.denominator().is_negative());
            prop_assert!(!a.denominator().is_zero());
            prop_assert!(a.numerator().gcd(&a.denominator()).is_one());
        }

        #[test]
        fn f64_integers_convert_exactly(n in -1_000_000i64..1_000_000i64) {
            #[allow(clippy::cast_precision_loss)]
            let value = n as f64;
            prop_assert_eq!(Rational::try_from_f64(value).unwrap(), Rational::from(n));
        }

        #[test]
        fn f64_halves_convert_exactly(n in -1000i64..1000i64) {
            #[allow(clippy::cast_precision_loss)]
            let value = n as f64 / 2.0;
            prop_assert_eq!(Rational::try_from_f64(value).unwrap(), Rational::from_i64(n, 2));
        }
    }
}
