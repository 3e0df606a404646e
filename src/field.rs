//! Prime field helpers over arbitrary-precision integers
//!
//! Field elements are plain `BigInt`s kept in the canonical range `[0, p - 1]`.
//! Intermediate values in the group law may go negative, so every reduction
//! goes through [`modulo`], which always yields a non-negative result.

use crate::error::{EcError, Result};
use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, Zero};
use std::mem;

/// Reduces `value` into `[0, modulus - 1]`, regardless of the sign of `value`.
#[inline]
pub fn modulo(value: &BigInt, modulus: &BigInt) -> BigInt {
    value.mod_floor(modulus)
}

/// Extended Euclidean algorithm: returns `(gcd, s, t)` with `a*s + b*t == gcd`
///
/// Runs in O(log min(a, b)) iterations. The Bézout coefficients may be negative.
pub fn extended_gcd(a: &BigInt, b: &BigInt) -> (BigInt, BigInt, BigInt) {
    let (mut old_r, mut r) = (a.clone(), b.clone());
    let (mut old_s, mut s) = (BigInt::one(), BigInt::zero());
    let (mut old_t, mut t) = (BigInt::zero(), BigInt::one());

    while !r.is_zero() {
        let quotient = &old_r / &r;

        // (old, cur) <- (cur, old - q * cur)
        let next_r = &old_r - &quotient * &r;
        old_r = mem::replace(&mut r, next_r);

        let next_s = &old_s - &quotient * &s;
        old_s = mem::replace(&mut s, next_s);

        let next_t = &old_t - &quotient * &t;
        old_t = mem::replace(&mut t, next_t);
    }

    (old_r, old_s, old_t)
}

/// Modular inverse: returns `m` in `[0, p - 1]` with `(a * m) mod p == 1`
///
/// # Errors
/// [`EcError::NoInverse`] if `p <= 0`, `a ≡ 0 (mod p)` or `gcd(a, p) != 1`.
pub fn mod_inverse(a: &BigInt, p: &BigInt) -> Result<BigInt> {
    if !p.is_positive() {
        return Err(no_inverse(a, p));
    }
    let reduced = modulo(a, p);
    if reduced.is_zero() {
        return Err(no_inverse(a, p));
    }

    let (gcd, s, _) = extended_gcd(&reduced, p);
    if !gcd.is_one() {
        return Err(no_inverse(a, p));
    }

    Ok(modulo(&s, p))
}

fn no_inverse(a: &BigInt, p: &BigInt) -> EcError {
    EcError::NoInverse {
        value: a.to_string(),
        modulus: p.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_traits::Num;

    fn secp_p() -> BigInt {
        BigInt::from_str_radix(
            "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEFFFFFC2F",
            16,
        )
        .unwrap()
    }

    #[test]
    fn test_modulo_negative_value() {
        let p = BigInt::from(97);
        assert_eq!(modulo(&BigInt::from(-1), &p), BigInt::from(96));
        assert_eq!(modulo(&BigInt::from(-194), &p), BigInt::zero());
        assert_eq!(modulo(&BigInt::from(200), &p), BigInt::from(6));
    }

    #[test]
    fn test_extended_gcd_bezout() {
        let a = BigInt::from(240);
        let b = BigInt::from(46);
        let (g, s, t) = extended_gcd(&a, &b);

        assert_eq!(g, BigInt::from(2));
        assert_eq!(&a * &s + &b * &t, g);
    }

    #[test]
    fn test_inverse_small_field() {
        let p = BigInt::from(5);
        let inv = mod_inverse(&BigInt::from(3), &p).unwrap();
        assert_eq!(inv, BigInt::from(2)); // 3 * 2 = 6 ≡ 1 (mod 5)
    }

    #[test]
    fn test_inverse_of_negative_value() {
        let p = BigInt::from(97);
        let inv = mod_inverse(&BigInt::from(-3), &p).unwrap();
        assert_eq!(modulo(&(BigInt::from(-3) * inv), &p), BigInt::one());
    }

    #[test]
    fn test_inverse_every_element_f97() {
        let p = BigInt::from(97);
        for a in 1..97 {
            let a = BigInt::from(a);
            let inv = mod_inverse(&a, &p).unwrap();
            assert!(inv >= BigInt::zero() && inv < p);
            assert_eq!(modulo(&(&a * &inv), &p), BigInt::one());
        }
    }

    #[test]
    fn test_inverse_secp256k1_field() {
        let p = secp_p();
        let a = BigInt::from_str_radix(
            "79BE667EF9DCBBAC55A06295CE870B07029BFCDB2DCE28D959F2815B16F81798",
            16,
        )
        .unwrap();
        let inv = mod_inverse(&a, &p).unwrap();
        assert_eq!(modulo(&(a * inv), &p), BigInt::one());
    }

    #[test]
    fn test_inverse_of_zero_fails() {
        let p = BigInt::from(97);
        assert!(matches!(
            mod_inverse(&BigInt::zero(), &p),
            Err(EcError::NoInverse { .. })
        ));
        assert!(matches!(
            mod_inverse(&BigInt::from(194), &p),
            Err(EcError::NoInverse { .. })
        ));
    }

    #[test]
    fn test_inverse_non_positive_modulus_fails() {
        let a = BigInt::from(3);
        assert!(matches!(
            mod_inverse(&a, &BigInt::zero()),
            Err(EcError::NoInverse { .. })
        ));
        assert!(matches!(
            mod_inverse(&a, &BigInt::from(-7)),
            Err(EcError::NoInverse { .. })
        ));
    }

    #[test]
    fn test_inverse_non_coprime_fails() {
        let m = BigInt::from(12);
        assert!(mod_inverse(&BigInt::from(8), &m).is_err());
        assert_eq!(mod_inverse(&BigInt::from(5), &m).unwrap(), BigInt::from(5));
    }
}
