//! Elliptic curve groups over prime fields
//!
//! Curves are in short Weierstrass form `y² = x³ + ax + b (mod p)`. A [`Point`]
//! is either the point at infinity (the group identity) or an affine point that
//! borrows the [`Curve`] it lies on.
//!
//! All arithmetic is variable time. Do not use this module where timing
//! side channels matter.

use crate::error::{EcError, Result};
use crate::field::{mod_inverse, modulo};
use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{Signed, Zero};
use std::fmt;
use tracing::trace;

/// An elliptic curve in short Weierstrass form: y² = x³ + ax + b (mod p)
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Curve {
    p: BigInt,
    a: BigInt,
    b: BigInt,
}

impl Curve {
    /// Creates a curve over F_p, reducing `a` and `b` modulo `p`
    ///
    /// `p` is assumed to be an odd prime greater than 3; it is not tested for
    /// primality.
    ///
    /// # Errors
    /// - [`EcError::InvalidModulus`] if `p <= 3`
    /// - [`EcError::SingularCurve`] if `4a³ + 27b² ≡ 0 (mod p)`
    pub fn new(p: BigInt, a: BigInt, b: BigInt) -> Result<Self> {
        if p <= BigInt::from(3u32) {
            return Err(EcError::InvalidModulus(p.to_string()));
        }
        let a = modulo(&a, &p);
        let b = modulo(&b, &p);

        let discriminant = BigInt::from(4u32) * &a * &a * &a + BigInt::from(27u32) * &b * &b;
        if modulo(&discriminant, &p).is_zero() {
            return Err(EcError::SingularCurve);
        }

        Ok(Self { p, a, b })
    }

    /// Prime modulus of the base field
    pub fn p(&self) -> &BigInt {
        &self.p
    }

    /// Coefficient a, reduced into `[0, p - 1]`
    pub fn a(&self) -> &BigInt {
        &self.a
    }

    /// Coefficient b, reduced into `[0, p - 1]`
    pub fn b(&self) -> &BigInt {
        &self.b
    }

    /// Returns true if `(y² - x³ - ax - b) mod p == 0`
    pub fn contains(&self, x: &BigInt, y: &BigInt) -> bool {
        let lhs = y * y;
        let rhs = x * x * x + &self.a * x + &self.b;
        modulo(&(lhs - rhs), &self.p).is_zero()
    }

    /// Builds an affine point on this curve, checking the curve equation
    pub fn point(&self, x: BigInt, y: BigInt) -> Result<Point<'_>> {
        Point::new(self, x, y)
    }

    pub fn identity(&self) -> Point<'_> {
        Point::Infinity
    }
}

/// Affine coordinates of a point on `curve`
///
/// Only built by [`Point::new`] or the group law, so `x` and `y` are always in
/// `[0, p - 1]` and each point has exactly one encoding.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AffinePoint<'c> {
    curve: &'c Curve,
    x: BigInt,
    y: BigInt,
}

impl<'c> AffinePoint<'c> {
    pub fn curve(&self) -> &'c Curve {
        self.curve
    }

    pub fn x(&self) -> &BigInt {
        &self.x
    }

    pub fn y(&self) -> &BigInt {
        &self.y
    }

    /// Consumes the point, returning `(x, y)`
    pub fn into_coordinates(self) -> (BigInt, BigInt) {
        (self.x, self.y)
    }
}

/// A point on an elliptic curve
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Point<'c> {
    /// The point at infinity (identity element)
    Infinity,
    /// A point with affine coordinates in `[0, p - 1]`
    Affine(AffinePoint<'c>),
}

impl<'c> Point<'c> {
    /// Creates an affine point, reducing the coordinates modulo `p`
    ///
    /// # Errors
    /// [`EcError::NotOnCurve`] if the reduced coordinates do not satisfy the
    /// curve equation.
    pub fn new(curve: &'c Curve, x: BigInt, y: BigInt) -> Result<Self> {
        let x = modulo(&x, curve.p());
        let y = modulo(&y, curve.p());
        if !curve.contains(&x, &y) {
            return Err(EcError::not_on_curve(&x, &y));
        }
        Ok(Point::Affine(AffinePoint { curve, x, y }))
    }

    /// Builds an affine point from coordinates the caller guarantees are
    /// already reduced and on `curve`
    pub(crate) fn from_reduced(curve: &'c Curve, x: BigInt, y: BigInt) -> Self {
        Point::Affine(AffinePoint { curve, x, y })
    }

    /// The group identity O
    pub fn infinity() -> Self {
        Point::Infinity
    }

    pub fn is_infinity(&self) -> bool {
        matches!(self, Point::Infinity)
    }

    /// Affine x coordinate, `None` for the point at infinity
    pub fn x(&self) -> Option<&BigInt> {
        match self {
            Point::Infinity => None,
            Point::Affine(affine) => Some(&affine.x),
        }
    }

    /// Affine y coordinate, `None` for the point at infinity
    pub fn y(&self) -> Option<&BigInt> {
        match self {
            Point::Infinity => None,
            Point::Affine(affine) => Some(&affine.y),
        }
    }

    pub fn curve(&self) -> Option<&'c Curve> {
        match self {
            Point::Infinity => None,
            Point::Affine(affine) => Some(affine.curve),
        }
    }

    /// The point at infinity is on every curve.
    pub fn is_on_curve(&self) -> bool {
        match self {
            Point::Infinity => true,
            Point::Affine(affine) => affine.curve.contains(&affine.x, &affine.y),
        }
    }

    /// Returns -P = (x, (p - y) mod p)
    pub fn negate(&self) -> Self {
        match self {
            Point::Infinity => Point::Infinity,
            Point::Affine(AffinePoint { curve, x, y }) => Point::Affine(AffinePoint {
                curve: *curve,
                x: x.clone(),
                y: modulo(&(curve.p() - y), curve.p()),
            }),
        }
    }

    /// Group law: returns `self + other`
    ///
    /// Both operands are left untouched; the sum is a fresh point.
    ///
    /// # Errors
    /// - [`EcError::CurveMismatch`] if the two affine points use different curves
    /// - [`EcError::NoInverse`] if a slope denominator is not invertible, which
    ///   only happens when `p` is not prime
    pub fn add(&self, other: &Point<'c>) -> Result<Point<'c>> {
        match (self, other) {
            (Point::Infinity, _) => Ok(other.clone()),
            (_, Point::Infinity) => Ok(self.clone()),
            (
                Point::Affine(AffinePoint { curve, x: x1, y: y1 }),
                Point::Affine(AffinePoint {
                    curve: other_curve,
                    x: x2,
                    y: y2,
                }),
            ) => {
                if !std::ptr::eq(*curve, *other_curve) && curve != other_curve {
                    return Err(EcError::CurveMismatch);
                }

                // P + (-P) = O
                if x1 == x2 && y1 != y2 {
                    return Ok(Point::Infinity);
                }

                let p = curve.p();
                let slope = if x1 == x2 {
                    // Vertical tangent: 2P = O
                    if y1.is_zero() {
                        return Ok(Point::Infinity);
                    }
                    let numerator = BigInt::from(3u32) * x1 * x1 + curve.a();
                    let denominator = BigInt::from(2u32) * y1;
                    numerator * mod_inverse(&denominator, p)?
                } else {
                    (y1 - y2) * mod_inverse(&(x1 - x2), p)?
                };
                let slope = modulo(&slope, p);

                let rx = modulo(&(&slope * &slope - x1 - x2), p);
                let ry = modulo(&(-(&slope * (&rx - x1) + y1)), p);

                Ok(Point::Affine(AffinePoint {
                    curve: *curve,
                    x: rx,
                    y: ry,
                }))
            }
        }
    }

    pub fn double(&self) -> Result<Point<'c>> {
        self.add(self)
    }

    /// Scalar multiplication using double-and-add
    ///
    /// Computes k*P in O(log k) group operations:
    /// ```text
    /// result = O, addend = P
    /// while k > 0:
    ///     if k is odd: result = result + addend
    ///     addend = 2 * addend
    ///     k = k >> 1
    /// ```
    ///
    /// # Errors
    /// [`EcError::NegativeScalar`] if `k < 0`.
    pub fn scalar_mul(&self, k: &BigInt) -> Result<Point<'c>> {
        if k.is_negative() {
            return Err(EcError::NegativeScalar(k.to_string()));
        }
        trace!(bits = k.bits(), "scalar multiplication");

        let mut result = Point::Infinity;
        let mut addend = self.clone();
        let mut k = k.clone();

        while !k.is_zero() {
            if k.is_odd() {
                result = result.add(&addend)?;
            }
            addend = addend.double()?;
            k >>= 1u32;
        }

        Ok(result)
    }

    /// Returns true if `k*P` is the identity for `k = order`, i.e. `order` is a
    /// multiple of the order of this point.
    pub fn is_annihilated_by(&self, order: &BigInt) -> Result<bool> {
        Ok(!order.is_zero() && self.scalar_mul(order)?.is_infinity())
    }
}

impl fmt::Display for Point<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Point::Infinity => write!(f, "O (point at infinity)"),
            Point::Affine(affine) => write!(f, "({:#066X}, {:#066X})", affine.x, affine.y),
        }
    }
}
