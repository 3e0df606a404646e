//! Generator points and scalar domain validation

use crate::curve::{Curve, Point};
use crate::error::{EcError, Result};
use num_bigint::BigInt;
use num_traits::One;
use tracing::debug;

/// A base point G together with its precomputed order n
///
/// `n` is the smallest positive integer with n*G = O. It is supplied as a
/// domain constant and not derived at runtime; [`Generator::verify_order`]
/// checks it on demand.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Generator<'c> {
    curve: &'c Curve,
    g: Point<'c>,
    n: BigInt,
}

impl<'c> Generator<'c> {
    /// # Errors
    /// - [`EcError::InvalidGenerator`] if `g` is the point at infinity or `n < 2`
    /// - [`EcError::NotOnCurve`] if `g` does not satisfy its curve equation
    pub fn new(g: Point<'c>, n: BigInt) -> Result<Self> {
        let (curve, x, y) = match &g {
            Point::Infinity => {
                return Err(EcError::InvalidGenerator(
                    "base point is the point at infinity",
                ))
            }
            Point::Affine(affine) => (affine.curve(), affine.x(), affine.y()),
        };
        if !g.is_on_curve() {
            return Err(EcError::not_on_curve(x, y));
        }
        if n <= BigInt::one() {
            return Err(EcError::InvalidGenerator("order must be at least 2"));
        }
        Ok(Self { curve, g, n })
    }

    /// The base point G
    pub fn g(&self) -> &Point<'c> {
        &self.g
    }

    /// The order n of G
    pub fn n(&self) -> &BigInt {
        &self.n
    }

    /// The curve G lies on
    pub fn curve(&self) -> &'c Curve {
        self.curve
    }

    /// Checks `1 <= k < n`
    ///
    /// # Errors
    /// [`EcError::ScalarOutOfRange`] otherwise.
    pub fn validate_scalar(&self, k: &BigInt) -> Result<()> {
        if *k < BigInt::one() || *k >= self.n {
            return Err(EcError::ScalarOutOfRange {
                scalar: k.to_string(),
                order: format!("{:#X}", self.n),
            });
        }
        Ok(())
    }

    /// Validates `k` and returns the public key k*G
    ///
    /// # Errors
    /// - [`EcError::ScalarOutOfRange`] if `k` is not in `[1, n - 1]`
    /// - [`EcError::InvalidGenerator`] if k*G is the identity, meaning `n` is not
    ///   the order of G
    /// - [`EcError::NotOnCurve`] if the result fails the curve equation
    pub fn public_key(&self, k: &BigInt) -> Result<Point<'c>> {
        self.validate_scalar(k)?;

        let point = self.g.scalar_mul(k)?;
        if let Point::Affine(affine) = &point {
            if !point.is_on_curve() {
                return Err(EcError::not_on_curve(affine.x(), affine.y()));
            }
        } else {
            return Err(EcError::InvalidGenerator(
                "scalar below the order maps to the identity",
            ));
        }

        debug!(scalar_bits = k.bits(), "public key derived");
        Ok(point)
    }

    /// Returns true if n*G = O
    pub fn verify_order(&self) -> Result<bool> {
        self.g.is_annihilated_by(&self.n)
    }
}
