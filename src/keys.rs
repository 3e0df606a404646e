//! Secret and public keys over a configured curve
//!
//! A [`SecretKey`] is a scalar already validated against the generator order,
//! so deriving its [`PublicKey`] cannot fail on range grounds.

use crate::config::CurveConfig;
use crate::curve::Point;
use crate::error::{EcError, Result};
use num_bigint::{BigInt, Sign};
use num_traits::One;
use rand::RngCore;
use rayon::prelude::*;
use std::fmt;
use std::marker::PhantomData;
use tracing::{debug, instrument};

/// A secret scalar k with 1 <= k < n
///
/// # Type Parameters
/// - `C`: Domain configuration (defines the curve and generator)
pub struct SecretKey<C: CurveConfig> {
    scalar: BigInt,
    _config: PhantomData<C>,
}

impl<C: CurveConfig> SecretKey<C> {
    /// Wraps `scalar` after checking it against the generator order
    ///
    /// # Errors
    /// [`crate::EcError::ScalarOutOfRange`] if `scalar` is not in `[1, n - 1]`.
    pub fn new(scalar: BigInt) -> Result<Self> {
        C::generator().validate_scalar(&scalar)?;
        Ok(Self {
            scalar,
            _config: PhantomData,
        })
    }

    /// Interprets `bytes` as a big-endian unsigned integer
    ///
    /// An empty slice decodes to zero and is rejected.
    pub fn from_be_bytes(bytes: &[u8]) -> Result<Self> {
        Self::new(BigInt::from_bytes_be(Sign::Plus, bytes))
    }

    /// Draws a uniform scalar in `[1, n - 1]` by rejection sampling
    pub fn random<R: RngCore + ?Sized>(rng: &mut R) -> Self {
        let n_minus_1 = C::generator().n() - BigInt::one();

        let bit_len = n_minus_1.bits() as usize;
        let byte_len = bit_len.div_ceil(8);
        let top_bits = bit_len % 8;
        let top_mask: u8 = if top_bits == 0 {
            0xFF
        } else {
            (1u8 << top_bits) - 1
        };

        let mut bytes = vec![0u8; byte_len];
        loop {
            rng.fill_bytes(&mut bytes);
            if let Some(first) = bytes.first_mut() {
                *first &= top_mask;
            }

            let candidate = BigInt::from_bytes_be(Sign::Plus, &bytes);
            if candidate < n_minus_1 {
                return Self {
                    scalar: candidate + BigInt::one(),
                    _config: PhantomData,
                };
            }
        }
    }

    /// Random key from the thread-local generator
    pub fn generate() -> Self {
        Self::random(&mut rand::rng())
    }

    pub fn scalar(&self) -> &BigInt {
        &self.scalar
    }

    /// Computes k*G
    #[instrument(skip_all, fields(curve = C::NAME))]
    pub fn public_key(&self) -> Result<PublicKey<C>> {
        match C::generator().public_key(&self.scalar)? {
            Point::Affine(affine) => {
                let (x, y) = affine.into_coordinates();
                Ok(PublicKey {
                    x,
                    y,
                    _config: PhantomData,
                })
            }
            Point::Infinity => Err(EcError::InvalidGenerator(
                "scalar below the order maps to the identity",
            )),
        }
    }
}

impl<C: CurveConfig> Clone for SecretKey<C> {
    fn clone(&self) -> Self {
        Self {
            scalar: self.scalar.clone(),
            _config: PhantomData,
        }
    }
}

impl<C: CurveConfig> PartialEq for SecretKey<C> {
    fn eq(&self, other: &Self) -> bool {
        self.scalar == other.scalar
    }
}

impl<C: CurveConfig> Eq for SecretKey<C> {}

// Never print the scalar
impl<C: CurveConfig> fmt::Debug for SecretKey<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SecretKey<{}>(..)", C::NAME)
    }
}

/// The point k*G for a secret key k; never the point at infinity
pub struct PublicKey<C: CurveConfig> {
    x: BigInt,
    y: BigInt,
    _config: PhantomData<C>,
}

impl<C: CurveConfig> PublicKey<C> {
    pub fn x(&self) -> &BigInt {
        &self.x
    }

    pub fn y(&self) -> &BigInt {
        &self.y
    }

    /// The key as a point on the configured curve
    pub fn to_point(&self) -> Point<'static> {
        Point::from_reduced(C::curve(), self.x.clone(), self.y.clone())
    }
}

impl<C: CurveConfig> Clone for PublicKey<C> {
    fn clone(&self) -> Self {
        Self {
            x: self.x.clone(),
            y: self.y.clone(),
            _config: PhantomData,
        }
    }
}

impl<C: CurveConfig> PartialEq for PublicKey<C> {
    fn eq(&self, other: &Self) -> bool {
        self.x == other.x && self.y == other.y
    }
}

impl<C: CurveConfig> Eq for PublicKey<C> {}

impl<C: CurveConfig> fmt::Debug for PublicKey<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PublicKey")
            .field("curve", &C::NAME)
            .field("x", &format_args!("{:#X}", self.x()))
            .field("y", &format_args!("{:#X}", self.y()))
            .finish()
    }
}

impl<C: CurveConfig> fmt::Display for PublicKey<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:#066X}, {:#066X})", self.x, self.y)
    }
}

/// Derives the public keys of `keys` in parallel, preserving order
///
/// Scalar multiplications share no mutable state, so each key is handled
/// independently on the rayon pool.
pub fn derive_public_keys<C: CurveConfig>(keys: &[SecretKey<C>]) -> Result<Vec<PublicKey<C>>> {
    debug!(count = keys.len(), curve = C::NAME, "batch public key derivation");
    keys.par_iter().map(SecretKey::public_key).collect()
}
