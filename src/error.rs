//! Error types for curve arithmetic and key derivation

use num_bigint::BigInt;
use thiserror::Error;

/// Failures surfaced by field arithmetic, the group law and key validation.
///
/// Every variant is a caller contract violation: nothing here is retried or
/// recovered internally.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EcError {
    /// The value is congruent to zero (or shares a factor with the modulus).
    #[error("no modular inverse exists for {value} modulo {modulus}")]
    NoInverse { value: String, modulus: String },

    /// Secret scalar outside `[1, n - 1]`.
    #[error("scalar {scalar} is outside the valid range [1, {order} - 1]")]
    ScalarOutOfRange { scalar: String, order: String },

    #[error("scalar multiplication requires a non-negative scalar, got {0}")]
    NegativeScalar(String),

    /// Two affine points with different curve parameters were combined.
    #[error("points lie on different curves")]
    CurveMismatch,

    /// Field modulus that cannot carry a short Weierstrass curve (p <= 3).
    #[error("invalid field modulus {0}: expected an odd prime greater than 3")]
    InvalidModulus(String),

    /// 4a³ + 27b² ≡ 0 (mod p).
    #[error("curve is singular (discriminant is zero)")]
    SingularCurve,

    #[error("point ({x}, {y}) does not satisfy the curve equation")]
    NotOnCurve { x: String, y: String },

    #[error("invalid generator: {0}")]
    InvalidGenerator(&'static str),
}

impl EcError {
    pub(crate) fn not_on_curve(x: &BigInt, y: &BigInt) -> Self {
        EcError::NotOnCurve {
            x: format!("{x:#X}"),
            y: format!("{y:#X}"),
        }
    }
}

pub type Result<T> = std::result::Result<T, EcError>;
