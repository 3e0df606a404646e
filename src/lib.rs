//! Elliptic Curve Public Key Derivation
//!
//! Point arithmetic over prime-field Weierstrass curves and secret-to-public
//! key derivation on secp256k1 (y² = x³ + 7):
//! - modular inverse via the extended Euclidean algorithm
//! - the group law, including the identity, inverse and doubling cases
//! - double-and-add scalar multiplication
//! - scalar range validation against the generator order
//!
//! ## Security Warning
//!
//! Nothing here runs in constant time. Use it to study the arithmetic, not to
//! protect real keys.
//!
//! ## Examples
//!
//! ```rust
//! use ecpubkey::{SecretKey, Secp256k1, CurveConfig};
//! use num_bigint::BigInt;
//!
//! let key = SecretKey::<Secp256k1>::new(BigInt::from(1)).unwrap();
//! let public = key.public_key().unwrap();
//! assert_eq!(&public.to_point(), Secp256k1::generator().g());
//! ```

/// Curve configuration trait binding domain parameters to a type
pub mod config;
/// Curves, points and the group law
pub mod curve;
pub mod error;
/// Modular arithmetic over arbitrary-precision integers
pub mod field;
/// Generator points and scalar validation
pub mod generator;
/// Secret and public keys
pub mod keys;
pub mod secp256k1;

// Re-export commonly used items
pub use config::CurveConfig;
pub use curve::{AffinePoint, Curve, Point};
pub use error::{EcError, Result};
pub use field::{extended_gcd, mod_inverse};
pub use generator::Generator;
pub use keys::{derive_public_keys, PublicKey, SecretKey};
pub use secp256k1::Secp256k1;
