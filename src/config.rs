//! Curve configuration trait
//!
//! Defines the `CurveConfig` trait used to bind a curve and its generator to a
//! type, so keys from different domains cannot be mixed.

use crate::curve::Curve;
use crate::generator::Generator;

/// Domain parameters fixed for the lifetime of the process
///
/// Implementors are zero-sized marker types. The curve and generator they
/// return are built once and never mutated.
///
/// # Example
/// ```
/// use ecpubkey::config::CurveConfig;
/// use ecpubkey::secp256k1::Secp256k1;
///
/// let n = Secp256k1::generator().n();
/// assert_eq!(n.bits(), 256);
/// ```
pub trait CurveConfig: 'static + Sized + Clone + Send + Sync {
    /// Human readable domain name, used in log output
    const NAME: &'static str;

    /// The curve y² = x³ + ax + b over F_p
    fn curve() -> &'static Curve;

    /// Base point G and its order n; G lies on [`CurveConfig::curve`]
    fn generator() -> &'static Generator<'static>;
}
