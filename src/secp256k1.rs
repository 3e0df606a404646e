//! The secp256k1 domain used by Bitcoin: y² = x³ + 7 over F_p
//!
//! p = 2²⁵⁶ - 2³² - 977

use crate::config::CurveConfig;
use crate::curve::{Curve, Point};
use crate::generator::Generator;
use num_bigint::BigInt;
use num_traits::Zero;
use once_cell::sync::Lazy;

/// Field modulus p
pub const P_HEX: &str = "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEFFFFFC2F";
/// Generator x coordinate
pub const GX_HEX: &str = "79BE667EF9DCBBAC55A06295CE870B07029BFCDB2DCE28D959F2815B16F81798";
/// Generator y coordinate
pub const GY_HEX: &str = "483ADA7726A3C4655DA4FBFC0E1108A8FD17B448A68554199C47D08FFB10D4B8";
/// Order n of the generator
pub const N_HEX: &str = "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEBAAEDCE6AF48A03BBFD25E8CD0364141";

static CURVE: Lazy<Curve> = Lazy::new(|| {
    Curve::new(constant(P_HEX), BigInt::zero(), BigInt::from(7u32))
        .expect("secp256k1 curve is non-singular")
});

static GENERATOR: Lazy<Generator<'static>> = Lazy::new(|| {
    let curve: &'static Curve = Lazy::force(&CURVE);
    let g = Point::new(curve, constant(GX_HEX), constant(GY_HEX))
        .expect("secp256k1 generator lies on the curve");
    Generator::new(g, constant(N_HEX)).expect("secp256k1 generator is valid")
});

fn constant(hex: &str) -> BigInt {
    BigInt::parse_bytes(hex.as_bytes(), 16).expect("domain constants are valid hex")
}

/// Marker type for the secp256k1 domain parameters
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Secp256k1;

impl CurveConfig for Secp256k1 {
    const NAME: &'static str = "secp256k1";

    fn curve() -> &'static Curve {
        &CURVE
    }

    fn generator() -> &'static Generator<'static> {
        &GENERATOR
    }
}
