use ecpubkey::field::modulo;
use ecpubkey::{CurveConfig, EcError, Point, Secp256k1, SecretKey};
use num_bigint::BigInt;
use num_traits::{One, Zero};

type Key = SecretKey<Secp256k1>;

fn hex(s: &str) -> BigInt {
    BigInt::parse_bytes(s.as_bytes(), 16).unwrap()
}

fn g() -> &'static Point<'static> {
    Secp256k1::generator().g()
}

fn assert_point(point: &Point<'_>, x: &str, y: &str) {
    assert_eq!(point.x(), Some(&hex(x)));
    assert_eq!(point.y(), Some(&hex(y)));
}

#[test]
fn test_generator_known_vector() {
    let g = g();
    assert_point(
        g,
        "79BE667EF9DCBBAC55A06295CE870B07029BFCDB2DCE28D959F2815B16F81798",
        "483ADA7726A3C4655DA4FBFC0E1108A8FD17B448A68554199C47D08FFB10D4B8",
    );
    let (x, y) = (g.x().unwrap(), g.y().unwrap());
    let p = Secp256k1::curve().p();
    assert!(modulo(&(y * y - x * x * x - BigInt::from(7)), p).is_zero());
}

#[test]
fn test_scalar_one_yields_generator() {
    assert_eq!(&g().scalar_mul(&BigInt::one()).unwrap(), g());
    let public = Key::new(BigInt::one()).unwrap().public_key().unwrap();
    assert_eq!(&public.to_point(), g());
}

#[test]
fn test_addition_matches_scalar_multiplication() {
    let two_g = g().add(g()).unwrap();
    let three_g = two_g.add(g()).unwrap();

    assert_eq!(two_g, g().scalar_mul(&BigInt::from(2)).unwrap());
    assert_eq!(three_g, g().scalar_mul(&BigInt::from(3)).unwrap());
    assert_eq!(two_g, g().double().unwrap());
}

#[test]
fn test_small_multiples_known_vectors() {
    assert_point(
        &g().scalar_mul(&BigInt::from(2)).unwrap(),
        "C6047F9441ED7D6D3045406E95C07CD85C778E4B8CEF3CA7ABAC09B95C709EE5",
        "1AE168FEA63DC339A3C58419466CEAEEF7F632653266D0E1236431A950CFE52A",
    );
    assert_point(
        &g().scalar_mul(&BigInt::from(3)).unwrap(),
        "F9308A019258C31049344F85F89D5229B531C845836F99B08601F113BCE036F9",
        "388F7B0F632DE8140FE337E62A37F3566500A99934C2231B6CB9FD7584B8E672",
    );
}

#[test]
fn test_key_from_phrase_bytes() {
    let key = Key::from_be_bytes(b"ecpubkey demo secret").unwrap();
    assert_eq!(
        key.scalar(),
        &"578825638147745588006771721877647004570592896372"
            .parse::<BigInt>()
            .unwrap()
    );
    let public = key.public_key().unwrap();
    assert_eq!(
        public.x(),
        &hex("959037A0099EEB7556E7B907EC6AF926F1B59299AB8F915DFF93765138EDC46C")
    );
    assert_eq!(
        public.y(),
        &hex("36B297B7D6EEBED92D004A27A0D1508B3A5D9E04D87CCA8427621E9917B329CF")
    );
    assert!(public.to_point().is_on_curve());
}

#[test]
fn test_key_from_lukas_is_cool() {
    let key = Key::from_be_bytes(b"Lukas is cool").unwrap();
    assert_eq!(
        key.scalar(),
        &"6057679912489145726768730042220".parse::<BigInt>().unwrap()
    );
    let public = key.public_key().unwrap();
    assert_eq!(
        public.x(),
        &hex("95C844CDEE786E2CCCE182848BAABA4BC9A447661CDBB0A55E56617644F6AC34")
    );
    assert_eq!(
        public.y(),
        &hex("20AB29E4E53E8AD249B4364A5832D2BFADF918928676EFDB9C5807BF09C8E54C")
    );
    assert!(public.to_point().is_on_curve());
}

#[test]
fn test_order_boundaries() {
    let generator = Secp256k1::generator();
    let n = generator.n();

    assert_eq!(g().scalar_mul(&BigInt::zero()).unwrap(), Point::Infinity);
    assert_eq!(g().scalar_mul(n).unwrap(), Point::Infinity);
    assert!(generator.verify_order().unwrap());

    let n_minus_1 = n - BigInt::one();
    assert_eq!(g().scalar_mul(&n_minus_1).unwrap(), g().negate());
    assert_eq!(generator.public_key(&n_minus_1).unwrap(), g().negate());
}

#[test]
fn test_domain_validation_rejects_zero_and_order() {
    let n = Secp256k1::generator().n().clone();
    for scalar in [BigInt::zero(), n] {
        let result = Secp256k1::generator().public_key(&scalar);
        assert!(matches!(result, Err(EcError::ScalarOutOfRange { .. })));
        assert!(Key::new(scalar).is_err());
    }
}

#[test]
fn test_negative_scalar_rejected() {
    assert!(matches!(
        g().scalar_mul(&BigInt::from(-3)),
        Err(EcError::NegativeScalar(_))
    ));
}

#[test]
fn test_inverse_point_sums_to_identity() {
    let p = g().scalar_mul(&BigInt::from(12345)).unwrap();
    let neg = p.negate();
    let p_mod = Secp256k1::curve().p();
    assert_eq!(neg.y().unwrap(), &modulo(&(p_mod - p.y().unwrap()), p_mod));
    assert_eq!(p.add(&neg).unwrap(), Point::Infinity);
    assert_eq!(neg.add(&p).unwrap(), Point::Infinity);
}
