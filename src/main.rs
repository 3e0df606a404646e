//! Public Key Derivation Demo
//!
//! Derives secp256k1 public keys and checks each one against the curve
//! equation.
//!
//! Run with: cargo run --release -- [--secret-hex <HEX>] [--batch <N>]
//!
//! The program will:
//! 1. Check the generator against y² = x³ + 7
//! 2. Derive the keys for the secrets 1, 2 and 3 and compare with G, G+G, G+G+G
//! 3. Derive the key for a secret decoded from bytes (big-endian)
//! 4. Optionally derive the key for a hex secret and a parallel batch of random keys
//!
//! Log verbosity follows `RUST_LOG` (default `info`).

use anyhow::{Context, Result};
use clap::Parser;
use ecpubkey::{derive_public_keys, CurveConfig, Point, Secp256k1, SecretKey};
use num_bigint::BigInt;
use std::time::Instant;
use tracing::info;
use tracing_subscriber::EnvFilter;

type Key = SecretKey<Secp256k1>;

#[derive(Parser, Debug)]
#[command(version, about = "Derive secp256k1 public keys from secret scalars")]
struct Args {
    /// Secret key as big-endian hex (no 0x prefix)
    #[arg(long)]
    secret_hex: Option<String>,

    /// Number of random keys to derive in parallel
    #[arg(long, default_value_t = 0)]
    batch: usize,

    /// Bytes decoded as a big-endian secret
    #[arg(long, default_value = "Lukas is cool")]
    phrase: String,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    println!("================================================================================");
    println!("{} public key derivation", Secp256k1::NAME);
    println!("================================================================================\n");

    let generator = Secp256k1::generator();
    println!("Generator is on the curve: {}", generator.g().is_on_curve());

    // k*G against repeated addition
    let g = generator.g();
    let mut sum = Point::infinity();
    for k in 1..=3u32 {
        sum = sum.add(g)?;
        let public = Key::new(BigInt::from(k))?.public_key()?;
        println!("\nsecret key: {k}");
        report(&public.to_point());
        println!("matches {k} additions of G: {}", public.to_point() == sum);
    }

    let key = Key::from_be_bytes(args.phrase.as_bytes())
        .with_context(|| format!("phrase {:?} is not a valid secret", args.phrase))?;
    println!("\nsecret key from {:?}: {}", args.phrase, key.scalar());
    report(&key.public_key()?.to_point());

    if let Some(secret_hex) = &args.secret_hex {
        let bytes = hex::decode(secret_hex.trim_start_matches("0x"))
            .context("secret must be hex encoded")?;
        let key = Key::from_be_bytes(&bytes)?;
        println!("\nsecret key {secret_hex}:");
        report(&key.public_key()?.to_point());
    }

    if args.batch > 0 {
        let keys: Vec<Key> = (0..args.batch).map(|_| Key::generate()).collect();
        let start = Instant::now();
        let publics = derive_public_keys(&keys)?;
        info!(
            count = publics.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "batch derived"
        );
        let valid = publics.iter().filter(|p| p.to_point().is_on_curve()).count();
        println!("\nbatch: {valid}/{} public keys on the curve", publics.len());
    }

    Ok(())
}

fn report(point: &Point<'_>) {
    println!("public key: {point}");
    println!("on the curve: {}", point.is_on_curve());
}
