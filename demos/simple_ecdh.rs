//! Two-party ECDH over P-256
//!
//! A client and a server each generate a key pair, export their public
//! points, compute the shared secret from the other's point and compare.
//!
//! Usage:
//!   RUST_LOG=debug cargo run --example simple_ecdh

use ecka::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

fn init_tracing() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,ecka=info"));
    let _ = fmt().with_env_filter(env_filter).try_init();
}

/// Print `bytes` as uppercase hex, 16 bytes per line
fn dump_buf(info: &str, bytes: &[u8]) {
    println!("{}", info);
    for line in bytes.chunks(16) {
        let hex: Vec<String> = line.iter().map(|b| format!("{:02X}", b)).collect();
        println!("     {}", hex.join(" "));
    }
}

fn run() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let mut rng = ChaCha20Rng::from_entropy();
    println!("\n  . setup rng ... ok");

    let group = CurveGroup::from_name("P-256")?;
    println!("\n  . select ecp group {} ... ok", group.name());

    let client = generate_public(group, &mut rng)?;
    let client_pub = EcdhP256PublicKey::from_point(*client.public())?;
    dump_buf(
        "  1. ecdh client generate public parameter:",
        &client_pub.to_bytes_with_format(PointFormat::Uncompressed),
    );

    let server = generate_public(group, &mut rng)?;
    let server_pub = EcdhP256PublicKey::from_point(*server.public())?;
    dump_buf(
        "  2. ecdh server generate public parameter:",
        &server_pub.to_bytes_with_format(PointFormat::Uncompressed),
    );

    let client_secret = compute_shared(group, &client, server_pub.as_point())?;
    dump_buf("  3. ecdh client generate secret:", client_secret.as_bytes());

    let server_secret = compute_shared(group, &server, client_pub.as_point())?;
    dump_buf("  4. ecdh server generate secret:", server_secret.as_bytes());

    if client_secret != server_secret {
        return Err("client and server secrets differ".into());
    }
    println!("  5. ecdh checking secrets ... ok");
    Ok(())
}

fn main() -> ExitCode {
    init_tracing();

    match run() {
        Ok(()) => {
            info!("key agreement completed");
            ExitCode::SUCCESS
        }
        Err(e) => {
            println!("  !. failed: {}", e);
            error!(error = %e, "key agreement failed");
            ExitCode::FAILURE
        }
    }
}
