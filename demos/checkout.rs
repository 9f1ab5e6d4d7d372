//! Checkout Example
//!
//! Loads a fixture set (products, an order and promotion configuration), checks
//! the order out and prints the receipt.
//!
//! Use `-f` to load a fixture set by name
//! Use `-b` to point at a different fixtures directory
//!
//! Run with: `RUST_LOG=debug cargo run --example checkout -- -f double11`

use std::{io, time::Instant};

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use lattice_checkout::{fixtures::Fixture, receipt::Receipt, utils::ExampleCheckoutArgs};

/// Checkout Example
#[expect(clippy::print_stdout, reason = "Example code")]
pub fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .compact()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_err| EnvFilter::new("info")),
        )
        .init();

    let args = ExampleCheckoutArgs::parse();

    let mut fixture = Fixture::with_base_path(&args.base_path);

    fixture
        .load_products(&args.fixture)?
        .load_order(&args.fixture)?
        .load_promotions(&args.fixture)?;

    let start = Instant::now();

    let order = fixture.checkout()?;

    let elapsed = start.elapsed().as_secs_f32();

    let stdout = io::stdout();
    let mut handle = stdout.lock();

    Receipt::new(&order).write_to(&mut handle)?;

    println!("Checkout: {elapsed}s");

    Ok(())
}
