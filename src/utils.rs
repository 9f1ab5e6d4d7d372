//! Utils

use clap::Parser;

/// Arguments for the checkout demo
#[derive(Debug, Parser)]
pub struct ExampleCheckoutArgs {
    /// Fixture set to use for the products, order & promotions
    #[clap(short, long, default_value = "double11")]
    pub fixture: String,

    /// Base directory holding the fixture sets
    #[clap(short, long, default_value = "./fixtures")]
    pub base_path: String,
}
