//! Utils

use clap::Parser;

/// Arguments for the storefront demo
#[derive(Debug, Parser)]
pub struct DemoArgs {
    /// Seed file to load the storefront from
    #[clap(short, long, default_value = "fixtures/default.yaml")]
    pub seed: String,

    /// Pay for every item by bank transfer instead of cash
    #[clap(short, long)]
    pub transfer: bool,

    /// Delivery zone name to check out with (defaults to the first active zone)
    #[clap(short, long)]
    pub zone: Option<String>,
}
