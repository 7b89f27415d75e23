//! Command-line and environment configuration.

use clap::Parser;
use product_core::{Route, DEFAULT_API_URL};

/// Terminal client for the product API.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// Product collection endpoint.
    #[arg(long, env = "PRODUCT_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Screen to open at startup: `/`, `/create` or `/edit/<id>`.
    #[arg(long, default_value = "/")]
    pub route: Route,
}
