use std::io;

use anyhow::Context;
use clap::Parser;
use product_app::{repl, Config, UreqTransport};
use product_core::{App, ProductApi, ProductClient};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Logs go to stderr so they never interleave with rendered screens.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "product_app=info,product_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = Config::parse();
    tracing::info!(api_url = %config.api_url, route = %config.route, "starting product client");

    let api = ProductApi::new(ProductClient::new(&config.api_url), UreqTransport::new());
    let mut app = App::at(api, config.route);

    repl::run(&mut app, io::stdin().lock(), io::stdout().lock()).context("terminal I/O failed")?;
    Ok(())
}
