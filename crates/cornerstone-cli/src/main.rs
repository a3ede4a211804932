//! Cornerstone CLI - SEO content-analysis toolkit command-line interface
#![cfg_attr(
    test,
    allow(
        clippy::expect_used,
        clippy::unwrap_used,
        reason = "Allow for tests"
    )
)]

use anyhow::Result;
use clap::Parser as _;

use cli::Cli;

mod cli;
mod handlers;

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    handlers::run(cli).await
}

/// Initializes stderr logging filtered by `RUST_LOG`.
fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
}
