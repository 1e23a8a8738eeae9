//! libris CLI entrypoint

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use libris::cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // LIBRIS_LOG wins over --verbose; logs go to stderr so --json output stays clean
    let filter = EnvFilter::try_from_env("LIBRIS_LOG")
        .unwrap_or_else(|_| EnvFilter::new(cli.log_level()));
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    cli.execute()
}
