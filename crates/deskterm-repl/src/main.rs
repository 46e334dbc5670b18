//! deskterm entry point.
//!
//! ```bash
//! cargo run -p deskterm-repl -- --ephemeral
//! ```

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use deskterm_repl::cli::Cli;

fn main() -> Result<()> {
    // Logs go to stderr so they never interleave with the transcript.
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let config = Cli::parse().into_config()?;
    deskterm_repl::run(config)
}
