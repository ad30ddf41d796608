//! movelink: copy move entries between characters.
//!
//! Usage:
//!   movelink paste --dest BBB/ --source AAA/ --entries 300,301 --targets 300
//!   movelink add --dest BBB/ --source AAA/ --entries 330 --save-code NEW
//!
//! Destination tables are rewritten in place unless `--out` is given.

use anyhow::Result;
use clap::Parser;
use movelink_cli::{Cli, run};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let log_level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    let stdout = std::io::stdout();
    run(&cli, &mut stdout.lock())
}
