// newscheck/src/main.rs
//! newscheck entry point.
//!
//! Parses the CLI, initializes logging and dispatches to `serve` or `check`.

use anyhow::Result;
use clap::Parser;

use newscheck::cli::{Cli, Commands};
use newscheck::commands::{check::run_check, serve::run_serve};
use newscheck::logger;

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env file is fine; the CLI defaults cover everything.
    dotenvy::dotenv().ok();

    let args = Cli::parse();
    logger::init_logger(logger::level_from_flags(args.quiet, args.debug));

    match args.command {
        Commands::Serve(cmd) => run_serve(cmd).await,
        Commands::Check(cmd) => run_check(cmd),
    }
}
