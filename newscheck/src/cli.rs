// newscheck/src/cli.rs
//! This file defines the command-line interface (CLI) for the newscheck application,
//! including all available commands and their arguments.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "newscheck",
    author = "Newscheck Team",
    version = env!("CARGO_PKG_VERSION"),
    about = "Classify a news snippet as likely real or fake",
    long_about = "newscheck combines a pre-trained linear text classifier with keyword heuristics to label a short news snippet as verified real, mostly real, or likely fake. It can serve a single-page web form with a rolling history, or classify one snippet from the terminal.",
    arg_required_else_help = true,
)]
pub struct Cli {
    /// Disable informational messages
    #[arg(long, short = 'q', global = true, help = "Suppress all informational and debug messages.")]
    pub quiet: bool,

    /// Enable debug logging (overrides RUST_LOG)
    #[arg(long, short = 'd', global = true, help = "Enable debug logging.")]
    pub debug: bool,

    /// The subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// All available commands for the `newscheck` CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Serves the web form.
    #[command(about = "Serve the web form with a rolling verdict history.")]
    Serve(ServeCommand),

    /// Classifies a single snippet and prints the verdict.
    #[command(about = "Classify one snippet from an argument or stdin.")]
    Check(CheckCommand),
}

/// Artifact and configuration locations shared by every command.
#[derive(Args, Debug, Clone)]
pub struct ArtifactArgs {
    /// Path to the serialized linear model (JSON).
    #[arg(long = "model", value_name = "FILE", env = "NEWSCHECK_MODEL", default_value = "model.json", help = "Path to the trained model artifact (JSON).")]
    pub model: PathBuf,

    /// Path to the serialized TF-IDF vectorizer (JSON).
    #[arg(long = "vectorizer", value_name = "FILE", env = "NEWSCHECK_VECTORIZER", default_value = "vectorizer.json", help = "Path to the fitted vectorizer artifact (JSON).")]
    pub vectorizer: PathBuf,

    /// Path to a custom detector configuration file (YAML).
    #[arg(long = "config", value_name = "FILE", help = "Path to a custom keyword/scoring configuration file (YAML).")]
    pub config: Option<PathBuf>,
}

/// Arguments for the `serve` command.
#[derive(Parser, Debug)]
pub struct ServeCommand {
    #[command(flatten)]
    pub artifacts: ArtifactArgs,

    /// Interface to bind.
    #[arg(long = "host", value_name = "ADDR", env = "NEWSCHECK_HOST", default_value = "0.0.0.0", help = "Interface to bind.")]
    pub host: String,

    /// Primary port.
    #[arg(long = "port", short = 'p', value_name = "PORT", env = "NEWSCHECK_PORT", default_value_t = 5000, help = "Port to bind first.")]
    pub port: u16,

    /// Port tried when the primary port cannot be bound.
    #[arg(long = "fallback-port", value_name = "PORT", default_value_t = 8080, help = "Port to bind if the primary port is unavailable.")]
    pub fallback_port: u16,
}

/// Arguments for the `check` command.
#[derive(Parser, Debug)]
pub struct CheckCommand {
    #[command(flatten)]
    pub artifacts: ArtifactArgs,

    /// Print the full assessment as JSON.
    #[arg(long = "json", help = "Print the full assessment as JSON.")]
    pub json: bool,

    /// The snippet to classify (reads from stdin if not provided).
    #[arg(value_name = "TEXT", help = "The snippet to classify; reads stdin when omitted.")]
    pub text: Option<String>,
}
