// newscheck/src/lib.rs
//! # newscheck CLI and Web Front End
//!
//! This crate wires `newscheck-core` into a command-line tool and a
//! single-page web form. The `serve` subcommand hosts the form; `check`
//! classifies one snippet from the terminal.

pub mod cli;
pub mod commands;
pub mod logger;
pub mod server;

// Re-export the router builder for embedding and tests
pub use server::{build_router, AppState};
