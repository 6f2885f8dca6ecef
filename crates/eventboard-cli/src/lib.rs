//! CLI, configuration and commands
//!
//! This crate provides the `eventboard` command-line interface.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;

pub use cli::Cli;
pub use config::{AppConfig, LoadedConfig};
pub use error::{CliError, CliResult};
