//! Command-line interface definition.

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use eventboard_core::SortOrder;

/// eventboard - Turn an event spreadsheet into a live countdown dashboard
#[derive(Debug, Parser)]
#[command(name = "eventboard")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(long, short, global = true, env = "EVENTBOARD_CONFIG")]
    pub config: Option<PathBuf>,

    /// Increase log output (-v info, -vv debug)
    #[arg(long, short = 'v', global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// CSV file to read (overrides [source] path)
    #[arg(long, short, global = true)]
    pub input: Option<PathBuf>,

    /// HTML file to write (overrides [output] path)
    #[arg(long, short, global = true)]
    pub output: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Generate the dashboard page (default)
    Generate,

    /// Print the countdowns the page would show at a given instant
    Preview {
        /// Instant to evaluate, e.g. "2025-05-30 09:00" (default: now)
        #[arg(long)]
        at: Option<String>,

        /// Card order: endingSoon, startDate or title
        #[arg(long)]
        sort: Option<SortOrder>,
    },

    /// Configuration commands
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Configuration actions.
#[derive(Debug, Clone, Copy, Subcommand)]
pub enum ConfigAction {
    /// Dump the effective configuration
    Dump,

    /// Validate configuration
    Validate,

    /// Show which configuration file applies
    Path,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_arguments_means_generate_defaults() {
        let cli = Cli::try_parse_from(["eventboard"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.input.is_none());
        assert!(cli.output.is_none());
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn path_overrides_and_verbosity() {
        let cli = Cli::try_parse_from([
            "eventboard", "-vv", "--input", "data.csv", "generate", "-o", "out.html",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.input, Some(PathBuf::from("data.csv")));
        assert_eq!(cli.output, Some(PathBuf::from("out.html")));
        assert!(matches!(cli.command, Some(Command::Generate)));
    }

    #[test]
    fn preview_options() {
        let cli = Cli::try_parse_from([
            "eventboard", "preview", "--at", "2025-05-30 09:00", "--sort", "title",
        ])
        .unwrap();
        match cli.command {
            Some(Command::Preview { at, sort }) => {
                assert_eq!(at.as_deref(), Some("2025-05-30 09:00"));
                assert_eq!(sort, Some(SortOrder::Title));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn bad_sort_is_rejected() {
        assert!(Cli::try_parse_from(["eventboard", "preview", "--sort", "random"]).is_err());
    }

    #[test]
    fn config_subcommands() {
        let cli = Cli::try_parse_from(["eventboard", "config", "validate"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Command::Config {
                action: ConfigAction::Validate
            })
        ));
    }
}
