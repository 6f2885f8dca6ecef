//! eventboard CLI entry point.

use std::process::ExitCode;

use chrono::Local;
use clap::Parser;
use tracing::warn;

use eventboard_cli::cli::{Cli, Command, ConfigAction};
use eventboard_cli::commands::{self, Paths};
use eventboard_cli::config::AppConfig;
use eventboard_cli::error::{CliError, CliResult};
use eventboard_core::{init_tracing, TracingConfig};

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = init_tracing(TracingConfig::for_verbosity(cli.verbose)) {
        eprintln!("warning: {}", e);
    }

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> CliResult<()> {
    let loaded = AppConfig::load(cli.config.as_deref()).map_err(CliError::Config)?;
    let paths = Paths::resolve(&loaded.config, cli.input.as_deref(), cli.output.as_deref());

    match cli.command.unwrap_or(Command::Generate) {
        Command::Config { action } => match action {
            ConfigAction::Dump => commands::config::dump(&loaded),
            ConfigAction::Validate => commands::config::validate(&loaded),
            ConfigAction::Path => commands::config::path(&loaded),
        },
        Command::Preview { at, sort } => {
            check_config(&loaded.config)?;
            commands::preview::run(&loaded.config, &paths, at.as_deref(), sort)
        }
        Command::Generate => {
            check_config(&loaded.config)?;
            let now = Local::now().naive_local();
            let summary = commands::generate::run(&loaded.config, &paths, now)?;
            println!(
                "성공적으로 {} 파일이 생성되었습니다. ({}개 이벤트)",
                paths.output.display(),
                summary.events
            );
            Ok(())
        }
    }
}

fn check_config(config: &AppConfig) -> CliResult<()> {
    for warning in config.validate().map_err(CliError::Config)? {
        warn!("{}", warning);
    }
    Ok(())
}
