//! Configuration commands.

use crate::config::{AppConfig, LoadedConfig};
use crate::error::{CliError, CliResult};

/// Dump the effective configuration to stdout.
pub fn dump(loaded: &LoadedConfig) -> CliResult<()> {
    let toml_str = toml::to_string_pretty(&loaded.config)
        .map_err(|e| CliError::Config(format!("failed to serialize config: {}", e)))?;
    match loaded.path {
        Some(ref path) => println!("# {}", path.display()),
        None => println!("# built-in defaults"),
    }
    println!("{}", toml_str);
    Ok(())
}

/// Validate the configuration.
pub fn validate(loaded: &LoadedConfig) -> CliResult<()> {
    let warnings = loaded.config.validate().map_err(CliError::Config)?;
    for warning in warnings {
        println!("warning: {}", warning);
    }
    println!("Configuration is valid.");
    Ok(())
}

/// Show which configuration file applies.
pub fn path(loaded: &LoadedConfig) -> CliResult<()> {
    match loaded.path {
        Some(ref path) => println!("config: {}", path.display()),
        None => println!(
            "config: none (defaults); create {} or {}",
            crate::config::LOCAL_CONFIG_FILE,
            AppConfig::default_path().display()
        ),
    }
    Ok(())
}
