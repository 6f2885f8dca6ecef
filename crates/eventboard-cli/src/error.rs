//! CLI error types.

use std::fmt;

use eventboard_render::RenderError;
use eventboard_source::SourceError;

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

/// Errors that end a run. Each is printed as `error: ...` and the process
/// exits with a failure status.
#[derive(Debug)]
pub enum CliError {
    /// Unreadable or invalid configuration.
    Config(String),
    /// The source is missing or unreadable.
    Source(SourceError),
    /// The source loaded but had no rows.
    NoEvents(String),
    /// The page could not be built or written.
    Render(RenderError),
    /// A command-line value could not be used.
    InvalidArgument(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(msg) => write!(f, "configuration error: {}", msg),
            Self::Source(err) => write!(f, "{}", err),
            Self::NoEvents(location) => {
                write!(f, "no events found in {}; nothing was written", location)
            }
            Self::Render(err) => write!(f, "{}", err),
            Self::InvalidArgument(msg) => write!(f, "invalid argument: {}", msg),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Source(err) => Some(err),
            Self::Render(err) => Some(err),
            _ => None,
        }
    }
}

impl From<SourceError> for CliError {
    fn from(err: SourceError) -> Self {
        Self::Source(err)
    }
}

impl From<RenderError> for CliError {
    fn from(err: RenderError) -> Self {
        Self::Render(err)
    }
}
