//! Error types for record sources.

use std::fmt;
use thiserror::Error;

/// The category of a source error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceErrorCode {
    /// The input does not exist.
    Missing,
    /// The input exists but is not a usable table: I/O failure, malformed
    /// structure, invalid UTF-8 or a missing required column.
    Unreadable,
    /// The source was configured inconsistently (e.g. duplicate column names).
    Configuration,
}

impl SourceErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Missing => "source_missing",
            Self::Unreadable => "source_unreadable",
            Self::Configuration => "configuration_error",
        }
    }
}

impl fmt::Display for SourceErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An error raised while reading records from a source.
///
/// Per-row date problems are not errors; they are logged and the row is kept.
#[derive(Debug, Error)]
pub struct SourceError {
    code: SourceErrorCode,
    message: String,
    /// The source that raised it (e.g. "csv").
    source_name: Option<String>,
    #[source]
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl SourceError {
    pub fn new(code: SourceErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            source_name: None,
            source: None,
        }
    }

    /// Creates a missing-input error.
    pub fn missing(message: impl Into<String>) -> Self {
        Self::new(SourceErrorCode::Missing, message)
    }

    /// Creates an unreadable-input error.
    pub fn unreadable(message: impl Into<String>) -> Self {
        Self::new(SourceErrorCode::Unreadable, message)
    }

    /// Creates a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::new(SourceErrorCode::Configuration, message)
    }

    pub fn with_source_name(mut self, name: impl Into<String>) -> Self {
        self.source_name = Some(name.into());
        self
    }

    /// Attaches the underlying cause.
    pub fn with_source<E>(mut self, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        self.source = Some(Box::new(source));
        self
    }

    pub fn code(&self) -> SourceErrorCode {
        self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn source_name(&self) -> Option<&str> {
        self.source_name.as_deref()
    }

    /// Returns true when the input simply does not exist.
    pub fn is_missing(&self) -> bool {
        self.code == SourceErrorCode::Missing
    }
}

impl fmt::Display for SourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(ref name) = self.source_name {
            write!(f, "[{}] ", name)?;
        }
        write!(f, "{}: {}", self.code, self.message)
    }
}

pub type SourceResult<T> = Result<T, SourceError>;
