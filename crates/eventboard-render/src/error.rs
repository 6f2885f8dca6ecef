//! Render error types.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors raised while building or writing the page.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to serialize embedded data: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("cannot write {}: {}", .path.display(), .source)]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl RenderError {
    pub fn write(path: &Path, source: io::Error) -> Self {
        Self::Write {
            path: path.to_path_buf(),
            source,
        }
    }
}

pub type RenderResult<T> = Result<T, RenderError>;
