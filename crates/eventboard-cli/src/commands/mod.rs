//! Command implementations.

pub mod config;
pub mod generate;
pub mod preview;

use std::path::{Component, Path, PathBuf};

use crate::config::AppConfig;

/// Input and output paths after command-line overrides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paths {
    pub input: PathBuf,
    pub output: PathBuf,
}

impl Paths {
    pub fn resolve(config: &AppConfig, input: Option<&Path>, output: Option<&Path>) -> Self {
        Self {
            input: input.map_or_else(|| config.source.path.clone(), Path::to_path_buf),
            output: output.map_or_else(|| config.output.path.clone(), Path::to_path_buf),
        }
    }

    /// Returns true when writing the output would replace the input file.
    pub fn output_replaces_input(&self) -> bool {
        same_file(&self.input, &self.output)
    }
}

/// Returns true when `a` and `b` name the same file, however they are
/// spelled. Neither file has to exist.
pub fn same_file(a: &Path, b: &Path) -> bool {
    a == b || resolve(a) == resolve(b)
}

/// Resolves `path` against the working directory, following symlinks as far
/// as the filesystem allows.
fn resolve(path: &Path) -> PathBuf {
    let absolute = lexical_absolute(path);
    if let Ok(full) = absolute.canonicalize() {
        return full;
    }
    let dir = absolute.parent().and_then(|parent| parent.canonicalize().ok());
    if let (Some(dir), Some(name)) = (dir, absolute.file_name()) {
        return dir.join(name);
    }
    absolute
}

/// Makes `path` absolute and folds `.` and `..` without touching the
/// filesystem.
fn lexical_absolute(path: &Path) -> PathBuf {
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("/"))
            .join(path)
    };

    let mut out = PathBuf::new();
    for component in joined.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other),
        }
    }
    out
}
