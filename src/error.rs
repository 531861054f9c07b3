use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors from the fallible surfaces: file I/O, config and lesson JSON.
/// Text normalization itself never fails.
#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("failed to write {}: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },

    #[error("invalid config {}: {source}", path.display())]
    Config {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("invalid lesson JSON: {0}")]
    Lesson(#[from] serde_json::Error),
}
