use std::path::PathBuf;

use thiserror::Error;

/// Failures while reading or writing a [`GalaxyConfig`](crate::GalaxyConfig).
///
/// Generation itself has no error path; only configuration I/O can fail.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read galaxy config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid galaxy config JSON: {0}")]
    Json(#[from] serde_json::Error),
}
