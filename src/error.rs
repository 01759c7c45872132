use std::io;
use std::path::PathBuf;

/// Failures of the few operations that touch the outside world.
///
/// Filtering, lookup, routing and rendering are total; only loading a dataset
/// or a config file can fail.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid dataset JSON: {0}")]
    Dataset(#[source] serde_json::Error),

    #[error("invalid config {path}: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
