use std::path::PathBuf;
use thiserror::Error;

/// Failures reading a backend payload from disk.
#[derive(Error, Debug)]
pub enum PayloadError {
    #[error("cannot read payload {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid payload {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
