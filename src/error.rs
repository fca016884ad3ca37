use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a pack run.
///
/// Problems with individual input files never show up here; those become a
/// [`SkipReason`](crate::SkipReason) and the walk moves on.
#[derive(Debug, Error)]
pub enum PackError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid root directory: {0}")]
    InvalidRoot(PathBuf),
}

impl PackError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        PackError::Io {
            path: path.into(),
            source,
        }
    }
}
