use std::path::PathBuf;

use git_hash::HashError;

/// Errors produced while hashing or validating a file.
///
/// A hash mismatch is not an error; it is reported as
/// [`Status::Mismatch`](crate::Status::Mismatch).
#[derive(Debug, thiserror::Error)]
pub enum VerifyError {
    #[error("cannot read '{path}': {source}")]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error(transparent)]
    Hash(#[from] HashError),

    #[error("unable to write status: {0}")]
    Output(#[source] std::io::Error),
}

impl VerifyError {
    pub(crate) fn file_access(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileAccess {
            path: path.into(),
            source,
        }
    }
}
