use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use git_hash::hasher::{object_header, Hasher};
use git_hash::ObjectId;

use crate::{Result, VerifyError};

/// The header git prepends to blob content before hashing: `"blob <len>\0"`.
pub fn blob_header(len: usize) -> Vec<u8> {
    object_header("blob", len)
}

/// Computes the id a git hosting service assigns to a file's content.
///
/// The whole file is read into memory; there is no streaming mode.
#[derive(Debug, Clone, Copy, Default)]
pub struct BlobHasher;

impl BlobHasher {
    /// Blob id of the file at `path` as 40 lowercase hex characters.
    pub fn compute(path: impl AsRef<Path>) -> Result<String> {
        Ok(Self::compute_oid(path)?.to_hex())
    }

    /// Blob id of the file at `path`.
    pub fn compute_oid(path: impl AsRef<Path>) -> Result<ObjectId> {
        let path = path.as_ref();
        check_path(path)?;
        let content = read_file(path)?;
        tracing::debug!(path = %path.display(), len = content.len(), "hashing blob");
        Self::hash_bytes(&content)
    }

    /// Blob id of in-memory content.
    pub fn hash_bytes(content: &[u8]) -> Result<ObjectId> {
        Ok(Hasher::hash_blob(content)?)
    }
}

pub(crate) fn check_path(path: &Path) -> Result<()> {
    if path.as_os_str().to_string_lossy().trim().is_empty() {
        return Err(VerifyError::InvalidArgument("file path is empty".into()));
    }
    Ok(())
}

/// Read the complete file. The handle is closed before returning on every
/// path, and a failed read never yields a partial buffer.
fn read_file(path: &Path) -> Result<Vec<u8>> {
    let mut file = File::open(path).map_err(|e| VerifyError::file_access(path, e))?;
    let meta = file
        .metadata()
        .map_err(|e| VerifyError::file_access(path, e))?;
    if !meta.is_file() {
        return Err(VerifyError::file_access(
            path,
            io::Error::new(io::ErrorKind::InvalidInput, "not a regular file"),
        ));
    }

    let mut content = Vec::with_capacity(meta.len() as usize);
    file.read_to_end(&mut content)
        .map_err(|e| VerifyError::file_access(path, e))?;
    Ok(content)
}
