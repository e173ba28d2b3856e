use crate::{HashError, ObjectId, DIGEST_LEN};

/// Streaming SHA-1 computation with collision detection.
///
/// Data can be fed incrementally with [`update`](Hasher::update) or through
/// the [`std::io::Write`] implementation, then finalised into an
/// [`ObjectId`]. Inputs that trip the SHA-1 collision detector are refused
/// instead of producing an id.
pub struct Hasher {
    inner: Box<sha1_checked::Sha1>,
}

impl Hasher {
    pub fn new() -> Self {
        use digest::Digest;
        Self {
            inner: Box::new(sha1_checked::Sha1::new()),
        }
    }

    /// Feed data into the hasher.
    pub fn update(&mut self, data: &[u8]) {
        use digest::Digest;
        self.inner.update(data);
    }

    /// Finalize and return the ObjectId.
    ///
    /// Returns an error if SHA-1 collision detection fires.
    pub fn finalize(self) -> Result<ObjectId, HashError> {
        let result = self.inner.try_finalize();
        if result.has_collision() {
            return Err(HashError::Sha1Collision);
        }
        let mut bytes = [0u8; DIGEST_LEN];
        bytes.copy_from_slice(result.hash().as_slice());
        Ok(ObjectId::new(bytes))
    }

    /// Plain SHA-1 of `data`, without any object header.
    pub fn digest(data: &[u8]) -> Result<ObjectId, HashError> {
        let mut h = Self::new();
        h.update(data);
        h.finalize()
    }

    /// Hash a git object: `"{kind} {len}\0{content}"`.
    pub fn hash_object(kind: &str, data: &[u8]) -> Result<ObjectId, HashError> {
        let mut h = Self::new();
        h.update(&object_header(kind, data.len()));
        h.update(data);
        h.finalize()
    }

    /// Hash `data` as a blob, matching `git hash-object`.
    pub fn hash_blob(data: &[u8]) -> Result<ObjectId, HashError> {
        Self::hash_object("blob", data)
    }
}

impl Default for Hasher {
    fn default() -> Self {
        Self::new()
    }
}

impl std::io::Write for Hasher {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.update(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

/// The loose-object header git prepends before hashing: `"{kind} {len}\0"`.
///
/// `len` is rendered in ASCII decimal with no padding.
pub fn object_header(kind: &str, len: usize) -> Vec<u8> {
    format!("{kind} {len}\0").into_bytes()
}
