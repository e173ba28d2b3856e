//! Verify local files against the blob ids a git hosting service reports.
//!
//! [`BlobHasher`] turns a file into the id git would assign it as a blob
//! (`sha1("blob <len>\0" + content)`), and [`HashValidator`] compares that id
//! with an expected hash obtained elsewhere, either printing a status line or
//! returning a boolean in quiet mode.
//!
//! ```no_run
//! use git_blob_verify::{BlobHasher, HashValidator, ValidateOptions};
//!
//! # fn main() -> git_blob_verify::Result<()> {
//! let hash = BlobHasher::compute("README.md")?;
//! let mut validator = HashValidator::stdout(ValidateOptions::new().quiet(true));
//! assert!(validator.validate("README.md", &hash)?);
//! # Ok(())
//! # }
//! ```

mod blob;
mod error;
mod validate;

pub use blob::{blob_header, BlobHasher};
pub use error::VerifyError;
pub use git_hash::ObjectId;
pub use git_utils::color::ColorMode;
pub use validate::{validate, HashValidator, Status, ValidateOptions};

pub type Result<T> = std::result::Result<T, VerifyError>;
