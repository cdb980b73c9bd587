//! Artifact identifiers and sharded-path utilities.
//!
//! Generated lab records are stored under a directory derived from a generated identifier,
//! never from anything the caller supplied. The register number in a request is display-only;
//! the storage key is an [`ArtifactId`].
//!
//! ## Canonical form
//! - Length: 32
//! - Characters: `0-9` and `a-f` only
//! - Example: `550e8400e29b41d4a716446655440000`
//!
//! This is what `Uuid::new_v4().simple().to_string()` produces. Hyphenated or uppercase values
//! are rejected by [`ArtifactId::parse`] rather than normalised.
//!
//! ## Sharded directory layout
//! For a canonical id `u`, artifacts live under:
//! `parent_dir/<u[0..2]>/<u[2..4]>/<u>/`
//!
//! Example:
//! `generated_records/55/0e/550e8400e29b41d4a716446655440000/`

mod service;

pub use service::{ArtifactId, Uuid};

/// Error type for identifier operations.
#[derive(Debug, thiserror::Error)]
pub enum UuidError {
    /// Invalid input provided
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type for identifier operations.
pub type UuidResult<T> = Result<T, UuidError>;
