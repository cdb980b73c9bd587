//! Artifact storage for generated lab records.
//!
//! Every generated document is stored as its own artifact, keyed by a freshly generated
//! [`ArtifactId`]. Nothing the caller sends is ever used to build a path.
//!
//! ## Layout
//!
//! ```text
//! <root>/
//! └── 55/
//!     └── 0e/
//!         └── 550e8400e29b41d4a716446655440000/
//!             └── artifact
//! ```
//!
//! ## Write semantics
//!
//! Bytes are written to a temporary file inside the artifact directory, flushed to disk, and
//! then renamed into place. A reader either sees no artifact or the complete one. Removal is
//! the caller's job, see [`ArtifactStore::remove`].
//!
//! ## Example Usage
//!
//! ```no_run
//! use labrec_files::ArtifactStore;
//! use std::path::Path;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let store = ArtifactStore::new(Path::new("generated_records"))?;
//! let meta = store.publish(b"bytes", "application/octet-stream")?;
//! let bytes = store.read(&meta.id)?;
//! store.remove(&meta.id)?;
//! # Ok(())
//! # }
//! ```

mod constants;
mod store;

pub use constants::{ARTIFACT_FILE_NAME, HASH_ALGORITHM};
pub use labrec_uuid::ArtifactId;
pub use store::{ArtifactMetadata, ArtifactStore};

/// Errors that can occur during artifact operations
#[derive(Debug, thiserror::Error)]
pub enum FilesError {
    /// Root directory could not be created or resolved
    #[error("Invalid root directory: {0}")]
    InvalidRootDirectory(String),

    /// No artifact is stored under the given id
    #[error("Artifact not found: {0}")]
    ArtifactNotFound(ArtifactId),

    /// Temporary file could not be moved into its final location
    #[error("Failed to publish artifact {id}: {source}")]
    Publish {
        id: ArtifactId,
        #[source]
        source: std::io::Error,
    },

    /// I/O error occurred
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for artifact operations.
pub type FilesResult<T> = Result<T, FilesError>;
