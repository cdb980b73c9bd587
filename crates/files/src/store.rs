//! Request-scoped artifact store implementation
//!
//! [`ArtifactStore`] owns a root directory and hands out one sharded directory per artifact.
//! Two publishes never share a path, so concurrent requests for the same lab record cannot
//! interleave their writes.
//!
//! # Implementation Notes
//!
//! - The constructor creates and canonicalises the root; no other eager I/O
//! - Publishing writes through [`tempfile::NamedTempFile`] in the destination directory so the
//!   final rename stays on one filesystem
//! - The store is cheap to clone and holds no open handles

use crate::{FilesError, FilesResult, ARTIFACT_FILE_NAME, HASH_ALGORITHM};
use chrono::{DateTime, Utc};
use labrec_uuid::ArtifactId;
use sha2::{Digest, Sha256};
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

/// Metadata for a published artifact
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
pub struct ArtifactMetadata {
    /// Storage key
    pub id: ArtifactId,

    /// Hashing algorithm used (always "sha256")
    pub hash_algorithm: String,

    /// Hexadecimal SHA-256 digest of the stored bytes
    pub hash: String,

    /// Path relative to the store root
    pub relative_path: String,

    /// Size of the artifact in bytes
    pub size_bytes: u64,

    /// Media type the artifact was published with
    pub media_type: String,

    /// UTC timestamp when the artifact became visible
    pub stored_at: DateTime<Utc>,
}

/// Store for generated artifacts
#[derive(Debug, Clone)]
pub struct ArtifactStore {
    root_directory: PathBuf,
}

impl ArtifactStore {
    /// Opens a store rooted at `root_directory`, creating the directory if needed.
    ///
    /// # Errors
    ///
    /// Returns `FilesError::InvalidRootDirectory` if the path exists but is not a directory, or
    /// if it cannot be created or canonicalised.
    pub fn new(root_directory: &Path) -> FilesResult<Self> {
        if root_directory.exists() && !root_directory.is_dir() {
            return Err(FilesError::InvalidRootDirectory(format!(
                "Path is not a directory: {}",
                root_directory.display()
            )));
        }

        fs::create_dir_all(root_directory).map_err(|e| {
            FilesError::InvalidRootDirectory(format!(
                "Cannot create {}: {}",
                root_directory.display(),
                e
            ))
        })?;

        let root_directory = root_directory.canonicalize().map_err(|e| {
            FilesError::InvalidRootDirectory(format!(
                "Cannot canonicalize path {}: {}",
                root_directory.display(),
                e
            ))
        })?;

        Ok(Self { root_directory })
    }

    /// Returns the canonicalised root directory.
    #[must_use]
    pub fn root_directory(&self) -> &Path {
        &self.root_directory
    }

    /// Writes `bytes` as a new artifact and returns its metadata.
    ///
    /// The artifact becomes visible at its final path only once fully written.
    ///
    /// # Errors
    ///
    /// Returns `FilesError` if the artifact directory cannot be created, the temporary file
    /// cannot be written or synced, or the final rename fails.
    pub fn publish(&self, bytes: &[u8], media_type: &str) -> FilesResult<ArtifactMetadata> {
        let id = ArtifactId::new();
        let artifact_dir = id.sharded_dir(&self.root_directory);
        fs::create_dir_all(&artifact_dir)?;

        let mut tmp = tempfile::NamedTempFile::new_in(&artifact_dir)?;
        tmp.write_all(bytes)?;
        tmp.as_file().sync_all()?;

        let final_path = artifact_dir.join(ARTIFACT_FILE_NAME);
        tmp.persist(&final_path).map_err(|e| FilesError::Publish {
            id: id.clone(),
            source: e.error,
        })?;

        let hash = hex::encode(Sha256::digest(bytes));

        tracing::debug!(artifact = %id, size = bytes.len(), "published artifact");

        Ok(ArtifactMetadata {
            relative_path: self.relative_path(&id),
            id,
            hash_algorithm: HASH_ALGORITHM.to_string(),
            hash,
            size_bytes: bytes.len() as u64,
            media_type: media_type.to_string(),
            stored_at: Utc::now(),
        })
    }

    /// Reads the bytes of a published artifact.
    ///
    /// # Errors
    ///
    /// Returns `FilesError::ArtifactNotFound` if nothing is stored under `id`, or
    /// `FilesError::Io` for any other read failure.
    pub fn read(&self, id: &ArtifactId) -> FilesResult<Vec<u8>> {
        fs::read(self.artifact_path(id)).map_err(|e| match e.kind() {
            ErrorKind::NotFound => FilesError::ArtifactNotFound(id.clone()),
            _ => FilesError::Io(e),
        })
    }

    /// Returns true if an artifact is stored under `id`.
    #[must_use]
    pub fn exists(&self, id: &ArtifactId) -> bool {
        self.artifact_path(id).is_file()
    }

    /// Removes an artifact and its directory.
    ///
    /// Empty shard directories left behind are pruned on a best-effort basis; a shard that is
    /// still in use by another artifact is kept.
    ///
    /// # Errors
    ///
    /// Returns `FilesError::ArtifactNotFound` if nothing is stored under `id`.
    pub fn remove(&self, id: &ArtifactId) -> FilesResult<()> {
        let artifact_dir = id.sharded_dir(&self.root_directory);
        if !artifact_dir.is_dir() {
            return Err(FilesError::ArtifactNotFound(id.clone()));
        }
        fs::remove_dir_all(&artifact_dir)?;

        // Shards are only removed when empty; remove_dir refuses otherwise.
        for shard in artifact_dir.ancestors().skip(1).take(2) {
            if fs::remove_dir(shard).is_err() {
                break;
            }
        }

        tracing::debug!(artifact = %id, "removed artifact");
        Ok(())
    }

    fn artifact_path(&self, id: &ArtifactId) -> PathBuf {
        id.sharded_dir(&self.root_directory).join(ARTIFACT_FILE_NAME)
    }

    fn relative_path(&self, id: &ArtifactId) -> String {
        let canonical = id.to_string();
        format!(
            "{}/{}/{}/{}",
            &canonical[0..2],
            &canonical[2..4],
            canonical,
            ARTIFACT_FILE_NAME
        )
    }
}
