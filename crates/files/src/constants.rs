/// File name of the stored bytes inside an artifact's sharded directory.
pub const ARTIFACT_FILE_NAME: &str = "artifact";

/// Hash algorithm recorded in artifact metadata.
pub const HASH_ALGORITHM: &str = "sha256";
