//! # Lab Record Core
//!
//! Core logic for the lab record generator:
//! - The inbound record model ([`RecordData`], [`Experiment`])
//! - The mapping from a record to a document layout ([`layout`])
//! - DOCX rendering ([`docx`])
//! - Publishing generated documents as artifacts ([`LabRecordService`])
//!
//! **No API concerns**: HTTP routing, CORS and response encoding belong in `api-rest`.

pub mod config;
pub mod constants;
pub mod docx;
pub mod error;
pub mod layout;
pub mod record;
pub mod service;

pub use config::{port_from_env_value, retain_artifacts_from_env_value, CoreConfig};
pub use constants::{DEFAULT_PORT, DOCX_MEDIA_TYPE};
pub use error::{RecordError, RecordResult};
pub use labrec_files::{ArtifactId, ArtifactMetadata};
pub use layout::LabRecordLayout;
pub use record::{Experiment, RecordData};
pub use service::{GeneratedRecord, LabRecordService};

use std::io::Write;
use std::path::{Path, PathBuf};

/// Reads a [`RecordData`] from a JSON file.
pub fn read_record_file(path: &Path) -> RecordResult<RecordData> {
    let raw = std::fs::read_to_string(path).map_err(RecordError::FileRead)?;
    serde_json::from_str(&raw).map_err(RecordError::Deserialization)
}

/// Renders `record` and writes it into `out_dir` under [`RecordData::safe_filename`].
///
/// The file is written to a temporary name in `out_dir` and renamed into place.
pub fn write_record_docx(record: &RecordData, out_dir: &Path) -> RecordResult<PathBuf> {
    let bytes = docx::render_docx(&LabRecordLayout::from_record(record))?;
    std::fs::create_dir_all(out_dir).map_err(RecordError::FileWrite)?;

    let target = out_dir.join(record.safe_filename());
    let mut tmp = tempfile::NamedTempFile::new_in(out_dir).map_err(RecordError::FileWrite)?;
    tmp.write_all(&bytes).map_err(RecordError::FileWrite)?;
    tmp.persist(&target).map_err(|e| RecordError::FileWrite(e.error))?;

    Ok(target)
}
