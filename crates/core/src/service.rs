//! Lab record generation service.

use crate::config::CoreConfig;
use crate::constants::DOCX_MEDIA_TYPE;
use crate::docx::render_docx;
use crate::layout::LabRecordLayout;
use crate::{RecordData, RecordResult};
use labrec_files::{ArtifactMetadata, ArtifactStore};
use std::sync::Arc;

/// A generated document that has been published to the artifact store.
#[derive(Clone, Debug)]
pub struct GeneratedRecord {
    pub artifact: ArtifactMetadata,
    /// Display filename offered to the client.
    pub download_filename: String,
    /// Number of table rows, header included.
    pub table_rows: usize,
}

/// Builds lab record documents and manages their artifacts.
#[derive(Clone, Debug)]
pub struct LabRecordService {
    cfg: Arc<CoreConfig>,
    store: ArtifactStore,
}

impl LabRecordService {
    /// Opens the artifact store configured in `cfg`, creating its root if needed.
    pub fn new(cfg: Arc<CoreConfig>) -> RecordResult<Self> {
        let store = ArtifactStore::new(cfg.output_dir())?;
        Ok(Self { cfg, store })
    }

    pub fn config(&self) -> &CoreConfig {
        &self.cfg
    }

    /// Renders `record` and publishes the document as a new artifact.
    ///
    /// Every call produces a distinct artifact, even for the same register number.
    ///
    /// # Errors
    /// Returns an error if:
    /// - the document cannot be packed, or
    /// - the artifact cannot be written.
    pub fn generate(&self, record: &RecordData) -> RecordResult<GeneratedRecord> {
        let layout = LabRecordLayout::from_record(record);
        let bytes = render_docx(&layout)?;
        let artifact = self.store.publish(&bytes, DOCX_MEDIA_TYPE)?;

        tracing::info!(
            artifact = %artifact.id,
            rows = layout.table.rows.len(),
            size = artifact.size_bytes,
            "generated lab record"
        );

        Ok(GeneratedRecord {
            artifact,
            download_filename: record.download_filename(),
            table_rows: layout.table.rows.len(),
        })
    }

    /// Reads back the stored bytes of a generated record.
    pub fn read(&self, generated: &GeneratedRecord) -> RecordResult<Vec<u8>> {
        Ok(self.store.read(&generated.artifact.id)?)
    }

    /// Removes the artifact behind a generated record.
    pub fn discard(&self, generated: &GeneratedRecord) -> RecordResult<()> {
        Ok(self.store.remove(&generated.artifact.id)?)
    }

    /// Reads the document bytes and removes the artifact unless retention is configured.
    ///
    /// The artifact is removed whether or not the read succeeds. A failed removal is logged
    /// and does not change the result.
    pub fn take(&self, generated: &GeneratedRecord) -> RecordResult<Vec<u8>> {
        let read = self.read(generated);
        if !self.cfg.retain_artifacts() {
            if let Err(e) = self.discard(generated) {
                tracing::warn!(artifact = %generated.artifact.id, "failed to discard artifact: {}", e);
            }
        }
        read
    }
}
