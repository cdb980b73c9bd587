//! Inbound lab record payload.

use crate::constants::DOWNLOAD_FILENAME_SUFFIX;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One row of lab-record data.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Experiment {
    pub title: String,
    /// Accepted for compatibility; not rendered.
    #[serde(default)]
    pub date: String,
    pub github: String,
}

/// Full payload for one student's lab record.
///
/// `student_name` is accepted but not rendered into the document.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RecordData {
    pub course_title: String,
    pub student_name: String,
    pub register_number: String,
    pub experiments: Vec<Experiment>,
}

impl RecordData {
    /// Filename offered to the client: `{register_number}_Lab_Record.docx`.
    ///
    /// This is display text only and must not be used as a storage path.
    pub fn download_filename(&self) -> String {
        format!("{}{}", self.register_number, DOWNLOAD_FILENAME_SUFFIX)
    }

    /// Like [`Self::download_filename`] but safe to use as a single path component.
    ///
    /// Anything other than ASCII alphanumerics, `-`, `_` and `.` is replaced with `_`, and a
    /// register number made only of dots cannot escape the directory.
    pub fn safe_filename(&self) -> String {
        let stem: String = self
            .register_number
            .chars()
            .map(|c| match c {
                'a'..='z' | 'A'..='Z' | '0'..='9' | '-' | '_' | '.' => c,
                _ => '_',
            })
            .collect();
        let stem = if stem.chars().all(|c| c == '.') {
            stem.replace('.', "_")
        } else {
            stem
        };
        format!("{}{}", stem, DOWNLOAD_FILENAME_SUFFIX)
    }
}
