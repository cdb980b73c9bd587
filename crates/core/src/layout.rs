//! Mapping from a [`RecordData`] to the structure of the generated document.
//!
//! The layout is a plain value so the shape of the output can be checked without unpacking a
//! DOCX archive. [`crate::docx::render_docx`] turns it into bytes.

use crate::constants::{TABLE_COLUMNS, TABLE_HEADER, TITLE_POINT_SIZE, TWIPS_PER_INCH};
use crate::RecordData;

/// Page margins in twips.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageMargins {
    pub top: i32,
    pub bottom: i32,
    pub left: i32,
    pub right: i32,
}

impl Default for PageMargins {
    fn default() -> Self {
        Self {
            top: TWIPS_PER_INCH / 2,
            bottom: TWIPS_PER_INCH,
            left: TWIPS_PER_INCH,
            right: TWIPS_PER_INCH,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Alignment {
    Left,
    Center,
}

/// The title paragraph.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TitleBlock {
    pub text: String,
    pub bold: bool,
    pub point_size: usize,
    pub alignment: Alignment,
}

/// Summary table; `rows[0]` is the header.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SummaryTable {
    pub rows: Vec<[String; TABLE_COLUMNS]>,
}

impl SummaryTable {
    pub fn column_count(&self) -> usize {
        TABLE_COLUMNS
    }

    /// Data rows, header excluded.
    pub fn body(&self) -> &[[String; TABLE_COLUMNS]] {
        &self.rows[1..]
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LabRecordLayout {
    pub margins: PageMargins,
    pub title: TitleBlock,
    pub table: SummaryTable,
}

impl LabRecordLayout {
    pub fn from_record(record: &RecordData) -> Self {
        let mut rows = Vec::with_capacity(record.experiments.len() + 1);
        rows.push(TABLE_HEADER.map(String::from));
        rows.extend(record.experiments.iter().enumerate().map(|(idx, exp)| {
            [
                format_index(idx + 1),
                exp.title.clone(),
                exp.github.clone(),
            ]
        }));

        Self {
            margins: PageMargins::default(),
            title: TitleBlock {
                text: record.course_title.clone(),
                bold: true,
                point_size: TITLE_POINT_SIZE,
                alignment: Alignment::Center,
            },
            table: SummaryTable { rows },
        }
    }
}

/// Zero-pads to at least two digits: 1 -> "01", 123 -> "123".
fn format_index(n: usize) -> String {
    format!("{:02}", n)
}
