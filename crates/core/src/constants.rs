//! Constants used throughout the lab record core crate.

/// MIME type of generated documents.
pub const DOCX_MEDIA_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// Suffix appended to the register number to form the download filename.
pub const DOWNLOAD_FILENAME_SUFFIX: &str = "_Lab_Record.docx";

/// Default artifact store root when no directory is configured.
pub const DEFAULT_OUTPUT_DIR: &str = "generated_records";

/// Default logo file reported by the service info endpoint.
pub const DEFAULT_LOGO_PATH: &str = "college_logo.png";

/// Default listen port.
pub const DEFAULT_PORT: u16 = 8000;

/// Header cells of the summary table.
pub const TABLE_HEADER: [&str; TABLE_COLUMNS] = ["Exp", "Title", "GitHub"];

/// Number of columns in the summary table.
pub const TABLE_COLUMNS: usize = 3;

/// Twentieths of a point per inch.
pub const TWIPS_PER_INCH: i32 = 1440;

/// US Letter page, in twips.
pub const PAGE_WIDTH_TWIPS: u32 = 12240;
pub const PAGE_HEIGHT_TWIPS: u32 = 15840;

/// Title font size in points.
pub const TITLE_POINT_SIZE: usize = 14;
