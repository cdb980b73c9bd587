#[derive(Debug, thiserror::Error)]
pub enum RecordError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("failed to assemble document: {0}")]
    DocumentPack(String),
    #[error("failed to store generated document: {0}")]
    Storage(#[from] labrec_files::FilesError),
    #[error("failed to read record file: {0}")]
    FileRead(std::io::Error),
    #[error("failed to write document file: {0}")]
    FileWrite(std::io::Error),
    #[error("failed to deserialize record: {0}")]
    Deserialization(serde_json::Error),
}

pub type RecordResult<T> = std::result::Result<T, RecordError>;
