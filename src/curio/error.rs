use thiserror::Error;

#[derive(Error, Debug)]
pub enum CurioError {
    #[error("Duplicate record: {0}")]
    DuplicateRecord(String),

    #[error("Record not found: {0}")]
    RecordNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Validation error: {0}")]
    Validation(String),
}

pub type Result<T> = std::result::Result<T, CurioError>;
