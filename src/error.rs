use thiserror::Error;

#[derive(Error, Debug)]
pub enum SolidError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Unsupported variant: {0}")]
    UnsupportedVariant(String),
    #[error("Missing dependency: {0}")]
    MissingDependency(&'static str),
    #[error("Record not found: {0}")]
    RecordNotFound(u32),
    #[error("Duplicate record: {0}")]
    DuplicateRecord(u32),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SolidError>;
