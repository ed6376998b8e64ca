use thiserror::Error;

#[derive(Debug, Error)]
pub enum TaskError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize tasks: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl From<tempfile::PersistError> for TaskError {
    fn from(err: tempfile::PersistError) -> Self {
        TaskError::Io(err.error)
    }
}

pub type Result<T> = std::result::Result<T, TaskError>;
