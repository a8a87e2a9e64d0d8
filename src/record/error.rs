use thiserror::Error;
#[derive(Debug, Error)]
pub enum RecordError {
    #[error("record {0} not found")]
    NotFound(String),
    #[error("failed to read record: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed record payload: {0}")]
    Payload(#[from] serde_json::Error),
}
