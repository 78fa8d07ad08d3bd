#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid blob key: {0}")]
    InvalidKey(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("metadata serialization error: {0}")]
    Metadata(#[from] serde_json::Error),
}
