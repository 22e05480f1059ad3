#[derive(thiserror::Error, Debug)]
pub enum FetchError {
    #[error("no connection")]
    NoConnection,
    #[error("unexpected response: {0}")]
    Response(String),
    #[error("deserialization failed: {0}")]
    Deserialization(String),
    #[error(transparent)]
    Other(#[from] Box<dyn std::error::Error>),
}

impl FetchError {
    #[must_use]
    pub fn is_no_connection(&self) -> bool {
        matches!(self, FetchError::NoConnection)
    }
}
