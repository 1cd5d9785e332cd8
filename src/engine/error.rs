use super::store::StoreError;

#[derive(Debug)]
pub enum EngineError {
    /// A date-range precondition was violated. Raised synchronously,
    /// before any store is consulted.
    InvalidArgument(&'static str),
    /// Collaborator failure, passed through opaquely. Never retried or
    /// interpreted here.
    Store(StoreError),
}

impl std::fmt::Display for EngineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EngineError::InvalidArgument(msg) => write!(f, "invalid argument: {msg}"),
            EngineError::Store(e) => write!(f, "store error: {e}"),
        }
    }
}

impl std::error::Error for EngineError {}

impl From<StoreError> for EngineError {
    fn from(e: StoreError) -> Self {
        EngineError::Store(e)
    }
}
