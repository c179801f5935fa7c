use thiserror::Error;

/// Unified error type for the ledger engine.
///
/// Mutating operations surface these verbatim to the caller; the forecast
/// path degrades instead of failing when an intermediate month cannot be
/// fetched.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("No active user session")]
    NotAuthenticated,
    /// Transport failure or a non-success server response. Carries the
    /// server-provided message when one was present.
    #[error("{}", .0.as_deref().unwrap_or("Network or server failure"))]
    NetworkOrServer(Option<String>),
    #[error("Validation failed: {0}")]
    Validation(String),
    #[error("Not found: {0}")]
    NotFound(String),
}

impl EngineError {
    /// Server-reported failure with a human-readable message.
    pub fn server(message: impl Into<String>) -> Self {
        EngineError::NetworkOrServer(Some(message.into()))
    }

    /// Transport failure with no message from the other side.
    pub fn network() -> Self {
        EngineError::NetworkOrServer(None)
    }
}

pub type Result<T> = std::result::Result<T, EngineError>;
