/// Failures reported by the browser collaborators
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BrowserError {
    #[error("browser API call failed: {0}")]
    Api(String),

    #[error("failed to encode request: {0}")]
    Encode(String),

    #[error("failed to decode browser response: {0}")]
    Decode(String),
}

pub type BrowserResult<T> = Result<T, BrowserError>;
