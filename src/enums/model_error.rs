use thiserror::Error;

/// Failures of a model provider call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("model API rejected the key: {0}")]
    AuthError(String),

    #[error("model quota exceeded: {0}")]
    QuotaExceeded(String),

    #[error("model request failed: {0}")]
    NetworkError(String),

    #[error("model returned no usable text")]
    EmptyResponse,

    #[error("model API returned HTTP {status}: {message}")]
    ApiError { status: u16, message: String },

    #[error("model response could not be decoded: {0}")]
    InvalidResponse(String),
}

impl From<reqwest::Error> for ModelError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_decode() {
            Self::InvalidResponse(error.to_string())
        } else {
            Self::NetworkError(error.without_url().to_string())
        }
    }
}
