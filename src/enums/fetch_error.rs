use thiserror::Error;

/// Failures of the GitHub repository fetcher.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("'{0}' is not a GitHub repository URL (expected https://github.com/<owner>/<repo>)")]
    InvalidUrl(String),

    #[error("repository {owner}/{name} was not found")]
    RepoNotFound { owner: String, name: String },

    #[error("GitHub API rate limit exceeded: {0}")]
    RateLimited(String),

    #[error("GitHub rejected the credentials: {0}")]
    AuthError(String),

    #[error("GitHub request failed: {0}")]
    NetworkError(String),

    #[error("GitHub returned HTTP {status}: {message}")]
    UnexpectedStatus { status: u16, message: String },

    #[error("GitHub response could not be decoded: {0}")]
    InvalidResponse(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_decode() {
            Self::InvalidResponse(error.to_string())
        } else {
            Self::NetworkError(error.to_string())
        }
    }
}
