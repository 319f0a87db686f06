use std::fmt;
use std::error::Error as StdError;
use serde::Serialize;
use crate::enums::fetch_error::FetchError;
use crate::enums::model_error::ModelError;
use crate::enums::pipeline_stage::PipelineStage;

#[derive(Debug, Clone)]
pub enum GitGradeError {
    /// Repository fetch failed before a snapshot could be built.
    Fetch(FetchError),

    /// The model provider call failed.
    Model(ModelError),

    ConfigurationError {
        message: String,
        field: Option<String>,
        suggestion: Option<String>,
    },

    ServerError {
        operation: String,
        reason: String,
    },

    SystemError {
        operation: String,
        reason: String,
    },
}

impl GitGradeError {
    pub fn config_error(message: &str, field: Option<&str>, suggestion: Option<&str>) -> Self {
        Self::ConfigurationError {
            message: message.to_string(),
            field: field.map(ToString::to_string),
            suggestion: suggestion.map(ToString::to_string),
        }
    }

    pub fn server_error(operation: &str, reason: &str) -> Self {
        Self::ServerError {
            operation: operation.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn system_error(operation: &str, reason: &str) -> Self {
        Self::SystemError {
            operation: operation.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn stage(&self) -> PipelineStage {
        match self {
            Self::Fetch(_) => PipelineStage::Fetch,
            Self::Model(_) => PipelineStage::Model,
            Self::ConfigurationError { .. } => PipelineStage::Configuration,
            Self::ServerError { .. } | Self::SystemError { .. } => PipelineStage::Render,
        }
    }

    /// Whether correcting the input (URL, token, key) and re-running can succeed.
    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::Fetch(_) | Self::Model(_) | Self::ConfigurationError { .. } => true,
            Self::ServerError { .. } | Self::SystemError { .. } => false,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::SystemError { .. } => ErrorSeverity::Critical,
            Self::ServerError { .. } => ErrorSeverity::High,
            Self::Fetch(FetchError::InvalidUrl(_)) => ErrorSeverity::Low,
            Self::Fetch(_) | Self::Model(_) => ErrorSeverity::Medium,
            Self::ConfigurationError { .. } => ErrorSeverity::Low,
        }
    }

    fn hint(&self) -> Option<&'static str> {
        match self {
            Self::Fetch(FetchError::InvalidUrl(_)) => Some("Use a URL like https://github.com/owner/project"),
            Self::Fetch(FetchError::RepoNotFound { .. }) => Some("Check the spelling; private repositories need a token with access"),
            Self::Fetch(FetchError::RateLimited(_)) => Some("Provide a GitHub token to raise the anonymous rate limit"),
            Self::Fetch(FetchError::AuthError(_)) => Some("The GitHub token is invalid or lacks access; fix it or leave it empty"),
            Self::Fetch(FetchError::NetworkError(_)) | Self::Model(ModelError::NetworkError(_)) => Some("Check your internet connection and try again"),
            Self::Model(ModelError::AuthError(_)) => Some("Check the Gemini API key"),
            Self::Model(ModelError::QuotaExceeded(_)) => Some("Wait for the quota window to reset or pick another model"),
            Self::Model(ModelError::EmptyResponse) => Some("The model may have blocked the prompt; try another model"),
            _ => None,
        }
    }

    pub fn user_message(&self) -> String {
        let mut msg = match self {
            Self::Fetch(e) => format!("Repository fetch failed: {}", e),
            Self::Model(e) => format!("Model analysis failed: {}", e),
            Self::ConfigurationError { message, field, suggestion } => {
                let mut msg = format!("Configuration Error: {}", message);
                if let Some(field) = field {
                    msg.push_str(&format!(" (field: {})", field));
                }
                if let Some(suggestion) = suggestion {
                    msg.push_str(&format!("\n💡 Suggestion: {}", suggestion));
                }
                msg
            }
            Self::ServerError { operation, reason } => {
                format!("Web server error during {}: {}", operation, reason)
            }
            Self::SystemError { operation, reason } => {
                format!("System error during {}: {}", operation, reason)
            }
        };

        if let Some(hint) = self.hint() {
            msg.push_str(&format!("\n💡 {}", hint));
        }
        msg
    }

    pub fn technical_details(&self) -> String {
        format!("{:?}", self)
    }
}

impl fmt::Display for GitGradeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.user_message())
    }
}

impl StdError for GitGradeError {}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    pub fn emoji(&self) -> &'static str {
        match self {
            Self::Low => "🟢",
            Self::Medium => "🟡",
            Self::High => "🟠",
            Self::Critical => "🔴",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
            Self::Critical => "CRITICAL",
        }
    }
}

/// Result type alias for gitgrade operations
pub type GitGradeResult<T> = Result<T, GitGradeError>;

/// Error handler for consistent error processing
pub struct ErrorHandler;

impl ErrorHandler {
    /// Log technical details and print the user-facing message to stderr.
    pub fn handle_error(error: &GitGradeError) {
        let severity = error.severity();

        log::debug!("[{}] {}", severity.name(), error.technical_details());

        eprintln!("{} [{}] {}", severity.emoji(), error.stage(), error.user_message());

        if error.is_recoverable() {
            eprintln!("🔄 Correct the input and run the analysis again");
        }
    }
}

impl From<FetchError> for GitGradeError {
    fn from(error: FetchError) -> Self {
        Self::Fetch(error)
    }
}

impl From<ModelError> for GitGradeError {
    fn from(error: ModelError) -> Self {
        Self::Model(error)
    }
}

impl From<std::io::Error> for GitGradeError {
    fn from(error: std::io::Error) -> Self {
        Self::SystemError {
            operation: "I/O operation".to_string(),
            reason: error.to_string(),
        }
    }
}

impl From<serde_json::Error> for GitGradeError {
    fn from(error: serde_json::Error) -> Self {
        Self::SystemError {
            operation: "JSON serialization".to_string(),
            reason: error.to_string(),
        }
    }
}

impl From<toml::de::Error> for GitGradeError {
    fn from(error: toml::de::Error) -> Self {
        Self::ConfigurationError {
            message: error.message().to_string(),
            field: None,
            suggestion: Some("Check the syntax of ~/.gitgrade/config.toml".to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fetch_errors_name_the_fetch_stage() {
        let error: GitGradeError = FetchError::RepoNotFound {
            owner: "octo".to_string(),
            name: "missing".to_string(),
        }.into();

        assert_eq!(error.stage(), PipelineStage::Fetch);
        let message = error.user_message();
        assert!(message.starts_with("Repository fetch failed"));
        assert!(message.contains("octo/missing"));
    }

    #[test]
    fn github_and_model_auth_errors_stay_distinct() {
        let github: GitGradeError = FetchError::AuthError("Bad credentials".to_string()).into();
        let model: GitGradeError = ModelError::AuthError("API key not valid".to_string()).into();

        assert_eq!(github.stage(), PipelineStage::Fetch);
        assert_eq!(model.stage(), PipelineStage::Model);
        assert!(github.user_message().contains("GitHub token"));
        assert!(model.user_message().contains("Gemini API key"));
    }

    #[test]
    fn rate_limit_hint_suggests_a_token() {
        let error: GitGradeError = FetchError::RateLimited("API rate limit exceeded".to_string()).into();
        assert!(error.user_message().contains("GitHub token"));
        assert!(error.is_recoverable());
    }

    #[test]
    fn system_errors_are_critical() {
        let error = GitGradeError::system_error("bind", "address in use");
        assert_eq!(error.severity(), ErrorSeverity::Critical);
        assert!(!error.is_recoverable());
    }
}
