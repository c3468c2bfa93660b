use thiserror::Error;

#[derive(Error, Debug)]
pub enum HereError {
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("{title}: {description}")]
    Api {
        status: u16,
        title: String,
        description: String,
    },

    #[error("Unexpected response (HTTP {status}): {body}")]
    UnexpectedResponse { status: u16, body: String },

    #[error("Response decoding error: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error in '{field}': {message}")]
    Config { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidArgument {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Service,
    Data,
    Configuration,
    Input,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl HereError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            HereError::Transport(_) => ErrorCategory::Network,
            HereError::Api { .. } | HereError::UnexpectedResponse { .. } => ErrorCategory::Service,
            HereError::Decode(_) => ErrorCategory::Data,
            HereError::InvalidUrl(_) | HereError::Io(_) | HereError::Config { .. } => {
                ErrorCategory::Configuration
            }
            HereError::InvalidArgument { .. } => ErrorCategory::Input,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // the service may recover on its own, worth trying again
            HereError::Transport(_) => ErrorSeverity::Medium,
            HereError::Api { status, .. } | HereError::UnexpectedResponse { status, .. }
                if *status == 429 || *status >= 500 =>
            {
                ErrorSeverity::Medium
            }
            HereError::Api { .. } | HereError::UnexpectedResponse { .. } => ErrorSeverity::High,
            HereError::Decode(_) | HereError::InvalidArgument { .. } => ErrorSeverity::High,
            HereError::InvalidUrl(_) | HereError::Io(_) | HereError::Config { .. } => {
                ErrorSeverity::Critical
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            HereError::Transport(_) => "Could not reach the HERE API".to_string(),
            HereError::Api {
                status,
                title,
                description,
            } => format!("HERE API rejected the request ({}): {} - {}", status, title, description),
            HereError::UnexpectedResponse { status, .. } => {
                format!("HERE API answered with HTTP {} and no error details", status)
            }
            HereError::Decode(_) => "HERE API returned a response in an unexpected format".to_string(),
            HereError::InvalidUrl(e) => format!("Endpoint URL is invalid: {}", e),
            HereError::Io(e) => format!("Could not read a file: {}", e),
            HereError::Config { field, message } => {
                format!("Configuration problem with '{}': {}", field, message)
            }
            HereError::InvalidArgument { field, value, .. } => {
                format!("'{}' is not a valid value for {}", value, field)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            HereError::Transport(_) => {
                "Check the network connection and the endpoint base URL".to_string()
            }
            HereError::Api { status: 401, .. } | HereError::Api { status: 403, .. } => {
                "Check that the API key is valid and enabled for this service".to_string()
            }
            HereError::Api { status: 429, .. } => {
                "Rate limit reached, wait before sending more requests".to_string()
            }
            HereError::Api { .. } => "Review the request parameters".to_string(),
            HereError::UnexpectedResponse { .. } => {
                "Verify that the endpoint points to the HERE Search API".to_string()
            }
            HereError::Decode(_) => {
                "The response schema may have changed, run with --verbose for details".to_string()
            }
            HereError::InvalidUrl(_) => "Use a full http:// or https:// URL".to_string(),
            HereError::Io(_) => "Check the file path and permissions".to_string(),
            HereError::Config { .. } => "Fix the configuration file or CLI flags".to_string(),
            HereError::InvalidArgument { reason, .. } => reason.clone(),
        }
    }
}

pub type Result<T> = std::result::Result<T, HereError>;
