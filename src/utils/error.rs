use thiserror::Error;

#[derive(Error, Debug)]
pub enum SiteError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Content error: {message}")]
    ContentError { message: String },

    #[error("{kind} not found: {id}")]
    NotFound { kind: &'static str, id: String },

    #[error("Validation error: missing required fields: {}", .fields.join(", "))]
    ValidationError { fields: Vec<&'static str> },

    #[error("Flash token rejected: {message}")]
    FlashError { message: String },

    #[error("Server error: {message}")]
    ServerError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Content,
    Request,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl SiteError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            SiteError::ConfigError { .. }
            | SiteError::ConfigValidationError { .. }
            | SiteError::InvalidConfigValueError { .. }
            | SiteError::MissingConfigError { .. } => ErrorCategory::Configuration,
            SiteError::ContentError { .. } => ErrorCategory::Content,
            SiteError::NotFound { .. }
            | SiteError::ValidationError { .. }
            | SiteError::FlashError { .. } => ErrorCategory::Request,
            SiteError::IoError(_)
            | SiteError::SerializationError(_)
            | SiteError::ServerError { .. } => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            // 請求層錯誤都在本地恢復（重導或提示訊息）
            ErrorCategory::Request => ErrorSeverity::Low,
            ErrorCategory::Configuration | ErrorCategory::Content => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            SiteError::NotFound { kind, .. } => format!("That {} does not exist.", kind),
            SiteError::ValidationError { .. } => "Please fill out all required fields.".to_string(),
            SiteError::MissingConfigError { field } => {
                format!("Required setting '{}' is not set.", field)
            }
            SiteError::ContentError { message } => format!("Site content is invalid: {}", message),
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            SiteError::MissingConfigError { .. } => {
                "Export the missing environment variable and restart the server"
            }
            SiteError::ConfigError { .. }
            | SiteError::ConfigValidationError { .. }
            | SiteError::InvalidConfigValueError { .. } => {
                "Check the command-line flags and the content TOML file"
            }
            SiteError::ContentError { .. } => {
                "Fix the offending entry in the content file; ids must be unique lowercase slugs"
            }
            SiteError::NotFound { .. } => "Browse the listing page for valid entries",
            SiteError::ValidationError { .. } => "Provide name, email and message",
            SiteError::FlashError { .. } => "Ignore; the notice is discarded",
            SiteError::IoError(_) => "Check file paths and permissions",
            SiteError::SerializationError(_) | SiteError::ServerError { .. } => {
                "Check the server logs for details"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, SiteError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_errors_are_low_severity() {
        let not_found = SiteError::NotFound {
            kind: "project",
            id: "x".to_string(),
        };
        assert_eq!(not_found.category(), ErrorCategory::Request);
        assert_eq!(not_found.severity(), ErrorSeverity::Low);
        assert_eq!(not_found.user_friendly_message(), "That project does not exist.");

        let invalid = SiteError::ValidationError {
            fields: vec!["name", "message"],
        };
        assert_eq!(
            invalid.to_string(),
            "Validation error: missing required fields: name, message"
        );
    }

    #[test]
    fn test_startup_errors_are_high_severity() {
        let missing = SiteError::MissingConfigError {
            field: "SECRET_KEY".to_string(),
        };
        assert_eq!(missing.category(), ErrorCategory::Configuration);
        assert!(missing.severity() >= ErrorSeverity::High);

        let io = SiteError::from(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"));
        assert_eq!(io.severity(), ErrorSeverity::Critical);
    }
}
