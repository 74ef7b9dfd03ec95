use thiserror::Error;

#[derive(Error, Debug)]
pub enum EtlError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("API returned HTTP {status} for subject '{subject}'")]
    HttpStatusError { subject: String, status: u16 },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Failed to load subject list from '{path}': {message}")]
    SubjectListError { path: String, message: String },

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

    #[error("Not found: {message}")]
    NotFoundError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Data,
    Configuration,
    Storage,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl EtlError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            EtlError::ApiError(_) | EtlError::HttpStatusError { .. } => ErrorCategory::Network,
            EtlError::SerializationError(_) | EtlError::NotFoundError { .. } => {
                ErrorCategory::Data
            }
            EtlError::IoError(_) => ErrorCategory::Storage,
            EtlError::SubjectListError { .. }
            | EtlError::ConfigError { .. }
            | EtlError::ConfigValidationError { .. }
            | EtlError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            EtlError::NotFoundError { .. } => ErrorSeverity::Low,
            EtlError::ApiError(_) | EtlError::HttpStatusError { .. } => ErrorSeverity::Medium,
            EtlError::SerializationError(_)
            | EtlError::SubjectListError { .. }
            | EtlError::ConfigError { .. }
            | EtlError::ConfigValidationError { .. }
            | EtlError::InvalidConfigValueError { .. } => ErrorSeverity::High,
            EtlError::IoError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            EtlError::ApiError(_) => "Check your network connection and the catalog base URL",
            EtlError::HttpStatusError { .. } => {
                "Verify the subject identifier exists, or set on_http_error = \"lenient\""
            }
            EtlError::IoError(_) => "Check that the output directory exists and is writable",
            EtlError::SerializationError(_) => {
                "The response or file is not valid JSON; inspect it manually"
            }
            EtlError::SubjectListError { .. } => {
                "Make sure the subject file exists and holds a JSON array of non-empty strings"
            }
            EtlError::ConfigError { .. }
            | EtlError::ConfigValidationError { .. }
            | EtlError::InvalidConfigValueError { .. } => {
                "Review the configuration file and command line flags"
            }
            EtlError::NotFoundError { .. } => "Run subject-harvest first to create the book file",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Network => format!("Could not fetch books: {}", self),
            ErrorCategory::Data => format!("Could not read book data: {}", self),
            ErrorCategory::Configuration => format!("Invalid setup: {}", self),
            ErrorCategory::Storage => format!("Could not access the file system: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, EtlError>;
