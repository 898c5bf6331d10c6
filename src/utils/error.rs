use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Error fetching data: {message}")]
    FetchError {
        status: Option<u16>,
        message: String,
    },

    #[error("Error parsing product data: {message}")]
    ParseError { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Data,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl ReportError {
    pub fn fetch(message: impl Into<String>) -> Self {
        Self::FetchError {
            status: None,
            message: message.into(),
        }
    }

    pub fn parse(message: impl Into<String>) -> Self {
        Self::ParseError {
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::FetchError { .. } => ErrorCategory::Network,
            Self::ParseError { .. } => ErrorCategory::Data,
            Self::ConfigError { .. } | Self::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
            Self::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // A later run may well succeed against the same endpoint.
            Self::FetchError { .. } => ErrorSeverity::Medium,
            Self::ParseError { .. }
            | Self::ConfigError { .. }
            | Self::InvalidConfigValueError { .. } => ErrorSeverity::High,
            Self::IoError(_) => ErrorSeverity::Critical,
        }
    }

    /// Process exit code for this failure. Never zero.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::High => 1,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::FetchError { status: Some(_), .. } => {
                "The endpoint answered with an error status; check the URL or try again later"
            }
            Self::FetchError { status: None, .. } => {
                "Check network connectivity and that the endpoint is reachable"
            }
            Self::ParseError { .. } => {
                "The endpoint must return a JSON array of products with name, domestic, price and description"
            }
            Self::ConfigError { .. } | Self::InvalidConfigValueError { .. } => {
                "Review the command line flags and the configuration file"
            }
            Self::IoError(_) => "Make sure standard output is writable",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::FetchError {
                status: Some(code), ..
            } => format!("Error fetching data (HTTP {})", code),
            Self::FetchError { .. } => "Error fetching data".to_string(),
            Self::ParseError { .. } => {
                "The product data returned by the endpoint could not be read".to_string()
            }
            Self::ConfigError { message } => format!("Invalid configuration: {}", message),
            Self::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid configuration value for '{}': {}", field, reason)
            }
            Self::IoError(e) => format!("Could not write the report: {}", e),
        }
    }
}

pub type Result<T> = std::result::Result<T, ReportError>;
