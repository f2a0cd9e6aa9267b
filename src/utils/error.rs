use std::path::PathBuf;
use thiserror::Error;

/// Failure to obtain the dataset. Never cached: a later call may retry.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("{url} answered with status {status}")]
    Status { url: String, status: u16 },

    #[error("dataset is not valid JSON: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Error, Debug)]
pub enum TravelError {
    #[error("Dataset fetch failed: {0}")]
    Fetch(#[from] FetchError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unknown time zone '{zone}' for '{pattern}'")]
    UnknownTimeZone { pattern: String, zone: String },
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
    Low,
    Medium,
    High,
    Critical,
}

impl TravelError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            TravelError::Fetch(FetchError::Read { .. }) => ErrorCategory::System,
            TravelError::Fetch(FetchError::Decode(_)) => ErrorCategory::Data,
            TravelError::Fetch(_) => ErrorCategory::Network,
            TravelError::IoError(_) => ErrorCategory::System,
            TravelError::ConfigError { .. }
            | TravelError::ConfigValidationError { .. }
            | TravelError::InvalidConfigValueError { .. }
            | TravelError::UnknownTimeZone { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Network => ErrorSeverity::Medium,
            ErrorCategory::Data => ErrorSeverity::High,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    /// Process exit status for a run that ended with this error.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            TravelError::Fetch(FetchError::Status { status, .. }) => {
                format!("The destination data could not be loaded (HTTP {})", status)
            }
            TravelError::Fetch(FetchError::Read { path, .. }) => {
                format!("The destination file {} could not be read", path.display())
            }
            TravelError::Fetch(_) => "The destination data could not be loaded".to_string(),
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            TravelError::Fetch(FetchError::Transport(_)) => {
                "Check that the data source host is reachable and try again"
            }
            TravelError::Fetch(FetchError::Status { .. }) => {
                "Verify the data source URL points at the dataset JSON"
            }
            TravelError::Fetch(FetchError::Decode(_)) => {
                "Make sure the dataset is valid JSON with countries, temples and beaches"
            }
            TravelError::Fetch(FetchError::Read { .. }) | TravelError::IoError(_) => {
                "Check the file path and its permissions"
            }
            TravelError::UnknownTimeZone { .. } => {
                "Use an IANA zone name such as Asia/Tokyo in the [timezones] table"
            }
            _ => "Review the configuration file and command line flags",
        }
    }
}

pub type Result<T> = std::result::Result<T, TravelError>;
