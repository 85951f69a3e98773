use thiserror::Error;

/// Failure to obtain the catalog payload. Terminal: no partial catalog is produced.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("catalog source unreachable: {location}: {source}")]
    Unreachable {
        location: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("catalog request to {url} failed with HTTP status {status}")]
    Status { url: String, status: u16 },

    #[error("cannot read catalog file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("catalog payload is malformed: {0}")]
    Malformed(#[from] serde_json::Error),
}

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Load failed: {0}")]
    Load(#[from] LoadError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Load,
    Configuration,
    Output,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl CatalogError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            CatalogError::Load(_) => ErrorCategory::Load,
            CatalogError::IoError(_) => ErrorCategory::Output,
            CatalogError::ConfigError { .. }
            | CatalogError::ConfigValidationError { .. }
            | CatalogError::InvalidConfigValueError { .. }
            | CatalogError::MissingConfigError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            CatalogError::Load(LoadError::Unreachable { .. })
            | CatalogError::Load(LoadError::Status { .. }) => ErrorSeverity::Medium,
            CatalogError::Load(_) => ErrorSeverity::High,
            CatalogError::IoError(_) => ErrorSeverity::Critical,
            _ => ErrorSeverity::High,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            CatalogError::Load(LoadError::Unreachable { location, .. }) => {
                format!("Failed to load services: {} could not be reached", location)
            }
            CatalogError::Load(LoadError::Status { url, status }) => {
                format!("Failed to load services: {} answered with status {}", url, status)
            }
            CatalogError::Load(LoadError::Io { path, .. }) => {
                format!("Failed to load services. Please check if {} exists.", path)
            }
            CatalogError::Load(LoadError::Malformed(_)) => {
                "Failed to load services: the catalog file is not a list of services".to_string()
            }
            CatalogError::IoError(e) => format!("Could not write output: {}", e),
            CatalogError::ConfigError { message } => format!("Configuration problem: {}", message),
            CatalogError::ConfigValidationError { field, message } => {
                format!("Configuration field '{}' is invalid: {}", field, message)
            }
            CatalogError::InvalidConfigValueError { field, value, reason } => {
                format!("'{}' is not a valid {}: {}", value, field, reason)
            }
            CatalogError::MissingConfigError { field } => {
                format!("Configuration field '{}' is required", field)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            CatalogError::Load(LoadError::Unreachable { .. }) => {
                "Check the network connection and the catalog URL"
            }
            CatalogError::Load(LoadError::Status { .. }) => {
                "Verify the catalog URL points at the JSON dataset"
            }
            CatalogError::Load(LoadError::Io { .. }) => {
                "Pass --source with the path of an existing catalog file"
            }
            CatalogError::Load(LoadError::Malformed(_)) => {
                "The catalog must be a JSON array of objects with title, short_desc, long_desc, url and group"
            }
            CatalogError::IoError(_) => "Check that the output directory exists and is writable",
            _ => "Review the configuration file and command line flags",
        }
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;
