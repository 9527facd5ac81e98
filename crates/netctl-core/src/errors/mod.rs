use std::error::Error;

/// Base trait for all application errors
pub trait NetctlError: Error + Send + Sync + 'static {
    /// Error code for programmatic handling
    fn error_code(&self) -> &'static str;

    /// Whether this error should be logged as an error or warning
    fn is_user_error(&self) -> bool {
        false
    }
}

/// Common result type for the application
pub type NetctlResult<T> = Result<T, Box<dyn NetctlError>>;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ConfigReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {message}")]
    ConfigParseError { path: String, message: String },

    #[error("Invalid configuration: {message}")]
    InvalidConfiguration { message: String },
}

impl ConfigError {
    /// Whether this error only means the config file does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            ConfigError::ConfigReadError { source, .. }
                if source.kind() == std::io::ErrorKind::NotFound
        )
    }
}

impl NetctlError for ConfigError {
    fn error_code(&self) -> &'static str {
        match self {
            ConfigError::ConfigReadError { .. } => "CONFIG_READ_ERROR",
            ConfigError::ConfigParseError { .. } => "CONFIG_PARSE_ERROR",
            ConfigError::InvalidConfiguration { .. } => "INVALID_CONFIGURATION",
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(
            self,
            ConfigError::ConfigParseError { .. } | ConfigError::InvalidConfiguration { .. }
        )
    }
}
