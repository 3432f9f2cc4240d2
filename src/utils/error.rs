use thiserror::Error;

#[derive(Error, Debug)]
pub enum SyncError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Request to {url} failed with status code {status}")]
    HttpStatusError { status: u16, url: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Invalid URL: {0}")]
    UrlError(#[from] url::ParseError),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// Bad input before any work started.
    Config,
    /// The run started but could not finish.
    Fatal,
}

impl SyncError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            SyncError::TomlError(_)
            | SyncError::UrlError(_)
            | SyncError::ConfigError { .. }
            | SyncError::InvalidConfigValueError { .. }
            | SyncError::MissingConfigError { .. } => ErrorSeverity::Config,
            _ => ErrorSeverity::Fatal,
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Fatal => 1,
            ErrorSeverity::Config => 2,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            SyncError::ApiError(e) if e.is_connect() => {
                format!("Could not connect to the API: {}", e)
            }
            SyncError::HttpStatusError { status, .. } => {
                format!("Request failed with status code {}", status)
            }
            SyncError::SerializationError(e) => format!("Response was not valid JSON: {}", e),
            SyncError::IoError(e) => format!("Could not write output file: {}", e),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, SyncError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_errors_map_to_exit_code_2() {
        let err = SyncError::MissingConfigError {
            field: "menus_endpoint".to_string(),
        };
        assert_eq!(err.severity(), ErrorSeverity::Config);
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_runtime_errors_map_to_exit_code_1() {
        let err = SyncError::HttpStatusError {
            status: 503,
            url: "https://example.com/api/menus".to_string(),
        };
        assert_eq!(err.severity(), ErrorSeverity::Fatal);
        assert_eq!(err.exit_code(), 1);
        assert_eq!(
            err.user_friendly_message(),
            "Request failed with status code 503"
        );
        assert!(err.to_string().contains("https://example.com/api/menus"));
    }
}
