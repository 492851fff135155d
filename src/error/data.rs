//! Errors raised at the API-parsing boundary.

use thiserror::Error;

/// The API answered, but the body is not what the dashboard expects.
#[derive(Debug, Clone, Error)]
pub enum DataError {
    /// The body did not deserialize.
    #[error("malformed {endpoint} payload: {message}")]
    Malformed { endpoint: String, message: String },

    /// The body deserialized but violates a constraint.
    #[error("invalid {endpoint} payload: {message}")]
    Invalid { endpoint: String, message: String },
}

impl DataError {
    pub fn malformed(endpoint: impl Into<String>, message: impl ToString) -> Self {
        DataError::Malformed {
            endpoint: endpoint.into(),
            message: message.to_string(),
        }
    }

    pub fn invalid(endpoint: impl Into<String>, message: impl ToString) -> Self {
        DataError::Invalid {
            endpoint: endpoint.into(),
            message: message.to_string(),
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            DataError::Malformed { .. } => "E_DATA_MALFORMED",
            DataError::Invalid { .. } => "E_DATA_INVALID",
        }
    }
}

/// A selection the dashboard refuses before any fetch is issued.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("unknown country code '{0}'")]
    UnknownCountry(String),

    #[error("'{0}' is not a country code")]
    InvalidCode(String),
}

/// Configuration that failed to load or validate.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", .path.display())]
    Read {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {}: {source}", .path.display())]
    Parse {
        path: std::path::PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}
