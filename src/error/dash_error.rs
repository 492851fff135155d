//! Unified error type for the dashboard.
//!
//! `DashError` consolidates the domain error types into a single enum so
//! the app can categorize, log and display any failure the same way.

use std::fmt;

use super::category::ErrorCategory;
use super::context::ErrorContext;
use super::data::{ConfigError, DataError, SelectionError};
use super::network::NetworkError;

/// Unified error type for the dashboard.
#[derive(Debug)]
pub enum DashError {
    /// Transport and HTTP status errors.
    Network(NetworkError),

    /// Unexpected payload shape.
    Data(DataError),

    /// Rejected selection.
    Selection(SelectionError),

    /// Configuration errors.
    Config(ConfigError),

    /// Filesystem/terminal errors.
    System(std::io::Error),

    /// Wrapped error with additional context.
    WithContext {
        error: Box<DashError>,
        context: ErrorContext,
    },
}

impl DashError {
    /// Get the category of this error.
    pub fn category(&self) -> ErrorCategory {
        match self {
            DashError::Network(err) => {
                if err.is_server_side() {
                    ErrorCategory::Server
                } else {
                    ErrorCategory::Network
                }
            }
            DashError::Data(_) => ErrorCategory::Client,
            DashError::Selection(_) => ErrorCategory::User,
            DashError::Config(_) => ErrorCategory::Configuration,
            DashError::System(_) => ErrorCategory::System,
            DashError::WithContext { error, .. } => error.category(),
        }
    }

    /// Check if this error is retryable.
    pub fn is_retryable(&self) -> bool {
        match self {
            DashError::Network(err) => err.is_retryable(),
            DashError::WithContext { error, .. } => error.is_retryable(),
            _ => false,
        }
    }

    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        match self {
            DashError::Network(err) => err.user_message(),
            DashError::Data(_) => "The statistics API returned data in an unexpected shape.".to_string(),
            DashError::Selection(err) => format!("Cannot select: {}.", err),
            DashError::Config(err) => format!("Configuration error: {}", err),
            DashError::System(err) => format!("System error: {}", err),
            DashError::WithContext { error, .. } => error.user_message(),
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            DashError::Network(err) => err.error_code(),
            DashError::Data(err) => err.error_code(),
            DashError::Selection(_) => "E_SELECTION",
            DashError::Config(_) => "E_CONFIG",
            DashError::System(_) => "E_SYSTEM",
            DashError::WithContext { error, .. } => error.error_code(),
        }
    }

    /// Get the recovery hint based on category.
    pub fn recovery_hint(&self) -> &'static str {
        self.category().recovery_hint()
    }

    /// Attach context to this error.
    pub fn with_context(self, context: ErrorContext) -> Self {
        match self {
            // Replace rather than nest
            DashError::WithContext { error, .. } => DashError::WithContext { error, context },
            other => DashError::WithContext {
                error: Box::new(other),
                context,
            },
        }
    }

    /// Get the attached context, if any.
    pub fn context(&self) -> Option<&ErrorContext> {
        match self {
            DashError::WithContext { context, .. } => Some(context),
            _ => None,
        }
    }

    /// Get the innermost error, skipping context wrappers.
    pub fn root(&self) -> &DashError {
        match self {
            DashError::WithContext { error, .. } => error.root(),
            other => other,
        }
    }
}

impl fmt::Display for DashError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DashError::Network(err) => write!(f, "{}", err),
            DashError::Data(err) => write!(f, "{}", err),
            DashError::Selection(err) => write!(f, "{}", err),
            DashError::Config(err) => write!(f, "{}", err),
            DashError::System(err) => write!(f, "{}", err),
            DashError::WithContext { error, context } => write!(f, "{} {}", context, error),
        }
    }
}

impl std::error::Error for DashError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DashError::Network(err) => Some(err),
            DashError::Data(err) => Some(err),
            DashError::Selection(err) => Some(err),
            DashError::Config(err) => Some(err),
            DashError::System(err) => Some(err),
            DashError::WithContext { error, .. } => Some(error.as_ref()),
        }
    }
}

impl From<NetworkError> for DashError {
    fn from(err: NetworkError) -> Self {
        DashError::Network(err)
    }
}

impl From<DataError> for DashError {
    fn from(err: DataError) -> Self {
        DashError::Data(err)
    }
}

impl From<SelectionError> for DashError {
    fn from(err: SelectionError) -> Self {
        DashError::Selection(err)
    }
}

impl From<ConfigError> for DashError {
    fn from(err: ConfigError) -> Self {
        DashError::Config(err)
    }
}

impl From<std::io::Error> for DashError {
    fn from(err: std::io::Error) -> Self {
        DashError::System(err)
    }
}
