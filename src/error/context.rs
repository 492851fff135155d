//! Error context for enriched error information.
//!
//! This module provides context structures that can be attached to errors
//! to provide additional debugging and recovery information.

use chrono::{DateTime, Utc};

/// Context information attached to errors for debugging and recovery.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorContext {
    /// Human-readable description of the operation that failed.
    pub operation: String,

    /// The selection being loaded when the error occurred ("global" or an iso code).
    pub selection: Option<String>,

    /// Timestamp when the error occurred.
    pub timestamp: DateTime<Utc>,

    /// Number of retry attempts made before this error.
    pub retry_count: u32,

    /// Optional component/module where the error originated.
    pub component: Option<String>,
}

impl ErrorContext {
    /// Create a new ErrorContext for an operation.
    pub fn new(operation: impl Into<String>) -> Self {
        Self {
            operation: operation.into(),
            selection: None,
            timestamp: Utc::now(),
            retry_count: 0,
            component: None,
        }
    }

    /// Set the selection for this context.
    pub fn with_selection(mut self, selection: impl Into<String>) -> Self {
        self.selection = Some(selection.into());
        self
    }

    /// Set the retry count for this context.
    pub fn with_retry_count(mut self, count: u32) -> Self {
        self.retry_count = count;
        self
    }

    /// Set the component for this context.
    pub fn with_component(mut self, component: impl Into<String>) -> Self {
        self.component = Some(component.into());
        self
    }

    /// Get a formatted context string suitable for logging.
    pub fn to_log_string(&self) -> String {
        let mut parts = vec![format!("operation={}", self.operation)];

        if let Some(ref selection) = self.selection {
            parts.push(format!("selection={}", selection));
        }

        if let Some(ref component) = self.component {
            parts.push(format!("component={}", component));
        }

        if self.retry_count > 0 {
            parts.push(format!("retry_count={}", self.retry_count));
        }

        parts.push(format!("timestamp={}", self.timestamp.to_rfc3339()));

        parts.join(" ")
    }
}

impl Default for ErrorContext {
    fn default() -> Self {
        Self::new("unknown")
    }
}

impl std::fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.operation)?;

        if let Some(ref selection) = self.selection {
            write!(f, " selection={}", selection)?;
        }

        if self.retry_count > 0 {
            write!(f, " retry={}", self.retry_count)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_builder_pattern() {
        let ctx = ErrorContext::new("select_country")
            .with_selection("PE")
            .with_retry_count(1)
            .with_component("api");

        assert_eq!(ctx.operation, "select_country");
        assert_eq!(ctx.selection, Some("PE".to_string()));
        assert_eq!(ctx.retry_count, 1);
        assert_eq!(ctx.component, Some("api".to_string()));
    }

    #[test]
    fn test_context_display() {
        let ctx = ErrorContext::new("load_countries");
        assert_eq!(ctx.to_string(), "[load_countries]");

        let ctx = ctx.with_selection("global").with_retry_count(2);
        assert_eq!(ctx.to_string(), "[load_countries] selection=global retry=2");
    }

    #[test]
    fn test_to_log_string() {
        let ctx = ErrorContext::new("fetch").with_component("api");
        let log = ctx.to_log_string();
        assert!(log.contains("operation=fetch"));
        assert!(log.contains("component=api"));
        assert!(log.contains("timestamp="));
        assert!(!log.contains("retry_count"));
    }
}
