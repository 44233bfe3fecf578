//! Error types for txpager-core
//!
//! Every failure the engine or its record source can report, with stable
//! error codes, severities and resolution hints for API responses.

use thiserror::Error;
use serde::{Deserialize, Serialize};

/// Error codes for programmatic error handling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Page number or page size out of range
    InvalidPagination,
    /// Record failed validation
    ValidationError,
    /// Unknown sort direction
    InvalidSortDirection,
    /// Two records share an id
    DuplicateRecord,
    /// Record not found
    RecordNotFound,
    /// Record source could not be read
    SourceUnavailable,
    /// Invalid data format
    InvalidFormat,
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorCode::InvalidPagination => write!(f, "INVALID_PAGINATION"),
            ErrorCode::ValidationError => write!(f, "VALIDATION_ERROR"),
            ErrorCode::InvalidSortDirection => write!(f, "INVALID_SORT_DIRECTION"),
            ErrorCode::DuplicateRecord => write!(f, "DUPLICATE_RECORD"),
            ErrorCode::RecordNotFound => write!(f, "RECORD_NOT_FOUND"),
            ErrorCode::SourceUnavailable => write!(f, "SOURCE_UNAVAILABLE"),
            ErrorCode::InvalidFormat => write!(f, "INVALID_FORMAT"),
        }
    }
}

/// Detailed error information for API responses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetails {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable message
    pub message: String,
    /// Additional details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
    /// Suggestions for resolution
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub suggestions: Vec<String>,
}

impl ErrorDetails {
    /// Create a new error detail
    pub fn new(code: ErrorCode, message: String) -> Self {
        Self {
            code,
            message,
            details: None,
            suggestions: vec![],
        }
    }

    /// Add detail information
    pub fn with_detail(mut self, detail: serde_json::Value) -> Self {
        self.details = Some(detail);
        self
    }

    /// Add a suggestion
    pub fn with_suggestion(mut self, suggestion: String) -> Self {
        self.suggestions.push(suggestion);
        self
    }
}

impl std::fmt::Display for ErrorDetails {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)?;
        if let Some(ref details) = self.details {
            write!(f, "\nDetails: {}", details)?;
        }
        if !self.suggestions.is_empty() {
            write!(f, "\nSuggestions:")?;
            for suggestion in &self.suggestions {
                write!(f, "\n  - {}", suggestion)?;
            }
        }
        Ok(())
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorSeverity {
    /// Informational
    Info,
    /// Warning - operation may be affected
    Warning,
    /// Error - operation failed
    Error,
    /// Critical - a programming error reached runtime
    Critical,
}

impl std::fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorSeverity::Info => write!(f, "info"),
            ErrorSeverity::Warning => write!(f, "warning"),
            ErrorSeverity::Error => write!(f, "error"),
            ErrorSeverity::Critical => write!(f, "critical"),
        }
    }
}

/// Main error type for txpager-core
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid pagination: {message}")]
    InvalidPagination { message: String },

    #[error("Validation error on {field}: {message}")]
    ValidationError { field: String, message: String },

    #[error("Invalid sort direction: {value}")]
    InvalidSortDirection { value: String },

    #[error("Duplicate record id: {id}")]
    DuplicateRecord { id: String },

    #[error("Record not found: {id}")]
    RecordNotFound { id: String },

    #[error("Record source unavailable: {message}")]
    SourceUnavailable { message: String },

    #[error("Invalid format: {message}")]
    InvalidFormat { message: String },
}

impl CoreError {
    /// Shorthand for a field validation failure
    pub fn validation(field: &str, message: impl Into<String>) -> Self {
        CoreError::ValidationError {
            field: field.to_string(),
            message: message.into(),
        }
    }

    /// Get the error code
    pub fn code(&self) -> ErrorCode {
        match self {
            CoreError::InvalidPagination { .. } => ErrorCode::InvalidPagination,
            CoreError::ValidationError { .. } => ErrorCode::ValidationError,
            CoreError::InvalidSortDirection { .. } => ErrorCode::InvalidSortDirection,
            CoreError::DuplicateRecord { .. } => ErrorCode::DuplicateRecord,
            CoreError::RecordNotFound { .. } => ErrorCode::RecordNotFound,
            CoreError::SourceUnavailable { .. } => ErrorCode::SourceUnavailable,
            CoreError::InvalidFormat { .. } => ErrorCode::InvalidFormat,
        }
    }

    /// Get the severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            CoreError::InvalidPagination { .. } => ErrorSeverity::Critical,
            CoreError::ValidationError { .. } => ErrorSeverity::Warning,
            CoreError::InvalidSortDirection { .. } => ErrorSeverity::Warning,
            CoreError::DuplicateRecord { .. } => ErrorSeverity::Warning,
            CoreError::RecordNotFound { .. } => ErrorSeverity::Info,
            CoreError::SourceUnavailable { .. } => ErrorSeverity::Error,
            CoreError::InvalidFormat { .. } => ErrorSeverity::Error,
        }
    }

    /// Convert to detailed error info
    pub fn to_details(&self) -> ErrorDetails {
        let mut details = ErrorDetails::new(self.code(), self.to_string());

        match self {
            CoreError::InvalidPagination { .. } => {
                details = details.with_suggestion(
                    "Page numbers start at 1 and page sizes must be at least 1.".to_string()
                );
            }
            CoreError::ValidationError { field, message } => {
                details = details.with_detail(serde_json::json!({
                    "field": field,
                    "validation_message": message,
                }));
            }
            CoreError::InvalidSortDirection { .. } => {
                details = details.with_suggestion(
                    "Use 'asc' (oldest first) or 'desc' (newest first).".to_string()
                );
            }
            CoreError::RecordNotFound { .. } => {
                details = details.with_suggestion(
                    "Use the /api/transactions endpoint to list all records.".to_string()
                );
            }
            CoreError::DuplicateRecord { id } => {
                details = details.with_detail(serde_json::json!({ "id": id }));
                details = details.with_suggestion(
                    "Record ids must be unique within the seed file.".to_string()
                );
            }
            CoreError::InvalidFormat { .. } => {
                details = details.with_suggestion(
                    "The seed file must be a JSON array of records.".to_string()
                );
            }
            _ => {}
        }

        details
    }
}

/// Result type with CoreError
pub type CoreResult<T> = Result<T, CoreError>;

impl From<serde_json::Error> for CoreError {
    fn from(error: serde_json::Error) -> Self {
        CoreError::InvalidFormat {
            message: error.to_string(),
        }
    }
}

/// Error context for reporting
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// Operation being performed
    pub operation: String,
    /// Page the session was on when the error happened
    pub current_page: Option<usize>,
    /// Records the session held at the time
    pub total_items: Option<usize>,
}

impl ErrorContext {
    /// Create a new error context
    pub fn new(operation: &str) -> Self {
        Self {
            operation: operation.to_string(),
            current_page: None,
            total_items: None,
        }
    }

    pub fn with_current_page(mut self, page: usize) -> Self {
        self.current_page = Some(page);
        self
    }

    pub fn with_total_items(mut self, total: usize) -> Self {
        self.total_items = Some(total);
        self
    }
}

/// Error logger trait
pub trait ErrorLogger: Send + Sync {
    fn log_error(&self, error: &CoreError, context: &ErrorContext);
}

/// Default error logger using log crate
#[derive(Debug, Default)]
pub struct DefaultErrorLogger;

impl ErrorLogger for DefaultErrorLogger {
    fn log_error(&self, error: &CoreError, context: &ErrorContext) {
        let level = match error.severity() {
            ErrorSeverity::Info => log::Level::Info,
            ErrorSeverity::Warning => log::Level::Warn,
            ErrorSeverity::Error | ErrorSeverity::Critical => log::Level::Error,
        };
        log::log!(
            target: "txpager::error",
            level,
            "[{}] {} - Operation: {} - Page: {:?} - Records: {:?}",
            error.code(),
            error,
            context.operation,
            context.current_page,
            context.total_items
        );
    }
}

// ==================== Tests ====================
