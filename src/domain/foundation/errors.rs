//! Error types for the domain layer.

use std::collections::HashMap;
use std::error::Error;
use std::fmt;
use thiserror::Error;

/// Errors that occur during value object construction and form validation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Field '{field}' cannot be empty")]
    EmptyField { field: String },

    #[error("Field '{field}' has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    #[error("Allocation of {allocated} exceeds the total budget of {total}")]
    BudgetExceeded { allocated: f64, total: i64 },
}

impl ValidationError {
    /// Creates an empty field validation error.
    pub fn empty_field(field: impl Into<String>) -> Self {
        ValidationError::EmptyField { field: field.into() }
    }

    /// Creates an invalid format validation error.
    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Returns the offending field name.
    pub fn field(&self) -> &str {
        match self {
            ValidationError::EmptyField { field } => field,
            ValidationError::InvalidFormat { field, .. } => field,
            ValidationError::BudgetExceeded { .. } => "allocation",
        }
    }
}

/// Error codes organized by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Validation errors
    ValidationFailed,
    BudgetExceeded,

    // Not found errors
    IdeaNotFound,
    ProjectNotFound,
    ForumPostNotFound,
    DocumentNotFound,

    // State errors
    AssistantBusy,

    // Infrastructure errors
    StorageError,
}

impl ErrorCode {
    /// Returns true for lookup failures, which are never fatal.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            ErrorCode::IdeaNotFound
                | ErrorCode::ProjectNotFound
                | ErrorCode::ForumPostNotFound
                | ErrorCode::DocumentNotFound
        )
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::ValidationFailed => "VALIDATION_FAILED",
            ErrorCode::BudgetExceeded => "BUDGET_EXCEEDED",
            ErrorCode::IdeaNotFound => "IDEA_NOT_FOUND",
            ErrorCode::ProjectNotFound => "PROJECT_NOT_FOUND",
            ErrorCode::ForumPostNotFound => "FORUM_POST_NOT_FOUND",
            ErrorCode::DocumentNotFound => "DOCUMENT_NOT_FOUND",
            ErrorCode::AssistantBusy => "ASSISTANT_BUSY",
            ErrorCode::StorageError => "STORAGE_ERROR",
        };
        write!(f, "{}", s)
    }
}

/// Standard domain error with code, message, and optional details.
#[derive(Debug, Clone)]
pub struct DomainError {
    pub code: ErrorCode,
    pub message: String,
    pub details: HashMap<String, String>,
}

impl DomainError {
    /// Creates a new domain error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: HashMap::new(),
        }
    }

    /// Creates a validation error for a specific field.
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ValidationFailed, message).with_detail("field", field.into())
    }

    /// Creates a not-found error for the given resource kind.
    pub fn not_found(code: ErrorCode, id: impl fmt::Display) -> Self {
        Self::new(code, format!("{} not found", id)).with_detail("id", id.to_string())
    }

    /// Adds a detail to the error.
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.details.insert(key.into(), value.into());
        self
    }
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl Error for DomainError {}

impl From<ValidationError> for DomainError {
    fn from(err: ValidationError) -> Self {
        let code = match err {
            ValidationError::BudgetExceeded { .. } => ErrorCode::BudgetExceeded,
            _ => ErrorCode::ValidationFailed,
        };
        let field = err.field().to_string();
        DomainError::new(code, err.to_string()).with_detail("field", field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_empty_field_displays_correctly() {
        let err = ValidationError::empty_field("title");
        assert_eq!(format!("{}", err), "Field 'title' cannot be empty");
    }

    #[test]
    fn validation_error_invalid_format_displays_correctly() {
        let err = ValidationError::invalid_format("start", "expected YYYY-MM-DD");
        assert_eq!(
            format!("{}", err),
            "Field 'start' has invalid format: expected YYYY-MM-DD"
        );
    }

    #[test]
    fn domain_error_displays_code_and_message() {
        let err = DomainError::new(ErrorCode::IdeaNotFound, "Idea not found");
        assert_eq!(format!("{}", err), "[IDEA_NOT_FOUND] Idea not found");
    }

    #[test]
    fn budget_exceeded_maps_to_its_own_code() {
        let err: DomainError = ValidationError::BudgetExceeded {
            allocated: 600.0,
            total: 500,
        }
        .into();
        assert_eq!(err.code, ErrorCode::BudgetExceeded);
        assert_eq!(err.details.get("field"), Some(&"allocation".to_string()));
    }

    #[test]
    fn not_found_codes_are_classified() {
        assert!(ErrorCode::ProjectNotFound.is_not_found());
        assert!(!ErrorCode::StorageError.is_not_found());
    }
}
