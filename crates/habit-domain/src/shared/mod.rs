use serde::{Deserialize, Serialize};
use uuid::Uuid;

macro_rules! define_id {
    ($name:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $name(String);

        impl $name {
            pub fn new() -> Self {
                Self(Uuid::new_v4().to_string())
            }

            pub fn from_string(s: &str) -> Self {
                Self(s.to_string())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }
    };
}

define_id!(UserId);
define_id!(GoalId);

/// Error codes for structured error handling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    // Resource Not Found (2xxx)
    GoalNotFound = 2001,
    ResourceNotFound = 2002,

    // Data & Persistence (4xxx)
    RepositoryError = 4001,
    DatabaseConstraintViolation = 4002,
    DataIntegrityError = 4003,
    SerializationError = 4004,

    // Infrastructure (5xxx)
    InfrastructureError = 5001,
    TimeoutError = 5003,

    // Validation (6xxx)
    ValidationError = 6001,
    InvalidInput = 6002,
}

impl ErrorCode {
    /// Get error code as integer
    pub fn code(&self) -> u16 {
        *self as u16
    }

    /// Get error severity
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            ErrorCode::GoalNotFound
            | ErrorCode::ResourceNotFound
            | ErrorCode::ValidationError
            | ErrorCode::InvalidInput => ErrorSeverity::Info,

            ErrorCode::DataIntegrityError
            | ErrorCode::DatabaseConstraintViolation
            | ErrorCode::InfrastructureError => ErrorSeverity::Error,

            _ => ErrorSeverity::Warning,
        }
    }

    /// Check if error is recoverable
    pub fn is_recoverable(&self) -> bool {
        matches!(self, ErrorCode::TimeoutError | ErrorCode::RepositoryError)
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorSeverity {
    Info,
    Warning,
    Error,
    Critical,
}

#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    #[error("Goal not found: {0}")]
    GoalNotFound(String),

    #[error("Repository error: {0}")]
    Repository(String),

    #[error("Infrastructure error: {0}")]
    Infrastructure(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Data integrity error: {0}")]
    DataIntegrity(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Timed out: {0}")]
    Timeout(String),

    #[error("Not found: {0}")]
    NotFound(String),
}

impl DomainError {
    /// Get error code
    pub fn code(&self) -> ErrorCode {
        match self {
            DomainError::GoalNotFound(_) => ErrorCode::GoalNotFound,
            DomainError::Repository(_) => ErrorCode::RepositoryError,
            DomainError::Infrastructure(_) => ErrorCode::InfrastructureError,
            DomainError::Validation(_) => ErrorCode::ValidationError,
            DomainError::DataIntegrity(_) => ErrorCode::DataIntegrityError,
            DomainError::InvalidInput(_) => ErrorCode::InvalidInput,
            DomainError::Timeout(_) => ErrorCode::TimeoutError,
            DomainError::NotFound(_) => ErrorCode::ResourceNotFound,
        }
    }

    /// Get error message
    pub fn message(&self) -> &str {
        match self {
            DomainError::GoalNotFound(msg)
            | DomainError::Repository(msg)
            | DomainError::Infrastructure(msg)
            | DomainError::Validation(msg)
            | DomainError::DataIntegrity(msg)
            | DomainError::InvalidInput(msg)
            | DomainError::Timeout(msg)
            | DomainError::NotFound(msg) => msg,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        self.code().severity()
    }

    pub fn is_recoverable(&self) -> bool {
        self.code().is_recoverable()
    }

    /// Format error with code
    pub fn format_with_code(&self) -> String {
        format!("[{}] {}", self.code().code(), self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_round_trip_through_strings() {
        let id = UserId::from_string("user-42");
        assert_eq!(id.as_str(), "user-42");
        assert_eq!(id.to_string(), "user-42");
        assert_ne!(GoalId::new(), GoalId::new());
    }

    #[test]
    fn test_error_code_and_format() {
        let err = DomainError::Validation("title is required".to_string());
        assert_eq!(err.code(), ErrorCode::ValidationError);
        assert_eq!(err.message(), "title is required");
        assert_eq!(err.severity(), ErrorSeverity::Info);
        assert!(!err.is_recoverable());
        assert_eq!(
            err.format_with_code(),
            "[6001] Validation error: title is required"
        );
    }

    #[test]
    fn test_timeout_is_recoverable() {
        let err = DomainError::Timeout("probe 2025-01-01".to_string());
        assert!(err.is_recoverable());
        assert_eq!(err.code().code(), 5003);
    }
}
