//! Result type aliases and the service result pattern

use crate::error::{TaskaError, ValidationErrors};

/// Standard Result type for Taska operations
pub type TaskaResult<T> = Result<T, TaskaError>;

/// Outcome of a service call: either a value or the validation errors that
/// prevented it.
#[derive(Debug)]
pub struct ServiceResult<T> {
    success: bool,
    result: Option<T>,
    errors: ValidationErrors,
}

impl<T> ServiceResult<T> {
    /// Create a successful result
    pub fn success(result: T) -> Self {
        Self {
            success: true,
            result: Some(result),
            errors: ValidationErrors::new(),
        }
    }

    /// Create a failed result with errors
    pub fn failure(errors: ValidationErrors) -> Self {
        Self {
            success: false,
            result: None,
            errors,
        }
    }

    /// Create a failed result with a single base error message
    pub fn failure_with_message(message: impl Into<String>) -> Self {
        let mut errors = ValidationErrors::new();
        errors.add_base(message);
        Self::failure(errors)
    }

    pub fn is_success(&self) -> bool {
        self.success
    }

    pub fn is_failure(&self) -> bool {
        !self.success
    }

    pub fn result(&self) -> Option<&T> {
        self.result.as_ref()
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    /// Convert to standard Result
    pub fn into_result(self) -> TaskaResult<T> {
        if self.success {
            self.result.ok_or_else(|| {
                TaskaError::Internal("ServiceResult success but no result value".into())
            })
        } else {
            Err(TaskaError::Validation(self.errors))
        }
    }
}
