//! Errors raised by project handlers.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode, ProjectId, ValidationError};

/// Error raised when a record cannot be calculated.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalculationError {
    #[error("Invalid input: {0}")]
    InvalidInput(#[from] ValidationError),
}

/// Error type for project commands and queries.
#[derive(Debug, Clone, Error)]
pub enum ProjectError {
    #[error("Invalid input: {0}")]
    Validation(#[from] ValidationError),

    #[error("Project not found: {0}")]
    NotFound(ProjectId),

    #[error("Storage error: {0}")]
    Storage(DomainError),
}

impl ProjectError {
    /// Maps the error onto the shared error code vocabulary.
    pub fn code(&self) -> ErrorCode {
        match self {
            ProjectError::Validation(_) => ErrorCode::ValidationFailed,
            ProjectError::NotFound(_) => ErrorCode::ProjectNotFound,
            ProjectError::Storage(err) => err.code,
        }
    }
}

impl From<CalculationError> for ProjectError {
    fn from(err: CalculationError) -> Self {
        match err {
            CalculationError::InvalidInput(validation) => ProjectError::Validation(validation),
        }
    }
}

impl From<DomainError> for ProjectError {
    fn from(err: DomainError) -> Self {
        ProjectError::Storage(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn calculation_error_becomes_validation() {
        let err: ProjectError =
            CalculationError::InvalidInput(ValidationError::empty_field("cities")).into();
        assert!(matches!(err, ProjectError::Validation(_)));
        assert_eq!(err.code(), ErrorCode::ValidationFailed);
    }

    #[test]
    fn storage_error_keeps_code() {
        let err: ProjectError = DomainError::new(ErrorCode::StorageError, "disk full").into();
        assert_eq!(err.code(), ErrorCode::StorageError);
    }

    #[test]
    fn not_found_displays_id() {
        let id = ProjectId::new();
        assert_eq!(
            ProjectError::NotFound(id).to_string(),
            format!("Project not found: {}", id)
        );
    }
}
