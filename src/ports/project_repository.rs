//! Project repository port.
//!
//! Defines the contract for persisting and retrieving Project aggregates.

use crate::domain::foundation::{DomainError, ProjectId};
use crate::domain::project::Project;
use async_trait::async_trait;

/// Repository port for Project aggregate persistence.
#[async_trait]
pub trait ProjectRepository: Send + Sync {
    /// Save a new project.
    ///
    /// # Errors
    ///
    /// - `StorageError` on persistence failure
    async fn save(&self, project: &Project) -> Result<(), DomainError>;

    /// Update an existing project.
    ///
    /// # Errors
    ///
    /// - `ProjectNotFound` if the project doesn't exist
    /// - `StorageError` on persistence failure
    async fn update(&self, project: &Project) -> Result<(), DomainError>;

    /// Find a project by its ID.
    ///
    /// Returns `None` if not found.
    async fn find_by_id(&self, id: &ProjectId) -> Result<Option<Project>, DomainError>;

    /// List all projects, newest first.
    async fn list(&self) -> Result<Vec<Project>, DomainError>;

    /// Delete a project.
    ///
    /// # Errors
    ///
    /// - `ProjectNotFound` if the project doesn't exist
    async fn delete(&self, id: &ProjectId) -> Result<(), DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn project_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn ProjectRepository) {}
    }
}
