//! ListProjectsHandler - Query handler listing saved projects.

use std::sync::Arc;

use crate::domain::project::Project;
use crate::ports::ProjectRepository;

use super::ProjectError;

/// Query to list all projects, newest first.
#[derive(Debug, Clone, Default)]
pub struct ListProjectsQuery;

/// Handler for listing projects.
pub struct ListProjectsHandler {
    repository: Arc<dyn ProjectRepository>,
}

impl ListProjectsHandler {
    pub fn new(repository: Arc<dyn ProjectRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, _query: ListProjectsQuery) -> Result<Vec<Project>, ProjectError> {
        Ok(self.repository.list().await?)
    }
}
