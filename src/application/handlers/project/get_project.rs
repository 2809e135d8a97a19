//! GetProjectHandler - Query handler for a single project.

use std::sync::Arc;

use crate::domain::foundation::ProjectId;
use crate::domain::project::Project;
use crate::ports::ProjectRepository;

use super::ProjectError;

/// Query to fetch a project by id.
#[derive(Debug, Clone)]
pub struct GetProjectQuery {
    pub project_id: ProjectId,
}

/// Handler for fetching a project.
pub struct GetProjectHandler {
    repository: Arc<dyn ProjectRepository>,
}

impl GetProjectHandler {
    pub fn new(repository: Arc<dyn ProjectRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: GetProjectQuery) -> Result<Project, ProjectError> {
        self.repository
            .find_by_id(&query.project_id)
            .await?
            .ok_or(ProjectError::NotFound(query.project_id))
    }
}
