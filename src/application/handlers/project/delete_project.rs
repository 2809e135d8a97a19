//! DeleteProjectHandler - Command handler removing a project.

use std::sync::Arc;

use crate::domain::foundation::{ErrorCode, ProjectId};
use crate::ports::ProjectRepository;

use super::ProjectError;

/// Command to delete a project.
#[derive(Debug, Clone)]
pub struct DeleteProjectCommand {
    pub project_id: ProjectId,
}

/// Handler for deleting projects.
pub struct DeleteProjectHandler {
    repository: Arc<dyn ProjectRepository>,
}

impl DeleteProjectHandler {
    pub fn new(repository: Arc<dyn ProjectRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: DeleteProjectCommand) -> Result<(), ProjectError> {
        match self.repository.delete(&cmd.project_id).await {
            Ok(()) => {
                tracing::info!(project_id = %cmd.project_id, "project deleted");
                Ok(())
            }
            Err(err) if err.code == ErrorCode::ProjectNotFound => {
                Err(ProjectError::NotFound(cmd.project_id))
            }
            Err(err) => Err(err.into()),
        }
    }
}
