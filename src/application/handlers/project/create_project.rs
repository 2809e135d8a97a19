//! CreateProjectHandler - Calculates a record and saves it as a project.

use std::sync::Arc;

use crate::domain::project::{validate_title, Project, ProjectInput};
use crate::ports::ProjectRepository;

use super::{CalculateRankingHandler, ProjectError};

/// Command to create a new project.
#[derive(Debug, Clone)]
pub struct CreateProjectCommand {
    pub title: String,
    pub input: ProjectInput,
}

/// Handler for creating projects.
pub struct CreateProjectHandler {
    repository: Arc<dyn ProjectRepository>,
    calculator: CalculateRankingHandler,
}

impl CreateProjectHandler {
    pub fn new(repository: Arc<dyn ProjectRepository>, calculator: CalculateRankingHandler) -> Self {
        Self {
            repository,
            calculator,
        }
    }

    pub async fn handle(&self, cmd: CreateProjectCommand) -> Result<Project, ProjectError> {
        // 1. Validate title before spending time on the calculation
        validate_title(&cmd.title)?;

        // 2. Calculate
        let results = self.calculator.calculate(&cmd.input)?;

        // 3. Persist
        let project = Project::new(&cmd.title, cmd.input, results)?;
        self.repository.save(&project).await?;

        tracing::info!(project_id = %project.id(), title = project.title(), "project created");
        Ok(project)
    }
}
