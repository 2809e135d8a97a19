//! UpdateProjectHandler - Command handler applying partial updates.
//!
//! A patch carrying only a title renames the project and keeps its stored
//! results. Any other patch is merged over the stored record and the merged
//! record is recalculated.

use std::sync::Arc;

use crate::domain::foundation::{ErrorCode, ProjectId};
use crate::domain::project::{Project, ProjectPatch};
use crate::ports::ProjectRepository;

use super::{CalculateRankingHandler, ProjectError};

/// Command to update a project.
#[derive(Debug, Clone)]
pub struct UpdateProjectCommand {
    pub project_id: ProjectId,
    pub patch: ProjectPatch,
}

/// Handler for updating projects.
pub struct UpdateProjectHandler {
    repository: Arc<dyn ProjectRepository>,
    calculator: CalculateRankingHandler,
}

impl UpdateProjectHandler {
    pub fn new(repository: Arc<dyn ProjectRepository>, calculator: CalculateRankingHandler) -> Self {
        Self {
            repository,
            calculator,
        }
    }

    pub async fn handle(&self, cmd: UpdateProjectCommand) -> Result<Project, ProjectError> {
        // 1. Load
        let mut project = self
            .repository
            .find_by_id(&cmd.project_id)
            .await?
            .ok_or(ProjectError::NotFound(cmd.project_id))?;

        // 2. Apply
        if let Some(title) = &cmd.patch.title {
            project.rename(title)?;
        }
        let recalculated = cmd.patch.changes_content() || cmd.patch.is_empty();
        if recalculated {
            let merged = cmd.patch.apply_to(project.input());
            let results = self.calculator.calculate(&merged)?;
            project.replace_calculation(merged, results);
        }

        // 3. Persist
        match self.repository.update(&project).await {
            Ok(()) => {}
            Err(err) if err.code == ErrorCode::ProjectNotFound => {
                return Err(ProjectError::NotFound(cmd.project_id));
            }
            Err(err) => return Err(err.into()),
        }

        tracing::info!(project_id = %project.id(), recalculated, "project updated");
        Ok(project)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::project::test_support::{sample_project, MockProjectRepository};
    use crate::domain::ahp::Alternative;
    use std::collections::HashMap;

    fn handler(repo: Arc<MockProjectRepository>) -> UpdateProjectHandler {
        UpdateProjectHandler::new(repo, CalculateRankingHandler::default())
    }

    #[tokio::test]
    async fn title_only_update_keeps_results() {
        let project = sample_project("Relocation");
        let repo = Arc::new(MockProjectRepository::with(project.clone()));

        let updated = handler(repo.clone())
            .handle(UpdateProjectCommand {
                project_id: project.id(),
                patch: ProjectPatch {
                    title: Some("Moving abroad".into()),
                    ..Default::default()
                },
            })
            .await
            .unwrap();

        assert_eq!(updated.title(), "Moving abroad");
        assert_eq!(updated.results(), project.results());
        assert_eq!(repo.stored()[0].title(), "Moving abroad");
    }

    #[tokio::test]
    async fn content_update_recalculates_merged_record() {
        let project = sample_project("Relocation");
        let repo = Arc::new(MockProjectRepository::with(project.clone()));

        // Lisbon becomes the cheaper city.
        let updated = handler(repo)
            .handle(UpdateProjectCommand {
                project_id: project.id(),
                patch: ProjectPatch {
                    evaluation_values: Some(HashMap::from([
                        ("lis-cost".to_string(), 500.0),
                        ("opo-cost".to_string(), 1000.0),
                        ("lis-safety".to_string(), 8.0),
                        ("opo-safety".to_string(), 6.0),
                    ])),
                    ..Default::default()
                },
            })
            .await
            .unwrap();

        assert_eq!(updated.title(), "Relocation");
        assert_eq!(updated.results().winner(), Some("lis"));
        assert_eq!(updated.input().criteria, project.input().criteria);
    }

    #[tokio::test]
    async fn invalid_merged_record_is_rejected() {
        let project = sample_project("Relocation");
        let repo = Arc::new(MockProjectRepository::with(project.clone()));

        let err = handler(repo.clone())
            .handle(UpdateProjectCommand {
                project_id: project.id(),
                patch: ProjectPatch {
                    cities: Some(vec![
                        Alternative::new("x", "X"),
                        Alternative::new("x", "Duplicate"),
                    ]),
                    ..Default::default()
                },
            })
            .await
            .unwrap_err();

        assert!(matches!(err, ProjectError::Validation(_)));
        assert_eq!(repo.stored()[0], project);
    }

    #[tokio::test]
    async fn missing_project_is_not_found() {
        let err = handler(Arc::new(MockProjectRepository::new()))
            .handle(UpdateProjectCommand {
                project_id: ProjectId::new(),
                patch: ProjectPatch::default(),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, ProjectError::NotFound(_)));
    }
}
