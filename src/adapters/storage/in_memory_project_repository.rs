//! In-Memory Project Repository Adapter
//!
//! Stores projects in process memory. Contents are lost on restart.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, ErrorCode, ProjectId};
use crate::domain::project::Project;
use crate::ports::ProjectRepository;

/// In-memory storage for projects
#[derive(Debug, Clone)]
pub struct InMemoryProjectRepository {
    projects: Arc<RwLock<HashMap<ProjectId, Project>>>,
}

impl InMemoryProjectRepository {
    /// Create a new empty repository
    pub fn new() -> Self {
        Self {
            projects: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Get the number of stored projects
    pub async fn project_count(&self) -> usize {
        self.projects.read().await.len()
    }

    /// Clear all stored projects (useful for tests)
    pub async fn clear(&self) {
        self.projects.write().await.clear();
    }
}

impl Default for InMemoryProjectRepository {
    fn default() -> Self {
        Self::new()
    }
}

fn not_found(id: &ProjectId) -> DomainError {
    DomainError::new(ErrorCode::ProjectNotFound, format!("Project not found: {}", id))
        .with_detail("id", id.to_string())
}

#[async_trait]
impl ProjectRepository for InMemoryProjectRepository {
    async fn save(&self, project: &Project) -> Result<(), DomainError> {
        let mut projects = self.projects.write().await;
        projects.insert(project.id(), project.clone());
        Ok(())
    }

    async fn update(&self, project: &Project) -> Result<(), DomainError> {
        let mut projects = self.projects.write().await;
        match projects.get_mut(&project.id()) {
            Some(stored) => {
                *stored = project.clone();
                Ok(())
            }
            None => Err(not_found(&project.id())),
        }
    }

    async fn find_by_id(&self, id: &ProjectId) -> Result<Option<Project>, DomainError> {
        let projects = self.projects.read().await;
        Ok(projects.get(id).cloned())
    }

    async fn list(&self) -> Result<Vec<Project>, DomainError> {
        let projects = self.projects.read().await;
        let mut listed: Vec<Project> = projects.values().cloned().collect();
        listed.sort_by(|a, b| {
            b.created_at()
                .cmp(&a.created_at())
                .then_with(|| b.id().to_string().cmp(&a.id().to_string()))
        });
        Ok(listed)
    }

    async fn delete(&self, id: &ProjectId) -> Result<(), DomainError> {
        let mut projects = self.projects.write().await;
        projects.remove(id).map(|_| ()).ok_or_else(|| not_found(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ahp::{AhpEngine, Alternative, Criterion};
    use crate::domain::foundation::Timestamp;
    use crate::domain::project::ProjectInput;
    use chrono::{Duration, Utc};

    fn project_created_at(title: &str, minutes_ago: i64) -> Project {
        let input = ProjectInput {
            cities: vec![Alternative::new("a", "Alpha")],
            criteria: vec![Criterion::new("c1", "Price")],
            ..Default::default()
        };
        let results = AhpEngine::default().calculate(&input.resolve());
        let at = Timestamp::from_datetime(Utc::now() - Duration::minutes(minutes_ago));
        Project::reconstitute(ProjectId::new(), title.to_string(), input, results, at, at)
    }

    #[tokio::test]
    async fn save_and_find() {
        let repo = InMemoryProjectRepository::new();
        let project = project_created_at("First", 0);

        repo.save(&project).await.unwrap();

        let found = repo.find_by_id(&project.id()).await.unwrap();
        assert_eq!(found, Some(project));
        assert_eq!(repo.project_count().await, 1);
    }

    #[tokio::test]
    async fn find_missing_returns_none() {
        let repo = InMemoryProjectRepository::new();
        assert!(repo.find_by_id(&ProjectId::new()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn list_is_newest_first() {
        let repo = InMemoryProjectRepository::new();
        repo.save(&project_created_at("Old", 30)).await.unwrap();
        repo.save(&project_created_at("New", 1)).await.unwrap();
        repo.save(&project_created_at("Middle", 10)).await.unwrap();

        let titles: Vec<String> = repo
            .list()
            .await
            .unwrap()
            .iter()
            .map(|p| p.title().to_string())
            .collect();

        assert_eq!(titles, vec!["New", "Middle", "Old"]);
    }

    #[tokio::test]
    async fn update_missing_fails_with_not_found() {
        let repo = InMemoryProjectRepository::new();
        let err = repo.update(&project_created_at("Ghost", 0)).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ProjectNotFound);
    }

    #[tokio::test]
    async fn update_replaces_stored_project() {
        let repo = InMemoryProjectRepository::new();
        let mut project = project_created_at("Draft", 0);
        repo.save(&project).await.unwrap();

        project.rename("Final").unwrap();
        repo.update(&project).await.unwrap();

        let found = repo.find_by_id(&project.id()).await.unwrap().unwrap();
        assert_eq!(found.title(), "Final");
    }

    #[tokio::test]
    async fn delete_removes_and_then_fails() {
        let repo = InMemoryProjectRepository::new();
        let project = project_created_at("Temp", 0);
        repo.save(&project).await.unwrap();

        repo.delete(&project.id()).await.unwrap();
        assert_eq!(repo.project_count().await, 0);

        let err = repo.delete(&project.id()).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ProjectNotFound);
    }
}
