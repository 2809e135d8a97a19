//! Shared fixtures for project handler tests.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

use crate::domain::ahp::{Alternative, Criterion};
use crate::domain::foundation::{CriterionType, DomainError, ErrorCode, ProjectId};
use crate::domain::project::{Project, ProjectInput};
use crate::ports::ProjectRepository;

pub struct MockProjectRepository {
    projects: Mutex<Vec<Project>>,
    fail_writes: bool,
}

impl MockProjectRepository {
    pub fn new() -> Self {
        Self {
            projects: Mutex::new(Vec::new()),
            fail_writes: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            projects: Mutex::new(Vec::new()),
            fail_writes: true,
        }
    }

    pub fn with(project: Project) -> Self {
        let repo = Self::new();
        repo.projects.lock().unwrap().push(project);
        repo
    }

    pub fn stored(&self) -> Vec<Project> {
        self.projects.lock().unwrap().clone()
    }

    fn write_guard(&self) -> Result<(), DomainError> {
        if self.fail_writes {
            return Err(DomainError::new(
                ErrorCode::StorageError,
                "Simulated write failure",
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl ProjectRepository for MockProjectRepository {
    async fn save(&self, project: &Project) -> Result<(), DomainError> {
        self.write_guard()?;
        self.projects.lock().unwrap().push(project.clone());
        Ok(())
    }

    async fn update(&self, project: &Project) -> Result<(), DomainError> {
        self.write_guard()?;
        let mut projects = self.projects.lock().unwrap();
        match projects.iter_mut().find(|p| p.id() == project.id()) {
            Some(stored) => {
                *stored = project.clone();
                Ok(())
            }
            None => Err(DomainError::new(ErrorCode::ProjectNotFound, "missing")),
        }
    }

    async fn find_by_id(&self, id: &ProjectId) -> Result<Option<Project>, DomainError> {
        Ok(self
            .projects
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.id() == *id)
            .cloned())
    }

    async fn list(&self) -> Result<Vec<Project>, DomainError> {
        let mut projects = self.stored();
        projects.sort_by(|a, b| b.created_at().cmp(&a.created_at()));
        Ok(projects)
    }

    async fn delete(&self, id: &ProjectId) -> Result<(), DomainError> {
        self.write_guard()?;
        let mut projects = self.projects.lock().unwrap();
        let before = projects.len();
        projects.retain(|p| p.id() != *id);
        if projects.len() == before {
            return Err(DomainError::new(ErrorCode::ProjectNotFound, "missing"));
        }
        Ok(())
    }
}

/// Two cities, two criteria; Porto wins.
pub fn sample_input() -> ProjectInput {
    ProjectInput {
        cities: vec![Alternative::new("lis", "Lisbon"), Alternative::new("opo", "Porto")],
        criteria: vec![Criterion::new("cost", "Cost"), Criterion::new("safety", "Safety")],
        criteria_matrix: HashMap::from([("cost-safety".to_string(), 3.0)]),
        evaluation_values: HashMap::from([
            ("lis-cost".to_string(), 2000.0),
            ("opo-cost".to_string(), 1000.0),
            ("lis-safety".to_string(), 8.0),
            ("opo-safety".to_string(), 6.0),
        ]),
        criteria_config: HashMap::from([("cost".to_string(), CriterionType::Cost)]),
        ..Default::default()
    }
}

pub fn sample_project(title: &str) -> Project {
    let input = sample_input();
    let results = crate::domain::ahp::AhpEngine::default().calculate(&input.resolve());
    Project::new(title, input, results).unwrap()
}
