//! Project command and query handlers.

mod calculate_ranking;
mod create_project;
mod delete_project;
mod errors;
mod get_project;
mod list_projects;
mod update_project;

#[cfg(test)]
mod test_support;

pub use calculate_ranking::{CalculateRankingCommand, CalculateRankingHandler};
pub use create_project::{CreateProjectCommand, CreateProjectHandler};
pub use delete_project::{DeleteProjectCommand, DeleteProjectHandler};
pub use errors::{CalculationError, ProjectError};
pub use get_project::{GetProjectHandler, GetProjectQuery};
pub use list_projects::{ListProjectsHandler, ListProjectsQuery};
pub use update_project::{UpdateProjectCommand, UpdateProjectHandler};
