//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod project;

pub use project::{
    CalculateRankingCommand, CalculateRankingHandler, CalculationError, CreateProjectCommand,
    CreateProjectHandler, DeleteProjectCommand, DeleteProjectHandler, GetProjectHandler,
    GetProjectQuery, ListProjectsHandler, ListProjectsQuery, ProjectError, UpdateProjectCommand,
    UpdateProjectHandler,
};
