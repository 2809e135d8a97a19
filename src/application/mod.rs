//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Following CQRS, it separates command handlers (write) from query handlers (read).

pub mod handlers;

pub use handlers::{
    CalculateRankingCommand, CalculateRankingHandler, CalculationError, CreateProjectCommand,
    CreateProjectHandler, DeleteProjectCommand, DeleteProjectHandler, GetProjectHandler,
    GetProjectQuery, ListProjectsHandler, ListProjectsQuery, ProjectError, UpdateProjectCommand,
    UpdateProjectHandler,
};
