//! HTTP adapter for project endpoints.
//!
//! - `POST /api/projects/calculate` - Calculate a ranking without saving
//! - `POST /api/projects` - Calculate and save a project
//! - `GET /api/projects` - List projects, newest first
//! - `GET /api/projects/:id` - Get a project with its original record
//! - `PATCH /api/projects/:id` - Rename, or merge and recalculate
//! - `DELETE /api/projects/:id` - Delete a project
//! - `GET /health` - Liveness probe

pub mod dto;
pub mod handlers;
pub mod routes;

pub use handlers::{ProjectApiError, ProjectsAppState};
pub use routes::{project_routes, projects_router};
