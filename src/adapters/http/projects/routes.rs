//! Route configuration for project endpoints.

use axum::routing::{get, post};
use axum::Router;

use super::handlers::{
    calculate, create_project, delete_project, get_project, health, list_projects,
    update_project, ProjectsAppState,
};

/// Creates the project routes, to be nested under `/api/projects`.
///
/// Routes:
/// - `POST /calculate` - Calculate without saving
/// - `POST /` - Calculate and save a project
/// - `GET /` - List projects
/// - `GET /:id` - Get a project
/// - `PATCH /:id` - Update a project
/// - `DELETE /:id` - Delete a project
pub fn project_routes() -> Router<ProjectsAppState> {
    Router::new()
        .route("/calculate", post(calculate))
        .route("/", post(create_project).get(list_projects))
        .route(
            "/:id",
            get(get_project).patch(update_project).delete(delete_project),
        )
}

/// Creates the complete project API router.
///
/// Mounts the project routes at `/api/projects` and the health probe at `/health`.
pub fn projects_router() -> Router<ProjectsAppState> {
    Router::new()
        .route("/health", get(health))
        .nest("/api/projects", project_routes())
}
