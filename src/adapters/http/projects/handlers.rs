//! HTTP handlers for project endpoints.
//!
//! These handlers connect Axum routes to application layer command/query handlers.

use std::sync::Arc;

use axum::extract::{Json, Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::application::handlers::project::{
    CalculateRankingCommand, CalculateRankingHandler, CalculationError, CreateProjectCommand,
    CreateProjectHandler, DeleteProjectCommand, DeleteProjectHandler, GetProjectHandler,
    GetProjectQuery, ListProjectsHandler, ListProjectsQuery, ProjectError, UpdateProjectCommand,
    UpdateProjectHandler,
};
use crate::domain::ahp::AhpEngine;
use crate::domain::foundation::{ProjectId, ValidationError};
use crate::domain::project::{ProjectInput, ProjectPatch};
use crate::ports::ProjectRepository;

use super::dto::{
    ErrorResponse, HealthResponse, ProjectRecord, ProjectResponse, ProjectSummaryResponse,
};

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared application state containing all dependencies.
#[derive(Clone)]
pub struct ProjectsAppState {
    pub project_repository: Arc<dyn ProjectRepository>,
    pub engine: AhpEngine,
}

impl ProjectsAppState {
    pub fn new(project_repository: Arc<dyn ProjectRepository>, engine: AhpEngine) -> Self {
        Self {
            project_repository,
            engine,
        }
    }

    pub fn calculate_handler(&self) -> CalculateRankingHandler {
        CalculateRankingHandler::new(self.engine)
    }

    pub fn create_project_handler(&self) -> CreateProjectHandler {
        CreateProjectHandler::new(self.project_repository.clone(), self.calculate_handler())
    }

    pub fn get_project_handler(&self) -> GetProjectHandler {
        GetProjectHandler::new(self.project_repository.clone())
    }

    pub fn list_projects_handler(&self) -> ListProjectsHandler {
        ListProjectsHandler::new(self.project_repository.clone())
    }

    pub fn update_project_handler(&self) -> UpdateProjectHandler {
        UpdateProjectHandler::new(self.project_repository.clone(), self.calculate_handler())
    }

    pub fn delete_project_handler(&self) -> DeleteProjectHandler {
        DeleteProjectHandler::new(self.project_repository.clone())
    }
}

fn parse_project_id(raw: &str) -> Result<ProjectId, ProjectApiError> {
    raw.parse()
        .map_err(|_| ProjectApiError::BadRequest("Invalid project ID format".to_string()))
}

// ════════════════════════════════════════════════════════════════════════════════
// Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// GET /health - Liveness probe
pub async fn health() -> impl IntoResponse {
    Json(HealthResponse::ok())
}

/// POST /api/projects/calculate - Calculate a ranking without saving it
pub async fn calculate(
    State(state): State<ProjectsAppState>,
    Json(input): Json<ProjectInput>,
) -> Result<impl IntoResponse, ProjectApiError> {
    let report = state
        .calculate_handler()
        .handle(CalculateRankingCommand { input })?;
    Ok(Json(report))
}

/// POST /api/projects - Calculate and save a project
pub async fn create_project(
    State(state): State<ProjectsAppState>,
    Json(request): Json<ProjectRecord>,
) -> Result<impl IntoResponse, ProjectApiError> {
    let cmd = CreateProjectCommand {
        title: request.title,
        input: request.input,
    };
    let project = state.create_project_handler().handle(cmd).await?;
    Ok((StatusCode::CREATED, Json(ProjectResponse::from(project))))
}

/// GET /api/projects - List projects, newest first
pub async fn list_projects(
    State(state): State<ProjectsAppState>,
) -> Result<impl IntoResponse, ProjectApiError> {
    let projects = state.list_projects_handler().handle(ListProjectsQuery).await?;
    let response: Vec<ProjectSummaryResponse> =
        projects.iter().map(ProjectSummaryResponse::from).collect();
    Ok(Json(response))
}

/// GET /api/projects/:id - Get one project with its original record
pub async fn get_project(
    State(state): State<ProjectsAppState>,
    Path(project_id): Path<String>,
) -> Result<impl IntoResponse, ProjectApiError> {
    let project_id = parse_project_id(&project_id)?;
    let project = state
        .get_project_handler()
        .handle(GetProjectQuery { project_id })
        .await?;
    Ok(Json(ProjectResponse::from(project)))
}

/// PATCH /api/projects/:id - Rename or recalculate a project
pub async fn update_project(
    State(state): State<ProjectsAppState>,
    Path(project_id): Path<String>,
    Json(patch): Json<ProjectPatch>,
) -> Result<impl IntoResponse, ProjectApiError> {
    let project_id = parse_project_id(&project_id)?;
    let project = state
        .update_project_handler()
        .handle(UpdateProjectCommand { project_id, patch })
        .await?;
    Ok(Json(ProjectResponse::from(project)))
}

/// DELETE /api/projects/:id - Delete a project
pub async fn delete_project(
    State(state): State<ProjectsAppState>,
    Path(project_id): Path<String>,
) -> Result<impl IntoResponse, ProjectApiError> {
    let project_id = parse_project_id(&project_id)?;
    state
        .delete_project_handler()
        .handle(DeleteProjectCommand { project_id })
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Handling
// ════════════════════════════════════════════════════════════════════════════════

/// API error type that converts application errors to HTTP responses.
#[derive(Debug)]
pub enum ProjectApiError {
    BadRequest(String),
    Project(ProjectError),
}

impl From<ProjectError> for ProjectApiError {
    fn from(err: ProjectError) -> Self {
        Self::Project(err)
    }
}

impl From<CalculationError> for ProjectApiError {
    fn from(err: CalculationError) -> Self {
        Self::Project(err.into())
    }
}

fn validation_response(err: &ValidationError) -> ErrorResponse {
    ErrorResponse::with_details(
        "VALIDATION_FAILED",
        err.to_string(),
        serde_json::json!({ "field": err.field() }),
    )
}

impl IntoResponse for ProjectApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, body) = match &self {
            ProjectApiError::BadRequest(message) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::new("BAD_REQUEST", message.clone()),
            ),
            ProjectApiError::Project(ProjectError::Validation(err)) => {
                (StatusCode::BAD_REQUEST, validation_response(err))
            }
            ProjectApiError::Project(err @ ProjectError::NotFound(_)) => (
                StatusCode::NOT_FOUND,
                ErrorResponse::new(err.code().to_string(), err.to_string()),
            ),
            ProjectApiError::Project(ProjectError::Storage(err)) => {
                tracing::error!(error = %err, "project storage failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::new("INTERNAL_ERROR", "An internal error occurred"),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}
