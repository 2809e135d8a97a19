//! HTTP DTOs (Data Transfer Objects) for project endpoints.
//!
//! Request bodies carry the calculation record in camelCase JSON with the
//! project title alongside it.

use serde::{Deserialize, Serialize};

use crate::domain::ahp::{CalculationReport, RankingProducer};
use crate::domain::foundation::Timestamp;
use crate::domain::project::{Project, ProjectInput, ProjectStatus};

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// A titled calculation record.
///
/// Used as the body of `POST /api/projects` and echoed back as `originalData`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectRecord {
    pub title: String,
    #[serde(flatten)]
    pub input: ProjectInput,
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Full project view.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectResponse {
    pub id: String,
    pub title: String,
    pub status: ProjectStatus,
    pub alternatives_count: usize,
    pub criteria_count: usize,
    pub results: CalculationReport,
    pub original_data: ProjectRecord,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<Project> for ProjectResponse {
    fn from(project: Project) -> Self {
        Self {
            id: project.id().to_string(),
            title: project.title().to_string(),
            status: project.status(),
            alternatives_count: project.alternatives_count(),
            criteria_count: project.criteria_count(),
            results: project.results().clone(),
            original_data: ProjectRecord {
                title: project.title().to_string(),
                input: project.input().clone(),
            },
            created_at: project.created_at(),
            updated_at: project.updated_at(),
        }
    }
}

/// Project list item.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectSummaryResponse {
    pub id: String,
    pub title: String,
    pub status: ProjectStatus,
    pub alternatives_count: usize,
    pub criteria_count: usize,
    /// Name of the top-ranked alternative; absent when the top is tied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub best_alternative: Option<String>,
    pub is_consistent: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<&Project> for ProjectSummaryResponse {
    fn from(project: &Project) -> Self {
        Self {
            id: project.id().to_string(),
            title: project.title().to_string(),
            status: project.status(),
            alternatives_count: project.alternatives_count(),
            criteria_count: project.criteria_count(),
            best_alternative: RankingProducer::find_best(&project.results().ranking)
                .map(|entry| entry.name.clone()),
            is_consistent: project.results().is_consistent,
            created_at: project.created_at(),
            updated_at: project.updated_at(),
        }
    }
}

/// Health probe payload.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self {
            status: "ok",
            version: env!("CARGO_PKG_VERSION"),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Response DTO
// ════════════════════════════════════════════════════════════════════════════════

/// Standard error response for API errors.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    /// Error code for programmatic handling.
    pub error_code: String,
    /// Human-readable error message.
    pub message: String,
    /// Additional details (optional).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    /// Create a new error response.
    pub fn new(error_code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error_code: error_code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Create an error response with details.
    pub fn with_details(
        error_code: impl Into<String>,
        message: impl Into<String>,
        details: serde_json::Value,
    ) -> Self {
        Self {
            error_code: error_code.into(),
            message: message.into(),
            details: Some(details),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ahp::{AhpEngine, Alternative, Criterion};
    use serde_json::json;

    fn project_with_values(values: &[(&str, f64)]) -> Project {
        let input = ProjectInput {
            cities: vec![Alternative::new("a", "Alpha"), Alternative::new("b", "Beta")],
            criteria: vec![Criterion::new("c1", "Price")],
            evaluation_values: values.iter().map(|(k, v)| (k.to_string(), *v)).collect(),
            ..Default::default()
        };
        let results = AhpEngine::default().calculate(&input.resolve());
        Project::new("Relocation", input, results).unwrap()
    }

    fn project() -> Project {
        project_with_values(&[("a-c1", 10.0), ("b-c1", 5.0)])
    }

    #[test]
    fn project_record_reads_title_beside_input() {
        let record: ProjectRecord = serde_json::from_value(json!({
            "title": "Relocation",
            "cities": [{"id": "a", "name": "Alpha"}],
            "criteria": [{"id": "c1", "name": "Price"}],
            "evaluationValues": {"a-c1": 10}
        }))
        .unwrap();

        assert_eq!(record.title, "Relocation");
        assert_eq!(record.input.cities.len(), 1);
        assert_eq!(record.input.evaluation_values.get("a-c1"), Some(&10.0));
    }

    #[test]
    fn project_response_uses_camel_case() {
        let value = serde_json::to_value(ProjectResponse::from(project())).unwrap();

        assert_eq!(value["status"], "completed");
        assert_eq!(value["alternativesCount"], 2);
        assert_eq!(value["criteriaCount"], 1);
        assert_eq!(value["originalData"]["title"], "Relocation");
        assert!(value["results"]["ranking"].is_array());
    }

    #[test]
    fn summary_names_best_alternative() {
        let summary = ProjectSummaryResponse::from(&project());
        assert_eq!(summary.best_alternative.as_deref(), Some("Alpha"));
        assert!(summary.is_consistent);
    }

    #[test]
    fn summary_omits_best_alternative_on_tied_top() {
        let summary = ProjectSummaryResponse::from(&project_with_values(&[]));
        assert_eq!(summary.best_alternative, None);

        let value = serde_json::to_value(&summary).unwrap();
        assert!(value.get("bestAlternative").is_none());
    }

    #[test]
    fn error_response_omits_missing_details() {
        let value = serde_json::to_value(ErrorResponse::new("VALIDATION_FAILED", "bad")).unwrap();
        assert_eq!(value["errorCode"], "VALIDATION_FAILED");
        assert!(value.get("details").is_none());
    }

    #[test]
    fn error_response_with_details_includes_details() {
        let response =
            ErrorResponse::with_details("VALIDATION_FAILED", "bad", json!({"field": "title"}));
        assert_eq!(response.details, Some(json!({"field": "title"})));
    }
}
