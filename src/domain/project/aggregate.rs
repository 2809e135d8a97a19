//! Project aggregate - A saved calculation record with its results.
//!
//! A Project is always stored in a completed state: it is created from a
//! successful calculation, and every content update recalculates.

use serde::{Deserialize, Serialize};

use crate::domain::ahp::CalculationReport;
use crate::domain::foundation::{ProjectId, Timestamp, ValidationError};

use super::ProjectInput;

/// Minimum number of characters in a project title.
pub const MIN_TITLE_LENGTH: usize = 3;

/// Lifecycle status of a project.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectStatus {
    #[default]
    Completed,
}

/// Validates and normalizes a project title.
pub fn validate_title(title: &str) -> Result<String, ValidationError> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::empty_field("title"));
    }
    if trimmed.chars().count() < MIN_TITLE_LENGTH {
        return Err(ValidationError::too_short("title", MIN_TITLE_LENGTH));
    }
    Ok(trimmed.to_string())
}

/// The Project aggregate root.
#[derive(Debug, Clone, PartialEq)]
pub struct Project {
    id: ProjectId,
    title: String,
    input: ProjectInput,
    results: CalculationReport,
    status: ProjectStatus,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl Project {
    /// Creates a project from a calculated record.
    ///
    /// # Errors
    ///
    /// Returns a `ValidationError` if the title is blank or too short.
    pub fn new(
        title: &str,
        input: ProjectInput,
        results: CalculationReport,
    ) -> Result<Self, ValidationError> {
        let title = validate_title(title)?;
        let now = Timestamp::now();
        Ok(Self {
            id: ProjectId::new(),
            title,
            input,
            results,
            status: ProjectStatus::Completed,
            created_at: now,
            updated_at: now,
        })
    }

    /// Reconstitutes a project from persisted data.
    pub fn reconstitute(
        id: ProjectId,
        title: String,
        input: ProjectInput,
        results: CalculationReport,
        created_at: Timestamp,
        updated_at: Timestamp,
    ) -> Self {
        Self {
            id,
            title,
            input,
            results,
            status: ProjectStatus::Completed,
            created_at,
            updated_at,
        }
    }

    pub fn id(&self) -> ProjectId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn input(&self) -> &ProjectInput {
        &self.input
    }

    pub fn results(&self) -> &CalculationReport {
        &self.results
    }

    pub fn status(&self) -> ProjectStatus {
        self.status
    }

    /// Number of alternatives in the record.
    pub fn alternatives_count(&self) -> usize {
        self.input.cities.len()
    }

    /// Number of top-level criteria in the record.
    pub fn criteria_count(&self) -> usize {
        self.input.criteria.len()
    }

    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }

    pub fn updated_at(&self) -> Timestamp {
        self.updated_at
    }

    /// Renames the project, keeping the stored results.
    pub fn rename(&mut self, title: &str) -> Result<(), ValidationError> {
        self.title = validate_title(title)?;
        self.touch();
        Ok(())
    }

    /// Replaces the record and its results after a recalculation.
    pub fn replace_calculation(&mut self, input: ProjectInput, results: CalculationReport) {
        self.input = input;
        self.results = results;
        self.touch();
    }

    fn touch(&mut self) {
        let now = Timestamp::now();
        // Keep updated_at monotonic on coarse clocks.
        if now.is_before(&self.updated_at) {
            return;
        }
        self.updated_at = now;
    }
}
