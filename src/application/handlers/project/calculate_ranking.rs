//! CalculateRankingHandler - Stateless calculation of a submitted record.

use crate::domain::ahp::{AhpEngine, CalculationReport};
use crate::domain::project::ProjectInput;

use super::CalculationError;

/// Command to calculate a ranking without persisting it.
#[derive(Debug, Clone)]
pub struct CalculateRankingCommand {
    pub input: ProjectInput,
}

/// Handler running the AHP engine over validated records.
#[derive(Debug, Clone, Copy, Default)]
pub struct CalculateRankingHandler {
    engine: AhpEngine,
}

impl CalculateRankingHandler {
    pub fn new(engine: AhpEngine) -> Self {
        Self { engine }
    }

    pub fn handle(&self, cmd: CalculateRankingCommand) -> Result<CalculationReport, CalculationError> {
        self.calculate(&cmd.input)
    }

    /// Validates and calculates a record.
    pub fn calculate(&self, input: &ProjectInput) -> Result<CalculationReport, CalculationError> {
        input.validate()?;

        let report = self.engine.calculate(&input.resolve());
        tracing::info!(
            criteria = input.criteria.len(),
            alternatives = input.cities.len(),
            sub_criteria = input.sub_criteria.len(),
            consistent = report.is_consistent,
            winner = report.winner().unwrap_or_default(),
            "ranking calculated"
        );
        Ok(report)
    }
}
