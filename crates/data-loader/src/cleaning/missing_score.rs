//! Normalize absent quality scores.

use super::CleaningStage;
use crate::error::Result;
use crate::types::RawTitleRow;

/// Replaces every missing `imdb_score` with 0.0. Never removes rows.
pub struct MissingScoreStage;

impl CleaningStage for MissingScoreStage {
    fn name(&self) -> &str {
        "MissingScoreStage"
    }

    fn apply(&self, mut rows: Vec<RawTitleRow>) -> Result<Vec<RawTitleRow>> {
        for row in &mut rows {
            row.imdb_score.get_or_insert(0.0);
        }
        Ok(rows)
    }
}
