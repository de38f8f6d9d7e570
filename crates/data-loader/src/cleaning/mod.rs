//! Catalog cleaning.
//!
//! The raw table goes through a chain of `CleaningStage`s. Every stage sees
//! the whole table produced by the previous one, so the order of stages is
//! part of the contract: deduplication and the ASCII filter both look at
//! `title` and must run after any stage that can delete rows.

pub mod ascii_titles;
pub mod duplicate_titles;
pub mod missing_genres;
pub mod missing_score;

pub use ascii_titles::AsciiTitleStage;
pub use duplicate_titles::DuplicateTitleStage;
pub use missing_genres::MissingGenresStage;
pub use missing_score::MissingScoreStage;

use crate::error::Result;
use crate::types::RawTitleRow;
use tracing::{debug, instrument};

/// One step of the cleaning pipeline.
///
/// Stages take ownership of the table and hand back the cleaned table,
/// which keeps the chain free of copies.
pub trait CleaningStage {
    /// Returns the name of this stage (for logging/debugging)
    fn name(&self) -> &str;

    /// Apply this stage to the full table
    fn apply(&self, rows: Vec<RawTitleRow>) -> Result<Vec<RawTitleRow>>;
}

/// Chains cleaning stages together.
///
/// ## Usage
/// ```ignore
/// let pipeline = CleaningPipeline::new()
///     .add_stage(MissingScoreStage)
///     .add_stage(DuplicateTitleStage);
///
/// let cleaned = pipeline.apply(rows)?;
/// ```
pub struct CleaningPipeline {
    stages: Vec<Box<dyn CleaningStage>>,
}

impl CleaningPipeline {
    /// Create a new empty CleaningPipeline.
    pub fn new() -> Self {
        Self { stages: Vec::new() }
    }

    /// The catalog cleaning steps, in the order they must run:
    /// 1. missing quality scores become 0.0
    /// 2. rows lacking both genres and title are dropped
    /// 3. duplicate titles are dropped, first occurrence wins
    /// 4. titles with non-ASCII characters are dropped
    pub fn standard() -> Self {
        Self::new()
            .add_stage(MissingScoreStage)
            .add_stage(MissingGenresStage)
            .add_stage(DuplicateTitleStage)
            .add_stage(AsciiTitleStage)
    }

    /// Add a stage to the pipeline (builder pattern).
    pub fn add_stage(mut self, stage: impl CleaningStage + 'static) -> Self {
        self.stages.push(Box::new(stage));
        self
    }

    /// Names of the configured stages, in execution order
    pub fn stage_names(&self) -> Vec<&str> {
        self.stages.iter().map(|s| s.name()).collect()
    }

    /// Apply all stages in sequence.
    ///
    /// Stops at the first failing stage; the partially cleaned table is dropped.
    #[instrument(skip_all, fields(rows = rows.len()))]
    pub fn apply(&self, rows: Vec<RawTitleRow>) -> Result<Vec<RawTitleRow>> {
        let mut current = rows;
        for stage in &self.stages {
            let before = current.len();
            current = stage.apply(current)?;
            debug!(
                "Cleaning stage {}: {} -> {} rows",
                stage.name(),
                before,
                current.len()
            );
        }
        Ok(current)
    }
}

impl Default for CleaningPipeline {
    fn default() -> Self {
        Self::new()
    }
}
