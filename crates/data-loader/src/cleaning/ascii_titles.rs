//! Drop titles containing characters outside 7-bit ASCII.

use super::CleaningStage;
use crate::error::Result;
use crate::types::RawTitleRow;

pub struct AsciiTitleStage;

impl CleaningStage for AsciiTitleStage {
    fn name(&self) -> &str {
        "AsciiTitleStage"
    }

    fn apply(&self, mut rows: Vec<RawTitleRow>) -> Result<Vec<RawTitleRow>> {
        rows.retain(|row| row.title.as_deref().is_none_or(str::is_ascii));
        Ok(rows)
    }
}
