//! Drop rows that carry neither genre data nor a title.

use super::CleaningStage;
use crate::error::Result;
use crate::types::RawTitleRow;

/// Removes a row only when its `genres` AND its `title` are both absent.
///
/// Absent means the CSV field was empty. Whitespace-only text is present.
///
/// A titled row with no genre data survives and ends up in the catalog with
/// an empty genre list, so it can never be recommended.
pub struct MissingGenresStage;

impl CleaningStage for MissingGenresStage {
    fn name(&self) -> &str {
        "MissingGenresStage"
    }

    fn apply(&self, mut rows: Vec<RawTitleRow>) -> Result<Vec<RawTitleRow>> {
        rows.retain(|row| !(row.genres.is_none() && row.title.is_none()));
        Ok(rows)
    }
}
