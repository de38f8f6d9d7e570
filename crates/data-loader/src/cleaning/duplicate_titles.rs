//! Title deduplication.

use super::CleaningStage;
use crate::error::Result;
use crate::types::RawTitleRow;
use std::collections::HashSet;

/// Keeps the first row for each title in source order.
///
/// Titles compare case-sensitively. Rows without a title share a single key,
/// so only the first untitled row is kept.
pub struct DuplicateTitleStage;

impl CleaningStage for DuplicateTitleStage {
    fn name(&self) -> &str {
        "DuplicateTitleStage"
    }

    fn apply(&self, mut rows: Vec<RawTitleRow>) -> Result<Vec<RawTitleRow>> {
        let mut seen: HashSet<Option<String>> = HashSet::with_capacity(rows.len());
        rows.retain(|row| seen.insert(row.title.clone()));
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cleaning::test_rows::row;

    #[test]
    fn test_keeps_first_occurrence() {
        let rows = vec![
            row("1", Some("Dark"), Some("['thriller']"), Some(8.7)),
            row("2", Some("Ozark"), Some("['crime']"), Some(8.5)),
            row("3", Some("Dark"), Some("['scifi']"), Some(6.0)),
            row("4", Some("dark"), Some("['drama']"), Some(5.0)),
        ];

        let cleaned = DuplicateTitleStage.apply(rows).unwrap();
        let ids: Vec<_> = cleaned.iter().map(|r| r.id.as_deref().unwrap()).collect();

        // case-sensitive: "dark" is a different title
        assert_eq!(ids, vec!["1", "2", "4"]);
    }

    #[test]
    fn test_untitled_rows_share_a_key() {
        let rows = vec![
            row("1", None, Some("['drama']"), Some(1.0)),
            row("2", None, Some("['comedy']"), Some(2.0)),
        ];

        let cleaned = DuplicateTitleStage.apply(rows).unwrap();
        assert_eq!(cleaned.len(), 1);
        assert_eq!(cleaned[0].id.as_deref(), Some("1"));
    }
}
