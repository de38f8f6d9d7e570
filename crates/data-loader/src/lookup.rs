//! Title lookup over the cleaned catalog.

use crate::types::{Catalog, TitleRecord};
use tracing::debug;

impl Catalog {
    /// Find a title by case-insensitive substring match.
    ///
    /// Returns the first matching record in catalog order, not the closest
    /// match, or `None` when nothing matches.
    pub fn find_title(&self, query: &str) -> Option<&TitleRecord> {
        let query_lower = query.to_lowercase();
        let found = self
            .records
            .iter()
            .find(|record| record.title.to_lowercase().contains(&query_lower));

        if found.is_none() {
            debug!("No title matches '{}'", query);
        }
        found
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_catalog() -> Catalog {
        let mut catalog = Catalog::new();
        for (id, title) in [
            ("tm1", "Monty Python and the Holy Grail"),
            ("tm2", "Life of Brian"),
            ("tm3", "Monty Python's Flying Circus"),
        ] {
            catalog.insert(TitleRecord::new(id, title, "MOVIE", "", "['comedy']", "", 8.0));
        }
        catalog
    }

    #[test]
    fn test_find_is_case_insensitive() {
        let catalog = create_test_catalog();
        assert_eq!(catalog.find_title("LIFE OF brian").unwrap().id, "tm2");
        assert_eq!(catalog.find_title("of bri").unwrap().id, "tm2");
    }

    #[test]
    fn test_find_returns_first_match_in_catalog_order() {
        let catalog = create_test_catalog();
        // "Flying Circus" would be a closer match, but the Holy Grail comes first
        assert_eq!(catalog.find_title("monty python").unwrap().id, "tm1");
    }

    #[test]
    fn test_not_found() {
        let catalog = create_test_catalog();
        assert!(catalog.find_title("Fawlty Towers").is_none());
        assert!(Catalog::new().find_title("anything").is_none());
    }
}
