//! User preference sets.
//!
//! A `UserProfile` is a named list of catalog titles the user likes. It only
//! ever grows: titles are added through `add_preference` and never removed.

use crate::error::PreferenceError;
use data_loader::{Catalog, TitleRecord};
use std::collections::{BTreeMap, HashSet};
use tracing::{debug, info, instrument};

/// What `add_preference` did with a query that was accepted
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddOutcome {
    /// The query resolved to `title`, which is now part of the preferences
    Added { title: String },
    /// A held title already equals the query (ignoring case); nothing changed
    AlreadyPresent,
}

/// A named set of preferred titles
#[derive(Debug, Clone)]
pub struct UserProfile {
    name: String,
    preferences: Vec<TitleRecord>,
}

impl UserProfile {
    /// Register a user with no preferences. Names need not be unique.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            preferences: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Preferred titles in the order they were added
    pub fn preferences(&self) -> &[TitleRecord] {
        &self.preferences
    }

    /// Whether a held title equals `title`, ignoring case
    pub fn holds_title(&self, title: &str) -> bool {
        let title_lower = title.to_lowercase();
        self.preferences
            .iter()
            .any(|record| record.title.to_lowercase() == title_lower)
    }

    /// Resolve `query` against the catalog and add the matching title.
    ///
    /// The duplicate check compares the raw query with the titles already
    /// held, before any lookup. A partial query such as "brian" therefore
    /// adds "Life of Brian" a second time even when it is already held;
    /// only the exact title (in any case) is skipped.
    ///
    /// # Errors
    /// * `PreferenceError::EmptyQuery` - the query is blank
    /// * `PreferenceError::NotFound` - no catalog title contains the query
    #[instrument(skip(self, catalog), fields(user = %self.name))]
    pub fn add_preference(
        &mut self,
        query: &str,
        catalog: &Catalog,
    ) -> Result<AddOutcome, PreferenceError> {
        if query.trim().is_empty() {
            return Err(PreferenceError::EmptyQuery);
        }

        if self.holds_title(query) {
            debug!("'{}' is already in {}'s preferences", query, self.name);
            return Ok(AddOutcome::AlreadyPresent);
        }

        let record = catalog
            .find_title(query)
            .ok_or_else(|| PreferenceError::NotFound {
                query: query.to_string(),
            })?;

        info!("Added '{}' to {}'s preferences", record.title, self.name);
        self.preferences.push(record.clone());
        Ok(AddOutcome::Added {
            title: record.title.clone(),
        })
    }

    /// Number of preferred titles tagged with each genre.
    ///
    /// A title counts once per genre even if its genre list repeats a tag.
    pub fn genre_frequencies(&self) -> BTreeMap<&str, usize> {
        let mut frequencies = BTreeMap::new();
        for record in &self.preferences {
            let unique: HashSet<&str> = record.genres.iter().map(String::as_str).collect();
            for genre in unique {
                *frequencies.entry(genre).or_insert(0) += 1;
            }
        }
        frequencies
    }
}
