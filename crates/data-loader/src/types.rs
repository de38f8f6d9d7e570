//! Core domain types for the title catalog.
//!
//! Three layers live here:
//! - `RawTitleRow`: one CSV row restricted to the columns we need, every field optional
//! - `TitleRecord`: a cleaned, immutable catalog entry with its genre list parsed
//! - `Catalog`: the ordered collection of records built once per run

use crate::parser::parse_genre_list;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// =============================================================================
// Type Aliases
// =============================================================================

/// Opaque catalog identifier assigned by the source dataset (e.g. "tm70993")
pub type TitleId = String;

/// Columns every source file must provide, in canonical order
pub const REQUIRED_COLUMNS: [&str; 7] = [
    "id",
    "title",
    "type",
    "description",
    "age_certification",
    "genres",
    "imdb_score",
];

// =============================================================================
// Raw rows
// =============================================================================

/// One row of the source table before cleaning.
///
/// Empty CSV fields deserialize to `None`. Columns outside
/// `REQUIRED_COLUMNS` are ignored by serde.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawTitleRow {
    pub id: Option<String>,
    pub title: Option<String>,
    #[serde(rename = "type")]
    pub media_type: Option<String>,
    pub description: Option<String>,
    pub age_certification: Option<String>,
    /// Genre list in its stored form, e.g. `"['comedy', 'european']"`
    pub genres: Option<String>,
    pub imdb_score: Option<f32>,
}

// =============================================================================
// Title records
// =============================================================================

/// A single catalog entry (movie or show).
///
/// Records are built once at load time and never mutated afterwards;
/// collections that need one (a user's preferences) hold their own clone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TitleRecord {
    pub id: TitleId,
    pub title: String,
    /// "MOVIE" or "SHOW" in the Netflix data, kept as an opaque string
    pub media_type: String,
    pub description: String,
    /// Genre tags in source order
    pub genres: Vec<String>,
    /// Certification such as "R" or "TV-MA", absent for many titles
    pub age_rating: Option<String>,
    /// IMDb score, 0.0 when the source had none
    pub quality_score: f32,
}

impl TitleRecord {
    /// Build a record from scalar fields plus the genre list in its stored textual form.
    ///
    /// An empty `age_rating` is stored as `None`.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        media_type: impl Into<String>,
        description: impl Into<String>,
        genres: &str,
        age_rating: impl Into<String>,
        quality_score: f32,
    ) -> Self {
        let age_rating = age_rating.into();
        Self {
            id: id.into(),
            title: title.into(),
            media_type: media_type.into(),
            description: description.into(),
            genres: parse_genre_list(genres),
            age_rating: if age_rating.trim().is_empty() {
                None
            } else {
                Some(age_rating)
            },
            quality_score,
        }
    }

    /// Build a record from a (cleaned) raw row. Absent text becomes an empty string.
    pub fn from_row(row: RawTitleRow) -> Self {
        Self::new(
            row.id.unwrap_or_default(),
            row.title.unwrap_or_default(),
            row.media_type.unwrap_or_default(),
            row.description.unwrap_or_default(),
            row.genres.as_deref().unwrap_or(""),
            row.age_certification.unwrap_or_default(),
            row.imdb_score.unwrap_or(0.0),
        )
    }
}

// =============================================================================
// Catalog - the in-memory table
// =============================================================================

/// Ordered collection of cleaned title records.
///
/// Source order is significant: lookup returns the first match and the
/// ranker breaks ties by catalog position, so records are kept in a `Vec`
/// with a side index for id lookups.
#[derive(Debug, Clone)]
pub struct Catalog {
    pub(crate) records: Vec<TitleRecord>,
    /// Position of each record in `records`, keyed by id
    pub(crate) id_index: HashMap<TitleId, usize>,
}

impl Catalog {
    /// Creates a new, empty Catalog
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            id_index: HashMap::new(),
        }
    }

    /// Get a record by its catalog id
    pub fn get(&self, id: &str) -> Option<&TitleRecord> {
        self.id_index.get(id).map(|&pos| &self.records[pos])
    }

    /// All records in catalog order
    pub fn records(&self) -> &[TitleRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TitleRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Append a record at the end of the catalog.
    ///
    /// Used while building; a repeated id points the index at the newest record.
    pub fn insert(&mut self, record: TitleRecord) {
        self.id_index.insert(record.id.clone(), self.records.len());
        self.records.push(record);
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a TitleRecord;
    type IntoIter = std::slice::Iter<'a, TitleRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
