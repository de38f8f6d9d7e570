//! Catalog building.
//!
//! Turns a parsed file into the read-only `Catalog` handed to every reader:
//! parse -> clean -> build records -> validate.

use crate::cleaning::CleaningPipeline;
use crate::error::{DataLoadError, Result};
use crate::parser;
use crate::types::*;
use std::collections::{BTreeMap, HashSet};
use std::path::Path;
use tracing::{debug, info, instrument};

impl Catalog {
    /// Load, clean and index the titles file at `path`.
    ///
    /// This is the main entry point for loading data. Any failure is fatal;
    /// there is no partially loaded catalog.
    #[instrument(skip(path), fields(path = %path.display()))]
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let raw = parser::parse_titles(path)?;
        let raw_count = raw.len();

        let pipeline = CleaningPipeline::standard();
        debug!("Cleaning {} rows with {:?}", raw_count, pipeline.stage_names());
        let cleaned = pipeline.apply(raw)?;
        let catalog = Self::from_rows(cleaned);
        catalog.validate()?;

        info!(
            "Loaded {} titles ({} rows dropped during cleaning)",
            catalog.len(),
            raw_count - catalog.len()
        );
        Ok(catalog)
    }

    /// Build a catalog from already-cleaned rows, keeping their order
    pub fn from_rows(rows: Vec<RawTitleRow>) -> Self {
        let mut catalog = Self::new();
        for row in rows {
            catalog.insert(TitleRecord::from_row(row));
        }
        catalog
    }

    /// Check the invariants cleaning is supposed to establish:
    /// - no two records share a title
    /// - every title is pure ASCII
    pub fn validate(&self) -> Result<()> {
        let mut titles = HashSet::with_capacity(self.records.len());
        for record in &self.records {
            if !titles.insert(record.title.as_str()) {
                return Err(DataLoadError::ValidationError(format!(
                    "duplicate title '{}'",
                    record.title
                )));
            }
            if !record.title.is_ascii() {
                return Err(DataLoadError::ValidationError(format!(
                    "non-ASCII title '{}' (id {})",
                    record.title, record.id
                )));
            }
        }
        Ok(())
    }

    /// Number of titles tagged with each genre, sorted by genre
    pub fn genre_counts(&self) -> BTreeMap<&str, usize> {
        let mut counts = BTreeMap::new();
        for record in &self.records {
            let unique: HashSet<&str> = record.genres.iter().map(String::as_str).collect();
            for genre in unique {
                *counts.entry(genre).or_insert(0) += 1;
            }
        }
        counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_titles(lines: &[&str]) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            "id,title,type,description,age_certification,genres,imdb_score"
        )
        .unwrap();
        for line in lines {
            writeln!(file, "{}", line).unwrap();
        }
        file
    }

    #[test]
    fn test_load_from_file() {
        let file = write_titles(&[
            "tm1,The Irishman,MOVIE,desc,R,\"['crime', 'drama']\",7.8",
            "tm2,Roma,MOVIE,desc,R,['drama'],",
            "tm3,The Irishman,MOVIE,dup,R,['crime'],5.0",
            "tm4,Amélie,MOVIE,desc,R,['romance'],8.3",
        ]);

        let catalog = Catalog::load_from_file(file.path()).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.records()[0].genres, vec!["crime", "drama"]);
        assert_eq!(catalog.get("tm2").unwrap().quality_score, 0.0);
        assert!(catalog.get("tm3").is_none());
        assert!(catalog.get("tm4").is_none());
    }

    #[test]
    fn test_load_with_padded_header() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            "id, title, type, description, age_certification, genres, imdb_score"
        )
        .unwrap();
        writeln!(file, "tm1,Heat,MOVIE,desc,R,['crime'],8.3").unwrap();
        writeln!(file, "tm2,Roma,MOVIE,desc,R,['drama'],7.7").unwrap();

        let catalog = Catalog::load_from_file(file.path()).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get("tm1").unwrap().genres, vec!["crime"]);
    }

    #[test]
    fn test_validate_rejects_duplicates() {
        let mut catalog = Catalog::new();
        for (id, genres) in [("a", "['x']"), ("b", "['y']")] {
            catalog.insert(TitleRecord::new(id, "Same", "MOVIE", "", genres, "", 1.0));
        }

        assert!(matches!(
            catalog.validate(),
            Err(DataLoadError::ValidationError(_))
        ));
    }

    #[test]
    fn test_genre_counts() {
        let mut catalog = Catalog::new();
        for (id, genres) in [("a", "['drama', 'crime']"), ("b", "['drama', 'drama']")] {
            catalog.insert(TitleRecord::new(id, id, "MOVIE", "", genres, "", 1.0));
        }

        let counts = catalog.genre_counts();
        assert_eq!(counts.get("drama"), Some(&2));
        assert_eq!(counts.get("crime"), Some(&1));
        assert_eq!(counts.keys().copied().collect::<Vec<_>>(), vec!["crime", "drama"]);
    }
}
