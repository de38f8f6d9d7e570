//! Parser for the titles CSV file.
//!
//! Expected header (extra columns are allowed and ignored):
//! `id,title,type,description,age_certification,genres,imdb_score`
//!
//! The `genres` column holds a list literal such as `['drama', 'crime']`,
//! which `parse_genre_list` turns into bare genre tags.

use crate::error::{DataLoadError, Result};
use crate::types::{RawTitleRow, REQUIRED_COLUMNS};
use std::fs::File;
use std::io;
use std::path::Path;
use tracing::{debug, instrument};

/// Parse the titles file into raw rows, in source order.
///
/// The file is opened, read to the end and closed before returning;
/// no row filtering happens here.
#[instrument(skip(path), fields(path = %path.display()))]
pub fn parse_titles(path: &Path) -> Result<Vec<RawTitleRow>> {
    let file_name = path.display().to_string();
    let file = File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => DataLoadError::FileNotFound {
            path: file_name.clone(),
        },
        _ => DataLoadError::IoError(e),
    })?;

    // Header names are trimmed so serde matches fields against the same names we check
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::Headers)
        .from_reader(file);
    check_required_columns(reader.headers()?, &file_name)?;

    let mut rows = Vec::new();
    for result in reader.deserialize::<RawTitleRow>() {
        let row = result.map_err(|e| record_error(&file_name, e))?;
        rows.push(row);
    }

    debug!("Parsed {} rows from {}", rows.len(), file_name);
    Ok(rows)
}

/// Fail with every required column the header row lacks
fn check_required_columns(headers: &csv::StringRecord, file_name: &str) -> Result<()> {
    let missing: Vec<String> = REQUIRED_COLUMNS
        .iter()
        .copied()
        .filter(|column| !headers.iter().any(|h| h == *column))
        .map(|column| column.to_string())
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(DataLoadError::MissingColumns {
            path: file_name.to_string(),
            columns: missing,
        })
    }
}

fn record_error(file_name: &str, err: csv::Error) -> DataLoadError {
    let line = err.position().map(|p| p.line()).unwrap_or(0);
    DataLoadError::ParseError {
        file: file_name.to_string(),
        line,
        reason: err.to_string(),
    }
}

/// Parse a stored genre list into bare genre tags
///
/// Example: "['comedy', 'GB']" -> vec!["comedy", "GB"]
///          "[]"               -> vec![]
pub fn parse_genre_list(raw: &str) -> Vec<String> {
    let inner = raw.trim();
    let inner = inner.strip_prefix('[').unwrap_or(inner);
    let inner = inner.strip_suffix(']').unwrap_or(inner);

    inner
        .split(',')
        .map(|part| part.trim().trim_matches(|c: char| c == '\'' || c == '"').trim())
        .filter(|genre| !genre.is_empty())
        .map(str::to_string)
        .collect()
}
