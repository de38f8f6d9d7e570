//! Errors raised while building a user's preferences.
//!
//! All of these are recoverable: the caller can simply try another query.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PreferenceError {
    /// The query was blank, so there is nothing to look up
    #[error("Title query is empty")]
    EmptyQuery,

    /// No catalog title contains the query
    #[error("No title matches '{query}'")]
    NotFound { query: String },
}
