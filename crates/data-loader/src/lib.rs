//! # Data Loader Crate
//!
//! This crate loads the Netflix titles dataset into a clean, read-only
//! in-memory catalog.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (RawTitleRow, TitleRecord, Catalog)
//! - **parser**: Parse the CSV file and stored genre lists
//! - **cleaning**: Composable cleaning stages applied to the raw table
//! - **index**: Build and validate the Catalog
//! - **lookup**: Case-insensitive title search
//! - **error**: Error types for data loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use data_loader::Catalog;
//! use std::path::Path;
//!
//! let catalog = Catalog::load_from_file(Path::new("titles.csv"))?;
//!
//! if let Some(record) = catalog.find_title("life of brian") {
//!     println!("{} {:?}", record.title, record.genres);
//! }
//! ```
//!
//! The catalog is built once and never mutated afterwards; readers get `&Catalog`.

// Public modules
pub mod cleaning;
pub mod error;
pub mod index;
pub mod lookup;
pub mod parser;
pub mod types;

// Re-export commonly used types for convenience
pub use cleaning::{CleaningPipeline, CleaningStage};
pub use error::{DataLoadError, Result};
pub use parser::parse_genre_list;
pub use types::{Catalog, RawTitleRow, TitleId, TitleRecord, REQUIRED_COLUMNS};
