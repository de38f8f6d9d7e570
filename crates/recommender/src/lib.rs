//! Genre-overlap recommendations for a pair of users.
//!
//! This crate provides:
//! - `UserProfile` for collecting each user's preferred titles
//! - `common_genres` for the genres two users share
//! - `Recommender` for ranking the catalog by shared-genre matches
//! - `rank_by_quality` for a secondary ranking by quality score
//!
//! ## Example Usage
//! ```ignore
//! use data_loader::Catalog;
//! use recommender::{rank_by_quality, Recommender, UserProfile};
//!
//! let catalog = Catalog::load_from_file(Path::new("titles.csv"))?;
//!
//! let mut alice = UserProfile::new("Alice");
//! alice.add_preference("life of brian", &catalog)?;
//! let mut bob = UserProfile::new("Bob");
//! bob.add_preference("holy grail", &catalog)?;
//!
//! let recommender = Recommender::new(&alice, &bob);
//! let ranked = rank_by_quality(recommender.get_recommendations(&catalog));
//! ```

pub mod error;
pub mod overlap;
pub mod ranker;
pub mod user;

// Re-export main types
pub use error::PreferenceError;
pub use overlap::{GenreOverlap, common_genres};
pub use ranker::{Recommendation, Recommender, rank_by_quality};
pub use user::{AddOutcome, UserProfile};
