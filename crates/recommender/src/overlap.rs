//! Shared-genre frequency between two users.
//!
//! ## Algorithm
//! 1. Count genres across each user's preferences (one per genre per title)
//! 2. Keep genres both users have
//! 3. Sum the two counts for each kept genre
//! 4. Sort ascending by the summed count, then by genre name

use crate::user::UserProfile;

/// Genres two users have in common, with their combined counts.
///
/// Ordered from the least shared genre to the most shared one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenreOverlap {
    pub shared_genre_counts: Vec<(String, usize)>,
}

impl GenreOverlap {
    pub fn is_empty(&self) -> bool {
        self.shared_genre_counts.is_empty()
    }

    pub fn len(&self) -> usize {
        self.shared_genre_counts.len()
    }

    /// Shared genre tags, in overlap order
    pub fn genres(&self) -> impl Iterator<Item = &str> {
        self.shared_genre_counts.iter().map(|(g, _)| g.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.shared_genre_counts
            .iter()
            .map(|(g, count)| (g.as_str(), *count))
    }
}

/// Compute the genres `first` and `second` share.
///
/// Symmetric: swapping the users gives the same result.
pub fn common_genres(first: &UserProfile, second: &UserProfile) -> GenreOverlap {
    let first_counts = first.genre_frequencies();
    let second_counts = second.genre_frequencies();

    let mut shared: Vec<(String, usize)> = first_counts
        .iter()
        .filter_map(|(genre, count)| {
            second_counts
                .get(genre)
                .map(|other| (genre.to_string(), count + other))
        })
        .collect();

    shared.sort_by(|a, b| a.1.cmp(&b.1).then_with(|| a.0.cmp(&b.0)));

    GenreOverlap {
        shared_genre_counts: shared,
    }
}
