//! Ranking catalog titles by genre overlap.
//!
//! `Recommender::get_recommendations` scores every catalog title by how many
//! of its genres fall in the pair's shared set. `rank_by_quality` is a
//! separate pass that can be applied to any ranked list.

use crate::overlap::{GenreOverlap, common_genres};
use crate::user::UserProfile;
use data_loader::{Catalog, TitleRecord};
use serde::Serialize;
use std::collections::HashSet;
use tracing::{debug, info, instrument};

/// A catalog title paired with its match count.
///
/// Borrows the record from the catalog it was ranked against.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Recommendation<'a> {
    pub record: &'a TitleRecord,
    /// Number of distinct genres of the title inside the shared set
    pub match_count: usize,
}

/// Recommends titles for a pair of users.
#[derive(Debug, Clone)]
pub struct Recommender {
    overlap: GenreOverlap,
}

impl Recommender {
    /// Create a recommender for two users, computing their shared genres.
    pub fn new(first: &UserProfile, second: &UserProfile) -> Self {
        let overlap = common_genres(first, second);
        debug!(
            "{} and {} share {} genres",
            first.name(),
            second.name(),
            overlap.len()
        );
        Self { overlap }
    }

    /// Create a recommender from an already computed overlap
    pub fn from_overlap(overlap: GenreOverlap) -> Self {
        Self { overlap }
    }

    pub fn overlap(&self) -> &GenreOverlap {
        &self.overlap
    }

    /// Rank catalog titles by genre overlap.
    ///
    /// ## Algorithm
    /// 1. Keep titles with at least one genre in the shared set
    /// 2. Count the shared genres of each kept title
    /// 3. Stable sort descending by that count, so ties keep catalog order
    ///
    /// Returns an empty list when the users share no genre.
    #[instrument(skip_all, fields(shared_genres = self.overlap.len()))]
    pub fn get_recommendations<'c>(&self, catalog: &'c Catalog) -> Vec<Recommendation<'c>> {
        if self.overlap.is_empty() {
            debug!("No shared genres, nothing to recommend");
            return Vec::new();
        }

        let shared: HashSet<&str> = self.overlap.genres().collect();

        let mut recommendations: Vec<Recommendation<'c>> = catalog
            .iter()
            .filter_map(|record| {
                let match_count = count_matches(record, &shared);
                (match_count > 0).then_some(Recommendation {
                    record,
                    match_count,
                })
            })
            .collect();

        recommendations.sort_by(|a, b| b.match_count.cmp(&a.match_count));

        info!(
            "Ranked {} of {} titles",
            recommendations.len(),
            catalog.len()
        );
        recommendations
    }

    /// The best `limit` recommendations, optionally re-ordered by quality score.
    ///
    /// The cut happens on the overlap ranking; `by_score` only re-orders what
    /// survives the cut.
    pub fn top<'c>(
        &self,
        catalog: &'c Catalog,
        limit: usize,
        by_score: bool,
    ) -> Vec<Recommendation<'c>> {
        let mut recommendations = self.get_recommendations(catalog);
        recommendations.truncate(limit);
        if by_score {
            recommendations = rank_by_quality(recommendations);
        }
        recommendations
    }
}

/// Re-sort a ranked list descending by quality score.
///
/// Stable, so titles with equal scores keep their incoming order.
pub fn rank_by_quality(mut recommendations: Vec<Recommendation<'_>>) -> Vec<Recommendation<'_>> {
    recommendations.sort_by(|a, b| b.record.quality_score.total_cmp(&a.record.quality_score));
    recommendations
}

fn count_matches(record: &TitleRecord, shared: &HashSet<&str>) -> usize {
    record
        .genres
        .iter()
        .map(String::as_str)
        .filter(|genre| shared.contains(genre))
        .collect::<HashSet<_>>()
        .len()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn overlap(pairs: &[(&str, usize)]) -> GenreOverlap {
        GenreOverlap {
            shared_genre_counts: pairs.iter().map(|(g, c)| (g.to_string(), *c)).collect(),
        }
    }

    fn create_test_catalog() -> Catalog {
        let mut catalog = Catalog::new();
        let titles = [
            ("1", "Drama Only", "['drama']", 9.0),
            ("2", "Comedy Drama", "['comedy', 'drama']", 6.5),
            ("3", "Crime Comedy", "['crime', 'comedy']", 7.0),
            ("4", "Comedy Twice", "['comedy', 'comedy']", 7.0),
            ("5", "Crime Thriller", "['crime', 'thriller']", 8.0),
        ];
        for (id, title, genres, score) in titles {
            catalog.insert(TitleRecord::new(id, title, "MOVIE", "", genres, "", score));
        }
        catalog
    }

    fn ids<'a>(recs: &[Recommendation<'a>]) -> Vec<&'a str> {
        recs.iter().map(|r| r.record.id.as_str()).collect()
    }

    #[test]
    fn test_match_count_only_shared_genres() {
        let catalog = create_test_catalog();
        let recommender = Recommender::from_overlap(overlap(&[("comedy", 3)]));

        let recs = recommender.get_recommendations(&catalog);
        // drama-only titles score 0 and are dropped
        assert_eq!(ids(&recs), vec!["2", "3", "4"]);
        assert!(recs.iter().all(|r| r.match_count == 1));
    }

    #[test]
    fn test_sorted_by_match_count_then_catalog_order() {
        let catalog = create_test_catalog();
        let recommender = Recommender::from_overlap(overlap(&[("crime", 2), ("comedy", 3)]));

        let recs = recommender.get_recommendations(&catalog);
        assert_eq!(ids(&recs), vec!["3", "2", "4", "5"]);
        assert_eq!(recs[0].match_count, 2);
    }

    #[test]
    fn test_no_overlap_means_no_recommendations() {
        let catalog = create_test_catalog();
        let recommender = Recommender::from_overlap(GenreOverlap::default());

        assert!(recommender.get_recommendations(&catalog).is_empty());
    }

    #[test]
    fn test_rank_by_quality_is_stable() {
        let catalog = create_test_catalog();
        let recommender = Recommender::from_overlap(overlap(&[("comedy", 3), ("crime", 2)]));

        let ranked = rank_by_quality(recommender.get_recommendations(&catalog));
        // 3 and 4 tie at 7.0 and keep their relative order
        assert_eq!(ids(&ranked), vec!["5", "3", "4", "2"]);
    }

    #[test]
    fn test_top_cuts_before_reordering() {
        let catalog = create_test_catalog();
        let recommender = Recommender::from_overlap(overlap(&[("comedy", 3), ("crime", 2)]));

        assert_eq!(ids(&recommender.top(&catalog, 2, false)), vec!["3", "2"]);
        assert_eq!(ids(&recommender.top(&catalog, 2, true)), vec!["3", "2"]);
        assert_eq!(ids(&recommender.top(&catalog, 3, true)), vec!["3", "4", "2"]);
    }
}
