// Statistics engine: aggregate scalars plus the categorical classifiers built on them.
// Everything here is a pure function of the record set, except roast and soundtrack
// which draw from a caller-supplied random source.

pub mod streak;
pub mod personas;
pub mod roast;
pub mod type_code;
pub mod soundtrack;

pub use streak::{daily_counts, streak_stats};
pub use personas::personas;
pub use roast::{generate_roast, roast_candidates};
pub use type_code::{letter_meaning, type_code};
pub use soundtrack::soundtrack_suggestions;

use diary_models::ViewingRecord;
use std::collections::HashSet;

/// Arithmetic mean, `None` for an empty input.
pub(crate) fn mean<I>(values: I) -> Option<f64>
where
    I: IntoIterator<Item = f64>,
{
    let (sum, count) = values
        .into_iter()
        .fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
    if count == 0 {
        None
    } else {
        Some(sum / count as f64)
    }
}

/// Mean member rating over every entry, unrated ones counting as 0.
pub(crate) fn mean_rating(records: &[ViewingRecord]) -> Option<f64> {
    mean(records.iter().map(|r| r.rating))
}

/// Mean release year over every entry, unknown years counting as 0.
pub(crate) fn mean_release_year(records: &[ViewingRecord]) -> Option<f64> {
    mean(records.iter().map(|r| r.release_year as f64))
}

pub(crate) fn percentage(part: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        part as f64 / total as f64 * 100.0
    }
}

/// Scalar aggregates shared by the classifiers and the dashboard.
#[derive(Debug, Clone, PartialEq)]
pub struct Aggregates {
    pub total: usize,
    /// 0.0 for an empty set
    pub average_rating: f64,
    pub rewatch_count: usize,
    pub rewatch_pct: f64,
    pub review_count: usize,
    pub review_pct: f64,
    pub distinct_decades: usize,
    /// `None` when every release year is unknown
    pub average_release_year: Option<u32>,
}

impl Aggregates {
    pub fn from_records(records: &[ViewingRecord]) -> Self {
        let total = records.len();
        let rewatch_count = records.iter().filter(|r| r.is_rewatch).count();
        let review_count = records.iter().filter(|r| r.has_review).count();
        let distinct_decades = records
            .iter()
            .map(|r| r.decade)
            .collect::<HashSet<_>>()
            .len();

        let average_release_year = if records.iter().any(|r| r.has_known_year()) {
            mean_release_year(records).map(|year| year.trunc() as u32)
        } else {
            None
        };

        Self {
            total,
            average_rating: mean_rating(records).unwrap_or(0.0),
            rewatch_count,
            rewatch_pct: percentage(rewatch_count, total),
            review_count,
            review_pct: percentage(review_count, total),
            distinct_decades,
            average_release_year,
        }
    }
}
