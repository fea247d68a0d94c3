use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use crate::viewing_record::ViewingRecord;

/// One point of the rating trend, in watch order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TrendPoint {
    pub watched_date: NaiveDate,
    pub title: String,
    pub rating: f64,
    pub rolling_average: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum RatingTier {
    High, // 4 stars and up
    Mid,  // 2.5 to 3.5
    Low,
}

impl RatingTier {
    pub fn for_rating(rating: f64) -> Self {
        if rating >= 4.0 {
            RatingTier::High
        } else if rating >= 2.5 {
            RatingTier::Mid
        } else {
            RatingTier::Low
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RatingBucket {
    pub rating: f64,
    pub count: usize,
    pub tier: RatingTier,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WeekdayCount {
    pub weekday: String,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DecadeCount {
    pub decade: u32,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Superlatives {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longest_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub oldest_film: Option<ViewingRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub newest_film: Option<ViewingRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PosterTile {
    pub title: String,
    pub release_year: u32,
    pub poster_url: String,
}

/// Dashboard extras beyond the core statistics.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Insights {
    /// Binge day as `%b %d`, or `N/A`
    pub binge_label: String,
    pub vibe: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub movie_night: Option<String>,
    pub trend: Vec<TrendPoint>,
    pub rating_distribution: Vec<RatingBucket>,
    pub weekday_rhythm: Vec<WeekdayCount>,
    pub decade_counts: Vec<DecadeCount>,
    pub favourites: Vec<ViewingRecord>,
    pub superlatives: Superlatives,
    pub posters: Vec<PosterTile>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rating_tier_boundaries() {
        assert_eq!(RatingTier::for_rating(5.0), RatingTier::High);
        assert_eq!(RatingTier::for_rating(4.0), RatingTier::High);
        assert_eq!(RatingTier::for_rating(3.5), RatingTier::Mid);
        assert_eq!(RatingTier::for_rating(2.5), RatingTier::Mid);
        assert_eq!(RatingTier::for_rating(2.0), RatingTier::Low);
        assert_eq!(RatingTier::for_rating(0.0), RatingTier::Low);
    }

    #[test]
    fn test_superlatives_skip_empty_fields_when_serialized() {
        let json = serde_json::to_value(Superlatives::default()).unwrap();
        assert_eq!(json, serde_json::json!({}));
    }
}
