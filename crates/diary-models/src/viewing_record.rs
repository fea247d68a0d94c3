use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Letterboxd truncates the public diary feed to the most recent entries.
pub const MAX_FEED_ENTRIES: usize = 50;

/// An entry counts as reviewed once its body has more words than this.
pub const REVIEW_WORD_THRESHOLD: usize = 5;

/// One diary entry: "watched this film on this date".
///
/// `month`, `weekday` and `decade` are derived from `watched_date` and
/// `release_year`; the builder methods keep them in step.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ViewingRecord {
    pub watched_date: NaiveDate,
    pub title: String,
    pub release_year: u32, // 0 = unknown
    pub rating: f64,       // 0.0 = unrated, otherwise half stars up to 5.0
    pub is_rewatch: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub poster_url: Option<String>,
    pub review_word_count: usize,
    pub has_review: bool,
    pub month: String,
    pub weekday: String,
    pub decade: u32,
}

impl ViewingRecord {
    pub fn new(watched_date: NaiveDate, title: impl Into<String>) -> Self {
        Self {
            watched_date,
            title: title.into(),
            release_year: 0,
            rating: 0.0,
            is_rewatch: false,
            poster_url: None,
            review_word_count: 0,
            has_review: false,
            month: month_name(watched_date),
            weekday: weekday_name(watched_date),
            decade: 0,
        }
    }

    pub fn with_release_year(mut self, release_year: u32) -> Self {
        self.release_year = release_year;
        self.decade = (release_year / 10) * 10;
        self
    }

    /// Ratings outside the 0-5 star range are clamped.
    pub fn with_rating(mut self, rating: f64) -> Self {
        self.rating = if rating.is_finite() { rating.clamp(0.0, 5.0) } else { 0.0 };
        self
    }

    pub fn with_rewatch(mut self, is_rewatch: bool) -> Self {
        self.is_rewatch = is_rewatch;
        self
    }

    pub fn with_poster(mut self, poster_url: Option<String>) -> Self {
        self.poster_url = poster_url;
        self
    }

    pub fn with_review_word_count(mut self, review_word_count: usize) -> Self {
        self.review_word_count = review_word_count;
        self.has_review = review_word_count > REVIEW_WORD_THRESHOLD;
        self
    }

    pub fn has_known_year(&self) -> bool {
        self.release_year > 0
    }

    pub fn day_of_week(&self) -> chrono::Weekday {
        self.watched_date.weekday()
    }
}

fn month_name(date: NaiveDate) -> String {
    date.format("%B").to_string()
}

fn weekday_name(date: NaiveDate) -> String {
    date.format("%A").to_string()
}

/// Full English weekday name, Monday first.
pub fn weekday_label(weekday: chrono::Weekday) -> &'static str {
    match weekday {
        chrono::Weekday::Mon => "Monday",
        chrono::Weekday::Tue => "Tuesday",
        chrono::Weekday::Wed => "Wednesday",
        chrono::Weekday::Thu => "Thursday",
        chrono::Weekday::Fri => "Friday",
        chrono::Weekday::Sat => "Saturday",
        chrono::Weekday::Sun => "Sunday",
    }
}
