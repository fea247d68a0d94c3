use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use crate::insights::Insights;

/// A descriptive title from the persona catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Persona {
    pub title: String,
    pub description: String,
}

impl Persona {
    pub fn new(title: &str, description: &str) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
        }
    }
}

/// One letter of the four-axis type code and what it stands for.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TypeLetter {
    pub letter: char,
    pub meaning: String,
}

/// Four-letter viewing-habit code, e.g. `ESFJ`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TypeCode {
    pub code: String,
    pub letters: Vec<TypeLetter>,
}

impl TypeCode {
    pub fn contains(&self, letter: char) -> bool {
        self.code.contains(letter)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Song {
    pub title: String,
    pub artist: String,
}

impl Song {
    pub fn new(title: &str, artist: &str) -> Self {
        Self {
            title: title.to_string(),
            artist: artist.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct StreakStats {
    /// Longest run of consecutive calendar days with at least one entry
    pub longest_streak: u32,
    /// Day with the most entries (earliest such day on ties)
    pub binge_date: Option<NaiveDate>,
    pub binge_count: u32,
}

/// Everything derived from one record set. Recomputed on every render, never stored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StatisticsSnapshot {
    pub total: usize,
    pub average_rating: f64,
    pub rewatch_count: usize,
    pub rewatch_pct: f64,
    pub review_count: usize,
    pub review_pct: f64,
    pub distinct_decades: usize,
    /// Integer mean of release years; `None` when no year is known
    pub average_release_year: Option<u32>,
    pub streak: StreakStats,
    pub personas: Vec<Persona>,
    pub roast: String,
    pub type_code: TypeCode,
    pub soundtrack: Vec<Song>,
}

/// What the presentation layer renders for one user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Dashboard {
    pub username: String,
    pub snapshot: StatisticsSnapshot,
    pub insights: Insights,
}
