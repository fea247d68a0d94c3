pub mod viewing_record;
pub mod insights;
pub mod snapshot;

pub use viewing_record::{weekday_label, ViewingRecord, MAX_FEED_ENTRIES, REVIEW_WORD_THRESHOLD};
pub use insights::{
    DecadeCount, Insights, PosterTile, RatingBucket, RatingTier, Superlatives, TrendPoint, WeekdayCount,
};
pub use snapshot::{Dashboard, Persona, Song, StatisticsSnapshot, StreakStats, TypeCode, TypeLetter};
