use chrono::Weekday;
use diary_models::{
    weekday_label, DecadeCount, Insights, PosterTile, RatingBucket, RatingTier, StreakStats,
    Superlatives, TrendPoint, ViewingRecord, WeekdayCount,
};
use std::collections::BTreeMap;
use crate::stats::Aggregates;

const TREND_WINDOW: usize = 5;
const FAVOURITES: usize = 5;

const WEEK: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

pub fn vibe(aggregates: &Aggregates) -> &'static str {
    if aggregates.average_rating > 3.5 {
        "Positive Vibes Only"
    } else if aggregates.average_rating < 2.8 {
        "Tough Critic"
    } else if aggregates.rewatch_pct > 50.0 {
        "Nostalgic"
    } else {
        "Balanced"
    }
}

pub fn binge_label(streak: &StreakStats) -> String {
    streak
        .binge_date
        .map(|date| date.format("%b %d").to_string())
        .unwrap_or_else(|| "N/A".to_string())
}

/// Entries per weekday, Monday first, zero-filled.
pub fn weekday_rhythm(records: &[ViewingRecord]) -> Vec<WeekdayCount> {
    WEEK.iter()
        .map(|&day| WeekdayCount {
            weekday: weekday_label(day).to_string(),
            count: records.iter().filter(|r| r.day_of_week() == day).count(),
        })
        .collect()
}

/// Busiest weekday; the earliest in the week wins ties.
pub fn movie_night(rhythm: &[WeekdayCount]) -> Option<String> {
    rhythm
        .iter()
        .filter(|day| day.count > 0)
        .fold(None, |best: Option<&WeekdayCount>, day| match best {
            Some(current) if current.count >= day.count => Some(current),
            _ => Some(day),
        })
        .map(|day| day.weekday.clone())
}

/// Chronological ratings with a trailing mean over the last five entries.
pub fn rating_trend(records: &[ViewingRecord]) -> Vec<TrendPoint> {
    let mut ordered: Vec<&ViewingRecord> = records.iter().collect();
    ordered.sort_by_key(|r| r.watched_date);

    ordered
        .iter()
        .enumerate()
        .map(|(i, record)| {
            let window = &ordered[(i + 1).saturating_sub(TREND_WINDOW)..=i];
            let sum: f64 = window.iter().map(|r| r.rating).sum();
            TrendPoint {
                watched_date: record.watched_date,
                title: record.title.clone(),
                rating: record.rating,
                rolling_average: sum / window.len() as f64,
            }
        })
        .collect()
}

pub fn rating_distribution(records: &[ViewingRecord]) -> Vec<RatingBucket> {
    // Ratings are half stars, so doubling gives an exact integer key
    let mut counts: BTreeMap<u32, usize> = BTreeMap::new();
    for record in records {
        *counts.entry((record.rating * 2.0).round() as u32).or_insert(0) += 1;
    }

    counts
        .into_iter()
        .map(|(half_stars, count)| {
            let rating = half_stars as f64 / 2.0;
            RatingBucket { rating, count, tier: RatingTier::for_rating(rating) }
        })
        .collect()
}

/// Entries per decade, busiest first, then by decade.
pub fn decade_counts(records: &[ViewingRecord]) -> Vec<DecadeCount> {
    let mut counts: BTreeMap<u32, usize> = BTreeMap::new();
    for record in records {
        *counts.entry(record.decade).or_insert(0) += 1;
    }

    let mut decades: Vec<DecadeCount> = counts
        .into_iter()
        .map(|(decade, count)| DecadeCount { decade, count })
        .collect();
    decades.sort_by(|a, b| b.count.cmp(&a.count).then(a.decade.cmp(&b.decade)));
    decades
}

pub fn favourites(records: &[ViewingRecord]) -> Vec<ViewingRecord> {
    let mut ranked: Vec<&ViewingRecord> = records.iter().collect();
    ranked.sort_by(|a, b| {
        b.rating
            .total_cmp(&a.rating)
            .then(a.watched_date.cmp(&b.watched_date))
    });
    ranked.into_iter().take(FAVOURITES).cloned().collect()
}

/// First record strictly beating every earlier one under `better`.
fn first_best<'a, F>(records: impl Iterator<Item = &'a ViewingRecord>, better: F) -> Option<&'a ViewingRecord>
where
    F: Fn(&ViewingRecord, &ViewingRecord) -> bool,
{
    records.reduce(|best, candidate| if better(candidate, best) { candidate } else { best })
}

pub fn superlatives(records: &[ViewingRecord]) -> Superlatives {
    let longest_title = first_best(records.iter(), |a, b| a.title.chars().count() > b.title.chars().count())
        .map(|r| r.title.clone());

    let dated = || records.iter().filter(|r| r.has_known_year());
    let oldest_film = first_best(dated(), |a, b| a.release_year < b.release_year).cloned();
    let newest_film = first_best(dated(), |a, b| a.release_year > b.release_year).cloned();

    Superlatives { longest_title, oldest_film, newest_film }
}

pub fn posters(records: &[ViewingRecord]) -> Vec<PosterTile> {
    records
        .iter()
        .filter_map(|r| {
            r.poster_url.as_ref().map(|url| PosterTile {
                title: r.title.clone(),
                release_year: r.release_year,
                poster_url: url.clone(),
            })
        })
        .collect()
}

pub fn build_insights(records: &[ViewingRecord], aggregates: &Aggregates, streak: &StreakStats) -> Insights {
    let rhythm = weekday_rhythm(records);

    Insights {
        binge_label: binge_label(streak),
        vibe: vibe(aggregates).to_string(),
        movie_night: movie_night(&rhythm),
        trend: rating_trend(records),
        rating_distribution: rating_distribution(records),
        weekday_rhythm: rhythm,
        decade_counts: decade_counts(records),
        favourites: favourites(records),
        superlatives: superlatives(records),
        posters: posters(records),
    }
}
