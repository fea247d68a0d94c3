use diary_models::{TypeCode, TypeLetter, ViewingRecord};
use super::{daily_counts, mean_rating, mean_release_year, percentage};

const LETTER_MEANINGS: [(char, &str); 8] = [
    ('E', "Explorer (New Films)"),
    ('I', "Comfort (Rewatches)"),
    ('S', "Modernist (Recent)"),
    ('N', "Historian (Classics)"),
    ('T', "Critic (Analytic)"),
    ('F', "Fan (Emotional)"),
    ('J', "Routine (Steady)"),
    ('P', "Binger (Spontaneous)"),
];

pub fn letter_meaning(letter: char) -> Option<&'static str> {
    LETTER_MEANINGS
        .iter()
        .find(|(l, _)| *l == letter)
        .map(|(_, meaning)| *meaning)
}

/// Sample variance (n - 1) of entries per watched day.
/// `None` with fewer than two distinct days, where it is undefined.
pub fn daily_count_variance(records: &[ViewingRecord]) -> Option<f64> {
    let counts: Vec<f64> = daily_counts(records).values().map(|&c| c as f64).collect();
    if counts.len() < 2 {
        return None;
    }
    let n = counts.len() as f64;
    let mean = counts.iter().sum::<f64>() / n;
    let squares: f64 = counts.iter().map(|c| (c - mean).powi(2)).sum();
    Some(squares / (n - 1.0))
}

/// Four independent axes, always in this order:
/// I/E rewatch rate, S/N mean release year, T/F mean rating, P/J daily-count variance.
pub fn type_code(records: &[ViewingRecord]) -> TypeCode {
    let rewatches = records.iter().filter(|r| r.is_rewatch).count();
    let comfort = percentage(rewatches, records.len()) > 20.0;
    let modern = mean_release_year(records).is_some_and(|year| year > 2010.0);
    let critical = mean_rating(records).is_some_and(|rating| rating < 3.2);
    // An undefined variance (0 or 1 distinct days) reads as routine
    let binger = daily_count_variance(records).is_some_and(|variance| variance > 1.5);

    let letters = [
        if comfort { 'I' } else { 'E' },
        if modern { 'S' } else { 'N' },
        if critical { 'T' } else { 'F' },
        if binger { 'P' } else { 'J' },
    ];

    TypeCode {
        code: letters.iter().collect(),
        letters: letters
            .iter()
            .map(|&letter| TypeLetter {
                letter,
                meaning: letter_meaning(letter).unwrap_or_default().to_string(),
            })
            .collect(),
    }
}
