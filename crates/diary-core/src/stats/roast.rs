use chrono::Weekday;
use diary_models::ViewingRecord;
use rand::seq::SliceRandom;
use rand::Rng;
use super::mean_rating;

pub const TOO_GENEROUS: [&str; 2] = [
    "You know 2.5 stars exists, right? Not everything is a masterpiece.",
    "You're the person who claps when the plane lands, aren't you?",
];
pub const TOO_HARSH: [&str; 3] = [
    "Who hurt you? Seriously, do you even like movies?",
    "I bet you're fun at parties. 'Actually, the book was better.'",
    "You woke up and chose violence with these ratings.",
];
pub const A_LITTLE_GENEROUS: [&str; 1] = ["A little generous with the stars, are we?"];
pub const SERIAL_REWATCHER: [&str; 3] = [
    "Comfort movies are a cry for help. We hear you.",
    "Trying to relive the past won't fix the present.",
    "We get it, you really like that one movie.",
];
pub const NEVER_REWATCHES: [&str; 1] = ["Commitment issues? You never call a movie back."];
pub const VINTAGE_SNOB: [&str; 2] = [
    "We get it, you own a turntable and hate CGI.",
    "Born in the wrong generation? Or just pretentious?",
];
pub const RECENCY_BIAS: [&str; 1] = ["Recency bias is a hell of a drug."];
pub const MONDAY_WATCHER: [&str; 1] = ["Watching movies on Monday? Avoiding responsibilities like a pro."];
pub const NOTHING_TO_ROAST: [&str; 3] = [
    "Your taste is so painfully average, I can't even roast it.",
    "You exist. You watch movies. That's about it.",
    "Honestly? A pretty respectable list. Boring, but respectable.",
];

/// Pool of snark lines whose thresholds the record set crosses.
/// Falls back to the generic pool when nothing applies.
pub fn roast_candidates(records: &[ViewingRecord]) -> Vec<&'static str> {
    let mut pool: Vec<&'static str> = Vec::new();

    // An empty set has no mean, so no rating rule applies
    if let Some(average) = mean_rating(records) {
        if average > 4.5 {
            pool.extend(TOO_GENEROUS);
        } else if average < 2.5 {
            pool.extend(TOO_HARSH);
        } else if average > 3.8 {
            pool.extend(A_LITTLE_GENEROUS);
        }
    }

    let rewatches = records.iter().filter(|r| r.is_rewatch).count();
    if rewatches > 15 {
        pool.extend(SERIAL_REWATCHER);
    } else if rewatches == 0 {
        pool.extend(NEVER_REWATCHES);
    }

    // Unknown years (0) count as pre-1980
    let pre_1980 = records.iter().filter(|r| r.release_year < 1980).count();
    let post_2020 = records.iter().filter(|r| r.release_year > 2020).count();
    if pre_1980 > 15 {
        pool.extend(VINTAGE_SNOB);
    } else if post_2020 > 20 {
        pool.extend(RECENCY_BIAS);
    }

    let mondays = records.iter().filter(|r| r.day_of_week() == Weekday::Mon).count();
    if mondays > 5 {
        pool.extend(MONDAY_WATCHER);
    }

    if pool.is_empty() {
        pool.extend(NOTHING_TO_ROAST);
    }

    pool
}

/// One line drawn uniformly from [`roast_candidates`].
pub fn generate_roast<R: Rng + ?Sized>(records: &[ViewingRecord], rng: &mut R) -> String {
    let pool = roast_candidates(records);
    pool.choose(rng)
        .copied()
        .unwrap_or(NOTHING_TO_ROAST[0])
        .to_string()
}
