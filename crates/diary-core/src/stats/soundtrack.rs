use diary_models::{Song, TypeCode, ViewingRecord};
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashSet;
use super::mean_rating;

/// At most this many songs reach the dashboard.
const MAX_SONGS: usize = 5;

type Track = (&'static str, &'static str);

pub const EXPLORER_SONGS: [Track; 4] = [
    ("Time to Pretend", "MGMT"),
    ("Paper Planes", "M.I.A."),
    ("Maps", "Yeah Yeah Yeahs"),
    ("Electric Feel", "MGMT"),
];
pub const COMFORT_SONGS: [Track; 4] = [
    ("Fast Car", "Tracy Chapman"),
    ("Landslide", "Fleetwood Mac"),
    ("Vienna", "Billy Joel"),
    ("Mystery of Love", "Sufjan Stevens"),
];
pub const HISTORIAN_SONGS: [Track; 4] = [
    ("Heroes", "David Bowie"),
    ("Dreams", "Fleetwood Mac"),
    ("Space Oddity", "David Bowie"),
    ("There Is a Light", "The Smiths"),
];
pub const MODERNIST_SONGS: [Track; 4] = [
    ("Blinding Lights", "The Weeknd"),
    ("Midnight City", "M83"),
    ("As It Was", "Harry Styles"),
    ("Espresso", "Sabrina Carpenter"),
];
pub const CRITIC_SONGS: [Track; 4] = [
    ("Paranoid Android", "Radiohead"),
    ("Psycho Killer", "Talking Heads"),
    ("Where Is My Mind?", "Pixies"),
    ("New Person, Same Old Mistakes", "Tame Impala"),
];
pub const FAN_SONGS: [Track; 4] = [
    ("Dancing Queen", "ABBA"),
    ("Mr. Brightside", "The Killers"),
    ("Dog Days Are Over", "Florence + The Machine"),
    ("Cruel Summer", "Taylor Swift"),
];

pub const PRE_80S_SONG: Track = ("California Dreamin'", "The Mamas & The Papas");
pub const EIGHTIES_SONG: Track = ("Everybody Wants to Rule the World", "Tears for Fears");
pub const NINETIES_SONG: Track = ("Smells Like Teen Spirit", "Nirvana");
pub const NOUGHTIES_SONG: Track = ("Mr. Brightside", "The Killers");
pub const MODERN_SONG: Track = ("bad guy", "Billie Eilish");

pub const LOW_MOOD_SONG: Track = ("Creep", "Radiohead");
pub const HIGH_MOOD_SONG: Track = ("Walking on Sunshine", "Katrina and the Waves");

fn song((title, artist): Track) -> Song {
    Song::new(title, artist)
}

fn era_song(release_year: u32) -> Track {
    match release_year {
        y if y < 1980 => PRE_80S_SONG,
        y if y < 1990 => EIGHTIES_SONG,
        y if y < 2000 => NINETIES_SONG,
        y if y < 2010 => NOUGHTIES_SONG,
        _ => MODERN_SONG,
    }
}

/// Highest-rated entry, the earliest watched one on ties.
fn top_record(records: &[ViewingRecord]) -> Option<&ViewingRecord> {
    records.iter().reduce(|best, candidate| {
        let better = candidate.rating > best.rating
            || (candidate.rating == best.rating && candidate.watched_date < best.watched_date);
        if better { candidate } else { best }
    })
}

/// Every song any rule can produce.
pub fn all_known_songs() -> HashSet<Song> {
    let tables: [&[Track]; 8] = [
        &EXPLORER_SONGS,
        &COMFORT_SONGS,
        &HISTORIAN_SONGS,
        &MODERNIST_SONGS,
        &CRITIC_SONGS,
        &FAN_SONGS,
        &[PRE_80S_SONG, EIGHTIES_SONG, NINETIES_SONG, NOUGHTIES_SONG, MODERN_SONG],
        &[LOW_MOOD_SONG, HIGH_MOOD_SONG],
    ];
    tables.concat().into_iter().map(song).collect()
}

/// One random song per type letter (exploration, era, temperament), then the
/// era song of the top-rated film and a mood song. Duplicates are dropped
/// keeping the first occurrence; capped at five.
pub fn soundtrack_suggestions<R: Rng + ?Sized>(
    type_code: &TypeCode,
    records: &[ViewingRecord],
    rng: &mut R,
) -> Vec<Song> {
    let pools: [&[Track]; 3] = [
        if type_code.contains('E') { &EXPLORER_SONGS } else { &COMFORT_SONGS },
        if type_code.contains('N') { &HISTORIAN_SONGS } else { &MODERNIST_SONGS },
        if type_code.contains('T') { &CRITIC_SONGS } else { &FAN_SONGS },
    ];

    let mut picks: Vec<Track> = pools
        .iter()
        .filter_map(|pool| pool.choose(&mut *rng).copied())
        .collect();

    if let Some(top) = top_record(records) {
        picks.push(era_song(top.release_year));
    }

    match mean_rating(records) {
        Some(average) if average < 2.5 => picks.push(LOW_MOOD_SONG),
        Some(average) if average > 4.5 => picks.push(HIGH_MOOD_SONG),
        _ => {}
    }

    let mut seen = HashSet::new();
    picks
        .into_iter()
        .filter(|track| seen.insert(*track))
        .take(MAX_SONGS)
        .map(song)
        .collect()
}
