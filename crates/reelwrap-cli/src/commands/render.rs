use comfy_table::{Cell, Table};
use diary_models::{Dashboard, Insights, RatingTier, StatisticsSnapshot};
use owo_colors::OwoColorize;
use std::fmt::Write;

const BAR_WIDTH: usize = 30;

/// `count` scaled against `max` as a row of block characters.
pub fn bar(count: usize, max: usize, width: usize) -> String {
    if max == 0 || count == 0 {
        return String::new();
    }
    let filled = ((count as f64 / max as f64) * width as f64).round().max(1.0) as usize;
    "█".repeat(filled.min(width))
}

/// Half-star rating as glyphs, `-` when unrated.
pub fn stars(rating: f64) -> String {
    if rating <= 0.0 {
        return "-".to_string();
    }
    let half_stars = (rating * 2.0).round() as usize;
    let mut out = "★".repeat(half_stars / 2);
    if half_stars % 2 == 1 {
        out.push('½');
    }
    out
}

fn table() -> Table {
    let mut table = Table::new();
    table.load_preset(comfy_table::presets::UTF8_FULL);
    table.apply_modifier(comfy_table::modifiers::UTF8_ROUND_CORNERS);
    table
}

fn section_header(title: &str) -> Cell {
    Cell::new(title)
        .fg(comfy_table::Color::Cyan)
        .add_attribute(comfy_table::Attribute::Bold)
}

fn banner(username: &str) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "\n{}", "╔════════════════════════════════════════════════════════════╗".bright_white());
    let _ = writeln!(out, "{} {}", "║".bright_white(), format!("{}'s Wrapped", username).bright_cyan().bold());
    let _ = writeln!(out, "{}", "╚════════════════════════════════════════════════════════════╝".bright_white());
    out
}

fn key_numbers(snapshot: &StatisticsSnapshot, insights: &Insights) -> Table {
    let mut t = table();
    t.set_header(vec![section_header("Key Numbers"), Cell::new("")]);
    t.add_row(vec![Cell::new("Total logs"), Cell::new(snapshot.total)]);
    t.add_row(vec![Cell::new("Average rating"), Cell::new(format!("{:.2}", snapshot.average_rating))]);
    t.add_row(vec![Cell::new("Review rate"), Cell::new(format!("{:.0}%", snapshot.review_pct))]);
    t.add_row(vec![
        Cell::new("Average release year"),
        Cell::new(
            snapshot
                .average_release_year
                .map(|year| year.to_string())
                .unwrap_or_else(|| "N/A".to_string()),
        ),
    ]);
    t.add_row(vec![
        Cell::new("Rewatches"),
        Cell::new(format!("{} ({:.0}%)", snapshot.rewatch_count, snapshot.rewatch_pct)),
    ]);
    t.add_row(vec![Cell::new("Longest streak"), Cell::new(format!("{} days", snapshot.streak.longest_streak))]);
    t.add_row(vec![
        Cell::new("Binge day"),
        Cell::new(format!("{} ({} films)", insights.binge_label, snapshot.streak.binge_count)),
    ]);
    t.add_row(vec![Cell::new("Vibe"), Cell::new(&insights.vibe)]);
    if let Some(night) = &insights.movie_night {
        t.add_row(vec![Cell::new("Movie night"), Cell::new(night)]);
    }
    t
}

fn identity(snapshot: &StatisticsSnapshot) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{}", "Personas".bright_cyan().bold());
    for persona in &snapshot.personas {
        let _ = writeln!(out, "  {} {}", persona.title.bold(), persona.description.bright_black());
    }

    let _ = writeln!(out, "\n{} {}", "Type".bright_cyan().bold(), snapshot.type_code.code.bold());
    for letter in &snapshot.type_code.letters {
        let _ = writeln!(out, "  {} {}", letter.letter.to_string().yellow(), letter.meaning);
    }

    let _ = writeln!(out, "\n{}", "Roast".bright_cyan().bold());
    let _ = writeln!(out, "  {}", snapshot.roast.italic());

    let _ = writeln!(out, "\n{}", "Soundtrack".bright_cyan().bold());
    for (i, song) in snapshot.soundtrack.iter().enumerate() {
        let _ = writeln!(out, "  {}. {} - {}", i + 1, song.title, song.artist.bright_black());
    }
    out
}

fn favourites(insights: &Insights) -> Table {
    let mut t = table();
    t.set_header(vec![section_header("Recent Favourites"), Cell::new("Year"), Cell::new("Rating"), Cell::new("Watched")]);
    for record in &insights.favourites {
        t.add_row(vec![
            Cell::new(&record.title),
            Cell::new(if record.has_known_year() { record.release_year.to_string() } else { "-".to_string() }),
            Cell::new(stars(record.rating)),
            Cell::new(record.watched_date.format("%Y-%m-%d").to_string()),
        ]);
    }
    t
}

fn tier_colour(tier: RatingTier) -> comfy_table::Color {
    match tier {
        RatingTier::High => comfy_table::Color::Green,
        RatingTier::Mid => comfy_table::Color::Yellow,
        RatingTier::Low => comfy_table::Color::Red,
    }
}

fn rating_distribution(insights: &Insights) -> Table {
    let max = insights.rating_distribution.iter().map(|b| b.count).max().unwrap_or(0);
    let mut t = table();
    t.set_header(vec![section_header("Ratings"), Cell::new("Count"), Cell::new("")]);
    for bucket in &insights.rating_distribution {
        t.add_row(vec![
            Cell::new(stars(bucket.rating)),
            Cell::new(bucket.count),
            Cell::new(bar(bucket.count, max, BAR_WIDTH)).fg(tier_colour(bucket.tier)),
        ]);
    }
    t
}

fn weekday_rhythm(insights: &Insights) -> Table {
    let max = insights.weekday_rhythm.iter().map(|d| d.count).max().unwrap_or(0);
    let mut t = table();
    t.set_header(vec![section_header("Weekly Rhythm"), Cell::new("Count"), Cell::new("")]);
    for day in &insights.weekday_rhythm {
        t.add_row(vec![
            Cell::new(&day.weekday),
            Cell::new(day.count),
            Cell::new(bar(day.count, max, BAR_WIDTH)),
        ]);
    }
    t
}

fn decades(insights: &Insights) -> Table {
    let max = insights.decade_counts.iter().map(|d| d.count).max().unwrap_or(0);
    let mut t = table();
    t.set_header(vec![section_header("Decades"), Cell::new("Count"), Cell::new("")]);
    for decade in &insights.decade_counts {
        let label = if decade.decade == 0 { "Unknown".to_string() } else { format!("{}s", decade.decade) };
        t.add_row(vec![
            Cell::new(label),
            Cell::new(decade.count),
            Cell::new(bar(decade.count, max, BAR_WIDTH)),
        ]);
    }
    t
}

fn trend(insights: &Insights) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", "Rating Trend (rolling 5)".bright_cyan().bold());
    for point in &insights.trend {
        let scaled = (point.rolling_average * 2.0).round() as usize;
        let _ = writeln!(
            out,
            "  {} {:>4.2} {}",
            point.watched_date.format("%b %d"),
            point.rolling_average,
            bar(scaled, 10, 20).magenta(),
        );
    }
    out
}

fn superlatives(insights: &Insights) -> String {
    let s = &insights.superlatives;
    let mut out = String::new();
    let _ = writeln!(out, "{}", "Superlatives".bright_cyan().bold());
    if let Some(title) = &s.longest_title {
        let _ = writeln!(out, "  Longest title: {}", title);
    }
    if let Some(film) = &s.oldest_film {
        let _ = writeln!(out, "  Oldest film:   {} ({})", film.title, film.release_year);
    }
    if let Some(film) = &s.newest_film {
        let _ = writeln!(out, "  Newest film:   {} ({})", film.title, film.release_year);
    }
    out
}

fn poster_wall(insights: &Insights) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} ({})", "Poster Wall".bright_cyan().bold(), insights.posters.len());
    for tile in &insights.posters {
        let _ = writeln!(out, "  {} {}", tile.title, tile.poster_url.bright_black());
    }
    out
}

/// Full human-readable dashboard.
pub fn dashboard(dashboard: &Dashboard) -> String {
    let snapshot = &dashboard.snapshot;
    let insights = &dashboard.insights;

    let mut out = banner(&dashboard.username);
    let _ = writeln!(out, "{}\n", key_numbers(snapshot, insights));
    let _ = writeln!(out, "{}", identity(snapshot));
    let _ = writeln!(out, "{}\n", favourites(insights));
    let _ = writeln!(out, "{}\n", rating_distribution(insights));
    let _ = writeln!(out, "{}\n", weekday_rhythm(insights));
    let _ = writeln!(out, "{}\n", decades(insights));
    let _ = writeln!(out, "{}", trend(insights));
    let _ = writeln!(out, "{}", superlatives(insights));
    if !insights.posters.is_empty() {
        let _ = write!(out, "{}", poster_wall(insights));
    }
    out
}
