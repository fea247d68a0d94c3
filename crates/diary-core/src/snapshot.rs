use diary_models::{Dashboard, StatisticsSnapshot, ViewingRecord};
use rand::Rng;
use tracing::debug;
use crate::insights::build_insights;
use crate::stats::{generate_roast, personas, soundtrack_suggestions, streak_stats, type_code, Aggregates};

/// Derive every statistic for one record set. The random source only feeds
/// the roast line and the soundtrack picks.
pub fn build_snapshot<R: Rng + ?Sized>(records: &[ViewingRecord], rng: &mut R) -> StatisticsSnapshot {
    snapshot_from_aggregates(records, &Aggregates::from_records(records), rng)
}

/// `aggregates` must have been computed from `records`.
fn snapshot_from_aggregates<R: Rng + ?Sized>(
    records: &[ViewingRecord],
    aggregates: &Aggregates,
    rng: &mut R,
) -> StatisticsSnapshot {
    let streak = streak_stats(records);
    let code = type_code(records);
    let soundtrack = soundtrack_suggestions(&code, records, rng);

    debug!(
        total = aggregates.total,
        streak = streak.longest_streak,
        type_code = %code.code,
        "Computed statistics"
    );

    StatisticsSnapshot {
        total: aggregates.total,
        average_rating: aggregates.average_rating,
        rewatch_count: aggregates.rewatch_count,
        rewatch_pct: aggregates.rewatch_pct,
        review_count: aggregates.review_count,
        review_pct: aggregates.review_pct,
        distinct_decades: aggregates.distinct_decades,
        average_release_year: aggregates.average_release_year,
        personas: personas(
            aggregates.total,
            aggregates.average_rating,
            aggregates.rewatch_pct,
            aggregates.distinct_decades,
            aggregates.review_pct,
        ),
        roast: generate_roast(records, rng),
        streak,
        type_code: code,
        soundtrack,
    }
}

pub fn build_dashboard<R: Rng + ?Sized>(username: &str, records: &[ViewingRecord], rng: &mut R) -> Dashboard {
    let aggregates = Aggregates::from_records(records);
    let snapshot = snapshot_from_aggregates(records, &aggregates, rng);
    let insights = build_insights(records, &aggregates, &snapshot.streak);

    Dashboard {
        username: username.to_string(),
        snapshot,
        insights,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::roast_candidates;
    use chrono::{Duration, NaiveDate};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn diary() -> Vec<ViewingRecord> {
        let start = NaiveDate::from_ymd_opt(2024, 4, 1).unwrap();
        (0..8)
            .map(|i| {
                ViewingRecord::new(start + Duration::days(i / 2), format!("Film {}", i))
                    .with_rating(4.5)
                    .with_release_year(1960 + i as u32 * 8)
                    .with_review_word_count(if i % 2 == 0 { 20 } else { 0 })
            })
            .collect()
    }

    #[test]
    fn test_snapshot_fields() {
        let records = diary();
        let mut rng = StdRng::seed_from_u64(11);
        let snapshot = build_snapshot(&records, &mut rng);

        assert_eq!(snapshot.total, 8);
        assert_eq!(snapshot.average_rating, 4.5);
        assert_eq!(snapshot.review_pct, 50.0);
        assert_eq!(snapshot.streak.longest_streak, 4);
        assert_eq!(snapshot.streak.binge_count, 2);
        assert!(roast_candidates(&records).iter().any(|line| *line == snapshot.roast));
        assert!(!snapshot.personas.is_empty());
    }

    #[test]
    fn test_same_seed_same_dashboard() {
        let records = diary();
        let a = build_dashboard("someone", &records, &mut StdRng::seed_from_u64(5));
        let b = build_dashboard("someone", &records, &mut StdRng::seed_from_u64(5));
        assert_eq!(a, b);
        assert_eq!(a.username, "someone");
        assert_eq!(a.insights.binge_label, "Apr 01");
        assert_eq!(a.insights.vibe, "Positive Vibes Only");
    }

    #[test]
    fn test_dashboard_snapshot_matches_standalone_snapshot() {
        let records = diary();
        let dashboard = build_dashboard("someone", &records, &mut StdRng::seed_from_u64(9));
        let snapshot = build_snapshot(&records, &mut StdRng::seed_from_u64(9));
        assert_eq!(dashboard.snapshot, snapshot);
    }

    #[test]
    fn test_dashboard_serializes() {
        let dashboard = build_dashboard("someone", &diary(), &mut StdRng::seed_from_u64(1));
        let json = serde_json::to_value(&dashboard).unwrap();
        assert_eq!(json["snapshot"]["total"], 8);
        assert_eq!(json["snapshot"]["type_code"]["code"].as_str().map(str::len), Some(4));
    }
}
