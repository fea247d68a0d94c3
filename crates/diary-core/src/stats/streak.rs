use chrono::NaiveDate;
use diary_models::{StreakStats, ViewingRecord};
use std::collections::BTreeMap;

/// Entries per calendar day, in date order.
pub fn daily_counts(records: &[ViewingRecord]) -> BTreeMap<NaiveDate, u32> {
    let mut counts = BTreeMap::new();
    for record in records {
        *counts.entry(record.watched_date).or_insert(0) += 1;
    }
    counts
}

/// Longest run of consecutive days plus the busiest day.
pub fn streak_stats(records: &[ViewingRecord]) -> StreakStats {
    let counts = daily_counts(records);

    let mut longest = 0u32;
    let mut current = 0u32;
    let mut previous: Option<NaiveDate> = None;
    for &date in counts.keys() {
        current = match previous {
            Some(prev) if (date - prev).num_days() == 1 => current + 1,
            _ => 1,
        };
        longest = longest.max(current);
        previous = Some(date);
    }

    // Iterating in date order with a strict comparison keeps the earliest day on ties
    let mut binge: Option<(NaiveDate, u32)> = None;
    for (&date, &count) in &counts {
        if binge.map_or(true, |(_, best)| count > best) {
            binge = Some((date, count));
        }
    }

    StreakStats {
        longest_streak: longest,
        binge_date: binge.map(|(date, _)| date),
        binge_count: binge.map_or(0, |(_, count)| count),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn on(y: i32, m: u32, d: u32) -> ViewingRecord {
        ViewingRecord::new(NaiveDate::from_ymd_opt(y, m, d).unwrap(), "Film")
    }

    #[test]
    fn test_empty_set() {
        let stats = streak_stats(&[]);
        assert_eq!(stats.longest_streak, 0);
        assert_eq!(stats.binge_date, None);
        assert_eq!(stats.binge_count, 0);
    }

    #[test]
    fn test_single_day() {
        let stats = streak_stats(&[on(2024, 1, 1)]);
        assert_eq!(stats.longest_streak, 1);
        assert_eq!(stats.binge_count, 1);
    }

    #[test]
    fn test_streak_crosses_month_boundary() {
        let records = vec![on(2024, 1, 30), on(2024, 1, 31), on(2024, 2, 1), on(2024, 2, 5)];
        assert_eq!(streak_stats(&records).longest_streak, 3);
    }

    #[test]
    fn test_streak_ignores_input_order_and_duplicates() {
        let records = vec![on(2024, 3, 3), on(2024, 3, 1), on(2024, 3, 2), on(2024, 3, 2), on(2024, 3, 10)];
        assert_eq!(streak_stats(&records).longest_streak, 3);
    }

    #[test]
    fn test_longest_run_is_not_the_last_one() {
        let records = vec![
            on(2024, 1, 1), on(2024, 1, 2), on(2024, 1, 3), on(2024, 1, 4),
            on(2024, 1, 10), on(2024, 1, 11),
        ];
        assert_eq!(streak_stats(&records).longest_streak, 4);
    }

    #[test]
    fn test_binge_day() {
        let records = vec![on(2024, 1, 1), on(2024, 1, 2), on(2024, 1, 2), on(2024, 1, 2), on(2024, 1, 3)];
        let stats = streak_stats(&records);
        assert_eq!(stats.binge_date, NaiveDate::from_ymd_opt(2024, 1, 2));
        assert_eq!(stats.binge_count, 3);
    }

    #[test]
    fn test_binge_tie_takes_earliest_day() {
        let records = vec![on(2024, 1, 5), on(2024, 1, 5), on(2024, 1, 2), on(2024, 1, 2)];
        let stats = streak_stats(&records);
        assert_eq!(stats.binge_date, NaiveDate::from_ymd_opt(2024, 1, 2));
        assert_eq!(stats.binge_count, 2);
    }

    #[test]
    fn test_daily_counts_sorted() {
        let counts = daily_counts(&[on(2024, 1, 3), on(2024, 1, 1), on(2024, 1, 3)]);
        let days: Vec<_> = counts.iter().map(|(d, c)| (d.to_string(), *c)).collect();
        assert_eq!(days, vec![("2024-01-01".to_string(), 1), ("2024-01-03".to_string(), 2)]);
    }
}
