use chrono::NaiveDate;
use diary_models::{ViewingRecord, MAX_FEED_ENTRIES};
use html_escape::decode_html_entities;
use regex::Regex;
use std::sync::LazyLock;
use tracing::{debug, info, warn};
use crate::error::FeedError;
use crate::traits::RawItem;

static IMG_TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?is)<img\b[^>]*>").unwrap());
static SRC_ATTR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?is)(?:^|\s)src\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s"'>]+))"#).unwrap());
static PARAGRAPH_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?is)<p\b[^>]*>.*?</p\s*>").unwrap());
static TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)<[^>]*>").unwrap());

const UNKNOWN_TITLE: &str = "Unknown";

/// What we keep from an entry's HTML body.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DescriptionBody {
    pub poster_url: Option<String>,
    pub review_word_count: usize,
}

/// Poster from the first `<img>`, word count from the prose that is left once
/// image paragraphs (poster captions) are dropped.
pub fn analyse_description(html: &str) -> DescriptionBody {
    let poster_url = IMG_TAG_RE.find(html).and_then(|img| {
        SRC_ATTR_RE.captures(img.as_str()).and_then(|caps| {
            caps.get(1)
                .or_else(|| caps.get(2))
                .or_else(|| caps.get(3))
                .map(|m| decode_html_entities(m.as_str()).to_string())
        })
    });

    let prose = PARAGRAPH_RE.replace_all(html, |caps: &regex::Captures| {
        if IMG_TAG_RE.is_match(&caps[0]) {
            String::new()
        } else {
            caps[0].to_string()
        }
    });

    // Text nodes are trimmed and joined with no separator
    let text: String = TAG_RE
        .split(&prose)
        .map(|fragment| decode_html_entities(fragment).trim().to_string())
        .collect();

    DescriptionBody {
        poster_url,
        review_word_count: text.split_whitespace().count(),
    }
}

fn parse_watched_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok()
}

/// Only an all-digit year counts; anything else is unknown (0).
fn parse_release_year(raw: Option<&str>) -> u32 {
    match raw {
        Some(text) if !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit()) => {
            text.parse::<u32>().unwrap_or(0)
        }
        _ => 0,
    }
}

fn parse_member_rating(raw: Option<&str>) -> f64 {
    raw.and_then(|text| text.trim().parse::<f64>().ok()).unwrap_or(0.0)
}

fn to_record(item: RawItem, watched_date: NaiveDate) -> ViewingRecord {
    let body = item
        .description
        .as_deref()
        .map(analyse_description)
        .unwrap_or_default();

    ViewingRecord::new(watched_date, item.film_title.unwrap_or_else(|| UNKNOWN_TITLE.to_string()))
        .with_release_year(parse_release_year(item.film_year.as_deref()))
        .with_rating(parse_member_rating(item.member_rating.as_deref()))
        .with_rewatch(item.rewatch.as_deref() == Some("Yes"))
        .with_poster(body.poster_url)
        .with_review_word_count(body.review_word_count)
}

/// Normalize parsed items into diary records, in feed order.
///
/// Items without a usable watched date are not diary entries yet and are skipped.
/// Fails with [`FeedError::EmptyFeed`] when nothing survives.
pub fn extract_records(items: Vec<RawItem>) -> Result<Vec<ViewingRecord>, FeedError> {
    let total_items = items.len();
    let mut records = Vec::with_capacity(total_items.min(MAX_FEED_ENTRIES));

    for (index, item) in items.into_iter().enumerate() {
        let watched_date = match item.watched_date.as_deref() {
            None => {
                debug!(item = index, title = ?item.film_title, "Skipping item without watched date");
                continue;
            }
            Some(raw) => match parse_watched_date(raw) {
                Some(date) => date,
                None => {
                    warn!(item = index, watched_date = %raw, "Skipping item with unparseable watched date");
                    continue;
                }
            },
        };

        if records.len() == MAX_FEED_ENTRIES {
            debug!(item = index, "Feed exceeds {} diary entries, dropping the rest", MAX_FEED_ENTRIES);
            break;
        }

        records.push(to_record(item, watched_date));
    }

    if records.is_empty() {
        return Err(FeedError::EmptyFeed);
    }

    info!("Extracted {} diary entries from {} feed items", records.len(), total_items);
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(date: Option<&str>) -> RawItem {
        RawItem {
            watched_date: date.map(str::to_string),
            film_title: Some("Alien".to_string()),
            film_year: Some("1979".to_string()),
            member_rating: Some("4.0".to_string()),
            rewatch: Some("No".to_string()),
            description: None,
        }
    }

    #[test]
    fn test_analyse_description_poster_and_review() {
        let html = r#"<p><img src="https://a.ltrbxd.com/resized/alien.jpg?v=1&amp;k=2"/></p> <p>In space no one can hear you scream.</p>"#;
        let body = analyse_description(html);

        assert_eq!(body.poster_url.as_deref(), Some("https://a.ltrbxd.com/resized/alien.jpg?v=1&k=2"));
        assert_eq!(body.review_word_count, 8);
    }

    #[test]
    fn test_analyse_description_without_image() {
        let body = analyse_description("<p>Short one.</p>");
        assert_eq!(body.poster_url, None);
        assert_eq!(body.review_word_count, 2);
    }

    #[test]
    fn test_analyse_description_drops_every_image_paragraph() {
        let html = r#"<p><img src="a.jpg"/> caption words here</p><p>Kept.</p><p>Still <img src="b.jpg"> dropped</p>"#;
        let body = analyse_description(html);

        assert_eq!(body.poster_url.as_deref(), Some("a.jpg"));
        assert_eq!(body.review_word_count, 1);
    }

    #[test]
    fn test_analyse_description_first_image_without_src() {
        let body = analyse_description(r#"<img alt="no source"><img src="second.jpg">"#);
        assert_eq!(body.poster_url, None);
    }

    #[test]
    fn test_analyse_description_ignores_data_src() {
        let body = analyse_description(r#"<p><img data-src="lazy.jpg" src="real.jpg"/></p>"#);
        assert_eq!(body.poster_url.as_deref(), Some("real.jpg"));

        let body = analyse_description(r#"<img data-src="lazy.jpg">"#);
        assert_eq!(body.poster_url, None);
    }

    #[test]
    fn test_analyse_description_joins_text_nodes_without_separator() {
        // Adjacent paragraphs run together once each text node is trimmed
        let body = analyse_description("<p>one two</p><p>three</p>");
        assert_eq!(body.review_word_count, 2);
    }

    #[test]
    fn test_analyse_description_empty() {
        assert_eq!(analyse_description(""), DescriptionBody::default());
    }

    #[test]
    fn test_parse_release_year() {
        assert_eq!(parse_release_year(Some("1999")), 1999);
        assert_eq!(parse_release_year(Some("19x9")), 0);
        assert_eq!(parse_release_year(Some("-1999")), 0);
        assert_eq!(parse_release_year(Some("")), 0);
        assert_eq!(parse_release_year(Some("99999999999999")), 0);
        assert_eq!(parse_release_year(None), 0);
    }

    #[test]
    fn test_parse_member_rating() {
        assert_eq!(parse_member_rating(Some("3.5")), 3.5);
        assert_eq!(parse_member_rating(Some(" 2 ")), 2.0);
        assert_eq!(parse_member_rating(Some("great")), 0.0);
        assert_eq!(parse_member_rating(None), 0.0);
    }

    #[test]
    fn test_extract_skips_items_without_watched_date() {
        let records = extract_records(vec![item(Some("2024-03-01")), item(None)]).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].watched_date, NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
    }

    #[test]
    fn test_extract_skips_unparseable_watched_date() {
        let records = extract_records(vec![item(Some("yesterday")), item(Some("2024-03-02"))]).unwrap();
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn test_extract_defaults() {
        let raw = RawItem {
            watched_date: Some("2024-03-01".to_string()),
            ..RawItem::default()
        };
        let records = extract_records(vec![raw]).unwrap();

        assert_eq!(records[0].title, "Unknown");
        assert_eq!(records[0].release_year, 0);
        assert_eq!(records[0].rating, 0.0);
        assert!(!records[0].is_rewatch);
        assert_eq!(records[0].poster_url, None);
        assert_eq!(records[0].review_word_count, 0);
        assert!(!records[0].has_review);
    }

    #[test]
    fn test_extract_empty_title_is_kept() {
        let raw = RawItem {
            watched_date: Some("2024-03-01".to_string()),
            film_title: Some(String::new()),
            ..RawItem::default()
        };
        let records = extract_records(vec![raw]).unwrap();
        assert_eq!(records[0].title, "");
    }

    #[test]
    fn test_rewatch_flag_is_case_sensitive() {
        let mut yes = item(Some("2024-03-01"));
        yes.rewatch = Some("Yes".to_string());
        let mut lower = item(Some("2024-03-02"));
        lower.rewatch = Some("yes".to_string());

        let records = extract_records(vec![yes, lower]).unwrap();
        assert!(records[0].is_rewatch);
        assert!(!records[1].is_rewatch);
    }

    #[test]
    fn test_extract_caps_at_feed_limit() {
        let items: Vec<RawItem> = (0..60).map(|_| item(Some("2024-03-01"))).collect();
        let records = extract_records(items).unwrap();
        assert_eq!(records.len(), MAX_FEED_ENTRIES);
    }

    #[test]
    fn test_extract_nothing_is_empty_feed() {
        assert!(matches!(extract_records(vec![]), Err(FeedError::EmptyFeed)));
        assert!(matches!(extract_records(vec![item(None)]), Err(FeedError::EmptyFeed)));
    }

    #[test]
    fn test_extract_review_from_description() {
        let mut raw = item(Some("2024-03-01"));
        raw.description = Some(
            r#"<p><img src="https://a.ltrbxd.com/alien.jpg"/></p><p>The perfect organism, and a perfect film.</p>"#
                .to_string(),
        );

        let records = extract_records(vec![raw]).unwrap();
        assert_eq!(records[0].poster_url.as_deref(), Some("https://a.ltrbxd.com/alien.jpg"));
        assert_eq!(records[0].review_word_count, 7);
        assert!(records[0].has_review);
        assert_eq!(records[0].decade, 1970);
        assert_eq!(records[0].weekday, "Friday");
    }
}
