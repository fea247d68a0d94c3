use quick_xml::events::Event;
use quick_xml::Reader;
use tracing::{debug, warn};
use crate::traits::{FeedParser, RawItem};

/// Item child elements we read. Matched case-insensitively on the qualified name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    WatchedDate,
    FilmTitle,
    FilmYear,
    MemberRating,
    Rewatch,
    Description,
}

impl Field {
    fn from_tag(name: &[u8]) -> Option<Self> {
        const TAGS: [(&[u8], Field); 6] = [
            (b"letterboxd:watcheddate", Field::WatchedDate),
            (b"letterboxd:filmtitle", Field::FilmTitle),
            (b"letterboxd:filmyear", Field::FilmYear),
            (b"letterboxd:memberrating", Field::MemberRating),
            (b"letterboxd:rewatch", Field::Rewatch),
            (b"description", Field::Description),
        ];
        TAGS.iter()
            .find(|(tag, _)| name.eq_ignore_ascii_case(tag))
            .map(|(_, field)| *field)
    }
}

impl RawItem {
    /// First occurrence wins, like a `find()` on the element.
    fn set(&mut self, field: Field, value: String) {
        let slot = match field {
            Field::WatchedDate => &mut self.watched_date,
            Field::FilmTitle => &mut self.film_title,
            Field::FilmYear => &mut self.film_year,
            Field::MemberRating => &mut self.member_rating,
            Field::Rewatch => &mut self.rewatch,
            Field::Description => &mut self.description,
        };
        if slot.is_none() {
            *slot = Some(value);
        }
    }
}

/// Streaming RSS reader for the Letterboxd diary feed.
#[derive(Debug, Clone, Default)]
pub struct XmlFeedParser;

impl XmlFeedParser {
    pub fn new() -> Self {
        Self
    }
}

impl FeedParser for XmlFeedParser {
    fn parse(&self, raw: &[u8]) -> Vec<RawItem> {
        let mut reader = Reader::from_reader(raw);
        let mut buf = Vec::new();
        let mut items = Vec::new();

        let mut current: Option<RawItem> = None;
        let mut field: Option<Field> = None;
        let mut text = String::new();

        loop {
            match reader.read_event_into(&mut buf) {
                Ok(Event::Start(e)) => {
                    let name = e.name();
                    if name.as_ref().eq_ignore_ascii_case(b"item") {
                        current = Some(RawItem::default());
                        field = None;
                    } else if current.is_some() && field.is_none() {
                        if let Some(f) = Field::from_tag(name.as_ref()) {
                            field = Some(f);
                            text.clear();
                        }
                    }
                }
                Ok(Event::Empty(e)) => {
                    // <letterboxd:rewatch/> is present-but-empty
                    if let (Some(item), None) = (current.as_mut(), field) {
                        if let Some(f) = Field::from_tag(e.name().as_ref()) {
                            item.set(f, String::new());
                        }
                    }
                }
                Ok(Event::Text(t)) => {
                    if field.is_some() {
                        match t.unescape() {
                            Ok(s) => text.push_str(&s),
                            Err(e) => {
                                debug!(error = %e, "Unescape failed, keeping raw text");
                                text.push_str(&String::from_utf8_lossy(&t));
                            }
                        }
                    }
                }
                Ok(Event::CData(c)) => {
                    if field.is_some() {
                        text.push_str(&String::from_utf8_lossy(&c));
                    }
                }
                Ok(Event::End(e)) => {
                    let name = e.name();
                    if name.as_ref().eq_ignore_ascii_case(b"item") {
                        if let Some(item) = current.take() {
                            items.push(item);
                        }
                        field = None;
                    } else if let (Some(f), Some(item)) = (field, current.as_mut()) {
                        if Field::from_tag(name.as_ref()) == Some(f) {
                            item.set(f, std::mem::take(&mut text));
                            field = None;
                        }
                    }
                }
                Ok(Event::Eof) => break,
                Err(e) => {
                    warn!(
                        position = reader.buffer_position(),
                        error = %e,
                        items = items.len(),
                        "Malformed feed markup, keeping items parsed so far"
                    );
                    break;
                }
                _ => {}
            }
            buf.clear();
        }

        debug!("Parsed {} feed items", items.len());
        items
    }
}
