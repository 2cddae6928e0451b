//! Deterministic, pattern-based extraction.

use std::ops::Range;
use tasklift_core::{ExtractionResult, MAX_TITLE_WORDS};
use tracing::debug;

use crate::patterns::{
    TRAILING_PUNCTUATION, classify, find_time, find_venue, time_spans_with_prepositions,
};

/// Leading phrases that carry no meaning for a title.
const FILLER_PREFIXES: &[&[&str]] = &[
    &["remind", "me", "to"],
    &["i", "need", "to"],
    &["i", "have", "to"],
    &["i", "have"],
    &["i", "am"],
    &["i'm"],
    &["need", "to"],
    &["have", "to"],
];

/// Words that make no sense at the end of a title once the time and venue
/// that followed them are gone.
const DANGLING: &[&str] = &[
    "in", "at", "on", "by", "for", "to", "with", "from", "until", "and",
];

/// Pure regex and keyword extractor used when no remote service is usable.
///
/// Never fails: empty or pathological input yields the placeholder title and
/// the default category.
#[derive(Debug, Clone, Copy, Default)]
pub struct PatternExtractor;

impl PatternExtractor {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    #[must_use]
    pub fn extract(&self, text: &str) -> ExtractionResult {
        let time = find_time(text).map(str::to_string);
        let venue = find_venue(text);
        let category = classify(text);

        let mut spans = time_spans_with_prepositions(text);
        if let Some(venue) = &venue {
            spans.push(venue.span.clone());
        }
        let title = title_from(&strip_spans(text, spans));

        debug!(
            "Pattern extraction: title={title:?} time={time:?} venue={:?} category={category}",
            venue.as_ref().map(|v| v.venue.as_str())
        );

        ExtractionResult::new(title, time, venue.map(|v| v.venue), category)
    }
}

/// Remove byte ranges from `text`, merging any that overlap.
fn strip_spans(text: &str, mut spans: Vec<Range<usize>>) -> String {
    spans.sort_by_key(|span| span.start);

    let mut kept = String::with_capacity(text.len());
    let mut cursor = 0;
    for span in spans {
        if span.start > cursor {
            kept.push_str(&text[cursor..span.start]);
            kept.push(' ');
        }
        cursor = cursor.max(span.end);
    }
    if cursor < text.len() {
        kept.push_str(&text[cursor..]);
    }
    kept
}

fn title_from(remaining: &str) -> String {
    let mut words: Vec<&str> = remaining
        .split_whitespace()
        .map(|w| w.trim_end_matches(TRAILING_PUNCTUATION))
        .filter(|w| w.chars().any(char::is_alphanumeric))
        .collect();

    if let Some(prefix) = FILLER_PREFIXES.iter().find(|prefix| {
        prefix.len() < words.len()
            && prefix
                .iter()
                .zip(&words)
                .all(|(filler, word)| word.eq_ignore_ascii_case(filler))
    }) {
        words.drain(..prefix.len());
    }

    while words
        .last()
        .is_some_and(|w| DANGLING.contains(&w.to_lowercase().as_str()))
    {
        words.pop();
    }

    words.truncate(MAX_TITLE_WORDS);
    words.join(" ")
}
