//! Matching rules for deterministic task extraction.
//!
//! Every rule here reads the original sentence. Nothing is stripped before
//! matching, so the order in which time and venue are looked up cannot change
//! either result.

use regex::{Match, Regex};
use std::ops::Range;
use std::sync::OnceLock;
use tasklift_core::Category;

static TIME_PATTERN: OnceLock<Regex> = OnceLock::new();
static CLOCK_PATTERN: OnceLock<Regex> = OnceLock::new();
static RELATIVE_DAY_PATTERN: OnceLock<Regex> = OnceLock::new();
static ROOM_CODE_PATTERN: OnceLock<Regex> = OnceLock::new();
static PREPOSITION_PATTERN: OnceLock<Regex> = OnceLock::new();
static WORD_PATTERN: OnceLock<Regex> = OnceLock::new();

#[expect(
    clippy::expect_used,
    reason = "Static regex patterns are known to be valid"
)]
fn compiled(cell: &'static OnceLock<Regex>, pattern: &str) -> &'static Regex {
    cell.get_or_init(|| Regex::new(pattern).expect("static regex pattern must be valid"))
}

/// Any time expression: 12-hour clock, 24-hour clock, or a relative day.
fn time_pattern() -> &'static Regex {
    compiled(
        &TIME_PATTERN,
        r"(?i)\b(?:\d{1,2}(?::\d{2})?\s?(?:am|pm)\b|\d{1,2}:\d{2}\b|today\b|tomorrow\b)",
    )
}

fn clock_pattern() -> &'static Regex {
    compiled(
        &CLOCK_PATTERN,
        r"(?i)\b\d{1,2}(?::\d{2})?\s?(?:am|pm)\b|\b\d{1,2}:\d{2}\b",
    )
}

fn relative_day_pattern() -> &'static Regex {
    compiled(&RELATIVE_DAY_PATTERN, r"(?i)\b(?:today|tomorrow)\b")
}

/// Building-and-room code such as `AB1-324`. Case-sensitive.
fn room_code_pattern() -> &'static Regex {
    compiled(&ROOM_CODE_PATTERN, r"\b[A-Z]{2,3}\d+-\d+\b")
}

fn preposition_pattern() -> &'static Regex {
    compiled(&PREPOSITION_PATTERN, r"(?i)\b(?:in|at|room)\b")
}

fn word_pattern() -> &'static Regex {
    compiled(&WORD_PATTERN, r"\S+")
}

/// Longest venue phrase taken after a preposition.
const MAX_VENUE_WORDS: usize = 3;

/// Words that end a venue phrase.
const VENUE_STOP_WORDS: &[&str] = &[
    "in", "at", "room", "on", "by", "for", "to", "with", "from", "until", "and", "today",
    "tomorrow",
];

const ARTICLES: &[&str] = &["the", "a", "an", "my", "our"];

/// Prepositions swallowed together with the time expression they introduce.
const TIME_PREPOSITIONS: &[&str] = &["at", "by", "on", "from", "until"];

/// Prepositions swallowed together with the venue they introduce.
const VENUE_PREPOSITIONS: &[&str] = &["in", "at", "room"];

pub(crate) const TRAILING_PUNCTUATION: &[char] = &[',', '.', ';', ':', '!', '?', ')', '"'];

/// Keyword cues for one category.
#[derive(Debug, Clone, Copy)]
pub struct CategoryCue {
    pub category: Category,
    pub keywords: &'static [&'static str],
}

/// Classification cues in precedence order. The first table with a matching
/// token decides; [`Category::Chores`] applies when none match.
pub const CATEGORY_CUES: [CategoryCue; 3] = [
    CategoryCue {
        category: Category::Work,
        keywords: &[
            "meeting",
            "meetings",
            "meet",
            "office",
            "work",
            "job",
            "client",
            "clients",
            "boss",
            "standup",
            "colleague",
            "colleagues",
            "interview",
            "presentation",
            "shift",
        ],
    },
    CategoryCue {
        category: Category::School,
        keywords: &[
            "class",
            "classes",
            "exam",
            "exams",
            "assignment",
            "assignments",
            "school",
            "homework",
            "lecture",
            "lectures",
            "quiz",
            "midterm",
            "tutorial",
            "course",
            "seminar",
            "study",
        ],
    },
    CategoryCue {
        category: Category::Project,
        keywords: &[
            "project",
            "projects",
            "hackathon",
            "code",
            "coding",
            "debug",
            "deploy",
            "repo",
            "github",
            "prototype",
            "commit",
        ],
    },
];

/// First time expression in `text`, as written.
#[must_use]
pub fn find_time(text: &str) -> Option<&str> {
    time_pattern().find(text).map(|m| m.as_str())
}

/// A venue found in the original text, with the byte range it occupies
/// including the preposition that introduced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VenueMatch {
    pub venue: String,
    pub span: Range<usize>,
}

/// Locate a venue: a room code if there is one, otherwise the first
/// preposition that is followed by a usable phrase.
#[must_use]
pub fn find_venue(text: &str) -> Option<VenueMatch> {
    if let Some(code) = room_code_pattern().find(text) {
        let start = preceding_word(text, code.start(), VENUE_PREPOSITIONS).unwrap_or(code.start());
        return Some(VenueMatch {
            venue: code.as_str().to_string(),
            span: start..code.end(),
        });
    }

    let times = time_spans(text);
    preposition_pattern()
        .find_iter(text)
        .find_map(|prep| venue_phrase(text, &prep, &times))
}

fn venue_phrase(text: &str, prep: &Match<'_>, times: &[Range<usize>]) -> Option<VenueMatch> {
    let rest = &text[prep.end()..];
    if !rest.starts_with(char::is_whitespace) {
        return None;
    }

    let mut words = Vec::new();
    let mut end = prep.end();
    for word in word_pattern().find_iter(rest) {
        if words.len() == MAX_VENUE_WORDS {
            break;
        }
        let start = prep.end() + word.start();
        if times.iter().any(|span| span.start == start) {
            break;
        }

        let raw = word.as_str();
        let trimmed = raw.trim_end_matches(TRAILING_PUNCTUATION);
        if trimmed.is_empty() || VENUE_STOP_WORDS.contains(&trimmed.to_lowercase().as_str()) {
            break;
        }

        words.push(trimmed);
        end = start + trimmed.len();
        if trimmed.len() < raw.len() {
            break;
        }
    }

    if words
        .iter()
        .all(|w| ARTICLES.contains(&w.to_lowercase().as_str()))
    {
        return None;
    }

    Some(VenueMatch {
        venue: words.join(" "),
        span: prep.start()..end,
    })
}

/// Byte ranges of every clock time and relative-day word.
#[must_use]
pub fn time_spans(text: &str) -> Vec<Range<usize>> {
    clock_pattern()
        .find_iter(text)
        .chain(relative_day_pattern().find_iter(text))
        .map(|m| m.range())
        .collect()
}

/// Time ranges widened to cover an introducing `at`/`by`/`on`/... word.
#[must_use]
pub fn time_spans_with_prepositions(text: &str) -> Vec<Range<usize>> {
    time_spans(text)
        .into_iter()
        .map(|span| {
            let start = preceding_word(text, span.start, TIME_PREPOSITIONS).unwrap_or(span.start);
            start..span.end
        })
        .collect()
}

/// Start of the word right before `pos` when it is one of `candidates`.
fn preceding_word(text: &str, pos: usize, candidates: &[&str]) -> Option<usize> {
    let before = &text[..pos];
    let trimmed = before.trim_end();
    if trimmed.len() == before.len() {
        return None;
    }
    let start = trimmed
        .rfind(char::is_whitespace)
        .map_or(0, |idx| idx + trimmed[idx..].chars().next().map_or(1, char::len_utf8));
    let word = &trimmed[start..];
    candidates
        .contains(&word.to_lowercase().as_str())
        .then_some(start)
}

/// Classify by keyword cues in fixed precedence order.
#[must_use]
pub fn classify(text: &str) -> Category {
    let lower = text.to_lowercase();
    let tokens: Vec<&str> = lower
        .split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .collect();

    CATEGORY_CUES
        .iter()
        .find(|cue| tokens.iter().any(|t| cue.keywords.contains(t)))
        .map_or_else(Category::default, |cue| cue.category)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn time_takes_leftmost_expression() {
        assert_eq!(find_time("Meeting in AB1-324 at 9pm"), Some("9pm"));
        assert_eq!(find_time("tomorrow at 8am"), Some("tomorrow"));
        assert_eq!(find_time("lunch at 12:30 PM"), Some("12:30 PM"));
        assert_eq!(find_time("standup 14:30"), Some("14:30"));
        assert_eq!(find_time("call at 5 pm"), Some("5 pm"));
        assert_eq!(find_time("Buy groceries at the store"), None);
    }

    #[test]
    fn digits_inside_words_are_not_times() {
        assert_eq!(find_time("Review AB1-324"), None);
        assert_eq!(find_time("bring 3 apples"), None);
    }

    #[test]
    fn room_code_beats_preposition_phrase() {
        let venue = find_venue("Meeting in AB1-324 at 9pm");
        assert_eq!(
            venue,
            Some(VenueMatch {
                venue: "AB1-324".to_string(),
                span: 8..18,
            })
        );
    }

    #[test]
    fn preposition_phrase_is_taken_verbatim() {
        let venue = find_venue("Buy groceries at the store");
        assert_eq!(venue.map(|v| v.venue), Some("the store".to_string()));
    }

    #[test]
    fn preposition_followed_by_time_is_skipped() {
        let venue = find_venue("Review at 10:30am in the library");
        assert_eq!(venue.map(|v| v.venue), Some("the library".to_string()));
    }

    #[test]
    fn phrase_stops_at_stop_words_and_punctuation() {
        let venue = find_venue("Dinner at Luigi's with Sam");
        assert_eq!(venue.map(|v| v.venue), Some("Luigi's".to_string()));

        let venue = find_venue("Pick up keys at reception, then leave");
        assert_eq!(venue.map(|v| v.venue), Some("reception".to_string()));
    }

    #[test]
    fn bare_article_is_not_a_venue() {
        assert_eq!(find_venue("Meet at the"), None);
        assert_eq!(find_venue("Call mom"), None);
    }

    #[test]
    fn lowercase_room_code_is_not_a_code() {
        let venue = find_venue("Lab ab1-324");
        assert_eq!(venue, None);
    }

    #[test]
    fn classification_follows_precedence() {
        assert_eq!(classify("Meeting about the hackathon"), Category::Work);
        assert_eq!(classify("Exam prep for the coding class"), Category::School);
        assert_eq!(classify("Fix the project build"), Category::Project);
        assert_eq!(classify("Buy groceries"), Category::Chores);
    }

    #[test]
    fn classification_matches_whole_tokens() {
        assert_eq!(classify("Finish homework"), Category::School);
        assert_eq!(classify("Workout at the gym"), Category::Chores);
    }
}
