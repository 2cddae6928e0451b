//! Task data model shared by every extraction strategy.
//!
//! Both the remote and the pattern-based extractor produce the same
//! [`ExtractionResult`] shape, which the [`TaskBuilder`](crate::TaskBuilder)
//! then wraps into a [`Task`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::error::ExtractionError;

/// Longest title, in words, an extraction result may carry.
pub const MAX_TITLE_WORDS: usize = 6;

/// Title used when nothing usable is left of the input.
pub const PLACEHOLDER_TITLE: &str = "New Task";

/// Closed set of task classifications.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Category {
    /// Meetings, office, job-related.
    Work = 0,
    /// Classes, exams, assignments.
    School = 1,
    /// Errands, groceries, cleaning, personal tasks.
    #[default]
    Chores = 2,
    /// Software projects, hackathons, coding tasks.
    Project = 3,
}

impl Category {
    /// All categories in classification precedence order.
    ///
    /// `Chores` comes last: it is the catch-all when no cue matches.
    pub const ALL: [Self; 4] = [Self::Work, Self::School, Self::Project, Self::Chores];

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Work => "work",
            Self::School => "school",
            Self::Chores => "chores",
            Self::Project => "project",
        }
    }

    /// Human-facing label, as shown in category filters.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Work => "Work",
            Self::School => "School",
            Self::Chores => "Chores",
            Self::Project => "Projects",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ExtractionError;

    /// Strict parse: only the four lowercase names are accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "work" => Ok(Self::Work),
            "school" => Ok(Self::School),
            "chores" => Ok(Self::Chores),
            "project" => Ok(Self::Project),
            other => Err(ExtractionError::InvalidCategory(other.to_string())),
        }
    }
}

/// Structured fields derived from one sentence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionResult {
    pub title: String,
    pub time: Option<String>,
    pub venue: Option<String>,
    pub category: Category,
}

impl ExtractionResult {
    /// Build a result in canonical shape.
    ///
    /// Whitespace is trimmed and collapsed, blank `time`/`venue` become
    /// `None`, and the title is cut to [`MAX_TITLE_WORDS`] words. A blank
    /// title is replaced by [`PLACEHOLDER_TITLE`].
    #[must_use]
    pub fn new(
        title: impl AsRef<str>,
        time: Option<String>,
        venue: Option<String>,
        category: Category,
    ) -> Self {
        let title = truncate_words(title.as_ref(), MAX_TITLE_WORDS);
        Self {
            title: if title.is_empty() {
                PLACEHOLDER_TITLE.to_string()
            } else {
                title
            },
            time: non_blank(time),
            venue: non_blank(venue),
            category,
        }
    }
}

/// Keep the first `max` whitespace-separated words, joined by single spaces.
#[must_use]
pub fn truncate_words(text: &str, max: usize) -> String {
    text.split_whitespace()
        .take(max)
        .collect::<Vec<_>>()
        .join(" ")
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.split_whitespace().collect::<Vec<_>>().join(" "))
        .filter(|v| !v.is_empty())
}

/// A task as held in the caller's collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: Uuid,
    pub title: String,
    pub time: Option<String>,
    pub venue: Option<String>,
    pub category: Category,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
}

impl Task {
    /// Wrap an extraction result into a fresh, not yet completed task.
    #[must_use]
    pub fn from_extraction(id: Uuid, result: ExtractionResult, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            title: result.title,
            time: result.time,
            venue: result.venue,
            category: result.category,
            completed: false,
            created_at,
        }
    }
}
