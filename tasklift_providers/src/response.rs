//! Parsing of `generateContent` responses into extraction results.

use serde::Deserialize;
use tasklift_core::{Category, ExtractionError, ExtractionResult};

#[derive(Debug, Deserialize)]
pub(crate) struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Content,
}

#[derive(Debug, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    text: String,
}

impl GenerateContentResponse {
    /// Text of the first part of the first candidate.
    pub(crate) fn into_text(self) -> Result<String, ExtractionError> {
        self.candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content.parts.into_iter().next())
            .map(|part| part.text)
            .ok_or_else(|| {
                ExtractionError::MalformedResponse("response has no candidate text".to_string())
            })
    }
}

/// The object the instruction asks the model to return.
#[derive(Debug, Deserialize)]
struct ModelExtraction {
    title: String,
    time: Option<String>,
    venue: Option<String>,
    category: String,
}

/// Remove a surrounding markdown code fence, with or without a language tag.
#[must_use]
pub fn strip_fences(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let rest = rest.trim_start_matches(|c: char| c.is_ascii_alphanumeric());
    rest.strip_suffix("```").unwrap_or(rest).trim()
}

/// Parse the model's text payload into a canonical result.
///
/// `null` and missing `time`/`venue` are both absent. The category must be one
/// of the four names exactly; anything else is rejected, not coerced.
pub fn parse_extraction(text: &str) -> Result<ExtractionResult, ExtractionError> {
    let payload = strip_fences(text);
    let raw: ModelExtraction = serde_json::from_str(payload)
        .map_err(|e| ExtractionError::MalformedResponse(e.to_string()))?;

    let category: Category = raw.category.parse()?;
    if raw.title.trim().is_empty() {
        return Err(ExtractionError::MalformedResponse(
            "title is empty".to_string(),
        ));
    }

    Ok(ExtractionResult::new(raw.title, raw.time, raw.venue, category))
}
