#![warn(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

//! Task extraction: deterministic pattern rules and the orchestrator that
//! prefers a remote extractor when one is configured.

mod extractor;
pub mod patterns;
mod pipeline;

pub use extractor::PatternExtractor;
pub use patterns::{CATEGORY_CUES, CategoryCue, classify};
pub use pipeline::{ExtractionOutcome, ExtractionPipeline, ExtractionSource, Strategy};
