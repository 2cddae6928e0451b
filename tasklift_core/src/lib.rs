#![deny(
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

use async_trait::async_trait;

pub mod builder;
pub mod error;
pub mod model;

pub use builder::{Clock, IdGenerator, SequentialIds, SystemClock, TaskBuilder, UuidV7Ids};
pub use error::ExtractionError;
pub use model::{Category, ExtractionResult, MAX_TITLE_WORDS, PLACEHOLDER_TITLE, Task};

/// A strategy that turns a free-form sentence into an [`ExtractionResult`].
///
/// Remote, service-backed extractors implement this trait. The deterministic
/// pattern extractor does not, since it cannot fail.
#[async_trait]
pub trait TaskExtractor: Send + Sync {
    async fn extract(&self, text: &str) -> Result<ExtractionResult, ExtractionError>;

    /// Short name used in logs.
    fn name(&self) -> &'static str;
}
