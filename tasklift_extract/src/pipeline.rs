//! Extraction orchestrator.
//!
//! Tries the remote strategy when one is configured and falls back to the
//! pattern extractor on any failure. Callers always get a result.

use std::fmt;
use std::sync::Arc;
use tasklift_core::{ExtractionError, ExtractionResult, TaskExtractor};
use tracing::{debug, info, warn};

use crate::extractor::PatternExtractor;

/// Primary strategy chosen at construction time.
#[derive(Clone)]
pub enum Strategy {
    /// A service-backed extractor; the pattern extractor is the fallback.
    Remote(Arc<dyn TaskExtractor>),
    /// Pattern extraction only.
    Local,
}

impl fmt::Debug for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Remote(remote) => f.debug_tuple("Remote").field(&remote.name()).finish(),
            Self::Local => f.write_str("Local"),
        }
    }
}

/// Which strategy produced a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractionSource {
    Remote,
    Local,
}

/// A result together with how it was obtained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionOutcome {
    pub result: ExtractionResult,
    pub source: ExtractionSource,
    /// The remote failure that triggered the fallback, if any.
    pub fallback_reason: Option<ExtractionError>,
}

#[derive(Debug, Clone)]
pub struct ExtractionPipeline {
    strategy: Strategy,
    local: PatternExtractor,
}

impl ExtractionPipeline {
    /// `remote` is the injected "service configured" capability: `None`
    /// means pattern extraction only.
    #[must_use]
    pub fn new(remote: Option<Arc<dyn TaskExtractor>>) -> Self {
        let strategy = remote.map_or(Strategy::Local, Strategy::Remote);
        info!("Extraction pipeline strategy: {strategy:?}");
        Self {
            strategy,
            local: PatternExtractor::new(),
        }
    }

    #[must_use]
    pub const fn local() -> Self {
        Self {
            strategy: Strategy::Local,
            local: PatternExtractor::new(),
        }
    }

    #[must_use]
    pub const fn strategy(&self) -> &Strategy {
        &self.strategy
    }

    /// Extract structured fields from `text`. Never fails.
    pub async fn process(&self, text: &str) -> ExtractionResult {
        self.process_with_outcome(text).await.result
    }

    pub async fn process_with_outcome(&self, text: &str) -> ExtractionOutcome {
        let remote = match &self.strategy {
            Strategy::Remote(remote) => remote,
            Strategy::Local => return self.local_outcome(text, None),
        };

        match remote.extract(text).await {
            Ok(result) => {
                debug!("Remote extractor {} succeeded", remote.name());
                ExtractionOutcome {
                    result: ExtractionResult::new(
                        result.title,
                        result.time,
                        result.venue,
                        result.category,
                    ),
                    source: ExtractionSource::Remote,
                    fallback_reason: None,
                }
            }
            Err(e) => {
                warn!(
                    "Remote extractor {} failed: {e}. Falling back to pattern extraction",
                    remote.name()
                );
                self.local_outcome(text, Some(e))
            }
        }
    }

    fn local_outcome(&self, text: &str, reason: Option<ExtractionError>) -> ExtractionOutcome {
        ExtractionOutcome {
            result: self.local.extract(text),
            source: ExtractionSource::Local,
            fallback_reason: reason,
        }
    }
}

impl Default for ExtractionPipeline {
    fn default() -> Self {
        Self::local()
    }
}
