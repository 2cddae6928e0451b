//! Integration tests for the extraction orchestrator.
//!
//! These tests verify that:
//! - a failing remote extractor is replaced by the pattern extractor's result
//! - a successful remote result is passed through in canonical shape
//! - a pipeline without a remote never calls out

use async_trait::async_trait;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tasklift_core::{Category, ExtractionError, ExtractionResult, TaskExtractor};
use tasklift_extract::{ExtractionPipeline, ExtractionSource, PatternExtractor, Strategy};

/// Remote extractor returning a canned answer and counting calls.
struct ScriptedRemote {
    answer: Result<ExtractionResult, ExtractionError>,
    calls: AtomicUsize,
}

impl ScriptedRemote {
    fn new(answer: Result<ExtractionResult, ExtractionError>) -> Arc<Self> {
        Arc::new(Self {
            answer,
            calls: AtomicUsize::new(0),
        })
    }
}

#[async_trait]
impl TaskExtractor for ScriptedRemote {
    async fn extract(&self, _text: &str) -> Result<ExtractionResult, ExtractionError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.answer.clone()
    }

    fn name(&self) -> &'static str {
        "scripted"
    }
}

const SENTENCES: [&str; 4] = [
    "Meeting in AB1-324 at 9pm",
    "Buy groceries at the store",
    "",
    "Finish the hackathon demo tomorrow",
];

#[tokio::test]
async fn failing_remote_falls_back_to_pattern_result() {
    let failures = [
        ExtractionError::ServiceUnavailable,
        ExtractionError::NetworkFailure("connection refused".to_string()),
        ExtractionError::MalformedResponse("expected value at line 1".to_string()),
        ExtractionError::InvalidCategory("urgent".to_string()),
    ];

    for failure in failures {
        let remote = ScriptedRemote::new(Err(failure.clone()));
        let pipeline = ExtractionPipeline::new(Some(remote.clone()));

        for text in SENTENCES {
            let outcome = pipeline.process_with_outcome(text).await;
            assert_eq!(outcome.result, PatternExtractor::new().extract(text));
            assert_eq!(outcome.source, ExtractionSource::Local);
            assert_eq!(outcome.fallback_reason.as_ref(), Some(&failure));
        }
        assert_eq!(remote.calls.load(Ordering::SeqCst), SENTENCES.len());
    }
}

#[tokio::test]
async fn out_of_enum_category_never_reaches_the_caller() {
    let remote = ScriptedRemote::new(Err(ExtractionError::InvalidCategory(
        "urgent".to_string(),
    )));
    let pipeline = ExtractionPipeline::new(Some(remote));

    let result = pipeline.process("Meeting in AB1-324 at 9pm").await;
    assert_eq!(result.category, Category::Work);
    assert_eq!(result.venue.as_deref(), Some("AB1-324"));
}

#[tokio::test]
async fn successful_remote_result_is_used_without_merging() {
    let remote = ScriptedRemote::new(Ok(ExtractionResult {
        title: "  Python   dependency review  ".to_string(),
        time: Some("9pm".to_string()),
        venue: Some(String::new()),
        category: Category::Project,
    }));
    let pipeline = ExtractionPipeline::new(Some(remote.clone()));

    let outcome = pipeline
        .process_with_outcome("Meeting in AB1-324 at 9pm")
        .await;
    assert_eq!(outcome.source, ExtractionSource::Remote);
    assert_eq!(outcome.fallback_reason, None);
    assert_eq!(outcome.result.title, "Python dependency review");
    assert_eq!(outcome.result.time.as_deref(), Some("9pm"));
    // The pattern extractor would have found AB1-324; remote output wins as a whole.
    assert_eq!(outcome.result.venue, None);
    assert_eq!(outcome.result.category, Category::Project);
    assert_eq!(remote.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn pipeline_without_remote_uses_patterns_only() {
    let pipeline = ExtractionPipeline::new(None);
    assert!(matches!(pipeline.strategy(), Strategy::Local));

    for text in SENTENCES {
        let outcome = pipeline.process_with_outcome(text).await;
        assert_eq!(outcome.source, ExtractionSource::Local);
        assert_eq!(outcome.fallback_reason, None);
        assert_eq!(outcome.result, PatternExtractor::new().extract(text));
    }
}

#[tokio::test]
async fn empty_input_still_yields_a_valid_result() {
    let remote = ScriptedRemote::new(Err(ExtractionError::ServiceUnavailable));
    let pipeline = ExtractionPipeline::new(Some(remote));

    let result = pipeline.process("").await;
    assert_eq!(result.title, "New Task");
    assert_eq!(result.category, Category::Chores);
    assert_eq!(result.time, None);
    assert_eq!(result.venue, None);
}
