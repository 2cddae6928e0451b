use thiserror::Error;

/// Failures a remote extraction attempt can report.
///
/// None of these reach the end user: the pipeline absorbs every variant and
/// falls back to pattern extraction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractionError {
    #[error("extraction service is not configured")]
    ServiceUnavailable,

    #[error("extraction service request failed: {0}")]
    NetworkFailure(String),

    #[error("malformed extraction response: {0}")]
    MalformedResponse(String),

    #[error("invalid category in extraction response: {0:?}")]
    InvalidCategory(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_value() {
        let err = ExtractionError::InvalidCategory("urgent".to_string());
        assert_eq!(
            err.to_string(),
            "invalid category in extraction response: \"urgent\""
        );

        let err = ExtractionError::NetworkFailure("HTTP 503".to_string());
        assert!(err.to_string().contains("HTTP 503"));
    }
}
