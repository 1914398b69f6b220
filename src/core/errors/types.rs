//! Error types for the document analysis boundary.
//!
//! The record-assembly pipeline itself is infallible: recognition misses
//! degrade to empty values in the output record. Errors exist only where
//! the crate touches the outside world, at the analysis service boundary.

use thiserror::Error;

/// Convenience alias for results at the analysis boundary.
pub type AnalysisResult<T> = Result<T, AnalysisError>;

/// Errors raised while obtaining a recognition result.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// A request could not be sent or its response could not be read.
    #[error("request failed during {context}")]
    Request {
        /// What the client was doing when the transport failed.
        context: String,
        /// The underlying transport error.
        #[source]
        source: reqwest::Error,
    },

    /// The service answered with an unexpected HTTP status.
    #[error("service returned HTTP {status}: {body}")]
    Rejected {
        /// The HTTP status code the service answered with.
        status: u16,
        /// Response body, possibly empty.
        body: String,
    },

    /// The service response did not have the documented shape.
    #[error("malformed service response: {message}")]
    Malformed {
        /// What was missing or unexpected in the response.
        message: String,
    },

    /// The analysis operation itself reported failure.
    #[error("analysis failed: {message}")]
    Failed {
        /// Failure detail as reported by the service.
        message: String,
    },

    /// The operation did not reach a terminal state in time.
    #[error("analysis did not complete within {timeout_secs}s")]
    Timeout {
        /// The configured overall polling bound, in seconds.
        timeout_secs: u64,
    },

    /// Error indicating a configuration problem.
    #[error("configuration: {message}")]
    Config {
        /// A message describing the configuration error.
        message: String,
    },
}

impl AnalysisError {
    /// Creates a transport error with context about the failed call.
    pub fn request(context: impl Into<String>, source: reqwest::Error) -> Self {
        Self::Request {
            context: context.into(),
            source,
        }
    }

    /// Creates a malformed-response error.
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::Malformed {
            message: message.into(),
        }
    }

    /// Creates a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejected_display_carries_status_and_body() {
        let error = AnalysisError::Rejected {
            status: 403,
            body: "key expired".to_string(),
        };
        assert_eq!(error.to_string(), "service returned HTTP 403: key expired");
    }

    #[test]
    fn timeout_display_names_the_bound() {
        let error = AnalysisError::Timeout { timeout_secs: 120 };
        assert_eq!(error.to_string(), "analysis did not complete within 120s");
    }

    #[test]
    fn helper_constructors_build_the_matching_variants() {
        assert!(matches!(
            AnalysisError::malformed("no result payload"),
            AnalysisError::Malformed { .. }
        ));
        assert!(matches!(
            AnalysisError::config("empty key"),
            AnalysisError::Config { .. }
        ));
    }
}
