//! Error types for the analyzer client.

use thiserror::Error;

/// Result type for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// Errors raised by [`AnalyzerClient`](crate::AnalyzerClient).
///
/// `EmptySentence` and `Busy` reject a submission before any request is made.
/// The remaining variants describe request failures; `analyze` turns them
/// into a fallback outcome, `fetch` returns them as-is.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The submitted text was empty after trimming.
    #[error("Please enter a sentence to analyze")]
    EmptySentence,

    /// A previous request is still in flight.
    #[error("An analysis is already in progress")]
    Busy,

    /// The HTTP client could not be constructed.
    #[error("Failed to build HTTP client: {0}")]
    Build(#[source] reqwest::Error),

    /// The request could not be sent or timed out.
    #[error("Request to {endpoint} failed: {source}")]
    Transport {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    /// The analyzer answered with a non-success status.
    #[error("Analyzer returned HTTP {status}")]
    Status { status: u16 },

    /// The response body was not JSON.
    #[error("Analyzer response is not valid JSON: {0}")]
    Decode(#[source] reqwest::Error),
}

impl ClientError {
    /// Whether the submission was rejected without contacting the analyzer.
    pub fn is_rejection(&self) -> bool {
        matches!(self, ClientError::EmptySentence | ClientError::Busy)
    }
}
