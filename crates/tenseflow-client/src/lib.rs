//! Async client for the remote sentence analyzer.
//!
//! The analyzer is contacted with `POST <endpoint>` and a JSON body
//! `{"sentence": "..."}`. Whatever comes back goes through the grammar core's
//! [`Normalizer`], so [`AnalyzerClient::analyze`] always produces something
//! displayable: transport errors, error statuses and unusable payloads all
//! degrade to the default example with a [`Notice`].
//!
//! At most one request is in flight per client. A second submission while
//! one is outstanding is rejected with [`ClientError::Busy`].

mod error;

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use serde_json::Value;
use tenseflow_core::{AnalysisOutcome, AnalyzeRequest, Normalizer, Notice};
use tracing::{debug, info, warn};

pub use error::{ClientError, ClientResult};

/// Analyzer endpoint used when nothing else is configured.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:8081/api/analyzer";

/// Connection settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub endpoint: String,
    /// Whole-request timeout. `None` waits indefinitely.
    pub timeout: Option<Duration>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout: None,
        }
    }
}

impl ClientConfig {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            timeout: None,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

/// Clears the in-flight flag when dropped, including on cancellation.
struct FetchGuard<'a>(&'a AtomicBool);

impl<'a> FetchGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self(flag))
    }
}

impl Drop for FetchGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// Client for one analyzer endpoint.
#[derive(Debug)]
pub struct AnalyzerClient {
    http: reqwest::Client,
    endpoint: String,
    normalizer: Normalizer,
    fetching: AtomicBool,
}

impl AnalyzerClient {
    pub fn new(config: ClientConfig, normalizer: Normalizer) -> ClientResult<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().map_err(ClientError::Build)?;

        Ok(Self {
            http,
            endpoint: config.endpoint,
            normalizer,
            fetching: AtomicBool::new(false),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Whether a request is currently outstanding.
    pub fn is_fetching(&self) -> bool {
        self.fetching.load(Ordering::Acquire)
    }

    /// Submit `input` for analysis.
    ///
    /// Returns `Err` only when the submission is rejected up front (empty
    /// input or a request already in flight). Every request failure is folded
    /// into the returned outcome as the default example plus a notice.
    pub async fn analyze(&self, input: &str) -> ClientResult<AnalysisOutcome> {
        let sentence = input.trim();
        if sentence.is_empty() {
            return Err(ClientError::EmptySentence);
        }
        let _guard = FetchGuard::acquire(&self.fetching)
            .ok_or(ClientError::Busy)?;

        info!(
            target: "tenseflow::client",
            endpoint = %self.endpoint,
            chars = char_len(sentence),
            "analyze_submitted"
        );

        match self.fetch(sentence).await {
            Ok(payload) => Ok(self.outcome_from_payload(&payload)),
            Err(err) => {
                warn!(
                    target: "tenseflow::client",
                    endpoint = %self.endpoint,
                    "analyzer request failed: {err}"
                );
                Ok(AnalysisOutcome::fallback(
                    self.normalizer.fallback(),
                    Notice::RequestFailed(err.to_string()),
                ))
            }
        }
    }

    /// Send one request and return the raw JSON body.
    ///
    /// Does not consult the in-flight gate and never substitutes a fallback.
    pub async fn fetch(&self, sentence: &str) -> ClientResult<Value> {
        let request = AnalyzeRequest {
            sentence: sentence.to_string(),
        };
        let response = self
            .http
            .post(&self.endpoint)
            .json(&request)
            .send()
            .await
            .map_err(|source| ClientError::Transport {
                endpoint: self.endpoint.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Status {
                status: status.as_u16(),
            });
        }

        let payload: Value = response.json().await.map_err(ClientError::Decode)?;
        debug!(
            target: "tenseflow::client",
            status = status.as_u16(),
            "analyzer response received"
        );
        Ok(payload)
    }

    fn outcome_from_payload(&self, payload: &Value) -> AnalysisOutcome {
        let report = self.normalizer.normalize_report(payload);
        let notice = report.notice();
        if let Some(notice) = &notice {
            warn!(
                target: "tenseflow::client",
                shape = report.shape.as_str(),
                dropped = report.dropped,
                "{notice}"
            );
        }
        AnalysisOutcome {
            examples: report.examples,
            notice,
        }
    }
}

/// Length in characters, not bytes.
fn char_len(text: &str) -> usize {
    text.chars().count()
}
