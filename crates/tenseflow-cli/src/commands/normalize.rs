//! Normalize command implementation.
//!
//! Runs a saved analyzer response through the normalizer, as if it had just
//! arrived from the analyzer.

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use serde_json::Value;
use tenseflow_core::{AnalysisOutcome, GrammarProfile, TutorSession};

use super::print_session;

/// Normalize the JSON in `input`, or stdin when `None`.
pub fn execute(profile: GrammarProfile, input: Option<&Path>, json: bool) -> Result<()> {
    let raw = match input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read stdin")?;
            buffer
        }
    };
    let payload: Value = serde_json::from_str(&raw)
        .context("Input is not valid JSON")?;

    let report = profile.normalizer().normalize_report(&payload);
    let outcome = AnalysisOutcome {
        notice: report.notice(),
        examples: report.examples,
    };

    let mut session = TutorSession::new(profile);
    session.apply(outcome);
    print_session(&session, json)
}
