//! Analyze command implementation.
//!
//! Sends a sentence to the remote analyzer and shows the normalized result.

use anyhow::Result;
use tenseflow_client::AnalyzerClient;
use tenseflow_core::{GrammarProfile, TutorSession};

use super::print_session;
use crate::config::Config;

pub async fn execute(
    config: &Config,
    profile: GrammarProfile,
    sentence: &str,
    json: bool,
) -> Result<()> {
    let client = AnalyzerClient::new(config.client_config(), profile.normalizer())?;
    let outcome = client.analyze(sentence).await?;

    let mut session = TutorSession::new(profile);
    session.apply(outcome);
    print_session(&session, json)
}
