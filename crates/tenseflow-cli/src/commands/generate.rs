//! Generate command implementation.
//!
//! Draws random examples from the template library.

use anyhow::Result;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tenseflow_core::{GrammarProfile, TutorSession};
use tracing::info;

use super::print_session;

/// Generate `count` examples, each shown as a fresh session refresh.
pub fn execute(profile: GrammarProfile, seed: Option<u64>, count: usize, json: bool) -> Result<()> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    info!(
        template_set = %profile.template_set,
        seed = ?seed,
        count,
        "Generating examples"
    );

    let mut session = TutorSession::new(profile);
    if json {
        let examples: Vec<_> = (0..count).map(|_| session.refresh(&mut rng).clone()).collect();
        println!("{}", serde_json::to_string_pretty(&examples)?);
        return Ok(());
    }

    for index in 0..count {
        if index > 0 {
            println!();
        }
        session.refresh(&mut rng);
        print_session(&session, false)?;
    }
    Ok(())
}
