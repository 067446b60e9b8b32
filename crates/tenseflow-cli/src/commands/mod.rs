//! CLI command implementations.

pub mod analyze;
pub mod config;
pub mod generate;
pub mod normalize;
pub mod reference;
pub mod schema;

use anyhow::Result;
use tenseflow_core::TutorSession;

use crate::render;

/// Print what the session currently displays.
///
/// With `json`, stdout carries only the examples array and any notice goes
/// to stderr.
pub(crate) fn print_session(session: &TutorSession, json: bool) -> Result<()> {
    if json {
        if let Some(notice) = session.notice() {
            eprintln!("{}", render::notice_line(notice));
        }
        println!("{}", serde_json::to_string_pretty(session.examples())?);
        return Ok(());
    }

    if let Some(notice) = session.notice() {
        println!("{}", render::notice_line(notice));
        println!();
    }
    let tables = session.profile().tables();
    for (index, example) in session.examples().iter().enumerate() {
        if index > 0 {
            println!();
        }
        print!("{}", render::example_card(example, tables));
    }
    Ok(())
}
