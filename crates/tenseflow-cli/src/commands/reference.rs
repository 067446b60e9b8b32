//! Reference command implementation.
//!
//! Lists POS tag and tense explanations from the active reference tables.

use anyhow::Result;
use tenseflow_core::ReferenceTables;

use crate::render;

/// Show one tag, or every tag when `code` is `None`.
pub fn tags(tables: &ReferenceTables, code: Option<&str>) -> Result<()> {
    match code {
        Some(code) => {
            let Some(info) = tables.tag(code) else {
                anyhow::bail!(
                    "Unknown tag: {}. The {} table has: {}",
                    code,
                    tables.version,
                    tables.tags().iter().map(|t| t.code).collect::<Vec<_>>().join(", ")
                );
            };
            println!("{}", render::tag_entry(info));
        }
        None => {
            println!("🏷️  POS tags ({} table)", tables.version);
            println!("{:-<40}", "");
            for info in tables.tags() {
                println!("{}", render::tag_entry(info));
            }
        }
    }
    Ok(())
}

/// Show one tense, or every tense when `name` is `None`.
pub fn tenses(tables: &ReferenceTables, name: Option<&str>) -> Result<()> {
    match name {
        Some(name) => {
            let Some(info) = tables
                .tenses()
                .iter()
                .find(|info| info.name.eq_ignore_ascii_case(name))
            else {
                anyhow::bail!("Unknown tense: {name}");
            };
            print!("{}", render::tense_entry(info));
        }
        None => {
            for (index, info) in tables.tenses().iter().enumerate() {
                if index > 0 {
                    println!();
                }
                print!("{}", render::tense_entry(info));
            }
        }
    }
    Ok(())
}
