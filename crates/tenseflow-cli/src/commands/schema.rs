//! Schema command implementation.
//!
//! Prints the JSON Schema of the analyzer wire contract.

use anyhow::Result;
use schemars::schema_for;
use tenseflow_core::{AnalyzeRequest, AnalyzerResponse};

/// Print the response schema, or the request schema with `request`.
pub fn execute(request: bool) -> Result<()> {
    let schema = if request {
        schema_for!(AnalyzeRequest)
    } else {
        schema_for!(AnalyzerResponse)
    };
    println!("{}", serde_json::to_string_pretty(&schema)?);
    Ok(())
}
