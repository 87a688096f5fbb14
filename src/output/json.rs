use crate::error::DemoError;
use crate::walkthrough::{Entry, Transcript};
use serde::Serialize;

#[derive(Serialize)]
struct JsonOutput<'a> {
    entries: &'a [Entry],
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// Format a transcript as JSON
pub fn format_output(transcript: &Transcript, error: Option<&DemoError>) -> Result<String, DemoError> {
    let output = JsonOutput {
        entries: transcript.entries(),
        error: error.map(|e| e.to_string()),
    };

    Ok(serde_json::to_string_pretty(&output)?)
}
