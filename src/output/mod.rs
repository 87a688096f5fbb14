pub mod plain;
pub mod json;

use crate::error::DemoError;
use crate::walkthrough::Transcript;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OutputFormat {
    Plain,
    Json,
}

/// Render a transcript, with the error that stopped the run if any.
///
/// Plain output ignores `error`; the caller reports it on stderr.
pub fn format_output(
    transcript: &Transcript,
    error: Option<&DemoError>,
    format: OutputFormat,
) -> Result<String, DemoError> {
    match format {
        OutputFormat::Plain => plain::format_output(transcript),
        OutputFormat::Json => json::format_output(transcript, error),
    }
}
