mod error;
mod greeter;
mod sequence;
pub mod logger;
pub mod output;
pub mod walkthrough;

pub use error::DemoError;
pub use greeter::{DualGreeter, Greeter};
pub use output::OutputFormat;
pub use sequence::BoundedSequence;
pub use walkthrough::{Transcript, WalkthroughOptions};

/// Run the walkthrough and render it.
///
/// Returns the rendered transcript together with the error that stopped the
/// run, if any. The rendered text always covers every entry recorded before
/// the failure.
pub fn run_walkthrough(
    options: &WalkthroughOptions,
    format: OutputFormat,
) -> Result<(String, Option<DemoError>), DemoError> {
    let mut transcript = Transcript::new();
    let failure = walkthrough::run(options, &mut transcript).err();
    let rendered = output::format_output(&transcript, failure.as_ref(), format)?;
    Ok((rendered, failure))
}
