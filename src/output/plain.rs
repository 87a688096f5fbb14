use crate::error::DemoError;
use crate::walkthrough::Transcript;

/// One line per entry, text verbatim.
pub fn format_output(transcript: &Transcript) -> Result<String, DemoError> {
    let mut output = String::new();
    for entry in transcript.entries() {
        output.push_str(&entry.text);
        output.push('\n');
    }
    Ok(output)
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::walkthrough::EntryKind;

    #[test]
    fn format_output_one_line_per_entry() {
        let mut transcript = Transcript::new();
        transcript.push(EntryKind::Name, "Taro");
        transcript.push(EntryKind::Greeting, "Tarosan, Hello World");
        let result = format_output(&transcript).unwrap();
        assert_eq!(result, "Taro\nTarosan, Hello World\n");
    }

    #[test]
    fn format_output_empty_transcript() {
        let result = format_output(&Transcript::new()).unwrap();
        assert!(result.is_empty());
    }
}
