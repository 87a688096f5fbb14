use crate::error::DemoError;
use crate::greeter::{DualGreeter, Greeter};
use crate::sequence::BoundedSequence;
use serde::Serialize;

/// Inputs for a walkthrough run. `Default` gives the classic Taro/Jiro run.
#[derive(Debug, Clone, PartialEq)]
pub struct WalkthroughOptions {
    pub name: String,
    pub second_name: String,
    pub items: Vec<i64>,
    /// Indices looked up in order; the walkthrough stops at the first miss.
    pub index_probes: Vec<usize>,
}

impl Default for WalkthroughOptions {
    fn default() -> Self {
        Self {
            name: "Taro".to_string(),
            second_name: "Jiro".to_string(),
            items: vec![1, 2, 3],
            index_probes: vec![0, 3],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Name,
    Greeting,
    Length,
    Element,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    pub kind: EntryKind,
    pub text: String,
}

/// Everything a run produced, in order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transcript {
    entries: Vec<Entry>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, kind: EntryKind, text: impl Into<String>) {
        self.entries.push(Entry {
            kind,
            text: text.into(),
        });
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Entry texts only, as they appear in plain output.
    pub fn lines(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.text.as_str()).collect()
    }
}

/// Run the greeter and sequence demonstrations, recording into `transcript`.
///
/// Entries recorded before a failing lookup stay in the transcript.
pub fn run(options: &WalkthroughOptions, transcript: &mut Transcript) -> Result<(), DemoError> {
    let greeter = Greeter::new(options.name.as_str());
    transcript.push(EntryKind::Name, greeter.name());
    let mut emitted = Vec::new();
    greeter.greet(&mut emitted)?;

    let dual = DualGreeter::new(options.name.as_str(), options.second_name.as_str());
    dual.greet_both(&mut emitted)?;
    for line in String::from_utf8_lossy(&emitted).lines() {
        transcript.push(EntryKind::Greeting, line);
    }

    let seq = BoundedSequence::new(options.items.clone());
    transcript.push(EntryKind::Length, seq.len().to_string());

    for &index in &options.index_probes {
        let value = seq.get(index)?;
        transcript.push(EntryKind::Element, value.to_string());
    }

    tracing::debug!(entries = transcript.entries().len(), "walkthrough finished");
    Ok(())
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_run_stops_at_index_three() {
        let mut transcript = Transcript::new();
        let err = run(&WalkthroughOptions::default(), &mut transcript).unwrap_err();
        assert!(matches!(err, DemoError::IndexOutOfRange { index: 3, count: 3 }));
        assert_eq!(
            transcript.lines(),
            vec![
                "Taro",
                "Tarosan, Hello World",
                "Tarosan, Hello World",
                "Jirosan, Hello World",
                "3",
                "1",
            ]
        );
    }

    #[test]
    fn greeting_entries_match_greet_output() {
        let options = WalkthroughOptions {
            name: "Hanako".to_string(),
            second_name: "Ichiro".to_string(),
            index_probes: vec![],
            ..WalkthroughOptions::default()
        };
        let mut transcript = Transcript::new();
        run(&options, &mut transcript).unwrap();

        let mut expected = Vec::new();
        Greeter::new("Hanako").greet(&mut expected).unwrap();
        let dual = DualGreeter::new("Hanako", "Ichiro");
        dual.greet_both(&mut expected).unwrap();
        let expected = String::from_utf8(expected).unwrap();

        let greetings: Vec<&str> = transcript
            .entries()
            .iter()
            .filter(|e| e.kind == EntryKind::Greeting)
            .map(|e| e.text.as_str())
            .collect();
        assert_eq!(greetings, expected.lines().collect::<Vec<_>>());
        assert_eq!(greetings[1..].to_vec(), dual.greetings().to_vec());
    }

    #[test]
    fn in_range_probes_complete() {
        let options = WalkthroughOptions {
            index_probes: vec![0, 1, 2],
            ..WalkthroughOptions::default()
        };
        let mut transcript = Transcript::new();
        run(&options, &mut transcript).unwrap();
        let elements: Vec<&str> = transcript
            .entries()
            .iter()
            .filter(|e| e.kind == EntryKind::Element)
            .map(|e| e.text.as_str())
            .collect();
        assert_eq!(elements, vec!["1", "2", "3"]);
    }

    #[test]
    fn no_probes_records_length_last() {
        let options = WalkthroughOptions {
            items: vec![],
            index_probes: vec![],
            ..WalkthroughOptions::default()
        };
        let mut transcript = Transcript::new();
        run(&options, &mut transcript).unwrap();
        let last = transcript.entries().last().unwrap();
        assert_eq!(last.kind, EntryKind::Length);
        assert_eq!(last.text, "0");
    }
}
