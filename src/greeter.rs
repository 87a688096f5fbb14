use crate::error::DemoError;
use std::io::Write;

/// Holds a single name and greets with it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Greeter {
    name: String,
}

impl Greeter {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        tracing::debug!(name = %name, "constructed greeter");
        Self { name }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The greeting text, e.g. `Tarosan, Hello World`.
    pub fn greeting(&self) -> String {
        format_greeting(&self.name)
    }

    /// Emit the greeting as one line on `out`.
    pub fn greet<W: Write>(&self, out: &mut W) -> Result<(), DemoError> {
        emit(out, &self.greeting())
    }
}

/// A [`Greeter`] extended with a second name.
///
/// The base greeter is built through [`Greeter::new`], so everything the base
/// does on construction also happens here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DualGreeter {
    base: Greeter,
    name2: String,
}

impl DualGreeter {
    pub fn new(name1: impl Into<String>, name2: impl Into<String>) -> Self {
        let base = Greeter::new(name1);
        let name2 = name2.into();
        tracing::debug!(name = %base.name(), name2 = %name2, "constructed dual greeter");
        Self { base, name2 }
    }

    pub fn greeter(&self) -> &Greeter {
        &self.base
    }

    pub fn name(&self) -> &str {
        self.base.name()
    }

    pub fn name2(&self) -> &str {
        &self.name2
    }

    /// Both greetings in emission order.
    pub fn greetings(&self) -> [String; 2] {
        [self.base.greeting(), self.second_greeting()]
    }

    fn second_greeting(&self) -> String {
        format_greeting(&self.name2)
    }

    /// Emit the base greeting, then the greeting for the second name.
    pub fn greet_both<W: Write>(&self, out: &mut W) -> Result<(), DemoError> {
        self.base.greet(out)?;
        emit(out, &self.second_greeting())
    }
}

fn format_greeting(name: &str) -> String {
    format!("{}san, Hello World", name)
}

fn emit<W: Write>(out: &mut W, line: &str) -> Result<(), DemoError> {
    writeln!(out, "{}", line).map_err(|e| DemoError::Write { source: e })
}
