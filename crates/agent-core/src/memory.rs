//! Run Memory
//!
//! Append-only transcript of a single agent run. Entries are recorded in
//! the order they happen and replayed verbatim into every subsequent
//! prompt, so the model always sees its own past reasoning.

/// Prefix for model reasoning entries.
pub const THOUGHT_PREFIX: &str = "THOUGHT: ";

/// Prefix for tool result entries.
pub const OBSERVATION_PREFIX: &str = "OBSERVATION: ";

/// Ordered, append-only memory for one run.
///
/// The decision loop owns the memory for the lifetime of a run; nothing
/// is persisted afterwards. Entries are never edited or removed.
#[derive(Clone, Debug, Default)]
pub struct Memory {
    entries: Vec<String>,
}

impl Memory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the model's reasoning ahead of a tool invocation.
    pub fn record_thought(&mut self, text: &str) {
        self.entries.push(format!("{THOUGHT_PREFIX}{text}"));
    }

    /// Record the stringified result of a tool invocation.
    pub fn record_observation(&mut self, text: &str) {
        self.entries.push(format!("{OBSERVATION_PREFIX}{text}"));
    }

    /// Record a terminal answer verbatim.
    pub fn record_answer(&mut self, text: &str) {
        self.entries.push(text.to_string());
    }

    /// All entries in recording order.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Render the transcript as it appears in the prompt.
    pub fn transcript(&self) -> String {
        self.entries.join("\n")
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
