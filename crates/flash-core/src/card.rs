//! A single flashcard and its one-line text encoding.
//!
//! Cards are persisted as JSON Lines: one object per line with exactly the
//! fields `term`, `definition` and `mistakes`. String escaping keeps the
//! encoding unambiguous for any term or definition, including ones that
//! contain commas, braces, quotes or line breaks.

use std::hash::{Hash, Hasher};

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::errors::CardError;

/// A term/definition pair with a wrong-answer counter.
///
/// Term and definition are fixed at construction. Only the error counter
/// changes over the card's lifetime.
///
/// Equality and hashing consider the `(term, definition)` pair only, so a
/// card decoded from disk with a different counter still matches the card
/// being quizzed.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Card {
    term: String,
    definition: String,
    #[serde(rename = "mistakes")]
    error_count: u32,
}

impl Card {
    /// Create a card with no recorded mistakes.
    ///
    /// Empty strings are accepted for both term and definition.
    #[must_use]
    pub fn new(term: impl Into<String>, definition: impl Into<String>) -> Self {
        Self::with_errors(term, definition, 0)
    }

    /// Create a card with a starting error count.
    #[must_use]
    pub fn with_errors(
        term: impl Into<String>,
        definition: impl Into<String>,
        error_count: u32,
    ) -> Self {
        Self {
            term: term.into(),
            definition: definition.into(),
            error_count,
        }
    }

    #[must_use]
    pub fn term(&self) -> &str {
        &self.term
    }

    #[must_use]
    pub fn definition(&self) -> &str {
        &self.definition
    }

    #[must_use]
    pub const fn error_count(&self) -> u32 {
        self.error_count
    }

    /// Record one wrong answer.
    pub const fn increment_errors(&mut self) {
        self.error_count = self.error_count.saturating_add(1);
    }

    pub const fn reset_errors(&mut self) {
        self.error_count = 0;
    }

    /// Encode this card as a single line with no trailing newline.
    #[must_use]
    pub fn encode(&self) -> String {
        serde_json::json!({
            "term": self.term,
            "definition": self.definition,
            "mistakes": self.error_count,
        })
        .to_string()
    }

    /// Decode a line produced by [`Card::encode`].
    ///
    /// # Errors
    ///
    /// Returns [`CardError::MalformedRecord`] if the line is not a JSON object
    /// with exactly the three expected fields.
    pub fn decode(line: &str) -> Result<Self, CardError> {
        Self::decode_at(line, 1)
    }

    /// Decode a line, reporting `line_number` in any error.
    ///
    /// The line must parse as a JSON object first. A derived `Deserialize`
    /// would also accept a three-element array.
    pub(crate) fn decode_at(line: &str, line_number: usize) -> Result<Self, CardError> {
        let malformed = |reason: String| CardError::MalformedRecord {
            line: line_number,
            reason,
        };
        let fields: Map<String, Value> = serde_json::from_str(line.trim_end_matches('\r'))
            .map_err(|e| malformed(e.to_string()))?;
        serde_json::from_value(Value::Object(fields)).map_err(|e| malformed(e.to_string()))
    }

    /// Whether `other` carries the same term and definition.
    #[must_use]
    pub fn same_pair(&self, other: &Self) -> bool {
        self.term == other.term && self.definition == other.definition
    }
}

impl PartialEq for Card {
    fn eq(&self, other: &Self) -> bool {
        self.same_pair(other)
    }
}

impl Eq for Card {}

impl Hash for Card {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.term.hash(state);
        self.definition.hash(state);
    }
}
