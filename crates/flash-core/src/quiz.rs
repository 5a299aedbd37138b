//! Answer grading.

use serde::Serialize;

use crate::errors::CardError;
use crate::store::CardStore;

/// Outcome of grading one answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Verdict {
    /// The answer is the asked card's definition.
    Correct,
    /// The answer is the definition of a different card.
    DefinitionOfOther { expected: String, other_term: String },
    /// No card has this definition.
    Wrong { expected: String },
}

impl Verdict {
    #[must_use]
    pub const fn is_correct(&self) -> bool {
        matches!(self, Self::Correct)
    }
}

impl CardStore {
    /// Grade `answer` for the card with `term`.
    ///
    /// The answer is resolved through the definition index. It is correct only
    /// when it resolves to the asked card itself. Both wrong outcomes add one
    /// mistake to the asked card.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::NotFound`] if no card has `term`.
    pub fn grade(&mut self, term: &str, answer: &str) -> Result<Verdict, CardError> {
        let asked = self
            .by_term(term)
            .ok_or_else(|| CardError::NotFound(term.to_owned()))?;
        let expected = asked.definition().to_owned();

        let verdict = match self.by_definition(answer) {
            Some(other) if other.same_pair(asked) => return Ok(Verdict::Correct),
            Some(other) => Verdict::DefinitionOfOther {
                expected,
                other_term: other.term().to_owned(),
            },
            None => Verdict::Wrong { expected },
        };

        let mistakes = self.record_mistake(term)?;
        tracing::debug!(term, mistakes, "wrong answer");
        Ok(verdict)
    }
}
