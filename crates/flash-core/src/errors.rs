//! Error types for card store operations.
//!
//! The store never prints. Every failure is returned as a `CardError` and the
//! caller decides how to present it. File I/O failures belong to whoever reads
//! or writes the file, so there is no I/O variant here.

use thiserror::Error;

/// Errors raised by [`CardStore`](crate::CardStore) and [`Card`](crate::Card).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CardError {
    /// A card with this term is already in the store.
    #[error("The card \"{0}\" already exists.")]
    DuplicateTerm(String),

    /// A card with this definition is already in the store.
    #[error("The definition \"{0}\" already exists.")]
    DuplicateDefinition(String),

    /// No card has this term.
    #[error("Can't remove \"{0}\": there is no such card.")]
    NotFound(String),

    /// A quiz was requested on a store with zero cards.
    #[error("There are no cards to ask.")]
    Empty,

    /// A persisted line could not be decoded into a card.
    ///
    /// `line` is 1-based when the record came from a multi-line import and
    /// 1 for a standalone [`Card::decode`](crate::Card::decode).
    #[error("Malformed card record on line {line}: {reason}")]
    MalformedRecord { line: usize, reason: String },
}
