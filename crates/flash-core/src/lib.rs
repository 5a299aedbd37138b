//! # flash-core
//!
//! Card storage and quiz logic for the flashcards trainer.
//!
//! - [`Card`]: a term/definition pair with a mistake counter and its one-line encoding
//! - [`CardStore`]: cards indexed by term and by definition, with a quiz rotation order
//! - [`Verdict`]: the outcome of grading an answer
//! - [`HardestReport`]: the cards with the most mistakes
//! - [`CardError`]: every failure the store can report
//!
//! The store performs no I/O. Callers pass in lines read from a file and get
//! back lines to write.

pub mod card;
pub mod errors;
mod order;
pub mod quiz;
pub mod report;
pub mod store;

pub use card::Card;
pub use errors::CardError;
pub use quiz::Verdict;
pub use report::HardestReport;
pub use store::CardStore;
