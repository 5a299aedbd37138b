//! The card store.
//!
//! Cards live in a slot arena. Two hash indexes (term and definition) point
//! into the same slots, and the access order threads through them as a linked
//! list. Every mutation updates the arena, both indexes and the order together
//! so that `len() == by_term.len() == by_definition.len()` after each call.

use std::collections::HashMap;

use crate::card::Card;
use crate::errors::CardError;
use crate::order::AccessOrder;

/// An ordered collection of cards, unique by term and unique by definition.
#[derive(Debug, Default)]
pub struct CardStore {
    slots: Vec<Option<Card>>,
    free: Vec<usize>,
    by_term: HashMap<String, usize>,
    by_definition: HashMap<String, usize>,
    order: AccessOrder,
}

impl CardStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_term.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_term.is_empty()
    }

    /// Insert `card`, replacing whatever it conflicts with.
    ///
    /// A card with the same term is removed first. A different card that
    /// already owns this definition is removed as well, otherwise the
    /// definition index could not stay one-to-one. Returns the evicted cards
    /// in the order they were removed.
    pub fn add(&mut self, card: Card) -> Vec<Card> {
        let mut evicted = Vec::new();

        if let Some(slot) = self.by_term.get(card.term()).copied() {
            let old = self.take_slot(slot);
            tracing::debug!(term = old.term(), "replacing card with same term");
            evicted.push(old);
        }
        if let Some(slot) = self.by_definition.get(card.definition()).copied() {
            let old = self.take_slot(slot);
            tracing::debug!(
                term = old.term(),
                definition = old.definition(),
                "evicting card that owned the same definition"
            );
            evicted.push(old);
        }

        self.insert_slot(card);
        evicted
    }

    /// Insert `card` only if neither its term nor its definition is taken.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::DuplicateTerm`] or [`CardError::DuplicateDefinition`]
    /// and leaves the store unchanged.
    pub fn try_add(&mut self, card: Card) -> Result<(), CardError> {
        if self.contains_term(card.term()) {
            return Err(CardError::DuplicateTerm(card.term().to_owned()));
        }
        if self.contains_definition(card.definition()) {
            return Err(CardError::DuplicateDefinition(card.definition().to_owned()));
        }
        self.insert_slot(card);
        Ok(())
    }

    /// Remove the card with `term`.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::NotFound`] if no card has this term.
    pub fn remove(&mut self, term: &str) -> Result<Card, CardError> {
        let slot = self
            .by_term
            .get(term)
            .copied()
            .ok_or_else(|| CardError::NotFound(term.to_owned()))?;
        Ok(self.take_slot(slot))
    }

    #[must_use]
    pub fn contains_term(&self, term: &str) -> bool {
        self.by_term.contains_key(term)
    }

    #[must_use]
    pub fn contains_definition(&self, definition: &str) -> bool {
        self.by_definition.contains_key(definition)
    }

    #[must_use]
    pub fn by_term(&self, term: &str) -> Option<&Card> {
        self.by_term.get(term).and_then(|&slot| self.card(slot))
    }

    #[must_use]
    pub fn by_definition(&self, definition: &str) -> Option<&Card> {
        self.by_definition
            .get(definition)
            .and_then(|&slot| self.card(slot))
    }

    /// Cards from least to most recently asked.
    pub fn iter(&self) -> impl Iterator<Item = &Card> + '_ {
        self.order.iter().filter_map(|slot| self.card(slot))
    }

    /// The term that should be asked next.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::Empty`] if the store has no cards.
    pub fn next_quiz_term(&self) -> Result<&str, CardError> {
        self.order
            .front()
            .and_then(|slot| self.card(slot))
            .map(Card::term)
            .ok_or(CardError::Empty)
    }

    /// Move `term` to the back of the quiz order. Unknown terms are ignored.
    pub fn record_quiz_access(&mut self, term: &str) {
        if let Some(&slot) = self.by_term.get(term) {
            self.order.move_to_back(slot);
        }
    }

    /// Add one mistake to the card with `term` and return its new count.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::NotFound`] if no card has this term.
    pub fn record_mistake(&mut self, term: &str) -> Result<u32, CardError> {
        let card = self
            .by_term
            .get(term)
            .copied()
            .and_then(|slot| self.slots.get_mut(slot))
            .and_then(Option::as_mut)
            .ok_or_else(|| CardError::NotFound(term.to_owned()))?;
        card.increment_errors();
        Ok(card.error_count())
    }

    /// Highest error count in the store, 0 when empty.
    #[must_use]
    pub fn max_error_count(&self) -> u32 {
        self.iter().map(Card::error_count).max().unwrap_or(0)
    }

    /// Cards tied at the highest error count, in quiz order.
    ///
    /// Empty when no card has any mistakes.
    #[must_use]
    pub fn hardest_cards(&self) -> Vec<&Card> {
        let max = self.max_error_count();
        if max == 0 {
            return Vec::new();
        }
        self.iter().filter(|card| card.error_count() == max).collect()
    }

    pub fn reset_all_errors(&mut self) {
        for card in self.slots.iter_mut().flatten() {
            card.reset_errors();
        }
    }

    /// Decode every line and add the resulting cards in order.
    ///
    /// Blank lines are skipped. All lines are decoded before the store is
    /// touched, so a malformed line leaves the store exactly as it was.
    /// Returns the number of cards loaded.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::MalformedRecord`] naming the first bad line (1-based).
    pub fn import_from<I, S>(&mut self, lines: I) -> Result<usize, CardError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let cards = lines
            .into_iter()
            .enumerate()
            .filter_map(|(index, line)| {
                let line: &str = line.as_ref();
                (!line.trim().is_empty()).then(|| Card::decode_at(line, index + 1))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let count = cards.len();
        for card in cards {
            self.add(card);
        }
        tracing::info!(count, total = self.len(), "imported cards");
        Ok(count)
    }

    /// Encode every card in quiz order.
    #[must_use]
    pub fn export_to(&self) -> Vec<String> {
        self.iter().map(Card::encode).collect()
    }

    fn card(&self, slot: usize) -> Option<&Card> {
        self.slots.get(slot).and_then(Option::as_ref)
    }

    /// Place `card` in a free slot, index it and append it to the order.
    /// Callers must have cleared any term or definition conflict.
    fn insert_slot(&mut self, card: Card) {
        let slot = self.free.pop().unwrap_or(self.slots.len());
        self.by_term.insert(card.term().to_owned(), slot);
        self.by_definition
            .insert(card.definition().to_owned(), slot);
        if slot == self.slots.len() {
            self.slots.push(Some(card));
        } else {
            self.slots[slot] = Some(card);
        }
        self.order.push_back(slot);
    }

    /// Remove the card in `slot` from the arena, both indexes and the order.
    /// Callers pass a slot taken from one of the indexes, so it is occupied.
    fn take_slot(&mut self, slot: usize) -> Card {
        let card = self.slots[slot]
            .take()
            .unwrap_or_else(|| unreachable!("indexed slot {slot} is empty"));
        self.by_term.remove(card.term());
        self.by_definition.remove(card.definition());
        self.order.unlink(slot);
        self.free.push(slot);
        card
    }

    #[cfg(test)]
    pub(crate) fn assert_consistent(&self) {
        let live = self.slots.iter().flatten().count();
        assert_eq!(self.by_term.len(), live, "term index size");
        assert_eq!(self.by_definition.len(), live, "definition index size");
        assert_eq!(self.order.len(), live, "order length");
        assert_eq!(self.iter().count(), live, "order reaches every card");
        for card in self.iter() {
            assert!(
                self.by_term(card.term()).is_some_and(|c| c.same_pair(card)),
                "term {:?} resolves to another card",
                card.term()
            );
            assert!(
                self.by_definition(card.definition())
                    .is_some_and(|c| c.same_pair(card)),
                "definition {:?} resolves to another card",
                card.definition()
            );
        }
    }
}
