//! Serializable summaries handed to the presentation layer.

use serde::Serialize;

use crate::store::CardStore;

/// Cards sharing the highest mistake count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HardestReport {
    pub terms: Vec<String>,
    pub mistakes: u32,
}

impl HardestReport {
    /// Build the report, or `None` when no card has any mistakes.
    #[must_use]
    pub fn from_store(store: &CardStore) -> Option<Self> {
        let hardest = store.hardest_cards();
        let mistakes = hardest.first()?.error_count();
        Some(Self {
            terms: hardest.iter().map(|card| card.term().to_owned()).collect(),
            mistakes,
        })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::card::Card;

    #[test]
    fn none_without_mistakes() {
        let mut store = CardStore::new();
        assert_eq!(HardestReport::from_store(&store), None);
        store.add(Card::new("a", "1"));
        assert_eq!(HardestReport::from_store(&store), None);
    }

    #[test]
    fn lists_tied_terms() {
        let mut store = CardStore::new();
        store.add(Card::with_errors("A", "a", 2));
        store.add(Card::with_errors("B", "b", 1));
        store.add(Card::with_errors("C", "c", 2));

        let report = HardestReport::from_store(&store).unwrap();

        assert_eq!(
            report,
            HardestReport {
                terms: vec!["A".into(), "C".into()],
                mistakes: 2,
            }
        );
    }

    #[test]
    fn report_serializes_terms_and_mistakes() {
        let report = HardestReport {
            terms: vec!["A".into(), "C".into()],
            mistakes: 2,
        };
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json, serde_json::json!({"terms": ["A", "C"], "mistakes": 2}));
    }
}
