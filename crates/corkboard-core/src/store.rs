// ABOUTME: The FixtureStore, a read-only in-memory source of cards and lists.
// ABOUTME: Seeded once at startup; lookups parse text ids at the boundary.

use crate::model::{Card, List};

/// Read-only store over the two fixture collections. Constructed once at
/// process start and shared behind an `Arc`; nothing mutates it afterwards,
/// so concurrent reads need no synchronization.
///
/// Within each collection, `id` uniqueness is a precondition of construction,
/// not a runtime-checked invariant. Lookups return the first match.
#[derive(Debug, Clone)]
pub struct FixtureStore {
    cards: Vec<Card>,
    lists: Vec<List>,
}

impl FixtureStore {
    /// Build a store from explicit collections. Mostly useful in tests;
    /// production code uses [`FixtureStore::seed`].
    pub fn new(cards: Vec<Card>, lists: Vec<List>) -> Self {
        Self { cards, lists }
    }

    /// Sample data standing in for a future persistent datastore.
    pub fn seed() -> Self {
        Self::new(
            vec![Card {
                id: 1,
                title: "Task One".to_string(),
                content: "This is card one".to_string(),
            }],
            vec![List {
                id: 1,
                header: "List One".to_string(),
                card_ids: vec![1],
            }],
        )
    }

    /// All cards, in insertion order.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// All lists, in insertion order.
    pub fn lists(&self) -> &[List] {
        &self.lists
    }

    /// Look up a card by a text id taken from a URL path segment. The text
    /// is parsed to an integer here, at the boundary, so `"1"` matches id 1
    /// and a non-numeric id matches nothing.
    pub fn card(&self, id: &str) -> Option<&Card> {
        let id = parse_id(id)?;
        self.cards.iter().find(|c| c.id == id)
    }

    /// Look up a list by a text id. Same coercion rules as [`FixtureStore::card`].
    pub fn list(&self, id: &str) -> Option<&List> {
        let id = parse_id(id)?;
        self.lists.iter().find(|l| l.id == id)
    }
}

fn parse_id(raw: &str) -> Option<u64> {
    raw.trim().parse().ok()
}
