// ABOUTME: Defines the Card and List structs served by the corkboard API.
// ABOUTME: Lists reference cards by id; referential integrity is not enforced.

use serde::{Deserialize, Serialize};

/// A single card: a short titled note with a free-text body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub id: u64,
    pub title: String,
    pub content: String,
}

/// A named grouping of cards. `card_ids` is an ordered sequence of
/// `Card::id` values; an id with no matching card is not an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct List {
    pub id: u64,
    pub header: String,
    #[serde(rename = "cardIds")]
    pub card_ids: Vec<u64>,
}
