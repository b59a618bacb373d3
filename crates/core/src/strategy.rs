use crate::{Card, CardId, Collection};
use serde::{Deserialize, Serialize};

/// Read-only snapshot handed to a decision policy. The policy never mutates
/// game state; it only proposes a pairing.
#[derive(Debug, Clone, Copy)]
pub struct TableView<'a> {
    pub hand: &'a [Card],
    pub board: &'a [Card],
    pub player_collection: &'a Collection,
    pub ai_collection: &'a Collection,
}

/// A proposed play: a hand card and, when capturing, the board card to take
/// with it. `matching: None` means the hand card is discarded to the board.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Decision {
    pub card: CardId,
    pub matching: Option<CardId>,
}

/// Pluggable decision policy. Implementations must be pure: identical
/// snapshots produce the identical recommendation.
pub trait Strategy {
    fn decide(&self, view: &TableView<'_>) -> Option<Decision>;
}

/// Same-month board matches for a hand card, in board order.
pub fn matching_cards(card: Card, board: &[Card]) -> Vec<Card> {
    board
        .iter()
        .copied()
        .filter(|board_card| board_card.matches_month(card))
        .collect()
}
