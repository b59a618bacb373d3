use crate::{catalog, Card, RngState};

/// Draw pile for one match. Go-Stop never reshuffles; an empty deck is a
/// normal termination trigger, not an error.
#[derive(Debug, Default, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    pub fn from_catalog() -> Self {
        Self { cards: catalog() }
    }

    pub fn shuffle(&mut self, rng: &mut RngState) {
        rng.shuffle(&mut self.cards);
    }

    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draw_drains_to_empty() {
        let mut deck = Deck::from_catalog();
        assert_eq!(deck.remaining(), 48);
        for _ in 0..48 {
            assert!(deck.draw().is_some());
        }
        assert!(deck.draw().is_none());
        assert_eq!(deck.remaining(), 0);
    }

    #[test]
    fn shuffle_keeps_every_card() {
        let mut deck = Deck::from_catalog();
        let mut rng = RngState::from_seed(3);
        deck.shuffle(&mut rng);
        assert_eq!(deck.remaining(), 48);
        let mut ids: Vec<String> = deck.cards().iter().map(|card| card.id.to_string()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 48);
    }

    #[test]
    fn shuffle_is_seed_deterministic() {
        let mut a = Deck::from_catalog();
        let mut b = Deck::from_catalog();
        a.shuffle(&mut RngState::from_seed(9));
        b.shuffle(&mut RngState::from_seed(9));
        assert_eq!(a.cards(), b.cards());
    }
}
