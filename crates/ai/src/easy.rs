use matgo_core::{matching_cards, Decision, Strategy, TableView};

/// Beginner tier: play the first hand card that matches anything on the
/// board, paired with the first such match; otherwise dump the first card.
#[derive(Debug, Clone, Copy, Default)]
pub struct EasyStrategy;

impl Strategy for EasyStrategy {
    fn decide(&self, view: &TableView<'_>) -> Option<Decision> {
        for card in view.hand {
            let matches = matching_cards(*card, view.board);
            if let Some(first) = matches.first() {
                return Some(Decision {
                    card: card.id,
                    matching: Some(first.id),
                });
            }
        }
        view.hand.first().map(|card| Decision {
            card: card.id,
            matching: None,
        })
    }
}
