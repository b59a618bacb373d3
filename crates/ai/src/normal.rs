use matgo_core::{matching_cards, Category, Decision, Strategy, TableView};

/// Category ranking used by the normal tier: kwang > animal > ribbon > junk.
pub(crate) fn category_rank(category: Category) -> i32 {
    match category {
        Category::Kwang => 4,
        Category::Animal => 3,
        Category::Ribbon => 2,
        Category::Junk => 1,
    }
}

/// Across every hand card and each of its board matches, take the pairing
/// whose matched board card ranks highest; strict-greater comparison keeps
/// the first-encountered pairing on ties. With no pairing available,
/// discard the hand card whose own category ranks lowest (first on ties).
pub(crate) fn decide_normal(view: &TableView<'_>) -> Option<Decision> {
    let mut best: Option<Decision> = None;
    let mut best_rank = -1;
    for card in view.hand {
        for matching in matching_cards(*card, view.board) {
            let rank = category_rank(matching.category);
            if rank > best_rank {
                best_rank = rank;
                best = Some(Decision {
                    card: card.id,
                    matching: Some(matching.id),
                });
            }
        }
    }
    if best.is_some() {
        return best;
    }

    let mut lowest = *view.hand.first()?;
    let mut lowest_rank = category_rank(lowest.category);
    for card in &view.hand[1..] {
        let rank = category_rank(card.category);
        if rank < lowest_rank {
            lowest_rank = rank;
            lowest = *card;
        }
    }
    Some(Decision {
        card: lowest.id,
        matching: None,
    })
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NormalStrategy;

impl Strategy for NormalStrategy {
    fn decide(&self, view: &TableView<'_>) -> Option<Decision> {
        decide_normal(view)
    }
}
