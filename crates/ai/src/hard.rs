use crate::normal::decide_normal;
use matgo_core::{matching_cards, Category, Decision, Strategy, TableView, KWANG_MONTHS};

/// Expert tier. Layered decision, first success wins:
///
/// 1. two own kwang collected: grab any kwang pairing to close the set;
/// 2. opponent holds two kwang: deny the months they still need;
/// 3. weighted pairing with near-threshold boosts;
/// 4. the normal tier in full, including its discard fallback.
#[derive(Debug, Clone, Copy, Default)]
pub struct HardStrategy;

impl Strategy for HardStrategy {
    fn decide(&self, view: &TableView<'_>) -> Option<Decision> {
        let own = view.ai_collection.counts();
        let opponent = view.player_collection.counts();

        if own.kwang >= 2 {
            if let Some(decision) = prioritize_category(view, Category::Kwang) {
                return Some(decision);
            }
        }
        if opponent.kwang >= 2 {
            if let Some(decision) = block_kwang_race(view) {
                return Some(decision);
            }
        }
        if let Some(decision) = weighted_choice(view) {
            return Some(decision);
        }
        decide_normal(view)
    }
}

/// First pairing (hand order, then board order) whose matched board card is
/// of the target category.
fn prioritize_category(view: &TableView<'_>, target: Category) -> Option<Decision> {
    for card in view.hand {
        for matching in matching_cards(*card, view.board) {
            if matching.category == target {
                return Some(Decision {
                    card: card.id,
                    matching: Some(matching.id),
                });
            }
        }
    }
    None
}

/// Denial move: the kwang months the opponent has not collected yet, in
/// month order; play the first held card of such a month that can capture.
fn block_kwang_race(view: &TableView<'_>) -> Option<Decision> {
    let collected: Vec<u8> = view
        .player_collection
        .kwang
        .iter()
        .map(|card| card.month)
        .collect();
    for month in KWANG_MONTHS {
        if collected.contains(&month) {
            continue;
        }
        for card in view.hand.iter().filter(|card| card.month == month) {
            let matches = matching_cards(*card, view.board);
            if let Some(first) = matches.first() {
                return Some(Decision {
                    card: card.id,
                    matching: Some(first.id),
                });
            }
        }
    }
    None
}

/// Base weights kwang 10 / animal 5 / ribbon 3 / junk 1, boosted when the
/// own collection is one capture from a scoring threshold.
fn weighted_choice(view: &TableView<'_>) -> Option<Decision> {
    let counts = view.ai_collection.counts();
    let weight = |category: Category| -> i32 {
        match category {
            Category::Kwang => {
                if counts.kwang == 2 {
                    20
                } else {
                    10
                }
            }
            Category::Animal => {
                if counts.animal >= 4 {
                    8
                } else {
                    5
                }
            }
            Category::Ribbon => {
                if counts.ribbon >= 4 {
                    6
                } else {
                    3
                }
            }
            Category::Junk => {
                if counts.junk >= 9 {
                    3
                } else {
                    1
                }
            }
        }
    };

    let mut best: Option<Decision> = None;
    let mut best_weight = -1;
    for card in view.hand {
        for matching in matching_cards(*card, view.board) {
            let value = weight(matching.category);
            if value > best_weight {
                best_weight = value;
                best = Some(Decision {
                    card: card.id,
                    matching: Some(matching.id),
                });
            }
        }
    }
    best
}
