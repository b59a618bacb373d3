use crate::Collection;

/// Scores a collection under the fixed category thresholds. Cheap enough to
/// recompute from scratch after every capture, which keeps the displayed
/// scores drift-free.
///
/// | category | threshold | contribution |
/// |---|---|---|
/// | kwang  | 3  | count |
/// | animal | 5  | count / 5 |
/// | ribbon | 5  | count / 5 |
/// | junk   | 10 | count / 10 |
pub fn score(collection: &Collection) -> u32 {
    let counts = collection.counts();
    let mut total = 0u32;
    if counts.kwang >= 3 {
        total += counts.kwang as u32;
    }
    if counts.animal >= 5 {
        total += (counts.animal / 5) as u32;
    }
    if counts.ribbon >= 5 {
        total += (counts.ribbon / 5) as u32;
    }
    if counts.junk >= 10 {
        total += (counts.junk / 10) as u32;
    }
    total
}

/// Post-match score. The go bonus lands on both players' totals, not only
/// on the side that kept calling go.
pub fn final_score(score: u32, go_count: u8) -> u32 {
    score + go_count as u32
}

/// Coin reward credited to the human after a match. `winner_score` is the
/// winning side's final score; a non-winner always receives 10.
pub fn reward(player_won: bool, winner_score: u32) -> u64 {
    if player_won {
        100 + winner_score as u64 * 10
    } else {
        10
    }
}
