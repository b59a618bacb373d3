use serde::{Deserialize, Serialize};
use std::fmt;

/// Capture category of a hwatu card.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Category {
    Kwang,
    Animal,
    Ribbon,
    Junk,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Kwang,
        Category::Animal,
        Category::Ribbon,
        Category::Junk,
    ];
}

/// Stable card identity: month plus the per-month ordinal (1-based).
/// Displays as `month-ordinal`, e.g. `3-1` for the March kwang.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct CardId {
    pub month: u8,
    pub ordinal: u8,
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.month, self.ordinal)
    }
}

/// Serialize-only: cards are never read back, they are regenerated from the
/// catalog at every game start.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
pub struct Card {
    pub id: CardId,
    pub month: u8,
    pub category: Category,
    pub name: &'static str,
    pub points: u8,
}

impl Card {
    pub fn matches_month(&self, other: Card) -> bool {
        self.month == other.month
    }
}

/// Months that carry a kwang card, in month order.
pub const KWANG_MONTHS: [u8; 5] = [1, 3, 8, 11, 12];

/// Per-month card layout. Most months carry one kwang-or-animal, one ribbon
/// and two junk; months 11 and 12 substitute a double-value junk.
fn month_layout(month: u8) -> &'static [(Category, &'static str, u8)] {
    match month {
        1 => &[
            (Category::Kwang, "Pine Kwang", 5),
            (Category::Ribbon, "Red Ribbon", 1),
            (Category::Junk, "Pine Junk", 1),
            (Category::Junk, "Pine Junk", 1),
        ],
        2 => &[
            (Category::Animal, "Plum Warbler", 1),
            (Category::Ribbon, "Red Ribbon", 1),
            (Category::Junk, "Plum Junk", 1),
            (Category::Junk, "Plum Junk", 1),
        ],
        3 => &[
            (Category::Kwang, "Cherry Kwang", 5),
            (Category::Ribbon, "Red Ribbon", 1),
            (Category::Junk, "Cherry Junk", 1),
            (Category::Junk, "Cherry Junk", 1),
        ],
        4 => &[
            (Category::Animal, "Wisteria Cuckoo", 1),
            (Category::Ribbon, "Plant Ribbon", 1),
            (Category::Junk, "Wisteria Junk", 1),
            (Category::Junk, "Wisteria Junk", 1),
        ],
        5 => &[
            (Category::Animal, "Iris Bridge", 1),
            (Category::Ribbon, "Plant Ribbon", 1),
            (Category::Junk, "Iris Junk", 1),
            (Category::Junk, "Iris Junk", 1),
        ],
        6 => &[
            (Category::Animal, "Peony Butterfly", 1),
            (Category::Ribbon, "Blue Ribbon", 1),
            (Category::Junk, "Peony Junk", 1),
            (Category::Junk, "Peony Junk", 1),
        ],
        7 => &[
            (Category::Animal, "Clover Boar", 1),
            (Category::Ribbon, "Plant Ribbon", 1),
            (Category::Junk, "Clover Junk", 1),
            (Category::Junk, "Clover Junk", 1),
        ],
        8 => &[
            (Category::Kwang, "Moon Kwang", 5),
            (Category::Animal, "Moon Geese", 1),
            (Category::Junk, "Moon Junk", 1),
            (Category::Junk, "Moon Junk", 1),
        ],
        9 => &[
            (Category::Animal, "Chrysanthemum Cup", 1),
            (Category::Ribbon, "Blue Ribbon", 1),
            (Category::Junk, "Chrysanthemum Junk", 1),
            (Category::Junk, "Chrysanthemum Junk", 1),
        ],
        10 => &[
            (Category::Animal, "Maple Deer", 1),
            (Category::Ribbon, "Blue Ribbon", 1),
            (Category::Junk, "Maple Junk", 1),
            (Category::Junk, "Maple Junk", 1),
        ],
        11 => &[
            (Category::Kwang, "Rain Kwang", 5),
            (Category::Junk, "Double Junk", 2),
            (Category::Junk, "Paulownia Junk", 1),
            (Category::Junk, "Paulownia Junk", 1),
        ],
        12 => &[
            (Category::Kwang, "Phoenix Kwang", 5),
            (Category::Animal, "Winter Magpie", 1),
            (Category::Junk, "Double Junk", 2),
            (Category::Junk, "Willow Junk", 1),
        ],
        _ => &[],
    }
}

/// Generates the fixed 48-card catalog in month order, four cards per month.
pub fn catalog() -> Vec<Card> {
    let mut cards = Vec::with_capacity(48);
    for month in 1..=12u8 {
        for (ordinal, (category, name, points)) in month_layout(month).iter().enumerate() {
            cards.push(Card {
                id: CardId {
                    month,
                    ordinal: ordinal as u8 + 1,
                },
                month,
                category: *category,
                name,
                points: *points,
            });
        }
    }
    cards
}

/// Flower name of a month, for display.
pub fn month_name(month: u8) -> &'static str {
    const NAMES: [&str; 12] = [
        "Pine",
        "Plum",
        "Cherry",
        "Wisteria",
        "Iris",
        "Peony",
        "Clover",
        "Moon",
        "Chrysanthemum",
        "Maple",
        "Paulownia",
        "Willow",
    ];
    (month as usize)
        .checked_sub(1)
        .and_then(|index| NAMES.get(index))
        .copied()
        .unwrap_or("Unknown")
}
