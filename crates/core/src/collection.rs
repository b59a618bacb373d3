use crate::{Card, CardId, Category};
use serde::Serialize;

/// Captured cards of one player, bucketed by category. Bucket order is
/// capture order and only matters for display.
#[derive(Debug, Default, Clone, Serialize)]
pub struct Collection {
    pub kwang: Vec<Card>,
    pub animal: Vec<Card>,
    pub ribbon: Vec<Card>,
    pub junk: Vec<Card>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CategoryCounts {
    pub kwang: usize,
    pub animal: usize,
    pub ribbon: usize,
    pub junk: usize,
}

impl Collection {
    pub fn add(&mut self, card: Card) {
        self.bucket_mut(card.category).push(card);
    }

    pub fn bucket(&self, category: Category) -> &[Card] {
        match category {
            Category::Kwang => &self.kwang,
            Category::Animal => &self.animal,
            Category::Ribbon => &self.ribbon,
            Category::Junk => &self.junk,
        }
    }

    fn bucket_mut(&mut self, category: Category) -> &mut Vec<Card> {
        match category {
            Category::Kwang => &mut self.kwang,
            Category::Animal => &mut self.animal,
            Category::Ribbon => &mut self.ribbon,
            Category::Junk => &mut self.junk,
        }
    }

    pub fn count(&self, category: Category) -> usize {
        self.bucket(category).len()
    }

    pub fn counts(&self) -> CategoryCounts {
        CategoryCounts {
            kwang: self.kwang.len(),
            animal: self.animal.len(),
            ribbon: self.ribbon.len(),
            junk: self.junk.len(),
        }
    }

    pub fn len(&self) -> usize {
        self.kwang.len() + self.animal.len() + self.ribbon.len() + self.junk.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.kwang
            .iter()
            .chain(&self.animal)
            .chain(&self.ribbon)
            .chain(&self.junk)
    }

    pub fn contains(&self, id: CardId) -> bool {
        self.iter().any(|card| card.id == id)
    }

    pub fn clear(&mut self) {
        self.kwang.clear();
        self.animal.clear();
        self.ribbon.clear();
        self.junk.clear();
    }
}
