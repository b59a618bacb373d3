use crate::{Card, GameResult, Phase, Seat};
use serde::Serialize;

/// Point-in-time notifications for the presentation layer. Consumers drain
/// the bus after each command and read the session for full snapshots.
/// Serialize-only, like the cards they carry.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub enum Event {
    GameStarted { first: Seat },
    CardsDealt { hand: usize, board: usize },
    CardPlayed {
        seat: Seat,
        played: Card,
        captured: Option<Card>,
    },
    ScoreGained { seat: Seat, points: u32 },
    GoStopPrompt { seat: Seat, current_points: u32 },
    GoCalled { seat: Seat, go_count: u8 },
    GameOver { result: GameResult },
    StateChanged { phase: Phase },
}

#[derive(Debug, Default)]
pub struct EventBus {
    queue: Vec<Event>,
}

impl EventBus {
    pub fn push(&mut self, event: Event) {
        self.queue.push(event);
    }

    pub fn drain(&mut self) -> impl Iterator<Item = Event> + '_ {
        self.queue.drain(..)
    }
}
