use crate::{Card, Collection};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Dealing,
    PlayerTurn,
    AiTurn,
    GoStop,
    GameOver,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Seat {
    Player,
    Ai,
}

impl Seat {
    pub fn opponent(self) -> Seat {
        match self {
            Seat::Player => Seat::Ai,
            Seat::Ai => Seat::Player,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum GoStopChoice {
    Go,
    Stop,
}

/// How the match ended. A timeout stop is the countdown expiring, not a
/// player action, and stays distinguishable from an explicit stop.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum EndReason {
    Stopped,
    TimeoutStopped,
    GoLimit,
    Exhausted,
}

/// A selected hand card together with its same-month board matches
/// (board indices), waiting for the target selection.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Selection {
    pub hand_index: usize,
    pub matches: Vec<usize>,
}

/// Live go/stop prompt. `resolved` is the single resolved-once guard: the
/// explicit choice and the countdown race, the first wins, the loser is a
/// rejected no-op.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct GoStopState {
    pub decider: Seat,
    pub current_points: u32,
    pub ticks_left: u8,
    pub resolved: bool,
}

pub const GO_STOP_TICKS: u8 = 3;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameResult {
    pub player_won: bool,
    pub player_score: u32,
    pub ai_score: u32,
    pub reward: u64,
    pub reason: EndReason,
}

/// The single mutable aggregate for one match. Mutated exclusively by the
/// session in response to commands and discarded at the next game start.
#[derive(Debug, Clone, Serialize)]
pub struct GameState {
    pub phase: Phase,
    pub round: u32,
    pub player_hand: Vec<Card>,
    pub ai_hand: Vec<Card>,
    pub board: Vec<Card>,
    pub player_collection: Collection,
    pub ai_collection: Collection,
    pub player_score: u32,
    pub ai_score: u32,
    pub go_count: u8,
    pub go_points: Vec<u32>,
    pub turn: Seat,
    pub first: Seat,
    pub selection: Option<Selection>,
    pub go_stop: Option<GoStopState>,
    pub result: Option<GameResult>,
}

impl GameState {
    pub fn new() -> Self {
        Self {
            phase: Phase::Idle,
            round: 0,
            player_hand: Vec::new(),
            ai_hand: Vec::new(),
            board: Vec::new(),
            player_collection: Collection::default(),
            ai_collection: Collection::default(),
            player_score: 0,
            ai_score: 0,
            go_count: 0,
            go_points: Vec::new(),
            turn: Seat::Player,
            first: Seat::Player,
            selection: None,
            go_stop: None,
            result: None,
        }
    }

    pub fn hand(&self, seat: Seat) -> &[Card] {
        match seat {
            Seat::Player => &self.player_hand,
            Seat::Ai => &self.ai_hand,
        }
    }

    pub fn hand_mut(&mut self, seat: Seat) -> &mut Vec<Card> {
        match seat {
            Seat::Player => &mut self.player_hand,
            Seat::Ai => &mut self.ai_hand,
        }
    }

    pub fn collection(&self, seat: Seat) -> &Collection {
        match seat {
            Seat::Player => &self.player_collection,
            Seat::Ai => &self.ai_collection,
        }
    }

    pub fn collection_mut(&mut self, seat: Seat) -> &mut Collection {
        match seat {
            Seat::Player => &mut self.player_collection,
            Seat::Ai => &mut self.ai_collection,
        }
    }

    pub fn score(&self, seat: Seat) -> u32 {
        match seat {
            Seat::Player => self.player_score,
            Seat::Ai => self.ai_score,
        }
    }

    pub fn turn_phase(seat: Seat) -> Phase {
        match seat {
            Seat::Player => Phase::PlayerTurn,
            Seat::Ai => Phase::AiTurn,
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
