use crate::{
    Deck, EventBus, GameState, PendingAction, Phase, ProfileStore, RngState, Scheduler, Strategy,
    Ticket,
};
use thiserror::Error;

mod finish;
mod gostop;
mod setup;
mod turn;

#[derive(Debug, Error)]
pub enum GameError {
    #[error("invalid phase: {0:?}")]
    InvalidPhase(Phase),
    #[error("invalid hand index {0}")]
    InvalidHandIndex(usize),
    #[error("invalid board index {0}")]
    InvalidBoardIndex(usize),
    #[error("no hand card selected")]
    NoSelection,
    #[error("board card is not a match")]
    NotAMatch,
    #[error("no go/stop prompt is open")]
    NoPrompt,
    #[error("go/stop already resolved")]
    AlreadyResolved,
}

/// One match between the human and the computer opponent. Owns the deck,
/// both hands, the board and both collections exclusively; collaborators
/// (strategy, profile store) only see snapshots or receive totals.
pub struct GameSession {
    pub rng: RngState,
    pub deck: Deck,
    pub state: GameState,
    pub scheduler: Scheduler,
    strategy: Option<Box<dyn Strategy>>,
    profile: Option<Box<dyn ProfileStore>>,
}

impl GameSession {
    pub fn new(seed: u64) -> Self {
        Self::with_rng(RngState::from_seed(seed))
    }

    pub fn from_entropy() -> Self {
        Self::with_rng(RngState::from_entropy())
    }

    fn with_rng(rng: RngState) -> Self {
        Self {
            rng,
            deck: Deck::default(),
            state: GameState::new(),
            scheduler: Scheduler::default(),
            strategy: None,
            profile: None,
        }
    }

    pub fn set_strategy(&mut self, strategy: Option<Box<dyn Strategy>>) {
        self.strategy = strategy;
    }

    pub fn set_profile(&mut self, profile: Option<Box<dyn ProfileStore>>) {
        self.profile = profile;
    }

    pub fn strategy(&self) -> Option<&dyn Strategy> {
        self.strategy.as_deref()
    }

    pub fn profile_mut(&mut self) -> Option<&mut (dyn ProfileStore + 'static)> {
        self.profile.as_deref_mut()
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Runs a scheduled ticket after the driver's pacing delay. A ticket
    /// from before the last `start_new_game` is stale and ignored.
    pub fn dispatch(&mut self, ticket: Ticket, events: &mut EventBus) -> Result<(), GameError> {
        if !self.scheduler.is_current(ticket) {
            return Ok(());
        }
        match ticket.action {
            PendingAction::AiPlay if self.state.phase == Phase::AiTurn => {
                self.play_ai_turn(events)
            }
            PendingAction::GoStopTick if self.state.phase == Phase::GoStop => {
                self.tick_go_stop(events)
            }
            // The phase moved on before the ticket fired; nothing to do.
            _ => Ok(()),
        }
    }
}
