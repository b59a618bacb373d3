use super::*;
use crate::*;

pub const HAND_SIZE: usize = 7;
pub const BOARD_SIZE: usize = 8;

impl GameSession {
    /// Resets everything, shuffles a fresh 48-card deck, coin-flips the
    /// opening seat and deals. Any pending scheduled action from a previous
    /// game is invalidated before the new one starts.
    pub fn start_new_game(&mut self, events: &mut EventBus) {
        self.scheduler.invalidate_all();
        self.deck = Deck::from_catalog();
        self.deck.shuffle(&mut self.rng);
        self.state = GameState::new();
        let first = if self.rng.coin_flip() {
            Seat::Player
        } else {
            Seat::Ai
        };
        self.state.first = first;
        self.state.turn = first;
        self.state.phase = Phase::Dealing;
        events.push(Event::GameStarted { first });
        events.push(Event::StateChanged {
            phase: Phase::Dealing,
        });
        self.deal_initial_cards(events);
    }

    /// Deals 7 cards to each hand and 8 face-up to the board, strictly
    /// draw-by-draw from the shuffled deck (23 cards total).
    fn deal_initial_cards(&mut self, events: &mut EventBus) {
        for _ in 0..HAND_SIZE {
            if let Some(card) = self.deck.draw() {
                self.state.player_hand.push(card);
            }
        }
        for _ in 0..HAND_SIZE {
            if let Some(card) = self.deck.draw() {
                self.state.ai_hand.push(card);
            }
        }
        for _ in 0..BOARD_SIZE {
            if let Some(card) = self.deck.draw() {
                self.state.board.push(card);
            }
        }
        self.state.round = 1;
        events.push(Event::CardsDealt {
            hand: HAND_SIZE,
            board: BOARD_SIZE,
        });
        self.enter_turn(self.state.turn, events);
    }

    pub(super) fn enter_turn(&mut self, seat: Seat, events: &mut EventBus) {
        self.state.turn = seat;
        self.state.selection = None;
        self.state.phase = GameState::turn_phase(seat);
        if seat == Seat::Ai {
            self.scheduler.schedule(PendingAction::AiPlay);
        }
        events.push(Event::StateChanged {
            phase: self.state.phase,
        });
    }
}
