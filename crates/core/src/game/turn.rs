use super::*;
use crate::*;

impl GameSession {
    /// Human selects a hand card. A card with at least one same-month board
    /// match waits for the explicit target selection; a card with none is
    /// played out immediately as a discard to the board.
    pub fn select_card(&mut self, hand_index: usize, events: &mut EventBus) -> Result<(), GameError> {
        if self.state.phase != Phase::PlayerTurn {
            return Err(GameError::InvalidPhase(self.state.phase));
        }
        if hand_index >= self.state.player_hand.len() {
            return Err(GameError::InvalidHandIndex(hand_index));
        }
        let card = self.state.player_hand[hand_index];
        let matches = self.board_matches(card.month);
        if matches.is_empty() {
            return self.play(Seat::Player, hand_index, None, events);
        }
        self.state.selection = Some(Selection {
            hand_index,
            matches,
        });
        events.push(Event::StateChanged {
            phase: self.state.phase,
        });
        Ok(())
    }

    /// Human picks the board card to capture with the selected hand card.
    /// Rejected without touching state unless the target is among the
    /// computed matches.
    pub fn select_board_card(
        &mut self,
        board_index: usize,
        events: &mut EventBus,
    ) -> Result<(), GameError> {
        if self.state.phase != Phase::PlayerTurn {
            return Err(GameError::InvalidPhase(self.state.phase));
        }
        let selection = self.state.selection.as_ref().ok_or(GameError::NoSelection)?;
        if board_index >= self.state.board.len() {
            return Err(GameError::InvalidBoardIndex(board_index));
        }
        if !selection.matches.contains(&board_index) {
            return Err(GameError::NotAMatch);
        }
        let hand_index = selection.hand_index;
        self.play(Seat::Player, hand_index, Some(board_index), events)
    }

    /// Plays the AI seat's turn: consult the injected strategy, validate its
    /// proposal, and fall back to a uniformly random play if the decision is
    /// missing or does not resolve against the current table.
    pub fn play_ai_turn(&mut self, events: &mut EventBus) -> Result<(), GameError> {
        if self.state.phase != Phase::AiTurn {
            return Err(GameError::InvalidPhase(self.state.phase));
        }
        let decision = self.strategy().and_then(|strategy| {
            let view = TableView {
                hand: &self.state.ai_hand,
                board: &self.state.board,
                player_collection: &self.state.player_collection,
                ai_collection: &self.state.ai_collection,
            };
            strategy.decide(&view)
        });
        let resolved = decision.and_then(|decision| self.resolve_decision(decision));
        let (hand_index, board_index) = match resolved {
            Some(play) => play,
            None => {
                log::warn!("ai decision did not resolve, falling back to a random play");
                match self.random_play() {
                    Some(play) => play,
                    None => {
                        // Empty hand; nothing to play, just run the
                        // termination checks.
                        self.finish_play(Seat::Ai, events);
                        return Ok(());
                    }
                }
            }
        };
        self.play(Seat::Ai, hand_index, board_index, events)
    }

    /// Maps a strategy decision onto current hand/board indices. Any id that
    /// no longer resolves, or a claimed match of the wrong month, voids the
    /// whole decision.
    fn resolve_decision(&self, decision: Decision) -> Option<(usize, Option<usize>)> {
        let hand_index = self
            .state
            .ai_hand
            .iter()
            .position(|card| card.id == decision.card)?;
        let month = self.state.ai_hand[hand_index].month;
        match decision.matching {
            None => Some((hand_index, None)),
            Some(target) => {
                let board_index = self
                    .state
                    .board
                    .iter()
                    .position(|card| card.id == target)?;
                if self.state.board[board_index].month != month {
                    return None;
                }
                Some((hand_index, Some(board_index)))
            }
        }
    }

    fn random_play(&mut self) -> Option<(usize, Option<usize>)> {
        if self.state.ai_hand.is_empty() {
            return None;
        }
        let hand_index = self.rng.pick(self.state.ai_hand.len());
        let matches = self.board_matches(self.state.ai_hand[hand_index].month);
        let board_index = if matches.is_empty() {
            None
        } else {
            Some(matches[self.rng.pick(matches.len())])
        };
        Some((hand_index, board_index))
    }

    fn board_matches(&self, month: u8) -> Vec<usize> {
        self.state
            .board
            .iter()
            .enumerate()
            .filter(|(_, card)| card.month == month)
            .map(|(index, _)| index)
            .collect()
    }

    /// The one mutation point for a play: removes the hand card, captures
    /// the target board card with it or discards it face-up, then hands off
    /// to scoring/draw/termination.
    fn play(
        &mut self,
        seat: Seat,
        hand_index: usize,
        board_index: Option<usize>,
        events: &mut EventBus,
    ) -> Result<(), GameError> {
        self.state.selection = None;
        let played = self.state.hand_mut(seat).remove(hand_index);
        let captured = match board_index {
            Some(index) => {
                let board_card = self.state.board.remove(index);
                let collection = self.state.collection_mut(seat);
                collection.add(played);
                collection.add(board_card);
                Some(board_card)
            }
            None => {
                self.state.board.push(played);
                None
            }
        };
        events.push(Event::CardPlayed {
            seat,
            played,
            captured,
        });
        self.finish_play(seat, events);
        Ok(())
    }
}
