use super::*;
use crate::*;

pub const SCORE_THRESHOLD: u32 = 7;
pub const GO_LIMIT: u8 = 3;

impl GameSession {
    /// Post-play sequence: rescore, run the bonus-capture hook, draw one
    /// card for the actor, then check termination. The check order matters:
    /// exhaustion beats the go limit beats the go/stop prompt.
    pub(super) fn finish_play(&mut self, seat: Seat, events: &mut EventBus) {
        self.recalculate_scores(events);
        self.check_special_combinations(seat);
        if let Some(card) = self.deck.draw() {
            // Single-draw model: the drawn card is not matched this turn,
            // it becomes playable on the actor's next turn.
            self.state.hand_mut(seat).push(card);
        }
        if self.deck.is_empty()
            && (self.state.player_hand.is_empty() || self.state.ai_hand.is_empty())
        {
            self.end_game(EndReason::Exhausted, events);
            return;
        }
        if self.state.go_count >= GO_LIMIT {
            self.end_game(EndReason::GoLimit, events);
            return;
        }
        if self.state.player_score >= SCORE_THRESHOLD || self.state.ai_score >= SCORE_THRESHOLD {
            self.enter_go_stop(seat, events);
            return;
        }
        self.pass_turn(seat.opponent(), events);
    }

    pub(super) fn pass_turn(&mut self, next: Seat, events: &mut EventBus) {
        if next == self.state.first {
            self.state.round += 1;
        }
        self.enter_turn(next, events);
    }

    /// Full recomputation from the collections rather than incremental
    /// updates; the collections are small and this cannot drift.
    pub(super) fn recalculate_scores(&mut self, events: &mut EventBus) {
        let player = scoring::score(&self.state.player_collection);
        let ai = scoring::score(&self.state.ai_collection);
        if player > self.state.player_score {
            events.push(Event::ScoreGained {
                seat: Seat::Player,
                points: player - self.state.player_score,
            });
        }
        if ai > self.state.ai_score {
            events.push(Event::ScoreGained {
                seat: Seat::Ai,
                points: ai - self.state.ai_score,
            });
        }
        self.state.player_score = player;
        self.state.ai_score = ai;
    }

    /// Extension point for the named bonus captures (kiss, ttak, bomb).
    /// Referenced by the rules but carrying no behavior; kept so a variant
    /// rule set can hook captures without touching the turn protocol.
    pub(super) fn check_special_combinations(&mut self, _seat: Seat) {}

    /// Ends the match exactly once: applies the go bonus to both sides,
    /// settles the winner and the coin reward, credits the profile store
    /// when one is attached.
    pub(super) fn end_game(&mut self, reason: EndReason, events: &mut EventBus) {
        if self.state.phase == Phase::GameOver {
            return;
        }
        self.scheduler.invalidate_all();
        let player_final = scoring::final_score(self.state.player_score, self.state.go_count);
        let ai_final = scoring::final_score(self.state.ai_score, self.state.go_count);
        let player_won = player_final > ai_final;
        let winner_final = if player_won { player_final } else { ai_final };
        let reward = scoring::reward(player_won, winner_final);
        let result = GameResult {
            player_won,
            player_score: player_final,
            ai_score: ai_final,
            reward,
            reason,
        };
        self.state.player_score = player_final;
        self.state.ai_score = ai_final;
        self.state.go_stop = None;
        self.state.selection = None;
        self.state.result = Some(result);
        self.state.phase = Phase::GameOver;
        if let Some(profile) = self.profile_mut() {
            profile.add_coins(reward);
        }
        events.push(Event::GameOver { result });
        events.push(Event::StateChanged {
            phase: Phase::GameOver,
        });
    }
}
