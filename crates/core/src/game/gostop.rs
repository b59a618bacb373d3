use super::*;
use crate::*;

impl GameSession {
    /// Opens the continuation prompt for the acting seat, carrying that
    /// seat's points at the moment the threshold was crossed.
    pub(super) fn enter_go_stop(&mut self, decider: Seat, events: &mut EventBus) {
        let current_points = self.state.score(decider);
        self.state.go_stop = Some(GoStopState {
            decider,
            current_points,
            ticks_left: GO_STOP_TICKS,
            resolved: false,
        });
        self.state.phase = Phase::GoStop;
        self.scheduler.schedule(PendingAction::GoStopTick);
        events.push(Event::GoStopPrompt {
            seat: decider,
            current_points,
        });
        events.push(Event::StateChanged {
            phase: Phase::GoStop,
        });
    }

    /// Explicit go/stop choice from the decision-maker.
    pub fn select_go_stop(
        &mut self,
        choice: GoStopChoice,
        events: &mut EventBus,
    ) -> Result<(), GameError> {
        if self.state.phase != Phase::GoStop {
            return Err(GameError::InvalidPhase(self.state.phase));
        }
        self.resolve_go_stop(choice, false, events)
    }

    /// One countdown tick from the driver. The third tick without an
    /// explicit choice resolves as the default stop.
    pub fn tick_go_stop(&mut self, events: &mut EventBus) -> Result<(), GameError> {
        if self.state.phase != Phase::GoStop {
            return Err(GameError::InvalidPhase(self.state.phase));
        }
        let prompt = self.state.go_stop.as_mut().ok_or(GameError::NoPrompt)?;
        if prompt.resolved {
            return Err(GameError::AlreadyResolved);
        }
        prompt.ticks_left = prompt.ticks_left.saturating_sub(1);
        if prompt.ticks_left == 0 {
            return self.resolve_go_stop(GoStopChoice::Stop, true, events);
        }
        self.scheduler.schedule(PendingAction::GoStopTick);
        Ok(())
    }

    /// Resolved-once: the explicit choice and the countdown expiry race for
    /// this; whichever arrives second is rejected without effect.
    fn resolve_go_stop(
        &mut self,
        choice: GoStopChoice,
        timed_out: bool,
        events: &mut EventBus,
    ) -> Result<(), GameError> {
        let prompt = self.state.go_stop.as_mut().ok_or(GameError::NoPrompt)?;
        if prompt.resolved {
            return Err(GameError::AlreadyResolved);
        }
        prompt.resolved = true;
        let decider = prompt.decider;
        let points = prompt.current_points;
        match choice {
            GoStopChoice::Go => {
                self.state.go_count += 1;
                self.state.go_points.push(points);
                self.state.go_stop = None;
                events.push(Event::GoCalled {
                    seat: decider,
                    go_count: self.state.go_count,
                });
                self.pass_turn(decider.opponent(), events);
                Ok(())
            }
            GoStopChoice::Stop => {
                let reason = if timed_out {
                    EndReason::TimeoutStopped
                } else {
                    EndReason::Stopped
                };
                self.end_game(reason, events);
                Ok(())
            }
        }
    }
}
