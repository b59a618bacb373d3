use serde::{Deserialize, Serialize};

/// Deferred engine actions. Turn pacing and the go/stop countdown are the
/// driver's delays; the engine only tracks what is due next.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum PendingAction {
    AiPlay,
    GoStopTick,
}

/// A scheduled action stamped with the scheduler generation it was issued
/// under. Tickets from a previous game fail the generation check and
/// dispatch as no-ops.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket {
    pub action: PendingAction,
    generation: u64,
}

/// Single-slot scheduler: at most one pending action exists at a time.
#[derive(Debug, Default)]
pub struct Scheduler {
    generation: u64,
    pending: Option<Ticket>,
}

impl Scheduler {
    pub fn schedule(&mut self, action: PendingAction) {
        self.pending = Some(Ticket {
            action,
            generation: self.generation,
        });
    }

    /// Removes and returns the pending action for the driver to pace.
    pub fn take(&mut self) -> Option<Ticket> {
        self.pending.take()
    }

    pub fn pending(&self) -> Option<PendingAction> {
        self.pending.map(|ticket| ticket.action)
    }

    /// Invalidates every ticket issued so far, including ones the driver is
    /// still holding across a delay.
    pub fn invalidate_all(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        self.pending = None;
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        ticket.generation == self.generation
    }
}
