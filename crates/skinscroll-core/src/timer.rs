//! One-shot timers for hold and page-repeat behavior.
//!
//! Widgets never own a clock. When a widget wants to be called back later it
//! hands a [`TimerTicket`] to the host's [`Scheduler`]; the host delivers the
//! ticket back as [`Event::Timer`](crate::Event::Timer) once the delay has
//! elapsed. Repeating behavior re-arms from inside the firing handler.
//!
//! Cancellation goes through a [`RepeatGate`]: releasing bumps the gate's
//! generation, so every ticket issued before the release is rejected when it
//! eventually arrives. No firing is ever observed after a release.

use crate::widget::WidgetId;
use serde::{Deserialize, Serialize};

/// Identifies one scheduled firing: who asked for it and under which
/// generation of that owner's repeat gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimerTicket {
    /// Widget that armed the timer
    pub owner: WidgetId,
    /// Gate generation at arming time
    pub generation: u64,
}

impl TimerTicket {
    /// Create a new ticket.
    #[must_use]
    pub const fn new(owner: WidgetId, generation: u64) -> Self {
        Self { owner, generation }
    }
}

/// Host-side one-shot delayed-callback scheduler.
pub trait Scheduler {
    /// Deliver `ticket` back as a timer event after `delay_ms` milliseconds.
    fn schedule(&mut self, delay_ms: u64, ticket: TimerTicket);
}

/// Scheduler that drops every request, for hosts without timers.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoTimers;

impl Scheduler for NoTimers {
    fn schedule(&mut self, _delay_ms: u64, ticket: TimerTicket) {
        log::trace!("dropping timer request from {:?}", ticket.owner);
    }
}

#[derive(Debug, Clone, Copy)]
struct Pending {
    due_ms: u64,
    seq: u64,
    ticket: TimerTicket,
}

/// Deterministic in-process scheduler driven by explicit time advances.
///
/// Firings come out in due order (ties in scheduling order). Timers
/// scheduled while a firing is being handled are relative to that firing's
/// due time, so a repeat chain does not drift with the size of the advance.
#[derive(Debug, Default)]
pub struct TimerQueue {
    now_ms: u64,
    target_ms: u64,
    seq: u64,
    pending: Vec<Pending>,
}

impl TimerQueue {
    /// Create an empty queue at time zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current time in milliseconds.
    #[must_use]
    pub const fn now_ms(&self) -> u64 {
        self.now_ms
    }

    /// Number of timers waiting to fire.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Move the clock target forward. Due tickets are drained with
    /// [`pop_due`](Self::pop_due).
    pub fn advance(&mut self, delta_ms: u64) {
        self.target_ms = self.target_ms.max(self.now_ms) + delta_ms;
    }

    /// Remove and return the earliest ticket due at or before the target.
    pub fn pop_due(&mut self) -> Option<TimerTicket> {
        let index = self
            .pending
            .iter()
            .enumerate()
            .filter(|(_, p)| p.due_ms <= self.target_ms)
            .min_by_key(|(_, p)| (p.due_ms, p.seq))
            .map(|(i, _)| i);

        match index {
            Some(i) => {
                let fired = self.pending.swap_remove(i);
                self.now_ms = fired.due_ms;
                Some(fired.ticket)
            }
            None => {
                self.now_ms = self.target_ms;
                None
            }
        }
    }

    /// Advance by `delta_ms` and hand every due ticket to `dispatch`, which
    /// may schedule further timers on the queue.
    ///
    /// Returns the number of tickets dispatched.
    pub fn run_for<F>(&mut self, delta_ms: u64, mut dispatch: F) -> usize
    where
        F: FnMut(TimerTicket, &mut Self),
    {
        self.advance(delta_ms);
        let mut fired = 0;
        while let Some(ticket) = self.pop_due() {
            dispatch(ticket, self);
            fired += 1;
        }
        fired
    }
}

impl Scheduler for TimerQueue {
    fn schedule(&mut self, delay_ms: u64, ticket: TimerTicket) {
        self.seq += 1;
        self.pending.push(Pending {
            due_ms: self.now_ms + delay_ms,
            seq: self.seq,
            ticket,
        });
    }
}

/// Generation-counted on/off switch guarding a repeating timer chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RepeatGate {
    owner: WidgetId,
    generation: u64,
    armed: bool,
}

impl RepeatGate {
    /// Create a disarmed gate for `owner`.
    #[must_use]
    pub const fn new(owner: WidgetId) -> Self {
        Self {
            owner,
            generation: 0,
            armed: false,
        }
    }

    /// Start a new chain. Any ticket from an earlier chain becomes stale.
    pub fn arm(&mut self) -> TimerTicket {
        self.generation += 1;
        self.armed = true;
        self.ticket()
    }

    /// Stop the current chain. Tickets already in flight become stale.
    pub fn disarm(&mut self) {
        if self.armed {
            self.generation += 1;
            self.armed = false;
        }
    }

    /// Ticket for the current generation, used to re-arm after a firing.
    #[must_use]
    pub const fn ticket(&self) -> TimerTicket {
        TimerTicket::new(self.owner, self.generation)
    }

    /// Whether a chain is running.
    #[must_use]
    pub const fn is_armed(&self) -> bool {
        self.armed
    }

    /// Whether `ticket` belongs to the running chain.
    #[must_use]
    pub fn accepts(&self, ticket: TimerTicket) -> bool {
        let live = self.armed && ticket.owner == self.owner && ticket.generation == self.generation;
        if !live && ticket.owner == self.owner {
            log::trace!(
                "rejecting stale timer ticket {} (gate at {})",
                ticket.generation,
                self.generation
            );
        }
        live
    }
}
