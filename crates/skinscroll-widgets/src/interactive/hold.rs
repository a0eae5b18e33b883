//! Auto-repeat while the button is held.

use serde::{Deserialize, Serialize};
use skinscroll_core::{RepeatGate, Scheduler, TimerTicket, WidgetId};

/// Delays for hold-to-repeat, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HoldDelays {
    /// Wait before the first repeat
    pub init_delay_ms: u64,
    /// Wait between subsequent repeats
    pub delay_ms: u64,
}

impl Default for HoldDelays {
    fn default() -> Self {
        Self {
            init_delay_ms: 400,
            delay_ms: 100,
        }
    }
}

/// Re-fires an action on a timer for as long as a press lasts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HoldRepeating {
    delays: HoldDelays,
    gate: RepeatGate,
}

impl HoldRepeating {
    /// Create for the element `owner`, which receives the timer events.
    #[must_use]
    pub const fn new(owner: WidgetId, delays: HoldDelays) -> Self {
        Self {
            delays,
            gate: RepeatGate::new(owner),
        }
    }

    /// Configured delays.
    #[must_use]
    pub const fn delays(&self) -> HoldDelays {
        self.delays
    }

    /// Whether a repeat chain is running.
    #[must_use]
    pub const fn is_holding(&self) -> bool {
        self.gate.is_armed()
    }

    /// Start a chain; the first repeat comes after the initial delay.
    pub fn start(&mut self, timers: &mut dyn Scheduler) {
        let ticket = self.gate.arm();
        timers.schedule(self.delays.init_delay_ms, ticket);
    }

    /// A timer fired. Returns true if it belongs to the running chain, in
    /// which case the next repeat has been scheduled.
    pub fn fire(&mut self, ticket: TimerTicket, timers: &mut dyn Scheduler) -> bool {
        if !self.gate.accepts(ticket) {
            return false;
        }
        timers.schedule(self.delays.delay_ms, self.gate.ticket());
        true
    }

    /// Stop the chain. Timers already scheduled will be ignored.
    pub fn stop(&mut self) {
        self.gate.disarm();
    }
}
