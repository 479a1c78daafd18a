//! Timer engine implementation.
//!
//! The timer engine is a tick-counting state machine. It does not use
//! internal threads or clocks - the caller owns the one-second cadence and
//! delivers each firing through `tick()`.
//!
//! ## State Transitions
//!
//! ```text
//! SelectMode(m)  any  -> m, full duration, stopped
//! StartPause     any  -> running toggled
//! Skip           any  -> mode.next(), full duration, stopped
//! Tick           running -> remaining - 1, stopped at zero
//! ```
//!
//! ## Usage
//!
//! ```
//! use tomatimer_core::{Event, TimerEngine};
//!
//! let mut engine = TimerEngine::new();
//! let Event::TimerStarted { cadence, .. } = engine.start_pause() else {
//!     unreachable!()
//! };
//! // Once per second:
//! engine.tick(cadence); // Returns Some(Event::TimerCompleted) at zero
//! ```

use chrono::Utc;

use super::cadence::{Cadence, CadenceToken};
use super::display::TimerSnapshot;
use super::mode::Mode;
use crate::events::Event;

/// Core timer engine.
///
/// `running` is not stored separately: the timer runs exactly when a
/// cadence token is active.
#[derive(Debug, Clone)]
pub struct TimerEngine {
    mode: Mode,
    remaining_secs: u32,
    cadence: Cadence,
}

impl Default for TimerEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl TimerEngine {
    /// Focus mode, full duration, stopped.
    pub fn new() -> Self {
        Self::with_mode(Mode::Focus)
    }

    pub fn with_mode(mode: Mode) -> Self {
        Self {
            mode,
            remaining_secs: mode.duration_secs(),
            cadence: Cadence::new(),
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn remaining_secs(&self) -> u32 {
        self.remaining_secs
    }

    pub fn is_running(&self) -> bool {
        self.cadence.is_active()
    }

    /// Token of the active cadence, if the timer is running.
    pub fn cadence(&self) -> Option<CadenceToken> {
        self.cadence.active()
    }

    pub fn snapshot(&self) -> TimerSnapshot {
        TimerSnapshot {
            mode: self.mode,
            remaining_secs: self.remaining_secs,
            running: self.is_running(),
        }
    }

    /// Build a full state snapshot event.
    pub fn snapshot_event(&self) -> Event {
        let snap = self.snapshot();
        Event::StateSnapshot {
            mode: snap.mode,
            remaining_secs: snap.remaining_secs,
            running: snap.running,
            clock: snap.clock(),
            title: snap.title(),
            at: Utc::now(),
        }
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Stop, switch to `mode` and reset to its nominal duration.
    pub fn select_mode(&mut self, mode: Mode) -> Event {
        let stopped = self.cadence.cancel();
        self.reset_to(mode);
        tracing::debug!(mode = mode.id(), ?stopped, "mode selected");
        Event::ModeSelected {
            mode,
            duration_secs: self.remaining_secs,
            stopped,
            at: Utc::now(),
        }
    }

    /// Toggle running. Always yields an event carrying the press cue.
    pub fn start_pause(&mut self) -> Event {
        if self.cadence.cancel().is_some() {
            tracing::debug!(remaining_secs = self.remaining_secs, "paused");
            return Event::TimerPaused {
                mode: self.mode,
                remaining_secs: self.remaining_secs,
                at: Utc::now(),
            };
        }

        let cadence = self.cadence.schedule();
        tracing::debug!(
            remaining_secs = self.remaining_secs,
            generation = cadence.generation(),
            "started"
        );
        Event::TimerStarted {
            mode: self.mode,
            remaining_secs: self.remaining_secs,
            cadence,
            at: Utc::now(),
        }
    }

    /// Stop and advance to the next mode in the cycle.
    pub fn skip(&mut self) -> Event {
        let from = self.mode;
        self.cadence.cancel();
        self.reset_to(from.next());
        tracing::debug!(from = from.id(), to = self.mode.id(), "skipped");
        Event::TimerSkipped {
            from,
            to: self.mode,
            at: Utc::now(),
        }
    }

    /// Deliver one cadence firing.
    ///
    /// Ticks from a stale token are ignored. Returns
    /// `Some(Event::TimerCompleted)` on the tick that reaches zero.
    pub fn tick(&mut self, token: CadenceToken) -> Option<Event> {
        if !self.cadence.is_current(token) {
            return None;
        }

        self.remaining_secs = self.remaining_secs.saturating_sub(1);
        if self.remaining_secs > 0 {
            return None;
        }

        self.cadence.cancel();
        tracing::debug!(mode = self.mode.id(), "countdown completed");
        Some(Event::TimerCompleted {
            mode: self.mode,
            at: Utc::now(),
        })
    }

    // ── Internal ─────────────────────────────────────────────────────

    fn reset_to(&mut self, mode: Mode) {
        self.mode = mode;
        self.remaining_secs = mode.duration_secs();
    }
}
