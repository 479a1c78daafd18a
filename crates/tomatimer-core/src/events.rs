use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::audio::Cue;
use crate::timer::{CadenceToken, Mode};

/// Every state change in the timer produces an Event.
/// Front ends render from snapshots and play the cue an event carries.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    ModeSelected {
        mode: Mode,
        duration_secs: u32,
        /// The cadence that was cancelled by this selection, if any.
        stopped: Option<CadenceToken>,
        at: DateTime<Utc>,
    },
    TimerStarted {
        mode: Mode,
        remaining_secs: u32,
        cadence: CadenceToken,
        at: DateTime<Utc>,
    },
    TimerPaused {
        mode: Mode,
        remaining_secs: u32,
        at: DateTime<Utc>,
    },
    TimerSkipped {
        from: Mode,
        to: Mode,
        at: DateTime<Utc>,
    },
    TimerCompleted {
        mode: Mode,
        at: DateTime<Utc>,
    },
    StateSnapshot {
        mode: Mode,
        remaining_secs: u32,
        running: bool,
        clock: String,
        title: String,
        at: DateTime<Utc>,
    },
}

impl Event {
    /// The audio cue a front end should play for this event.
    pub fn cue(&self) -> Option<Cue> {
        match self {
            Event::TimerStarted { .. } | Event::TimerPaused { .. } => Some(Cue::Press),
            Event::TimerCompleted { .. } => Some(Cue::Alert),
            _ => None,
        }
    }
}
