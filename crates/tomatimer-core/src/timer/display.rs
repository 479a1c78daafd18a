use serde::{Deserialize, Serialize};

use super::mode::Mode;

/// Complete timer state at a point in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerSnapshot {
    pub mode: Mode,
    pub remaining_secs: u32,
    pub running: bool,
}

impl TimerSnapshot {
    /// `m:ss` rendering of the remaining time.
    pub fn clock(&self) -> String {
        format_clock(self.remaining_secs)
    }

    pub fn call_to_action(&self) -> &'static str {
        self.mode.call_to_action()
    }

    /// Window title, e.g. `24:59 - Time to focus!`.
    pub fn title(&self) -> String {
        format!("{} - {}", self.clock(), self.call_to_action())
    }

    pub fn start_pause_label(&self) -> &'static str {
        if self.running {
            "Pause"
        } else {
            "Start"
        }
    }

    /// Elapsed fraction of the current mode, 0.0 ..= 1.0.
    pub fn progress(&self) -> f64 {
        let total = self.mode.duration_secs();
        if total == 0 {
            return 0.0;
        }
        let remaining = self.remaining_secs.min(total);
        1.0 - f64::from(remaining) / f64::from(total)
    }
}

/// Minutes unpadded, seconds zero-padded.
pub fn format_clock(secs: u32) -> String {
    format!("{}:{:02}", secs / 60, secs % 60)
}
