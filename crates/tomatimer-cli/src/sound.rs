//! Cue playback for the terminal.
//!
//! Cues become terminal bells and, for the alert, a desktop notification.
//! Every failure is reported as an [`AudioError`]; the caller discards it.

use std::io::{self, Write};

use tomatimer_core::{AudioError, Config, Cue, CuePlayer};

pub struct TerminalCuePlayer {
    press_bell: bool,
    alert_bell: bool,
    notify: bool,
}

impl TerminalCuePlayer {
    pub fn from_config(config: &Config, mute: bool, no_notify: bool) -> Self {
        let sound = config.sound.enabled && !mute;
        Self {
            press_bell: sound && config.sound.press_bell,
            alert_bell: sound && config.sound.alert_bell,
            notify: config.notifications.enabled && !no_notify && !mute,
        }
    }

    fn ring_bell() -> Result<(), AudioError> {
        let mut out = io::stdout();
        out.write_all(b"\x07")?;
        out.flush()?;
        Ok(())
    }

    fn notify_completed() -> Result<(), AudioError> {
        notify_rust::Notification::new()
            .appname("tomatimer")
            .summary("tomatimer")
            .body("Time's up!")
            .show()
            .map(|_| ())
            .map_err(|e| AudioError::Unavailable(e.to_string()))
    }
}

impl CuePlayer for TerminalCuePlayer {
    fn play(&mut self, cue: Cue) -> Result<(), AudioError> {
        match cue {
            Cue::Press if self.press_bell => Self::ring_bell(),
            Cue::Press => Ok(()),
            Cue::Alert => {
                let notified = if self.notify {
                    Self::notify_completed()
                } else {
                    Ok(())
                };
                if self.alert_bell {
                    Self::ring_bell()?;
                }
                notified
            }
        }
    }
}
