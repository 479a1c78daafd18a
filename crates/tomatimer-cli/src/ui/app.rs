use std::time::{Duration, Instant};

use tomatimer_core::{
    play_cue, CadenceToken, CuePlayer, Event, Mode, TimerEngine, TimerSnapshot, CADENCE_PERIOD,
};

/// Upper bound on how long the loop sleeps between redraws.
pub const REDRAW_INTERVAL: Duration = Duration::from_millis(250);

/// A user trigger, decoded from a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Select(Mode),
    StartPause,
    Skip,
    Quit,
}

/// Wall-clock deadline for the next firing of one cadence.
#[derive(Debug, Clone, Copy)]
struct CadenceClock {
    token: CadenceToken,
    next_fire: Instant,
}

/// Owns the engine and turns its events into cues and cadence deadlines.
pub struct App<P: CuePlayer> {
    engine: TimerEngine,
    clock: Option<CadenceClock>,
    player: P,
    last_title: Option<String>,
    should_quit: bool,
}

impl<P: CuePlayer> App<P> {
    pub fn new(engine: TimerEngine, player: P) -> Self {
        Self {
            engine,
            clock: None,
            player,
            last_title: None,
            should_quit: false,
        }
    }

    pub fn snapshot(&self) -> TimerSnapshot {
        self.engine.snapshot()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    #[cfg(test)]
    pub fn player(&self) -> &P {
        &self.player
    }

    pub fn dispatch(&mut self, action: Action, now: Instant) {
        let event = match action {
            Action::Select(mode) => self.engine.select_mode(mode),
            Action::StartPause => self.engine.start_pause(),
            Action::Skip => self.engine.skip(),
            Action::Quit => {
                self.should_quit = true;
                return;
            }
        };
        self.apply(event, now);
    }

    /// Fire every cadence deadline that has passed by `now`.
    pub fn on_deadline(&mut self, now: Instant) {
        while let Some(clock) = self.clock {
            if now < clock.next_fire {
                break;
            }
            self.clock = Some(CadenceClock {
                next_fire: clock.next_fire + CADENCE_PERIOD,
                ..clock
            });
            if let Some(event) = self.engine.tick(clock.token) {
                self.apply(event, now);
            }
            self.sync_clock();
        }
    }

    /// How long the event loop may block before something needs doing.
    pub fn poll_timeout(&self, now: Instant) -> Duration {
        match self.clock {
            Some(clock) => clock
                .next_fire
                .saturating_duration_since(now)
                .min(REDRAW_INTERVAL),
            None => REDRAW_INTERVAL,
        }
    }

    /// The window title, but only when it differs from the last one taken.
    pub fn take_title_change(&mut self) -> Option<String> {
        let title = self.engine.snapshot().title();
        if self.last_title.as_deref() == Some(title.as_str()) {
            return None;
        }
        self.last_title = Some(title.clone());
        Some(title)
    }

    fn apply(&mut self, event: Event, now: Instant) {
        tracing::debug!(?event, "timer event");
        if let Some(cue) = event.cue() {
            play_cue(&mut self.player, cue);
        }
        if let Event::TimerStarted { cadence, .. } = event {
            self.clock = Some(CadenceClock {
                token: cadence,
                next_fire: now + CADENCE_PERIOD,
            });
        }
        self.sync_clock();
    }

    /// Drop the deadline once its cadence is no longer the engine's.
    fn sync_clock(&mut self) {
        if let Some(clock) = self.clock {
            if self.engine.cadence() != Some(clock.token) {
                self.clock = None;
            }
        }
    }
}
