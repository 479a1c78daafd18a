//! Integration tests for the timer state machine.
//!
//! These drive the engine the way a front end does: user triggers plus one
//! tick per cadence firing, playing whatever cue each event carries.

use proptest::prelude::*;
use tomatimer_core::{
    play_cue, AudioError, CadenceToken, Cue, CuePlayer, Event, Mode, TimerEngine,
};

#[derive(Default)]
struct RecordingPlayer {
    played: Vec<Cue>,
}

impl CuePlayer for RecordingPlayer {
    fn play(&mut self, cue: Cue) -> Result<(), AudioError> {
        self.played.push(cue);
        Ok(())
    }
}

fn dispatch(event: &Event, player: &mut RecordingPlayer) {
    if let Some(cue) = event.cue() {
        play_cue(player, cue);
    }
}

fn start(engine: &mut TimerEngine, player: &mut RecordingPlayer) -> CadenceToken {
    let event = engine.start_pause();
    dispatch(&event, player);
    match event {
        Event::TimerStarted { cadence, .. } => cadence,
        other => panic!("Expected TimerStarted, got {other:?}"),
    }
}

#[test]
fn test_full_focus_countdown() {
    let mut engine = TimerEngine::new();
    let mut player = RecordingPlayer::default();
    let token = start(&mut engine, &mut player);

    let mut last_title = String::new();
    for _ in 0..1500 {
        if let Some(event) = engine.tick(token) {
            dispatch(&event, &mut player);
        }
        last_title = engine.snapshot().title();
    }

    assert_eq!(engine.remaining_secs(), 0);
    assert!(!engine.is_running());
    assert_eq!(last_title, "0:00 - Time to focus!");
    assert_eq!(player.played, vec![Cue::Press, Cue::Alert]);

    // The cadence is gone; a straggling firing changes nothing.
    assert!(engine.tick(token).is_none());
    assert_eq!(player.played.iter().filter(|c| **c == Cue::Alert).count(), 1);
}

#[test]
fn test_select_mode_resets_every_mode() {
    let mut engine = TimerEngine::new();
    for mode in Mode::ALL {
        engine.start_pause();
        engine.select_mode(mode);
        let snap = engine.snapshot();
        assert_eq!(snap.mode, mode);
        assert_eq!(snap.remaining_secs, mode.duration_secs());
        assert!(!snap.running);
    }
}

#[test]
fn test_skip_cycle_order() {
    let mut engine = TimerEngine::new();
    let expected = [
        Mode::ShortBreak,
        Mode::LongBreak,
        Mode::Focus,
        Mode::ShortBreak,
        Mode::LongBreak,
        Mode::Focus,
    ];
    for want in expected {
        engine.start_pause();
        match engine.skip() {
            Event::TimerSkipped { to, .. } => assert_eq!(to, want),
            other => panic!("Expected TimerSkipped, got {other:?}"),
        }
        assert_eq!(engine.mode(), want);
        assert_eq!(engine.remaining_secs(), want.duration_secs());
        assert!(!engine.is_running());
    }
}

#[test]
fn test_press_cue_on_every_toggle() {
    let mut engine = TimerEngine::new();
    let mut player = RecordingPlayer::default();
    for _ in 0..4 {
        let event = engine.start_pause();
        dispatch(&event, &mut player);
    }
    assert_eq!(player.played, vec![Cue::Press; 4]);
}

#[test]
fn test_pause_has_no_drift() {
    let mut engine = TimerEngine::new();
    let mut player = RecordingPlayer::default();
    let token = start(&mut engine, &mut player);
    for _ in 0..10 {
        engine.tick(token);
    }
    engine.start_pause();
    let paused_at = engine.remaining_secs();
    for _ in 0..10 {
        engine.tick(token);
    }
    assert_eq!(paused_at, 1490);
    assert_eq!(engine.remaining_secs(), paused_at);
}

#[derive(Debug, Clone)]
enum Trigger {
    Select(Mode),
    StartPause,
    Skip,
    /// Fire the current cadence (or a stale one when none is active).
    Tick(u16),
}

fn trigger() -> impl Strategy<Value = Trigger> {
    prop_oneof![
        prop::sample::select(Mode::ALL.to_vec()).prop_map(Trigger::Select),
        Just(Trigger::StartPause),
        Just(Trigger::Skip),
        (1u16..400).prop_map(Trigger::Tick),
    ]
}

proptest! {
    #[test]
    fn remaining_stays_within_mode_duration(triggers in prop::collection::vec(trigger(), 0..60)) {
        let mut engine = TimerEngine::new();
        let mut stale: Option<CadenceToken> = None;
        let mut alerts = 0usize;
        let mut starts = 0usize;

        for t in triggers {
            match t {
                Trigger::Select(mode) => { engine.select_mode(mode); }
                Trigger::StartPause => {
                    if let Some(token) = engine.cadence() {
                        stale = Some(token);
                    }
                    if matches!(engine.start_pause(), Event::TimerStarted { .. }) {
                        starts += 1;
                    }
                }
                Trigger::Skip => { engine.skip(); }
                Trigger::Tick(n) => {
                    let before = engine.remaining_secs();
                    match engine.cadence() {
                        Some(token) => {
                            for _ in 0..n {
                                if let Some(event) = engine.tick(token) {
                                    if event.cue() == Some(Cue::Alert) {
                                        alerts += 1;
                                    }
                                }
                            }
                        }
                        None => {
                            if let Some(token) = stale {
                                prop_assert!(engine.tick(token).is_none());
                            }
                            prop_assert_eq!(engine.remaining_secs(), before);
                        }
                    }
                }
            }

            let snap = engine.snapshot();
            prop_assert!(snap.remaining_secs <= snap.mode.duration_secs());
            prop_assert_eq!(snap.running, engine.cadence().is_some());
        }

        // Each completion needs its own start, so alerts never outnumber them.
        prop_assert!(alerts <= starts);
    }
}
