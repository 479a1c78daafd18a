//! Audio cue abstraction.
//!
//! The core only decides *which* cue to play; decoding, devices and
//! notification daemons belong to the [`CuePlayer`] a front end supplies.

use serde::{Deserialize, Serialize};

use crate::error::AudioError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Cue {
    /// Short click on every start/pause toggle.
    Press,
    /// Played once when a countdown reaches zero.
    Alert,
}

pub trait CuePlayer {
    fn play(&mut self, cue: Cue) -> Result<(), AudioError>;
}

/// Plays nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentPlayer;

impl CuePlayer for SilentPlayer {
    fn play(&mut self, _cue: Cue) -> Result<(), AudioError> {
        Ok(())
    }
}

/// Play a cue, discarding any failure.
///
/// Returns whether playback succeeded so callers can surface it if they want.
pub fn play_cue<P: CuePlayer + ?Sized>(player: &mut P, cue: Cue) -> bool {
    match player.play(cue) {
        Ok(()) => true,
        Err(e) => {
            tracing::debug!(?cue, error = %e, "cue playback failed; ignoring");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Broken;

    impl CuePlayer for Broken {
        fn play(&mut self, _cue: Cue) -> Result<(), AudioError> {
            Err(AudioError::Rejected("autoplay blocked".into()))
        }
    }

    #[test]
    fn failures_are_swallowed() {
        assert!(!play_cue(&mut Broken, Cue::Alert));
    }

    #[test]
    fn silent_player_succeeds() {
        assert!(play_cue(&mut SilentPlayer, Cue::Press));
    }

    #[test]
    fn works_through_trait_objects() {
        let mut player: Box<dyn CuePlayer> = Box::new(Broken);
        assert!(!play_cue(player.as_mut(), Cue::Press));
    }
}
