//! # tomatimer Core Library
//!
//! This library provides the core logic for the tomatimer focus timer.
//! Front ends (the `tomatimer` terminal binary) are thin layers that feed
//! user input and cadence firings into the engine and act on the events it
//! returns.
//!
//! ## Architecture
//!
//! - **Timer Engine**: a side-effect-free state machine over three fixed
//!   modes; the caller drives it one `tick()` per second
//! - **Cadence**: the cancellable token that guards against double ticking
//! - **Audio**: the [`CuePlayer`] seam through which front ends play cues
//! - **Storage**: TOML-based configuration
//!
//! ## Key Components
//!
//! - [`TimerEngine`]: Core timer state machine
//! - [`Event`]: Notification emitted by every transition
//! - [`Config`]: Application configuration management

pub mod audio;
pub mod error;
pub mod events;
pub mod storage;
pub mod timer;

pub use audio::{play_cue, Cue, CuePlayer, SilentPlayer};
pub use error::{AudioError, ConfigError, CoreError, ValidationError};
pub use events::Event;
pub use storage::Config;
pub use timer::{
    format_clock, Cadence, CadenceToken, Mode, ModeSpec, TimerEngine, TimerSnapshot,
    CADENCE_PERIOD,
};
