mod cadence;
mod display;
mod engine;
mod mode;

pub use cadence::{Cadence, CadenceToken, CADENCE_PERIOD};
pub use display::{format_clock, TimerSnapshot};
pub use engine::TimerEngine;
pub use mode::{Mode, ModeSpec};
