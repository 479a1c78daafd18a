//! The recurring one-second callback, modelled as a cancellable token.
//!
//! The core never sleeps or spawns anything. A front end asks the
//! [`Cadence`] for a token when the timer starts and delivers ticks tagged
//! with that token; a token that has been cancelled or superseded is stale
//! and its ticks are dropped.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Interval between two cadence firings.
pub const CADENCE_PERIOD: Duration = Duration::from_secs(1);

/// Handle to one scheduled cadence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CadenceToken(u64);

impl CadenceToken {
    pub fn generation(self) -> u64 {
        self.0
    }
}

/// At most one active cadence at a time.
#[derive(Debug, Clone, Default)]
pub struct Cadence {
    active: Option<CadenceToken>,
    generation: u64,
}

impl Cadence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cancel whatever is active, then issue a fresh token.
    pub fn schedule(&mut self) -> CadenceToken {
        self.cancel();
        self.generation += 1;
        let token = CadenceToken(self.generation);
        self.active = Some(token);
        token
    }

    /// Stop the active cadence. Calling this when nothing is active is a no-op.
    pub fn cancel(&mut self) -> Option<CadenceToken> {
        self.active.take()
    }

    pub fn active(&self) -> Option<CadenceToken> {
        self.active
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    pub fn is_current(&self, token: CadenceToken) -> bool {
        self.active == Some(token)
    }
}
