use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// The three timer phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Mode {
    #[default]
    Focus,
    ShortBreak,
    LongBreak,
}

/// Static data attached to a [`Mode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ModeSpec {
    pub label: &'static str,
    /// Nominal duration in seconds.
    pub duration_secs: u32,
    pub call_to_action: &'static str,
    /// Styling hint for front ends (background / highlight colour).
    pub accent_rgb: (u8, u8, u8),
}

const MODE_TABLE: [ModeSpec; 3] = [
    ModeSpec {
        label: "Focus",
        duration_secs: 25 * 60,
        call_to_action: "Time to focus!",
        accent_rgb: (186, 73, 73),
    },
    ModeSpec {
        label: "Short Break",
        duration_secs: 5 * 60,
        call_to_action: "Time to take a short break!",
        accent_rgb: (56, 133, 138),
    },
    ModeSpec {
        label: "Long Break",
        duration_secs: 20 * 60,
        call_to_action: "Time to take a long break!",
        accent_rgb: (57, 112, 151),
    },
];

impl Mode {
    /// All modes in skip order.
    pub const ALL: [Mode; 3] = [Mode::Focus, Mode::ShortBreak, Mode::LongBreak];

    fn index(self) -> usize {
        match self {
            Mode::Focus => 0,
            Mode::ShortBreak => 1,
            Mode::LongBreak => 2,
        }
    }

    pub fn spec(self) -> &'static ModeSpec {
        &MODE_TABLE[self.index()]
    }

    pub fn label(self) -> &'static str {
        self.spec().label
    }

    pub fn duration_secs(self) -> u32 {
        self.spec().duration_secs
    }

    pub fn call_to_action(self) -> &'static str {
        self.spec().call_to_action
    }

    /// Stable identifier, identical to the serialized form.
    pub fn id(self) -> &'static str {
        match self {
            Mode::Focus => "focus",
            Mode::ShortBreak => "shortBreak",
            Mode::LongBreak => "longBreak",
        }
    }

    /// Next mode in the linear skip cycle. Wraps from LongBreak to Focus.
    pub fn next(self) -> Mode {
        match self {
            Mode::Focus => Mode::ShortBreak,
            Mode::ShortBreak => Mode::LongBreak,
            Mode::LongBreak => Mode::Focus,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Mode {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .flat_map(char::to_lowercase)
            .collect();
        match normalized.as_str() {
            "focus" => Ok(Mode::Focus),
            "shortbreak" => Ok(Mode::ShortBreak),
            "longbreak" => Ok(Mode::LongBreak),
            _ => Err(ValidationError::UnknownMode(s.to_string())),
        }
    }
}
