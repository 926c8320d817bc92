use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::AppError;

/// Tone of the generated report
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum CoachPersona {
    Strict,
    #[default]
    Warm,
    Playful,
}

impl CoachPersona {
    pub(crate) const ALL: [CoachPersona; 3] = [
        CoachPersona::Strict,
        CoachPersona::Warm,
        CoachPersona::Playful,
    ];

    pub(crate) fn key(self) -> &'static str {
        match self {
            CoachPersona::Strict => "strict",
            CoachPersona::Warm => "warm",
            CoachPersona::Playful => "playful",
        }
    }

    pub(crate) fn title(self) -> &'static str {
        match self {
            CoachPersona::Strict => "Spartan coach",
            CoachPersona::Warm => "Warm mentor",
            CoachPersona::Playful => "Game master",
        }
    }

    /// System instruction bound to this persona
    pub(crate) fn system_instruction(self) -> &'static str {
        match self {
            CoachPersona::Strict => {
                "You are a strict, blunt Spartan coach. No excuses are accepted. \
                 Give short, forceful feedback focused on execution."
            }
            CoachPersona::Warm => {
                "You are a warm, empathetic mentor. Acknowledge the user's small wins \
                 and suggest sustainable, low-pressure next steps."
            }
            CoachPersona::Playful => {
                "You are an RPG game master. Treat the user as a player and motivate them \
                 with quests, rewards and level-ups. Be fun and specific!"
            }
        }
    }

    /// Lenient lookup used for config values and stored labels.
    ///
    /// Unrecognized labels resolve to `Warm`, the default persona.
    pub(crate) fn from_label_or_default(label: &str) -> Self {
        label.parse().unwrap_or_default()
    }
}

impl fmt::Display for CoachPersona {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for CoachPersona {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        CoachPersona::ALL
            .into_iter()
            .find(|p| p.key() == needle || p.title().to_lowercase() == needle)
            .ok_or_else(|| AppError::UnknownPersona {
                input: s.trim().to_string(),
            })
    }
}
