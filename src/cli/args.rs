//! CLI argument definitions
//!
//! Global CLI options and configuration merging logic.

use std::io::IsTerminal;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::{Config, ConfigColorMode};
use crate::core::{City, CoachPersona, Mood};

use super::commands::Commands;

#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq)]
pub(crate) enum ColorMode {
    /// Auto-detect based on terminal (default)
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

#[derive(Parser)]
#[command(name = "habitcoach")]
#[command(
    about = "Check in daily habits and get an AI coach report with weather and a random dog",
    version
)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Option<Commands>,

    /// Mood today, 1 (worst) to 10 (best) [default: 6]
    #[arg(short, long, global = true, value_name = "1-10")]
    pub(crate) mood: Option<Mood>,

    /// City for the weather card [default: Seoul]
    #[arg(long, global = true)]
    pub(crate) city: Option<City>,

    /// Coach persona: strict, warm or playful [default: warm]
    #[arg(short, long, global = true)]
    pub(crate) persona: Option<CoachPersona>,

    /// OpenAI API key (takes precedence over secrets file and environment)
    #[arg(long, global = true, value_name = "KEY")]
    pub(crate) openai_key: Option<String>,

    /// OpenWeatherMap API key (takes precedence over secrets file and environment)
    #[arg(long, global = true, value_name = "KEY")]
    pub(crate) weather_key: Option<String>,

    /// Only use keys passed on the command line (ignore secrets file and environment)
    #[arg(long, global = true)]
    pub(crate) no_env: bool,

    /// Secrets file (TOML with OPENAI_API_KEY / OPENWEATHER_API_KEY)
    #[arg(long, global = true, value_name = "PATH")]
    pub(crate) secrets: Option<PathBuf>,

    /// Output as JSON
    #[arg(short, long, global = true)]
    pub(crate) json: bool,

    /// Fail every request without touching the network (hermetic runs)
    #[arg(short = 'O', long, global = true, hide = true)]
    pub(crate) offline: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum, default_value = "auto")]
    pub(crate) color: ColorMode,

    /// Disable colored output (shorthand for --color=never)
    #[arg(long, global = true)]
    pub(crate) no_color: bool,

    /// Enable debug output (request failures, credential sources)
    #[arg(long, global = true)]
    pub(crate) debug: bool,

    /// Timezone that decides today's date (e.g., "Asia/Seoul", "UTC")
    #[arg(long, global = true, value_name = "TZ")]
    pub(crate) timezone: Option<String>,
}

impl Cli {
    /// Merge config file values into CLI (CLI args take precedence)
    pub(crate) fn with_config(mut self, config: &Config) -> Self {
        // For boolean flags, config only applies if CLI is false (default)
        if !self.offline && config.offline {
            self.offline = true;
        }
        if !self.debug && config.debug {
            self.debug = true;
        }
        if !self.no_color && config.no_color {
            self.no_color = true;
        }
        if !self.no_env && config.use_env == Some(false) {
            self.no_env = true;
        }

        if let Some(color) = config.color
            && self.color == ColorMode::Auto
        {
            self.color = match color {
                ConfigColorMode::Auto => ColorMode::Auto,
                ConfigColorMode::Always => ColorMode::Always,
                ConfigColorMode::Never => ColorMode::Never,
            };
        }

        if self.city.is_none()
            && let Some(raw) = &config.city
        {
            match raw.parse() {
                Ok(city) => self.city = Some(city),
                Err(e) => eprintln!("Warning: ignoring config city: {e}"),
            }
        }
        if self.persona.is_none()
            && let Some(raw) = &config.persona
        {
            self.persona = Some(CoachPersona::from_label_or_default(raw));
        }
        if self.mood.is_none()
            && let Some(raw) = config.mood
        {
            match Mood::try_from(raw) {
                Ok(mood) => self.mood = Some(mood),
                Err(e) => eprintln!("Warning: ignoring config mood: {e}"),
            }
        }

        if self.timezone.is_none() {
            self.timezone = config.timezone.clone();
        }

        self
    }

    pub(crate) fn use_color(&self) -> bool {
        if self.no_color {
            return false;
        }
        match self.color {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => std::io::stdout().is_terminal(),
        }
    }

    pub(crate) fn mood(&self) -> Mood {
        self.mood.unwrap_or_default()
    }

    pub(crate) fn city(&self) -> City {
        self.city.unwrap_or_default()
    }

    pub(crate) fn persona(&self) -> CoachPersona {
        self.persona.unwrap_or_default()
    }
}
