use std::time::Duration;

/// Standard date format used throughout the codebase: "2025-01-15"
pub(crate) const DATE_FORMAT: &str = "%Y-%m-%d";

/// Fallback label when a dog breed cannot be read from the image URL
pub(crate) const UNKNOWN: &str = "unknown";

/// Timeout for weather and dog image requests
pub(crate) const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

pub(crate) const WEATHER_URL: &str = "https://api.openweathermap.org/data/2.5/weather";
pub(crate) const DOG_URL: &str = "https://dog.ceo/api/breeds/image/random";
pub(crate) const CHAT_URL: &str = "https://api.openai.com/v1/chat/completions";

/// Model used for every coach report
pub(crate) const REPORT_MODEL: &str = "gpt-5-mini";

/// Language requested from the weather service
pub(crate) const WEATHER_LANG: &str = "kr";

/// Snapshots kept by the session history
pub(crate) const HISTORY_CAPACITY: usize = 30;

pub(crate) const OPENAI_KEY_NAME: &str = "OPENAI_API_KEY";
pub(crate) const WEATHER_KEY_NAME: &str = "OPENWEATHER_API_KEY";
