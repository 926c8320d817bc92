use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::Transport;
use crate::consts::{WEATHER_LANG, WEATHER_URL};
use crate::core::City;
use crate::credentials::Credential;
use crate::error::FetchError;
use crate::utils::debug_enabled;

/// Current conditions for a city. Individual readings may be missing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct WeatherInfo {
    pub(crate) city: String,
    pub(crate) temp: Option<f64>,
    pub(crate) feels_like: Option<f64>,
    /// Relative humidity, percent
    pub(crate) humidity: Option<u8>,
    #[serde(rename = "desc")]
    pub(crate) description: Option<String>,
}

#[derive(Debug, Deserialize)]
struct WeatherResponse {
    main: MainReadings,
    weather: Vec<Condition>,
}

#[derive(Debug, Deserialize)]
struct MainReadings {
    #[serde(default)]
    temp: Option<f64>,
    #[serde(default)]
    feels_like: Option<f64>,
    #[serde(default)]
    humidity: Option<u8>,
}

#[derive(Debug, Deserialize)]
struct Condition {
    #[serde(default)]
    description: Option<String>,
}

/// Requires `main` and `weather` to be present; their fields are optional
pub(crate) fn parse_weather(city: &str, body: Value) -> Result<WeatherInfo, FetchError> {
    let parsed: WeatherResponse =
        serde_json::from_value(body).map_err(|e| FetchError::Malformed(e.to_string()))?;
    Ok(WeatherInfo {
        city: city.to_string(),
        temp: parsed.main.temp,
        feels_like: parsed.main.feels_like,
        humidity: parsed.main.humidity,
        description: parsed.weather.into_iter().next().and_then(|c| c.description),
    })
}

pub(crate) struct WeatherClient<'a> {
    transport: &'a dyn Transport,
    url: String,
}

impl<'a> WeatherClient<'a> {
    pub(crate) fn new(transport: &'a dyn Transport) -> Self {
        Self::with_url(transport, WEATHER_URL)
    }

    pub(crate) fn with_url(transport: &'a dyn Transport, url: &str) -> Self {
        Self {
            transport,
            url: url.to_string(),
        }
    }

    /// Current weather, or None on a missing key or any failure
    pub(crate) fn fetch(&self, city: City, credential: Option<&Credential>) -> Option<WeatherInfo> {
        let credential = credential?;
        let query = [
            ("q", city.name()),
            ("appid", credential.expose()),
            ("units", "metric"),
            ("lang", WEATHER_LANG),
        ];
        let result = self
            .transport
            .get_json(&self.url, &query)
            .and_then(|body| parse_weather(city.name(), body));
        match result {
            Ok(info) => Some(info),
            Err(e) => {
                if debug_enabled() {
                    eprintln!("[DEBUG] Weather lookup for {city} failed: {e}");
                }
                None
            }
        }
    }
}
