//! Report prompt construction

use chrono::NaiveDate;
use serde::Serialize;

use crate::clients::{DogInfo, WeatherInfo};
use crate::consts::DATE_FORMAT;
use crate::core::{HabitSet, Mood};

/// Phrase the model must use when weather is unavailable, in the report language
pub(crate) const WEATHER_FALLBACK_PHRASE: &str = "날씨 정보를 불러오지 못했어요";

/// Language the report is written in
pub(crate) const REPORT_LANGUAGE: &str = "Korean";

/// Data sent to the model as JSON
#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct ReportPayload {
    pub(crate) date: String,
    pub(crate) mood: Mood,
    pub(crate) checked_habits: Vec<&'static str>,
    pub(crate) unchecked_habits: Vec<&'static str>,
    pub(crate) weather: Option<WeatherInfo>,
    pub(crate) dog_breed: Option<String>,
}

impl ReportPayload {
    pub(crate) fn new(
        date: NaiveDate,
        habits: &HabitSet,
        mood: Mood,
        weather: Option<&WeatherInfo>,
        dog: Option<&DogInfo>,
    ) -> Self {
        Self {
            date: date.format(DATE_FORMAT).to_string(),
            mood,
            checked_habits: habits.completed().into_iter().map(|h| h.label()).collect(),
            unchecked_habits: habits.incomplete().into_iter().map(|h| h.label()).collect(),
            weather: weather.cloned(),
            dog_breed: dog.and_then(|d| d.breed.parsed()).map(str::to_string),
        }
    }
}

/// User instruction: the payload plus the mandatory output template
pub(crate) fn build_user_prompt(payload: &ReportPayload) -> String {
    let data = serde_json::to_string_pretty(payload).unwrap_or_else(|_| "{}".to_string());
    format!(
        "Write an 'AI Habit Tracker' condition report based on the data below.

[Input data (JSON)]
{data}

[Output format - keep exactly this order and these labels]
1) Condition grade: (one of S/A/B/C/D)
2) Habit analysis: (2 things done well + 2 things to improve + 2 tips to act on right away)
3) Weather comment: (if there is no weather, include the exact phrase '{WEATHER_FALLBACK_PHRASE}' verbatim)
4) Tomorrow's missions: (3 items, formatted as checkboxes '- [ ]')
5) One-liner for today: (one sentence, make it punchy)

Additional rules:
- Write in {REPORT_LANGUAGE} and render the habit names naturally in {REPORT_LANGUAGE}.
- Always mention the mood ({mood} on a 1-10 scale) and keep it concise.",
        mood = payload.mood,
    )
}
