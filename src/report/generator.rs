use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::{Value, json};

use super::prompt::{ReportPayload, build_user_prompt};
use crate::clients::{DogInfo, Transport, WeatherInfo};
use crate::consts::{CHAT_URL, REPORT_MODEL};
use crate::core::{CoachPersona, HabitSet, Mood};
use crate::credentials::Credential;
use crate::error::{FetchError, ReportError};
use crate::utils::debug_enabled;

/// Everything a report is built from
#[derive(Debug, Clone, Copy)]
pub(crate) struct ReportRequest<'a> {
    pub(crate) date: NaiveDate,
    pub(crate) habits: &'a HabitSet,
    pub(crate) mood: Mood,
    pub(crate) weather: Option<&'a WeatherInfo>,
    pub(crate) dog: Option<&'a DogInfo>,
    pub(crate) persona: CoachPersona,
}

impl ReportRequest<'_> {
    pub(crate) fn payload(&self) -> ReportPayload {
        ReportPayload::new(self.date, self.habits, self.mood, self.weather, self.dog)
    }

    /// Chat request body: persona system message then the data/template message
    pub(crate) fn chat_body(&self) -> Value {
        json!({
            "model": REPORT_MODEL,
            "messages": [
                {"role": "system", "content": self.persona.system_instruction()},
                {"role": "user", "content": build_user_prompt(&self.payload())},
            ],
        })
    }
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

fn first_choice_text(body: Value) -> Result<String, FetchError> {
    let parsed: ChatResponse =
        serde_json::from_value(body).map_err(|e| FetchError::Malformed(e.to_string()))?;
    parsed
        .choices
        .into_iter()
        .next()
        .and_then(|c| c.message.content)
        .ok_or_else(|| FetchError::Malformed("no content in first choice".to_string()))
}

pub(crate) struct ReportGenerator<'a> {
    transport: &'a dyn Transport,
    url: String,
}

impl<'a> ReportGenerator<'a> {
    pub(crate) fn new(transport: &'a dyn Transport) -> Self {
        Self::with_url(transport, CHAT_URL)
    }

    pub(crate) fn with_url(transport: &'a dyn Transport, url: &str) -> Self {
        Self {
            transport,
            url: url.to_string(),
        }
    }

    /// Generate the coach report. Blocking, single attempt.
    pub(crate) fn generate(
        &self,
        request: &ReportRequest<'_>,
        credential: Option<&Credential>,
    ) -> Result<String, ReportError> {
        let Some(credential) = credential else {
            return Err(ReportError::MissingCredential);
        };

        if debug_enabled() {
            eprintln!(
                "[DEBUG] Requesting {} report from {} ({})",
                request.persona, REPORT_MODEL, self.url
            );
        }

        self.transport
            .post_json(&self.url, credential.expose(), &request.chat_body())
            .and_then(first_choice_text)
            .map_err(|e| {
                if debug_enabled() {
                    eprintln!("[DEBUG] Report generation failed: {e}");
                }
                ReportError::GenerationFailed(e.to_string())
            })
    }
}
