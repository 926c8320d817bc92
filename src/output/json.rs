use serde_json::{Value, json};

use crate::consts::DATE_FORMAT;
use crate::core::{City, CoachPersona, Habit};
use crate::dashboard::TriggerOutcome;

fn to_json_string(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|e| {
        eprintln!("Failed to serialize JSON output: {}", e);
        "{}".to_string()
    })
}

/// One trigger as a JSON object
pub(crate) fn outcome_json(outcome: &TriggerOutcome) -> String {
    let snap = &outcome.snapshot;
    let (report, report_error) = match &outcome.report {
        Ok(text) => (json!(text), Value::Null),
        Err(e) => (
            Value::Null,
            json!({"kind": e.kind(), "message": e.to_string()}),
        ),
    };

    let output = json!({
        "date": snap.date.format(DATE_FORMAT).to_string(),
        "habits": snap.habits,
        "achievement": snap.achievement,
        "completed": snap.habits.completed_count(),
        "total": snap.habits.total(),
        "mood": snap.mood,
        "city": snap.city,
        "persona": snap.persona,
        "weather": outcome.weather,
        "dog": outcome.dog.as_ref().map(|d| json!({
            "image_url": d.image_url,
            "breed": d.breed.label(),
        })),
        "report": report,
        "report_error": report_error,
        "share_text": outcome.share_text,
    });
    to_json_string(&output)
}

/// Available habits, cities and personas
pub(crate) fn options_json() -> String {
    let output = json!({
        "habits": Habit::ALL
            .iter()
            .map(|h| json!({"key": h.key(), "label": h.label()}))
            .collect::<Vec<_>>(),
        "cities": City::ALL.iter().map(|c| c.name()).collect::<Vec<_>>(),
        "personas": CoachPersona::ALL
            .iter()
            .map(|p| json!({"key": p.key(), "title": p.title()}))
            .collect::<Vec<_>>(),
    });
    to_json_string(&output)
}
