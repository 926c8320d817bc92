use std::fmt::Write;

use crate::clients::{DogInfo, WeatherInfo};
use crate::dashboard::TriggerOutcome;
use crate::output::format::{bold, red, yellow};
use crate::share::reading;

fn weather_card(out: &mut String, weather: Option<&WeatherInfo>, use_color: bool) {
    let _ = writeln!(out, "{}", bold("Weather", use_color));
    match weather {
        Some(w) => {
            let _ = writeln!(out, "  {}", w.city);
            let _ = writeln!(out, "  - Conditions: {}", reading(w.description.as_deref()));
            let _ = writeln!(
                out,
                "  - Temperature: {}°C (feels like {}°C)",
                reading(w.temp),
                reading(w.feels_like)
            );
            let _ = writeln!(out, "  - Humidity: {}%", reading(w.humidity));
        }
        None => {
            let _ = writeln!(
                out,
                "  {}",
                yellow(
                    "Could not load the weather. Check the API key, city or network.",
                    use_color
                )
            );
        }
    }
}

fn dog_card(out: &mut String, dog: Option<&DogInfo>, use_color: bool) {
    let _ = writeln!(out, "{}", bold("Dog", use_color));
    match dog {
        Some(d) => {
            let _ = writeln!(out, "  - Breed: {}", d.breed.label());
            let _ = writeln!(out, "  - Image: {}", d.image_url);
        }
        None => {
            let _ = writeln!(out, "  {}", yellow("Could not load a dog image.", use_color));
        }
    }
}

/// Weather and dog cards, the report (or why it failed) and the share text
pub(crate) fn render_outcome(outcome: &TriggerOutcome, use_color: bool) -> String {
    let mut out = String::new();
    weather_card(&mut out, outcome.weather.as_ref(), use_color);
    out.push('\n');
    dog_card(&mut out, outcome.dog.as_ref(), use_color);
    out.push('\n');

    let _ = writeln!(out, "{}", bold("AI coach report", use_color));
    match &outcome.report {
        Ok(text) => {
            let _ = writeln!(out, "{}", text.trim_end());
        }
        Err(e) => {
            let _ = writeln!(out, "{}", red(&e.to_string(), use_color));
        }
    }
    out.push('\n');

    let _ = writeln!(out, "{}", bold("Share text", use_color));
    out.push_str(&outcome.share_text);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::dog::BreedParse;
    use crate::core::{City, CoachPersona, DailySnapshot, HabitSet, Mood};
    use crate::error::ReportError;
    use chrono::NaiveDate;

    fn outcome(report: Result<String, ReportError>) -> TriggerOutcome {
        TriggerOutcome {
            snapshot: DailySnapshot::new(
                NaiveDate::from_ymd_opt(2026, 10, 16).unwrap(),
                HabitSet::default(),
                Mood::default(),
                City::Seoul,
                CoachPersona::Warm,
            ),
            weather: None,
            dog: Some(DogInfo {
                image_url: "https://cdn.example/dog.jpg".to_string(),
                breed: BreedParse::Unparsed,
            }),
            report,
            share_text: "[AI Habit Tracker]\n".to_string(),
        }
    }

    #[test]
    fn failures_render_as_warnings() {
        let text = render_outcome(&outcome(Err(ReportError::MissingCredential)), false);
        assert!(text.contains("Could not load the weather"));
        assert!(text.contains("- Breed: unknown"));
        assert!(text.contains("No OpenAI API key found"));
        assert!(text.ends_with("[AI Habit Tracker]\n"));
    }

    #[test]
    fn generation_failure_is_distinct_from_missing_key() {
        let text = render_outcome(
            &outcome(Err(ReportError::GenerationFailed("HTTP status 500".to_string()))),
            false,
        );
        assert!(text.contains("Could not generate the report"));
        assert!(!text.contains("No OpenAI API key found"));
    }

    #[test]
    fn report_text_is_printed() {
        let text = render_outcome(&outcome(Ok("1) Condition grade: S\n".to_string())), false);
        assert!(text.contains("1) Condition grade: S\n"));
    }
}
