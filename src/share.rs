use chrono::NaiveDate;

use crate::clients::{DogInfo, WeatherInfo};
use crate::consts::DATE_FORMAT;
use crate::core::{City, Habit, HabitSet, Mood};

fn join_or_none(habits: &[Habit]) -> String {
    if habits.is_empty() {
        "none".to_string()
    } else {
        habits
            .iter()
            .map(|h| h.label())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Reading as text, "-" when missing
pub(crate) fn reading<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| "-".to_string())
}

/// "Seoul / clear sky 21.5°C", or a failure note
pub(crate) fn weather_line(city: City, weather: Option<&WeatherInfo>) -> String {
    match weather {
        Some(w) => format!(
            "{} / {} {}°C",
            city,
            reading(w.description.as_deref()),
            reading(w.temp)
        ),
        None => format!("{city} / weather unavailable"),
    }
}

pub(crate) fn dog_line(dog: Option<&DogInfo>) -> &str {
    match dog {
        Some(d) => d.breed.label(),
        None => "unavailable",
    }
}

/// Plaintext summary meant to be copied and shared
pub(crate) struct ShareSummary<'a> {
    pub(crate) date: NaiveDate,
    pub(crate) habits: &'a HabitSet,
    pub(crate) mood: Mood,
    pub(crate) city: City,
    pub(crate) weather: Option<&'a WeatherInfo>,
    pub(crate) dog: Option<&'a DogInfo>,
    pub(crate) report: Option<&'a str>,
}

impl ShareSummary<'_> {
    pub(crate) fn render(&self) -> String {
        format!(
            "[AI Habit Tracker]
- Date: {date}
- Achievement: {achievement}% ({done}/{total})
- Mood: {mood}/10
- Done: {completed}
- Not done: {incomplete}
- Weather: {weather}
- Dog breed: {dog}

[AI Coach Report]
{report}
",
            date = self.date.format(DATE_FORMAT),
            achievement = self.habits.achievement(),
            done = self.habits.completed_count(),
            total = self.habits.total(),
            mood = self.mood,
            completed = join_or_none(&self.habits.completed()),
            incomplete = join_or_none(&self.habits.incomplete()),
            weather = weather_line(self.city, self.weather),
            dog = dog_line(self.dog),
            report = self.report.unwrap_or("(report generation failed)"),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::dog::BreedParse;

    fn seoul_weather() -> WeatherInfo {
        WeatherInfo {
            city: "Seoul".to_string(),
            temp: Some(21.5),
            feels_like: Some(21.0),
            humidity: Some(50),
            description: Some("clear sky".to_string()),
        }
    }

    #[test]
    fn full_summary() {
        let habits = HabitSet::with_completed(&[Habit::Sleep, Habit::Study]);
        let weather = seoul_weather();
        let dog = DogInfo {
            image_url: "https://images.dog.ceo/breeds/hound-afghan/x.jpg".to_string(),
            breed: BreedParse::Parsed("hound afghan".to_string()),
        };
        let text = ShareSummary {
            date: NaiveDate::from_ymd_opt(2026, 10, 16).unwrap(),
            habits: &habits,
            mood: Mood::try_from(8).unwrap(),
            city: City::Seoul,
            weather: Some(&weather),
            dog: Some(&dog),
            report: Some("Grade: A"),
        }
        .render();

        assert!(text.contains("- Date: 2026-10-16"));
        assert!(text.contains("- Achievement: 40% (2/5)"));
        assert!(text.contains("- Mood: 8/10"));
        assert!(text.contains("- Done: study, sleep"));
        assert!(text.contains("- Not done: wake-up mission, hydration, exercise"));
        assert!(text.contains("- Weather: Seoul / clear sky 21.5°C"));
        assert!(text.contains("- Dog breed: hound afghan"));
        assert!(text.ends_with("Grade: A\n"));
    }

    #[test]
    fn failures_use_placeholders() {
        let habits = HabitSet::default();
        let text = ShareSummary {
            date: NaiveDate::from_ymd_opt(2026, 10, 16).unwrap(),
            habits: &habits,
            mood: Mood::default(),
            city: City::Daegu,
            weather: None,
            dog: None,
            report: None,
        }
        .render();

        assert!(text.contains("- Done: none"));
        assert!(text.contains("- Weather: Daegu / weather unavailable"));
        assert!(text.contains("- Dog breed: unavailable"));
        assert!(text.contains("(report generation failed)"));
    }

    #[test]
    fn missing_readings_render_as_dash() {
        let weather = WeatherInfo {
            temp: None,
            description: None,
            ..seoul_weather()
        };
        assert_eq!(weather_line(City::Seoul, Some(&weather)), "Seoul / - -°C");
    }
}
