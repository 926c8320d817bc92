//! Report trigger pipeline
//!
//! One trigger records a snapshot, fetches weather and a dog image, asks for
//! a coach report and assembles the shareable summary. Every step degrades
//! independently: a failed lookup never blocks the ones after it.

use chrono::NaiveDate;

use crate::clients::{DogClient, DogInfo, Transport, WeatherClient, WeatherInfo};
use crate::core::{City, CoachPersona, DailySnapshot, HabitSet, Mood};
use crate::credentials::Credential;
use crate::error::ReportError;
use crate::history::HistoryStore;
use crate::report::{ReportGenerator, ReportRequest};
use crate::share::ShareSummary;

/// Inputs collected by the presentation layer
#[derive(Debug, Clone, Default)]
pub(crate) struct CheckIn {
    pub(crate) habits: HabitSet,
    pub(crate) mood: Mood,
    pub(crate) city: City,
    pub(crate) persona: CoachPersona,
}

#[derive(Debug, Default)]
pub(crate) struct Credentials {
    pub(crate) generation: Option<Credential>,
    pub(crate) weather: Option<Credential>,
}

pub(crate) struct Services<'a> {
    pub(crate) weather: WeatherClient<'a>,
    pub(crate) dog: DogClient<'a>,
    pub(crate) reporter: ReportGenerator<'a>,
}

impl<'a> Services<'a> {
    /// Default endpoints over one transport
    pub(crate) fn new(transport: &'a dyn Transport) -> Self {
        Self {
            weather: WeatherClient::new(transport),
            dog: DogClient::new(transport),
            reporter: ReportGenerator::new(transport),
        }
    }
}

/// What a trigger produced, for rendering
#[derive(Debug)]
pub(crate) struct TriggerOutcome {
    pub(crate) snapshot: DailySnapshot,
    pub(crate) weather: Option<WeatherInfo>,
    pub(crate) dog: Option<DogInfo>,
    pub(crate) report: Result<String, ReportError>,
    pub(crate) share_text: String,
}

pub(crate) fn run_trigger(
    check_in: &CheckIn,
    today: NaiveDate,
    credentials: &Credentials,
    services: &Services<'_>,
    history: &mut HistoryStore,
) -> TriggerOutcome {
    let snapshot = DailySnapshot::new(
        today,
        check_in.habits.clone(),
        check_in.mood,
        check_in.city,
        check_in.persona,
    );
    history.append(snapshot.clone());

    let weather = services
        .weather
        .fetch(check_in.city, credentials.weather.as_ref());
    let dog = services.dog.fetch();

    let request = ReportRequest {
        date: today,
        habits: &check_in.habits,
        mood: check_in.mood,
        weather: weather.as_ref(),
        dog: dog.as_ref(),
        persona: check_in.persona,
    };
    let report = services
        .reporter
        .generate(&request, credentials.generation.as_ref());

    let share_text = ShareSummary {
        date: today,
        habits: &check_in.habits,
        mood: check_in.mood,
        city: check_in.city,
        weather: weather.as_ref(),
        dog: dog.as_ref(),
        report: report.as_deref().ok(),
    }
    .render();

    TriggerOutcome {
        snapshot,
        weather,
        dog,
        report,
        share_text,
    }
}
