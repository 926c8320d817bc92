//! Core check-in types
//!
//! Habits, mood and city are the inputs the presentation layer collects;
//! `DailySnapshot` is what the session history records for each report.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Serialize, Serializer};

use super::persona::CoachPersona;
use crate::error::AppError;

/// The fixed set of daily habits, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum Habit {
    WakeUp,
    Hydration,
    Study,
    Exercise,
    Sleep,
}

impl Habit {
    pub(crate) const ALL: [Habit; 5] = [
        Habit::WakeUp,
        Habit::Hydration,
        Habit::Study,
        Habit::Exercise,
        Habit::Sleep,
    ];

    /// Short key accepted on the command line
    pub(crate) fn key(self) -> &'static str {
        match self {
            Habit::WakeUp => "wake-up",
            Habit::Hydration => "hydration",
            Habit::Study => "study",
            Habit::Exercise => "exercise",
            Habit::Sleep => "sleep",
        }
    }

    /// Human readable name used in prompts and summaries
    pub(crate) fn label(self) -> &'static str {
        match self {
            Habit::WakeUp => "wake-up mission",
            Habit::Hydration => "hydration",
            Habit::Study => "study",
            Habit::Exercise => "exercise",
            Habit::Sleep => "sleep",
        }
    }
}

impl fmt::Display for Habit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Habit {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        Habit::ALL
            .into_iter()
            .find(|h| h.key() == needle || h.label() == needle)
            .ok_or_else(|| AppError::UnknownHabit {
                input: s.trim().to_string(),
            })
    }
}

/// Today's completion state for every habit.
///
/// Keys are fixed at construction and iterate in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct HabitSet {
    entries: Vec<(Habit, bool)>,
}

impl Default for HabitSet {
    fn default() -> Self {
        Self {
            entries: Habit::ALL.into_iter().map(|h| (h, false)).collect(),
        }
    }
}

impl HabitSet {
    /// All habits unchecked except the given ones
    pub(crate) fn with_completed(done: &[Habit]) -> Self {
        let mut set = Self::default();
        for habit in done {
            set.set(*habit, true);
        }
        set
    }

    pub(crate) fn set(&mut self, habit: Habit, done: bool) {
        if let Some(entry) = self.entries.iter_mut().find(|(h, _)| *h == habit) {
            entry.1 = done;
        }
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = (Habit, bool)> + '_ {
        self.entries.iter().copied()
    }

    pub(crate) fn completed(&self) -> Vec<Habit> {
        self.iter().filter(|(_, done)| *done).map(|(h, _)| h).collect()
    }

    pub(crate) fn incomplete(&self) -> Vec<Habit> {
        self.iter().filter(|(_, done)| !*done).map(|(h, _)| h).collect()
    }

    pub(crate) fn completed_count(&self) -> usize {
        self.iter().filter(|(_, done)| *done).count()
    }

    pub(crate) fn total(&self) -> usize {
        self.entries.len()
    }

    /// round(100 * completed / total), 0 for an empty set
    pub(crate) fn achievement(&self) -> u8 {
        let total = self.total();
        if total == 0 {
            return 0;
        }
        (100.0 * self.completed_count() as f64 / total as f64).round() as u8
    }
}

impl Serialize for HabitSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (habit, done) in &self.entries {
            map.serialize_entry(habit.key(), done)?;
        }
        map.end()
    }
}

/// Self-reported mood, 1 (worst) to 10 (best)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub(crate) struct Mood(u8);

impl Mood {
    pub(crate) const MIN: u8 = 1;
    pub(crate) const MAX: u8 = 10;

    pub(crate) fn value(self) -> u8 {
        self.0
    }
}

impl Default for Mood {
    fn default() -> Self {
        Mood(6)
    }
}

impl TryFrom<u8> for Mood {
    type Error = AppError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Mood(value))
        } else {
            Err(AppError::InvalidMood {
                input: value.to_string(),
            })
        }
    }
}

impl FromStr for Mood {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        trimmed
            .parse::<u8>()
            .map_err(|_| AppError::InvalidMood {
                input: trimmed.to_string(),
            })
            .and_then(Mood::try_from)
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

/// Cities offered for the weather lookup
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub(crate) enum City {
    #[default]
    Seoul,
    Busan,
    Incheon,
    Daegu,
    Daejeon,
    Gwangju,
    Suwon,
    Ulsan,
    Jeju,
    Sejong,
}

impl City {
    pub(crate) const ALL: [City; 10] = [
        City::Seoul,
        City::Busan,
        City::Incheon,
        City::Daegu,
        City::Daejeon,
        City::Gwangju,
        City::Suwon,
        City::Ulsan,
        City::Jeju,
        City::Sejong,
    ];

    /// Name sent as the weather query
    pub(crate) fn name(self) -> &'static str {
        match self {
            City::Seoul => "Seoul",
            City::Busan => "Busan",
            City::Incheon => "Incheon",
            City::Daegu => "Daegu",
            City::Daejeon => "Daejeon",
            City::Gwangju => "Gwangju",
            City::Suwon => "Suwon",
            City::Ulsan => "Ulsan",
            City::Jeju => "Jeju",
            City::Sejong => "Sejong",
        }
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for City {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        City::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| AppError::UnknownCity {
                input: trimmed.to_string(),
            })
    }
}

/// One day's recorded check-in. Never mutated after creation.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct DailySnapshot {
    pub(crate) date: NaiveDate,
    pub(crate) habits: HabitSet,
    pub(crate) achievement: u8,
    pub(crate) mood: Mood,
    pub(crate) city: City,
    pub(crate) persona: CoachPersona,
}

impl DailySnapshot {
    pub(crate) fn new(
        date: NaiveDate,
        habits: HabitSet,
        mood: Mood,
        city: City,
        persona: CoachPersona,
    ) -> Self {
        let achievement = habits.achievement();
        Self {
            date,
            habits,
            achievement,
            mood,
            city,
            persona,
        }
    }
}
