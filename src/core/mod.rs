//! Core module - check-in types shared by the pipeline and the presentation layer

mod persona;
mod types;

pub(crate) use persona::CoachPersona;
pub(crate) use types::{City, DailySnapshot, Habit, HabitSet, Mood};
