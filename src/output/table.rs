use comfy_table::{
    Color, ContentArrangement, Table, modifiers::UTF8_SOLID_INNER_BORDERS, presets::UTF8_FULL,
};

use crate::consts::DATE_FORMAT;
use crate::core::{DailySnapshot, HabitSet, Mood};
use crate::history::DayRow;
use crate::output::format::{header_cell, percent_bar, right_cell, styled_cell};

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

/// Achievement rate, completed count and mood
pub(crate) fn metrics_table(habits: &HabitSet, mood: Mood, use_color: bool) -> Table {
    let mut table = new_table();
    table.set_header(vec![
        header_cell("Achievement", use_color),
        header_cell("Habits done", use_color),
        header_cell("Mood", use_color),
    ]);
    table.add_row(vec![
        right_cell(&format!("{}%", habits.achievement())),
        right_cell(&format!("{}/{}", habits.completed_count(), habits.total())),
        right_cell(&format!("{mood}/10")),
    ]);
    table
}

/// Checkbox list of today's habits
pub(crate) fn habits_table(habits: &HabitSet, use_color: bool) -> Table {
    let mut table = new_table();
    table.set_header(vec![
        header_cell("", use_color),
        header_cell("Habit", use_color),
        header_cell("Key", use_color),
    ]);
    for (habit, done) in habits.iter() {
        let (mark, color) = if done {
            ("[x]", Some(Color::Green))
        } else {
            ("[ ]", None)
        };
        let color = if use_color { color } else { None };
        table.add_row(vec![
            styled_cell(mark, color, done),
            styled_cell(habit.label(), None, false),
            styled_cell(habit.key(), None, false),
        ]);
    }
    table
}

/// Last 7 days; days without a snapshot are left blank
pub(crate) fn week_table(rows: &[DayRow], use_color: bool) -> Table {
    let mut table = new_table();
    table.set_header(vec![
        header_cell("Date", use_color),
        header_cell("Achievement", use_color),
        header_cell("", use_color),
        header_cell("Mood", use_color),
    ]);
    for row in rows {
        let (percent, bar) = match row.achievement {
            Some(a) => (format!("{a}%"), percent_bar(a)),
            None => ("-".to_string(), String::new()),
        };
        let mood = row
            .mood
            .map(|m| format!("{m}/10"))
            .unwrap_or_else(|| "-".to_string());
        table.add_row(vec![
            styled_cell(&row.date.format(DATE_FORMAT).to_string(), None, false),
            right_cell(&percent),
            styled_cell(&bar, if use_color { Some(Color::Green) } else { None }, false),
            right_cell(&mood),
        ]);
    }
    table
}

/// Recorded snapshots, oldest first
pub(crate) fn history_table(snapshots: &[&DailySnapshot], use_color: bool) -> Table {
    let mut table = new_table();
    table.set_header(vec![
        header_cell("Date", use_color),
        header_cell("Achievement", use_color),
        header_cell("Mood", use_color),
        header_cell("City", use_color),
        header_cell("Coach", use_color),
    ]);
    for snap in snapshots {
        table.add_row(vec![
            styled_cell(&snap.date.format(DATE_FORMAT).to_string(), None, false),
            right_cell(&format!("{}%", snap.achievement)),
            right_cell(&format!("{}/10", snap.mood)),
            styled_cell(snap.city.name(), None, false),
            styled_cell(snap.persona.key(), None, false),
        ]);
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Habit;
    use chrono::NaiveDate;

    #[test]
    fn metrics_table_shows_rate_and_mood() {
        let habits = HabitSet::with_completed(&[Habit::Sleep, Habit::Study, Habit::Exercise]);
        let text = metrics_table(&habits, Mood::try_from(7).unwrap(), false).to_string();
        assert!(text.contains("60%"));
        assert!(text.contains("3/5"));
        assert!(text.contains("7/10"));
    }

    #[test]
    fn week_table_leaves_missing_days_blank() {
        let rows = vec![
            DayRow {
                date: NaiveDate::from_ymd_opt(2026, 10, 15).unwrap(),
                achievement: None,
                mood: None,
            },
            DayRow {
                date: NaiveDate::from_ymd_opt(2026, 10, 16).unwrap(),
                achievement: Some(80),
                mood: Some(Mood::try_from(9).unwrap()),
            },
        ];
        let text = week_table(&rows, false).to_string();
        assert!(text.contains("2026-10-15"));
        assert!(text.contains("80%"));
        assert!(text.contains("9/10"));
    }

    #[test]
    fn habits_table_marks_completed() {
        let habits = HabitSet::with_completed(&[Habit::Hydration]);
        let text = habits_table(&habits, false).to_string();
        assert!(text.contains("[x]"));
        assert_eq!(text.matches("[ ]").count(), 4);
    }
}
