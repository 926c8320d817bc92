mod cards;
mod format;
mod json;
mod table;

pub(crate) use cards::render_outcome;
pub(crate) use json::{options_json, outcome_json};
pub(crate) use table::{habits_table, history_table, metrics_table, week_table};
