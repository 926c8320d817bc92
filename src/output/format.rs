use comfy_table::{Attribute, Cell, CellAlignment, Color};

const BAR_WIDTH: usize = 20;

pub(super) fn header_cell(text: &str, use_color: bool) -> Cell {
    let mut cell = Cell::new(text).add_attribute(Attribute::Bold);
    if use_color {
        cell = cell.fg(Color::Cyan);
    }
    cell
}

pub(super) fn right_cell(text: &str) -> Cell {
    Cell::new(text).set_alignment(CellAlignment::Right)
}

pub(super) fn styled_cell(text: &str, color: Option<Color>, bold: bool) -> Cell {
    let mut cell = Cell::new(text);
    if let Some(c) = color {
        cell = cell.fg(c);
    }
    if bold {
        cell = cell.add_attribute(Attribute::Bold);
    }
    cell
}

/// Horizontal bar for a 0-100 percentage
pub(super) fn percent_bar(percent: u8) -> String {
    let filled = (usize::from(percent.min(100)) * BAR_WIDTH + 50) / 100;
    format!("{}{}", "█".repeat(filled), "·".repeat(BAR_WIDTH - filled))
}

pub(super) fn yellow(text: &str, use_color: bool) -> String {
    paint(text, "33", use_color)
}

pub(super) fn red(text: &str, use_color: bool) -> String {
    paint(text, "31", use_color)
}

pub(super) fn bold(text: &str, use_color: bool) -> String {
    paint(text, "1", use_color)
}

fn paint(text: &str, code: &str, use_color: bool) -> String {
    if use_color {
        format!("\x1b[{code}m{text}\x1b[0m")
    } else {
        text.to_string()
    }
}
