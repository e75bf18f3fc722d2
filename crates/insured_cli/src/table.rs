//! Boxed table rendering for person lists.
//!
//! Column widths start at fixed minimums and grow to fit the longest value
//! plus one space of padding on each side.

use crate::messages::NO_RECORDS;
use insured_core::Person;

const COLUMNS: [(&str, usize); 5] = [
    ("Id", 7),
    ("First name", 15),
    ("Last name", 20),
    ("Age", 5),
    ("Phone number", 20),
];

/// Renders `persons` as a table, or the "no records" line when empty.
pub fn render_person_table<'a>(persons: impl IntoIterator<Item = &'a Person>) -> String {
    let rows: Vec<[String; 5]> = persons.into_iter().map(row_cells).collect();
    if rows.is_empty() {
        return format!("{NO_RECORDS}\n");
    }

    let mut widths = COLUMNS.map(|(title, min)| min.max(title.chars().count() + 2));
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count() + 2);
        }
    }

    let mut out = String::new();
    out.push_str(&format_row(&COLUMNS.map(|(title, _)| title.to_string()), &widths));
    for row in &rows {
        out.push_str(&rule('├', '┼', '┤', &widths));
        out.push_str(&format_row(row, &widths));
    }
    out.push_str(&rule('└', '┴', '┘', &widths));
    out
}

fn row_cells(person: &Person) -> [String; 5] {
    [
        person.id().to_string(),
        person.first_name().to_string(),
        person.last_name().to_string(),
        person.age().to_string(),
        person.phone_number().to_string(),
    ]
}

fn format_row(cells: &[String; 5], widths: &[usize; 5]) -> String {
    let mut line = String::from("|");
    for (cell, width) in cells.iter().zip(widths) {
        line.push_str(&format!(" {:<pad$}|", cell, pad = width - 1));
    }
    line.push('\n');
    line
}

fn rule(left: char, cross: char, right: char, widths: &[usize; 5]) -> String {
    let segments: Vec<String> = widths.iter().map(|width| "─".repeat(*width)).collect();
    format!("{left}{}{right}\n", segments.join(&cross.to_string()))
}
