//! CLI command implementations
//!
//! Each submodule implements a specific CLI command.

pub mod calendar;
pub mod check;
pub mod quote;

use schedule_core::clock::{minimum_start_date, ClockProvider};
use schedule_core::types::Date;
use schedule_engine::schedules::check_start_date;

use crate::Result;

/// Resolves the start date a command works from.
///
/// Without an explicit date the earliest allowed start (tomorrow) is used.
/// An explicit date before that is rejected unless `allow_past` is set.
pub fn resolve_start(
    start: Option<Date>,
    allow_past: bool,
    clock: &dyn ClockProvider,
) -> Result<Date> {
    match start {
        None => Ok(minimum_start_date(clock)),
        Some(date) if allow_past => Ok(date),
        Some(date) => {
            check_start_date(date, clock)?;
            Ok(date)
        }
    }
}

/// Renders two-column rows as a box-drawn table.
pub fn render_table(headers: (&str, &str), rows: &[(String, String)]) -> String {
    let width = |s: &str| s.chars().count();
    let left = rows
        .iter()
        .map(|(key, _)| width(key))
        .chain(std::iter::once(width(headers.0)))
        .max()
        .unwrap_or(0);
    let right = rows
        .iter()
        .map(|(_, value)| width(value))
        .chain(std::iter::once(width(headers.1)))
        .max()
        .unwrap_or(0);

    let rule = |l: char, m: char, r: char| {
        format!(
            "{l}{}{m}{}{r}\n",
            "─".repeat(left + 2),
            "─".repeat(right + 2)
        )
    };
    let row = |key: &str, value: &str| {
        format!(
            "│ {key}{} │ {value}{} │\n",
            " ".repeat(left - width(key)),
            " ".repeat(right - width(value))
        )
    };

    let mut out = rule('┌', '┬', '┐');
    out.push_str(&row(headers.0, headers.1));
    out.push_str(&rule('├', '┼', '┤'));
    for (key, value) in rows {
        out.push_str(&row(key, value));
    }
    out.push_str(&rule('└', '┴', '┘'));
    out
}
