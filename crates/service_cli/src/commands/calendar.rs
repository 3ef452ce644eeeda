//! Calendar command implementation
//!
//! Lists the delivery dates of the billing period without pricing them.

use schedule_core::clock::ClockProvider;
use schedule_core::types::Date;
use schedule_engine::schedules::{resolve_period, BillingPeriod, DeliveryFrequency};
use serde::Serialize;
use tracing::info;

use super::{render_table, resolve_start};
use crate::config::OutputFormat;
use crate::Result;

/// One scheduled delivery
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarEntry {
    date: Date,
    weekday: &'static str,
}

/// Delivery calendar of one billing period
#[derive(Debug, Serialize)]
pub struct CalendarReport {
    frequency: DeliveryFrequency,
    period: BillingPeriod,
    deliveries: Vec<CalendarEntry>,
}

/// Builds the delivery calendar for a start date and frequency
pub fn build_report(
    start: Option<Date>,
    frequency: DeliveryFrequency,
    allow_past: bool,
    clock: &dyn ClockProvider,
) -> Result<CalendarReport> {
    let start = resolve_start(start, allow_past, clock)?;
    let period = resolve_period(start);
    let deliveries = period
        .occurrences(&frequency)
        .map(|date| CalendarEntry {
            date,
            weekday: date.weekday().name(),
        })
        .collect();

    Ok(CalendarReport {
        frequency,
        period,
        deliveries,
    })
}

/// Renders a calendar in the requested output format
pub fn render(report: &CalendarReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(report)? + "\n"),
        OutputFormat::Table => {
            let mut out = format!("{} ({})\n", report.period, report.frequency);
            if report.deliveries.is_empty() {
                out.push_str("No deliveries scheduled in this period.\n");
                return Ok(out);
            }

            let rows: Vec<(String, String)> = report
                .deliveries
                .iter()
                .map(|entry| (entry.date.to_string(), entry.weekday.to_string()))
                .collect();
            out.push_str(&render_table(("Date", "Weekday"), &rows));
            out.push_str(&format!("{} deliveries\n", rows.len()));
            Ok(out)
        }
    }
}

/// Run the calendar command
pub fn run(
    start: Option<Date>,
    frequency: DeliveryFrequency,
    allow_past: bool,
    format: OutputFormat,
    clock: &dyn ClockProvider,
) -> Result<()> {
    info!(%frequency, ?start, allow_past, "Listing delivery calendar");

    let report = build_report(start, frequency, allow_past, clock)?;
    print!("{}", render(&report, format)?);
    Ok(())
}
