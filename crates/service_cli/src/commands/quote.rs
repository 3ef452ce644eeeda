//! Quote command implementation
//!
//! Resolves the billing period for a start date and prices the deliveries in it.

use rust_decimal::Decimal;
use schedule_core::clock::ClockProvider;
use schedule_core::types::Date;
use schedule_engine::schedules::{
    BillingPeriod, DeliveryFrequency, DeliverySchedule, DeliveryScheduleBuilder, ScheduleSummary,
};
use serde::Serialize;
use tracing::info;

use super::{render_table, resolve_start};
use crate::config::{CliConfig, OutputFormat};
use crate::Result;

/// Arguments of the quote command
#[derive(Debug, Clone)]
pub struct QuoteArgs {
    /// Requested start date; tomorrow when absent
    pub start: Option<Date>,
    /// Delivery frequency
    pub frequency: DeliveryFrequency,
    /// Units per delivery; the configured default when absent
    pub quantity: Option<i64>,
    /// Price of one unit
    pub price: Decimal,
    /// Skip the earliest-start check
    pub allow_past: bool,
}

/// Machine-readable quote output
#[derive(Debug, Serialize)]
pub struct QuoteReport {
    start_date: Date,
    frequency: DeliveryFrequency,
    quantity_per_delivery: i64,
    unit_price: Decimal,
    period: BillingPeriod,
    summary: ScheduleSummary,
    first_delivery: Option<Date>,
}

impl From<&DeliverySchedule> for QuoteReport {
    fn from(schedule: &DeliverySchedule) -> Self {
        Self {
            start_date: schedule.start_date(),
            frequency: *schedule.frequency(),
            quantity_per_delivery: schedule.quantity_per_delivery(),
            unit_price: schedule.unit_price(),
            period: schedule.period().clone(),
            summary: schedule.summary(),
            first_delivery: schedule.occurrences().next(),
        }
    }
}

/// Builds the quote for the given arguments
pub fn build_report(
    args: &QuoteArgs,
    config: &CliConfig,
    clock: &dyn ClockProvider,
) -> Result<QuoteReport> {
    let start = resolve_start(args.start, args.allow_past, clock)?;
    let schedule = DeliveryScheduleBuilder::new()
        .start(start)
        .frequency(args.frequency)
        .quantity(args.quantity.unwrap_or(config.default_quantity))
        .unit_price(args.price)
        .build()?;
    Ok(QuoteReport::from(&schedule))
}

/// Renders a quote in the configured output format
pub fn render(report: &QuoteReport, format: OutputFormat, currency_symbol: &str) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(report)? + "\n"),
        OutputFormat::Table => {
            let summary = &report.summary;
            let mut rows = vec![
                ("Start date".to_string(), report.start_date.to_string()),
                ("Frequency".to_string(), report.frequency.to_string()),
                ("Billing period".to_string(), report.period.label().to_string()),
                (
                    "Effective dates".to_string(),
                    format!(
                        "{} to {}",
                        report.period.effective_start(),
                        report.period.effective_end()
                    ),
                ),
                (
                    "Days in period".to_string(),
                    summary.days_in_period().to_string(),
                ),
                (
                    "Deliveries".to_string(),
                    summary.total_deliveries().to_string(),
                ),
                (
                    "Quantity".to_string(),
                    format!(
                        "{} ({} per delivery)",
                        summary.total_quantity(),
                        report.quantity_per_delivery
                    ),
                ),
                (
                    "Unit price".to_string(),
                    format!("{currency_symbol}{}", report.unit_price),
                ),
                (
                    "Total amount".to_string(),
                    format!("{currency_symbol}{}", summary.total_amount()),
                ),
            ];
            if let Some(first) = report.first_delivery {
                rows.insert(5, ("First delivery".to_string(), first.to_string()));
            }

            let mut out = render_table(("Quote", ""), &rows);
            if report.period.rolled_to_next_month() {
                out.push_str(
                    "Note: start date is the last day of its month; billing begins next month.\n",
                );
            }
            Ok(out)
        }
    }
}

/// Run the quote command
pub fn run(args: &QuoteArgs, config: &CliConfig, clock: &dyn ClockProvider) -> Result<()> {
    info!(
        frequency = %args.frequency,
        start = ?args.start,
        allow_past = args.allow_past,
        "Building quote"
    );

    let report = build_report(args, config, clock)?;
    print!(
        "{}",
        render(&report, config.output_format, &config.currency_symbol)?
    );
    Ok(())
}
