//! delivery-schedule - Command line front end for recurring delivery schedules
//!
//! # Commands
//!
//! - `delivery-schedule quote --frequency <f> --price <p>` - Price the billing period
//! - `delivery-schedule calendar --frequency <f>` - List the delivery dates
//! - `delivery-schedule check` - Show the resolved configuration
//!
//! Frequencies are `daily`, `alternate` or `custom:<weekdays>` such as
//! `custom:mon,wed,fri`.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use rust_decimal::Decimal;
use schedule_core::clock::SystemClock;
use schedule_core::types::Date;
use schedule_engine::schedules::DeliveryFrequency;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod error;

use config::{build_config, CliArgs};
pub use error::{CliError, Result};

/// Recurring delivery schedule and billing period calculator
#[derive(Parser)]
#[command(name = "delivery-schedule")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Configuration file path (TOML)
    #[arg(short, long, global = true, env = "DELIVERY_CONFIG")]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Output format (table, json)
    #[arg(short, long, global = true)]
    format: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

/// Start date and frequency shared by schedule commands
#[derive(Args)]
struct ScheduleArgs {
    /// Subscription start date (YYYY-MM-DD); defaults to tomorrow
    #[arg(short, long)]
    start: Option<Date>,

    /// Delivery frequency: daily, alternate or custom:<weekdays>
    #[arg(long)]
    frequency: DeliveryFrequency,

    /// Accept a start date earlier than tomorrow
    #[arg(long)]
    allow_past: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Price the deliveries of the billing period
    Quote {
        #[command(flatten)]
        schedule: ScheduleArgs,

        /// Units per delivery
        #[arg(short = 'n', long)]
        quantity: Option<i64>,

        /// Price of one unit
        #[arg(short, long)]
        price: Decimal,
    },

    /// List the delivery dates of the billing period
    Calendar {
        #[command(flatten)]
        schedule: ScheduleArgs,
    },

    /// Check the resolved configuration
    Check,
}

impl From<&Cli> for CliArgs {
    fn from(cli: &Cli) -> Self {
        Self {
            config_file: cli.config.clone(),
            log_level: cli.log_level.clone(),
            output_format: cli.format.clone(),
        }
    }
}

fn init_tracing(log_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = build_config(&CliArgs::from(&cli))?;

    init_tracing(config.log_level.as_filter_str());
    debug!(
        log_level = %config.log_level,
        output_format = %config.output_format,
        default_quantity = config.default_quantity,
        "Configuration loaded"
    );

    let clock = SystemClock;
    match cli.command {
        Commands::Quote {
            schedule,
            quantity,
            price,
        } => commands::quote::run(
            &commands::quote::QuoteArgs {
                start: schedule.start,
                frequency: schedule.frequency,
                quantity,
                price,
                allow_past: schedule.allow_past,
            },
            &config,
            &clock,
        ),
        Commands::Calendar { schedule } => commands::calendar::run(
            schedule.start,
            schedule.frequency,
            schedule.allow_past,
            config.output_format,
            &clock,
        ),
        Commands::Check => commands::check::run(&config, &clock),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_quote() {
        let cli = Cli::try_parse_from([
            "delivery-schedule",
            "quote",
            "--start",
            "2026-01-15",
            "--frequency",
            "custom:mon,wed",
            "--quantity",
            "2",
            "--price",
            "12.50",
            "--format",
            "json",
        ])
        .unwrap();
        assert_eq!(cli.format.as_deref(), Some("json"));
        match cli.command {
            Commands::Quote {
                schedule,
                quantity,
                price,
            } => {
                assert_eq!(schedule.start, Some(Date::from_ymd(2026, 1, 15).unwrap()));
                assert_eq!(schedule.frequency.code(), "custom");
                assert_eq!(quantity, Some(2));
                assert_eq!(price, Decimal::new(1250, 2));
                assert!(!schedule.allow_past);
            }
            _ => panic!("expected quote command"),
        }
    }

    #[test]
    fn test_parse_rejects_bad_frequency() {
        let result = Cli::try_parse_from([
            "delivery-schedule",
            "calendar",
            "--frequency",
            "weekly",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_rejects_bad_date() {
        let result = Cli::try_parse_from([
            "delivery-schedule",
            "calendar",
            "--frequency",
            "daily",
            "--start",
            "2026-02-30",
        ]);
        assert!(result.is_err());
    }
}
