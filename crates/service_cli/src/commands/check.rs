//! Check command implementation
//!
//! Prints the resolved configuration and the earliest allowed start date.

use schedule_core::clock::{minimum_start_date, ClockProvider};

use super::render_table;
use crate::config::CliConfig;
use crate::Result;

/// Renders the resolved configuration
pub fn render(config: &CliConfig, clock: &dyn ClockProvider) -> String {
    let rows = vec![
        ("Version".to_string(), env!("CARGO_PKG_VERSION").to_string()),
        ("Log level".to_string(), config.log_level.to_string()),
        ("Output format".to_string(), config.output_format.to_string()),
        ("Currency symbol".to_string(), config.currency_symbol.clone()),
        (
            "Default quantity".to_string(),
            config.default_quantity.to_string(),
        ),
        ("Today".to_string(), clock.today().to_string()),
        (
            "Earliest start".to_string(),
            minimum_start_date(clock).to_string(),
        ),
    ];
    render_table(("Setting", "Value"), &rows)
}

/// Run the check command
pub fn run(config: &CliConfig, clock: &dyn ClockProvider) -> Result<()> {
    print!("{}", render(config, clock));
    Ok(())
}
