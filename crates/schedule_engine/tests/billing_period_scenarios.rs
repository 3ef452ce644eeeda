//! Reference scenarios for the billing period engine.
//!
//! Each test pins one start date and frequency to the exact period and totals
//! the subscription summary screen is expected to show.

use rust_decimal_macros::dec;
use schedule_core::types::Date;
use schedule_engine::schedules::{evaluate, DeliveryFrequency, ScheduleQuote, ScheduleRequest};

fn d(year: i32, month: u32, day: u32) -> Date {
    Date::from_ymd(year, month, day).unwrap()
}

fn daily_quote(start: Date) -> ScheduleQuote {
    evaluate(&ScheduleRequest {
        start_date: start,
        frequency: DeliveryFrequency::Daily,
        quantity_per_delivery: 1,
        unit_price: dec!(1),
    })
    .unwrap()
}

#[test]
fn mid_month_start_bills_rest_of_month() {
    let quote = daily_quote(d(2026, 1, 15));

    assert_eq!(quote.period.effective_start(), d(2026, 1, 15));
    assert_eq!(quote.period.effective_end(), d(2026, 1, 31));
    assert!(!quote.period.rolled_to_next_month());
    assert_eq!(quote.summary.total_deliveries(), 17);
}

#[test]
fn january_31_rolls_into_february() {
    let quote = daily_quote(d(2026, 1, 31));

    assert_eq!(quote.period.effective_start(), d(2026, 2, 1));
    assert_eq!(quote.period.effective_end(), d(2026, 2, 28));
    assert!(quote.period.rolled_to_next_month());
    assert_eq!(quote.period.label(), "Full Month (February)");
    assert_eq!(quote.summary.total_deliveries(), 28);
}

#[test]
fn april_30_rolls_into_may() {
    let quote = daily_quote(d(2026, 4, 30));

    assert_eq!(quote.period.effective_start(), d(2026, 5, 1));
    assert_eq!(quote.period.effective_end(), d(2026, 5, 31));
    assert!(quote.period.rolled_to_next_month());
}

#[test]
fn february_28_non_leap_rolls_into_march() {
    let quote = daily_quote(d(2026, 2, 28));

    assert_eq!(quote.period.effective_start(), d(2026, 3, 1));
    assert_eq!(quote.period.effective_end(), d(2026, 3, 31));
    assert!(quote.period.rolled_to_next_month());
}

#[test]
fn first_of_month_does_not_roll() {
    let quote = daily_quote(d(2026, 3, 1));

    assert_eq!(quote.period.effective_start(), d(2026, 3, 1));
    assert_eq!(quote.period.effective_end(), d(2026, 3, 31));
    assert!(!quote.period.rolled_to_next_month());
    assert_eq!(quote.period.label(), "Rest of March");
}

#[test]
fn alternate_days_from_mid_month() {
    let quote = evaluate(&ScheduleRequest {
        start_date: d(2026, 1, 15),
        frequency: DeliveryFrequency::AlternateDays,
        quantity_per_delivery: 2,
        unit_price: dec!(10),
    })
    .unwrap();

    assert_eq!(quote.summary.total_deliveries(), 9);
    assert_eq!(quote.summary.total_amount(), dec!(180));

    let days: Vec<u32> = quote
        .period
        .occurrences(&DeliveryFrequency::AlternateDays)
        .map(|date| date.day())
        .collect();
    assert_eq!(days, vec![15, 17, 19, 21, 23, 25, 27, 29, 31]);
}

#[test]
fn december_31_crosses_year_boundary() {
    let quote = daily_quote(d(2026, 12, 31));

    assert_eq!(quote.period.effective_start(), d(2027, 1, 1));
    assert_eq!(quote.period.effective_end(), d(2027, 1, 31));
    assert_eq!(quote.summary.days_in_period(), 31);
}

#[test]
fn leap_day_triggers_rollover() {
    let quote = daily_quote(d(2028, 2, 29));

    assert!(quote.period.rolled_to_next_month());
    assert_eq!(quote.period.effective_start(), d(2028, 3, 1));
}

#[test]
fn empty_custom_selection_yields_no_deliveries() {
    let quote = evaluate(&ScheduleRequest {
        start_date: d(2026, 1, 15),
        frequency: DeliveryFrequency::from_parts("custom", &[]).unwrap(),
        quantity_per_delivery: 3,
        unit_price: dec!(12.5),
    })
    .unwrap();

    assert_eq!(quote.summary.total_deliveries(), 0);
    assert_eq!(quote.summary.total_amount(), dec!(0));
    assert_eq!(quote.summary.days_in_period(), 17);
}

#[test]
fn invalid_inputs_fail_fast() {
    let base = ScheduleRequest {
        start_date: d(2026, 1, 15),
        frequency: DeliveryFrequency::Daily,
        quantity_per_delivery: 1,
        unit_price: dec!(10),
    };

    let zero_quantity = ScheduleRequest {
        quantity_per_delivery: 0,
        ..base.clone()
    };
    assert!(evaluate(&zero_quantity).unwrap_err().is_invalid_input());

    let negative_price = ScheduleRequest {
        unit_price: dec!(-1),
        ..base
    };
    assert!(evaluate(&negative_price).unwrap_err().is_invalid_input());

    assert!(DeliveryFrequency::from_parts("custom", &[0, 7])
        .unwrap_err()
        .is_invalid_input());
}
