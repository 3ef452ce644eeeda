//! Property-based tests for the billing period engine.

use proptest::prelude::*;
use rust_decimal::Decimal;
use schedule_core::types::{Date, WeekdaySet};
use schedule_engine::schedules::{
    aggregate, enumerate_occurrences, resolve_period, DeliveryFrequency,
};

fn date_strategy() -> impl Strategy<Value = Date> {
    (1900i32..2200i32, 1u32..13u32, 1u32..32u32)
        .prop_filter_map("valid date", |(year, month, day)| {
            Date::from_ymd(year, month, day).ok()
        })
}

/// Dates biased towards month ends, where the rollover rule applies.
fn month_end_strategy() -> impl Strategy<Value = Date> {
    (1900i32..2200i32, 1u32..13u32).prop_map(|(year, month)| {
        Date::from_ymd(year, month, 1)
            .unwrap()
            .last_day_of_month()
    })
}

fn frequency_strategy() -> impl Strategy<Value = DeliveryFrequency> {
    prop_oneof![
        Just(DeliveryFrequency::Daily),
        Just(DeliveryFrequency::AlternateDays),
        prop::collection::vec(0u8..7u8, 0..8).prop_map(|ordinals| {
            DeliveryFrequency::CustomDays(WeekdaySet::from_ordinals(&ordinals).unwrap())
        }),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    #[test]
    fn non_month_end_start_is_kept(date in date_strategy()) {
        prop_assume!(!date.is_last_day_of_month());
        let period = resolve_period(date);

        prop_assert_eq!(period.effective_start(), date);
        prop_assert_eq!(period.effective_end(), date.last_day_of_month());
        prop_assert!(!period.rolled_to_next_month());
        prop_assert!(period.label().starts_with("Rest of "));
    }

    #[test]
    fn month_end_start_rolls_over(date in month_end_strategy()) {
        let period = resolve_period(date);

        prop_assert_eq!(period.effective_start(), date.succ());
        prop_assert_eq!(period.effective_start().day(), 1);
        prop_assert!(period.rolled_to_next_month());
        prop_assert!(period.label().starts_with("Full Month ("));
    }

    #[test]
    fn period_stays_within_one_month(date in date_strategy()) {
        let period = resolve_period(date);
        let start = period.effective_start();
        let end = period.effective_end();

        prop_assert!(start <= end);
        prop_assert_eq!(start.year(), end.year());
        prop_assert_eq!(start.month(), end.month());
        prop_assert!(end.is_last_day_of_month());
        prop_assert!(period.days_in_period() >= 1);
    }

    #[test]
    fn daily_delivers_every_day(date in date_strategy()) {
        let period = resolve_period(date);
        let count = enumerate_occurrences(&period, &DeliveryFrequency::Daily).count() as u32;
        prop_assert_eq!(count, period.days_in_period());
    }

    #[test]
    fn alternate_days_delivers_half_rounded_up(date in date_strategy()) {
        let period = resolve_period(date);
        let count = enumerate_occurrences(&period, &DeliveryFrequency::AlternateDays).count() as u32;
        prop_assert_eq!(count, period.days_in_period().div_ceil(2));
    }

    #[test]
    fn empty_custom_selection_never_delivers(date in date_strategy()) {
        let period = resolve_period(date);
        let frequency = DeliveryFrequency::CustomDays(WeekdaySet::empty());
        prop_assert_eq!(enumerate_occurrences(&period, &frequency).count(), 0);
    }

    #[test]
    fn occurrences_are_ascending_and_inside_period(
        date in date_strategy(),
        frequency in frequency_strategy(),
    ) {
        let period = resolve_period(date);
        let dates: Vec<Date> = enumerate_occurrences(&period, &frequency).collect();

        prop_assert!(dates.windows(2).all(|pair| pair[0] < pair[1]));
        prop_assert!(dates.iter().all(|d| period.contains(*d)));
    }

    #[test]
    fn enumeration_is_restartable(
        date in date_strategy(),
        frequency in frequency_strategy(),
    ) {
        let period = resolve_period(date);
        let first: Vec<Date> = enumerate_occurrences(&period, &frequency).collect();
        let second: Vec<Date> = enumerate_occurrences(&period, &frequency).collect();
        prop_assert_eq!(first, second);
        prop_assert_eq!(resolve_period(date), period);
    }

    #[test]
    fn amount_is_deliveries_times_quantity_times_price(
        date in date_strategy(),
        frequency in frequency_strategy(),
        quantity in 1i64..50,
        cents in 0i64..100_000,
    ) {
        let period = resolve_period(date);
        let price = Decimal::new(cents, 2);
        let summary = aggregate(
            &period,
            enumerate_occurrences(&period, &frequency),
            quantity,
            price,
        )
        .unwrap();

        let expected = Decimal::from(summary.total_deliveries()) * Decimal::from(quantity) * price;
        prop_assert_eq!(summary.total_amount(), expected);
        prop_assert!(summary.total_amount() >= Decimal::ZERO);
        prop_assert_eq!(summary.days_in_period(), period.days_in_period());
    }
}
