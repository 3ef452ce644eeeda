//! Billing aggregation over a delivery sequence.

use rust_decimal::Decimal;
use schedule_core::types::Date;

use super::error::ScheduleError;
use super::period::BillingPeriod;

/// Delivery count and cost of one billing period.
///
/// # Examples
///
/// ```
/// use rust_decimal::Decimal;
/// use schedule_engine::schedules::{aggregate, resolve_period, DeliveryFrequency};
/// use schedule_core::types::Date;
///
/// let period = resolve_period(Date::from_ymd(2026, 1, 15).unwrap());
/// let occurrences = period.occurrences(&DeliveryFrequency::AlternateDays);
///
/// let summary = aggregate(&period, occurrences, 2, Decimal::new(10, 0)).unwrap();
/// assert_eq!(summary.total_deliveries(), 9);
/// assert_eq!(summary.total_quantity(), 18);
/// assert_eq!(summary.total_amount(), Decimal::new(180, 0));
/// assert_eq!(summary.days_in_period(), 17);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ScheduleSummary {
    total_deliveries: u32,
    total_quantity: i64,
    total_amount: Decimal,
    days_in_period: u32,
}

impl ScheduleSummary {
    pub(crate) fn from_parts(
        total_deliveries: u32,
        total_quantity: i64,
        total_amount: Decimal,
        days_in_period: u32,
    ) -> Self {
        Self {
            total_deliveries,
            total_quantity,
            total_amount,
            days_in_period,
        }
    }

    /// Number of deliveries in the period.
    #[inline]
    pub fn total_deliveries(&self) -> u32 {
        self.total_deliveries
    }

    /// Units delivered over the period (deliveries × quantity per delivery).
    #[inline]
    pub fn total_quantity(&self) -> i64 {
        self.total_quantity
    }

    /// Amount billed for the period.
    #[inline]
    pub fn total_amount(&self) -> Decimal {
        self.total_amount
    }

    /// Calendar days in the period, independent of the delivery count.
    #[inline]
    pub fn days_in_period(&self) -> u32 {
        self.days_in_period
    }
}

/// Validates the per-delivery quantity and unit price.
///
/// # Errors
///
/// Returns `InvalidScheduleInput` when `quantity_per_delivery <= 0` or
/// `unit_price < 0`.
pub fn validate_billing_inputs(
    quantity_per_delivery: i64,
    unit_price: Decimal,
) -> Result<(), ScheduleError> {
    if quantity_per_delivery <= 0 {
        return Err(ScheduleError::non_positive_quantity(quantity_per_delivery));
    }
    if unit_price.is_sign_negative() && !unit_price.is_zero() {
        return Err(ScheduleError::negative_unit_price(unit_price));
    }
    Ok(())
}

/// Folds a delivery sequence into a [`ScheduleSummary`].
///
/// The sequence is consumed exactly once. `days_in_period` comes from the
/// period boundaries, not from the sequence.
///
/// # Errors
///
/// Returns `InvalidScheduleInput` when `quantity_per_delivery <= 0`,
/// `unit_price < 0`, or the total overflows the decimal range.
pub fn aggregate<I>(
    period: &BillingPeriod,
    occurrences: I,
    quantity_per_delivery: i64,
    unit_price: Decimal,
) -> Result<ScheduleSummary, ScheduleError>
where
    I: IntoIterator<Item = Date>,
{
    validate_billing_inputs(quantity_per_delivery, unit_price)?;

    let total_deliveries = occurrences.into_iter().count() as u32;
    let total_quantity = i64::from(total_deliveries)
        .checked_mul(quantity_per_delivery)
        .ok_or_else(|| ScheduleError::invalid("total quantity overflows"))?;
    let total_amount = Decimal::from(total_quantity)
        .checked_mul(unit_price)
        .ok_or_else(|| ScheduleError::invalid("total amount overflows"))?;

    Ok(ScheduleSummary::from_parts(
        total_deliveries,
        total_quantity,
        total_amount,
        period.days_in_period(),
    ))
}
