//! DeliverySchedule, DeliveryScheduleBuilder and the `evaluate` entry point.

use rust_decimal::Decimal;
use schedule_core::clock::{minimum_start_date, ClockProvider};
use schedule_core::types::Date;

use super::billing::{aggregate, validate_billing_inputs, ScheduleSummary};
use super::error::ScheduleError;
use super::frequency::DeliveryFrequency;
use super::occurrence::{enumerate_occurrences, next_occurrence_on_or_after, Occurrences};
use super::period::{resolve_period, BillingPeriod};

/// Input of one schedule evaluation, as supplied by the embedding layer.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScheduleRequest {
    /// Raw subscription start date.
    pub start_date: Date,
    /// Delivery recurrence, including custom weekdays.
    pub frequency: DeliveryFrequency,
    /// Units delivered per occurrence. Must be positive.
    pub quantity_per_delivery: i64,
    /// Price of one unit. Must not be negative.
    pub unit_price: Decimal,
}

/// Result of one schedule evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ScheduleQuote {
    /// The effective billing period.
    pub period: BillingPeriod,
    /// Delivery count and cost for the period.
    pub summary: ScheduleSummary,
}

/// Runs the full pipeline: period resolution, occurrence enumeration and
/// billing aggregation.
///
/// Pure: the same request always produces the same quote.
///
/// # Examples
///
/// ```
/// use rust_decimal::Decimal;
/// use schedule_engine::schedules::{evaluate, DeliveryFrequency, ScheduleRequest};
/// use schedule_core::types::Date;
///
/// let quote = evaluate(&ScheduleRequest {
///     start_date: Date::from_ymd(2026, 1, 31).unwrap(),
///     frequency: DeliveryFrequency::Daily,
///     quantity_per_delivery: 1,
///     unit_price: Decimal::new(30, 0),
/// })
/// .unwrap();
///
/// assert!(quote.period.rolled_to_next_month());
/// assert_eq!(quote.summary.total_deliveries(), 28);
/// assert_eq!(quote.summary.total_amount(), Decimal::new(840, 0));
/// ```
///
/// # Errors
///
/// Returns `InvalidScheduleInput` for a non-positive quantity or a negative
/// unit price.
pub fn evaluate(request: &ScheduleRequest) -> Result<ScheduleQuote, ScheduleError> {
    let period = resolve_period(request.start_date);
    let summary = aggregate(
        &period,
        enumerate_occurrences(&period, &request.frequency),
        request.quantity_per_delivery,
        request.unit_price,
    )?;

    tracing::debug!(
        start_date = %request.start_date,
        frequency = %request.frequency,
        period = %period,
        rolled_to_next_month = period.rolled_to_next_month(),
        total_deliveries = summary.total_deliveries(),
        total_amount = %summary.total_amount(),
        "evaluated delivery schedule"
    );

    Ok(ScheduleQuote { period, summary })
}

/// Checks a requested start date against the earliest allowed start (tomorrow).
///
/// Kept apart from [`evaluate`], which never consults the clock.
///
/// # Examples
///
/// ```
/// use schedule_engine::schedules::check_start_date;
/// use schedule_core::clock::FixedClock;
/// use schedule_core::types::Date;
///
/// let clock = FixedClock::new(Date::from_ymd(2026, 1, 14).unwrap());
/// assert!(check_start_date(Date::from_ymd(2026, 1, 15).unwrap(), &clock).is_ok());
/// assert!(check_start_date(Date::from_ymd(2026, 1, 14).unwrap(), &clock).is_err());
/// ```
///
/// # Errors
///
/// Returns `StartDateTooEarly` when `start` is before tomorrow.
pub fn check_start_date(start: Date, clock: &dyn ClockProvider) -> Result<(), ScheduleError> {
    let minimum = minimum_start_date(clock);
    if start < minimum {
        tracing::debug!(%start, %minimum, "rejected start date before minimum");
        return Err(ScheduleError::StartDateTooEarly { start, minimum });
    }
    Ok(())
}

/// A validated subscription schedule with its resolved billing period.
///
/// # Examples
///
/// ```
/// use rust_decimal::Decimal;
/// use schedule_engine::schedules::{DeliveryFrequency, DeliveryScheduleBuilder};
/// use schedule_core::types::Date;
///
/// let schedule = DeliveryScheduleBuilder::new()
///     .start(Date::from_ymd(2026, 3, 1).unwrap())
///     .frequency("custom:sun".parse::<DeliveryFrequency>().unwrap())
///     .quantity(2)
///     .unit_price(Decimal::new(35, 0))
///     .build()
///     .unwrap();
///
/// assert_eq!(schedule.delivery_dates().len(), 5); // five Sundays in March 2026
/// assert_eq!(schedule.summary().total_amount(), Decimal::new(350, 0));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliverySchedule {
    start_date: Date,
    frequency: DeliveryFrequency,
    quantity_per_delivery: i64,
    unit_price: Decimal,
    period: BillingPeriod,
}

impl DeliverySchedule {
    /// Returns the raw start date the schedule was built from.
    #[inline]
    pub fn start_date(&self) -> Date {
        self.start_date
    }

    /// Returns the delivery frequency.
    #[inline]
    pub fn frequency(&self) -> &DeliveryFrequency {
        &self.frequency
    }

    /// Returns the units delivered per occurrence.
    #[inline]
    pub fn quantity_per_delivery(&self) -> i64 {
        self.quantity_per_delivery
    }

    /// Returns the unit price.
    #[inline]
    pub fn unit_price(&self) -> Decimal {
        self.unit_price
    }

    /// Returns the resolved billing period.
    #[inline]
    pub fn period(&self) -> &BillingPeriod {
        &self.period
    }

    /// Returns a fresh sequence of delivery dates.
    pub fn occurrences(&self) -> Occurrences {
        enumerate_occurrences(&self.period, &self.frequency)
    }

    /// Collects the delivery dates of the period.
    pub fn delivery_dates(&self) -> Vec<Date> {
        self.occurrences().collect()
    }

    /// Returns the first delivery on or after `date`, if any remains.
    pub fn next_delivery_on_or_after(&self, date: Date) -> Option<Date> {
        next_occurrence_on_or_after(&self.period, &self.frequency, date)
    }

    /// Computes the billing summary of the period.
    pub fn summary(&self) -> ScheduleSummary {
        let total_deliveries = self.occurrences().count() as u32;
        let total_quantity = i64::from(total_deliveries) * self.quantity_per_delivery;
        ScheduleSummary::from_parts(
            total_deliveries,
            total_quantity,
            Decimal::from(total_quantity) * self.unit_price,
            self.period.days_in_period(),
        )
    }

    /// Returns the period and summary together.
    pub fn quote(&self) -> ScheduleQuote {
        ScheduleQuote {
            period: self.period.clone(),
            summary: self.summary(),
        }
    }
}

/// Builder for constructing delivery schedules.
///
/// Quantity defaults to 1; start date, frequency and unit price are required.
#[derive(Debug, Clone)]
pub struct DeliveryScheduleBuilder {
    start_date: Option<Date>,
    frequency: Option<DeliveryFrequency>,
    quantity_per_delivery: i64,
    unit_price: Option<Decimal>,
}

impl Default for DeliveryScheduleBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl DeliveryScheduleBuilder {
    /// Creates a new builder with a quantity of 1 per delivery.
    pub fn new() -> Self {
        Self {
            start_date: None,
            frequency: None,
            quantity_per_delivery: 1,
            unit_price: None,
        }
    }

    /// Sets the raw subscription start date.
    pub fn start(mut self, date: Date) -> Self {
        self.start_date = Some(date);
        self
    }

    /// Sets the delivery frequency.
    pub fn frequency(mut self, frequency: DeliveryFrequency) -> Self {
        self.frequency = Some(frequency);
        self
    }

    /// Sets the units delivered per occurrence.
    pub fn quantity(mut self, quantity: i64) -> Self {
        self.quantity_per_delivery = quantity;
        self
    }

    /// Sets the unit price.
    pub fn unit_price(mut self, price: Decimal) -> Self {
        self.unit_price = Some(price);
        self
    }

    /// Builds the schedule.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Start date, frequency or unit price is missing
    /// - Quantity is not positive
    /// - Unit price is negative
    /// - The period total does not fit the decimal range
    pub fn build(self) -> Result<DeliverySchedule, ScheduleError> {
        let start_date = self
            .start_date
            .ok_or(ScheduleError::MissingField { field: "start" })?;
        let frequency = self
            .frequency
            .ok_or(ScheduleError::MissingField { field: "frequency" })?;
        let unit_price = self
            .unit_price
            .ok_or(ScheduleError::MissingField { field: "unit_price" })?;

        validate_billing_inputs(self.quantity_per_delivery, unit_price)?;

        let period = resolve_period(start_date);
        // Guarantees `summary()` arithmetic cannot overflow afterwards.
        aggregate(
            &period,
            enumerate_occurrences(&period, &frequency),
            self.quantity_per_delivery,
            unit_price,
        )?;

        Ok(DeliverySchedule {
            start_date,
            frequency,
            quantity_per_delivery: self.quantity_per_delivery,
            unit_price,
            period,
        })
    }
}

impl TryFrom<&ScheduleRequest> for DeliverySchedule {
    type Error = ScheduleError;

    fn try_from(request: &ScheduleRequest) -> Result<Self, Self::Error> {
        DeliveryScheduleBuilder::new()
            .start(request.start_date)
            .frequency(request.frequency)
            .quantity(request.quantity_per_delivery)
            .unit_price(request.unit_price)
            .build()
    }
}
