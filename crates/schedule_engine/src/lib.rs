//! # schedule_engine: Recurring Delivery Schedule & Billing Period Engine
//!
//! ## Engine Layer Role
//!
//! Given a subscription's start date and delivery frequency, this crate
//! determines:
//! - the effective billing period (`schedules::resolve_period`)
//! - every delivery date within it (`schedules::enumerate_occurrences`)
//! - the delivery count and cost for the period (`schedules::aggregate`)
//!
//! The pipeline is a chain of pure functions. Nothing is cached, persisted or
//! shared between calls, so evaluations may run concurrently without
//! coordination. The only notion of "now" comes from an injected
//! [`schedule_core::clock::ClockProvider`], and only
//! `schedules::check_start_date` consults it.
//!
//! ## Usage Examples
//!
//! ```rust
//! use rust_decimal::Decimal;
//! use schedule_engine::schedules::{evaluate, DeliveryFrequency, ScheduleRequest};
//! use schedule_core::types::Date;
//!
//! let quote = evaluate(&ScheduleRequest {
//!     start_date: Date::from_ymd(2026, 2, 28).unwrap(),
//!     frequency: "custom:mon,wed,fri".parse::<DeliveryFrequency>().unwrap(),
//!     quantity_per_delivery: 1,
//!     unit_price: Decimal::new(4500, 2),
//! })
//! .unwrap();
//!
//! assert_eq!(quote.period.label(), "Full Month (March)");
//! assert_eq!(quote.summary.total_deliveries(), 13);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` (default): Enable serialisation for requests, quotes and frequencies

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod schedules;
