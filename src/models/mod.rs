//! Core data models for the earnings estimator.
//!
//! This module contains the domain types passed into and out of the
//! calculator, plus the raw form model that is validated into them.

mod car_category;
mod earnings_input;
mod earnings_result;
mod form_submission;
mod time_slot;

pub use car_category::CarCategory;
pub use earnings_input::{EarningsInput, MAX_WEEKLY_HOURS, MIN_WEEKLY_HOURS, WeeklyHours};
pub use earnings_result::{AuditStep, EarningsCalculation, EarningsResult};
pub use form_submission::{FormSubmission, HoursField, ValidatedForm, WeekendChoice};
pub use time_slot::{TimeSlot, WorkTimeSelection, describe_time_slots};
