//! Validated calculator input.
//!
//! This module defines [`EarningsInput`], the immutable value handed to the
//! calculator, and [`WeeklyHours`], the range-checked hour count it carries.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EstimatorError, EstimatorResult};

use super::CarCategory;

/// The fewest weekly hours the estimator accepts.
pub const MIN_WEEKLY_HOURS: u32 = 20;

/// The most weekly hours the estimator accepts.
pub const MAX_WEEKLY_HOURS: u32 = 90;

/// Hours worked per week, always within `20..=90`.
///
/// # Example
///
/// ```
/// use driver_earnings::models::WeeklyHours;
///
/// assert!(WeeklyHours::new(20).is_ok());
/// assert!(WeeklyHours::new(90).is_ok());
/// assert!(WeeklyHours::new(19).is_err());
/// assert!(WeeklyHours::new(91).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct WeeklyHours(u32);

impl WeeklyHours {
    /// Creates a new hour count, rejecting values outside `20..=90`.
    pub fn new(hours: u32) -> EstimatorResult<Self> {
        if (MIN_WEEKLY_HOURS..=MAX_WEEKLY_HOURS).contains(&hours) {
            Ok(Self(hours))
        } else {
            Err(EstimatorError::InvalidHours {
                value: hours.to_string(),
            })
        }
    }

    /// Returns the hour count.
    pub fn get(self) -> u32 {
        self.0
    }

    /// Returns the hour count as a decimal.
    pub fn as_decimal(self) -> Decimal {
        Decimal::from(self.0)
    }
}

impl TryFrom<u32> for WeeklyHours {
    type Error = EstimatorError;

    fn try_from(hours: u32) -> Result<Self, Self::Error> {
        Self::new(hours)
    }
}

impl From<WeeklyHours> for u32 {
    fn from(hours: WeeklyHours) -> Self {
        hours.0
    }
}

impl fmt::Display for WeeklyHours {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Everything the calculator needs for one estimate.
///
/// `time_multipliers` may be empty. Values outside `[0.5, 2.0]` are
/// tolerated here and dropped when the average is taken.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EarningsInput {
    /// Hours driven per week.
    pub hours_per_week: WeeklyHours,
    /// Multipliers of the selected time slots.
    #[serde(default)]
    pub time_multipliers: Vec<Decimal>,
    /// Whether the driver also works weekends.
    pub works_weekend: bool,
    /// The vehicle class driven.
    pub car_category: CarCategory,
}

impl EarningsInput {
    /// Creates a new input.
    pub fn new(
        hours_per_week: WeeklyHours,
        time_multipliers: Vec<Decimal>,
        works_weekend: bool,
        car_category: CarCategory,
    ) -> Self {
        Self {
            hours_per_week,
            time_multipliers,
            works_weekend,
            car_category,
        }
    }
}
