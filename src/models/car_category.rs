//! Car category model.
//!
//! The vehicle class a driver works with decides both the fare multiplier
//! applied to the base rate and the fixed weekly cost of owning or leasing
//! the car. Both lookups are exhaustive matches, so adding a category is a
//! compile-time-checked change.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::EstimatorError;

/// One of the three vehicle classes a driver can select.
///
/// The serialised names follow the form values: `normal`, `executive` and
/// `seater`. `seven_seater` is accepted as an alias when deserialising.
///
/// # Example
///
/// ```
/// use driver_earnings::models::CarCategory;
/// use std::str::FromStr;
///
/// let category = CarCategory::from_str("seater").unwrap();
/// assert_eq!(category, CarCategory::SevenSeater);
/// assert_eq!(category.description(), "7-seater car");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CarCategory {
    /// A standard saloon or hatchback.
    Normal,
    /// An executive-class car.
    Executive,
    /// A seven-seat people carrier.
    #[serde(rename = "seater", alias = "seven_seater")]
    SevenSeater,
}

impl CarCategory {
    /// All categories in form order.
    pub const ALL: [CarCategory; 3] = [
        CarCategory::Normal,
        CarCategory::Executive,
        CarCategory::SevenSeater,
    ];

    /// Returns the fare multiplier for this category.
    pub fn multiplier(self) -> Decimal {
        match self {
            CarCategory::Normal => Decimal::ONE,
            CarCategory::Executive => Decimal::new(125, 2),
            CarCategory::SevenSeater => Decimal::new(12, 1),
        }
    }

    /// Returns the weekly ownership/lease cost in pounds.
    pub fn weekly_cost(self) -> Decimal {
        match self {
            CarCategory::Normal => Decimal::from(230),
            CarCategory::Executive => Decimal::from(300),
            CarCategory::SevenSeater => Decimal::from(270),
        }
    }

    /// Returns the phrase used in the "Based on" line of a breakdown.
    pub fn description(self) -> &'static str {
        match self {
            CarCategory::Normal => "normal car",
            CarCategory::Executive => "executive car",
            CarCategory::SevenSeater => "7-seater car",
        }
    }

    /// Returns the form value for this category.
    pub fn as_str(self) -> &'static str {
        match self {
            CarCategory::Normal => "normal",
            CarCategory::Executive => "executive",
            CarCategory::SevenSeater => "seater",
        }
    }
}

impl fmt::Display for CarCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CarCategory {
    type Err = EstimatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "normal" => Ok(CarCategory::Normal),
            "executive" => Ok(CarCategory::Executive),
            "seater" | "seven_seater" | "7_seater" => Ok(CarCategory::SevenSeater),
            _ => Err(EstimatorError::UnknownCarCategory {
                value: s.to_string(),
            }),
        }
    }
}
