//! Configuration types for the earnings estimator.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from the YAML configuration file. Every structure has a
//! default holding the built-in London figures, so a file only needs the
//! values it changes.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EstimatorError, EstimatorResult};
use crate::models::CarCategory;

/// Fare multiplier and weekly cost for one car category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarRate {
    /// Multiplier applied to the base hourly rate.
    pub multiplier: Decimal,
    /// Weekly ownership/lease cost.
    pub weekly_cost: Decimal,
}

impl From<CarCategory> for CarRate {
    fn from(category: CarCategory) -> Self {
        Self {
            multiplier: category.multiplier(),
            weekly_cost: category.weekly_cost(),
        }
    }
}

/// Car rates for every category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarRates {
    /// Rates for a normal car.
    pub normal: CarRate,
    /// Rates for an executive car.
    pub executive: CarRate,
    /// Rates for a 7-seater.
    pub seven_seater: CarRate,
}

impl CarRates {
    /// Returns the rates for a category.
    pub fn get(&self, category: CarCategory) -> &CarRate {
        match category {
            CarCategory::Normal => &self.normal,
            CarCategory::Executive => &self.executive,
            CarCategory::SevenSeater => &self.seven_seater,
        }
    }
}

impl Default for CarRates {
    fn default() -> Self {
        Self {
            normal: CarCategory::Normal.into(),
            executive: CarCategory::Executive.into(),
            seven_seater: CarCategory::SevenSeater.into(),
        }
    }
}

/// The constants of the earnings formula.
///
/// # Example
///
/// ```
/// use driver_earnings::config::RateCard;
/// use rust_decimal::Decimal;
///
/// let card = RateCard::default();
/// assert_eq!(card.base_rate, Decimal::from(18));
/// assert_eq!(card.weeks_per_month, Decimal::new(433, 2));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RateCard {
    /// Gross fare earnings per hour before multipliers.
    pub base_rate: Decimal,
    /// Fuel cost per hour driven.
    pub fuel_rate_per_hour: Decimal,
    /// Cleaning, parking and data cost per week.
    pub other_weekly_cost: Decimal,
    /// Multiplier applied when the driver works weekends.
    pub weekend_multiplier: Decimal,
    /// Average number of weeks in a month.
    pub weeks_per_month: Decimal,
    /// Per-category car rates.
    pub cars: CarRates,
}

impl Default for RateCard {
    fn default() -> Self {
        Self {
            base_rate: Decimal::from(18),
            fuel_rate_per_hour: Decimal::new(25, 1),
            other_weekly_cost: Decimal::from(40),
            weekend_multiplier: Decimal::new(11, 1),
            weeks_per_month: Decimal::new(433, 2),
            cars: CarRates::default(),
        }
    }
}

impl RateCard {
    /// Returns the weekend multiplier that applies to a driver.
    pub fn weekend_multiplier_for(&self, works_weekend: bool) -> Decimal {
        if works_weekend {
            self.weekend_multiplier
        } else {
            Decimal::ONE
        }
    }

    /// Checks that every value can be used by the formula.
    ///
    /// Rates and costs must not be negative. Multipliers and the weeks per
    /// month must be greater than zero.
    pub fn validate(&self) -> EstimatorResult<()> {
        let non_negative = [
            ("base_rate", self.base_rate),
            ("fuel_rate_per_hour", self.fuel_rate_per_hour),
            ("other_weekly_cost", self.other_weekly_cost),
            ("cars.normal.weekly_cost", self.cars.normal.weekly_cost),
            ("cars.executive.weekly_cost", self.cars.executive.weekly_cost),
            ("cars.seven_seater.weekly_cost", self.cars.seven_seater.weekly_cost),
        ];
        for (field, value) in non_negative {
            if value < Decimal::ZERO {
                return Err(invalid(field, "must not be negative"));
            }
        }

        let positive = [
            ("weekend_multiplier", self.weekend_multiplier),
            ("weeks_per_month", self.weeks_per_month),
            ("cars.normal.multiplier", self.cars.normal.multiplier),
            ("cars.executive.multiplier", self.cars.executive.multiplier),
            ("cars.seven_seater.multiplier", self.cars.seven_seater.multiplier),
        ];
        for (field, value) in positive {
            if value <= Decimal::ZERO {
                return Err(invalid(field, "must be greater than zero"));
            }
        }

        Ok(())
    }
}

fn invalid(field: &str, message: &str) -> EstimatorError {
    EstimatorError::InvalidConfig {
        field: field.to_string(),
        message: message.to_string(),
    }
}

/// Settings for the share links.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShareConfig {
    /// URL substituted for `[link]` when a request does not name its page.
    pub page_url: String,
    /// Subject line of the email share link.
    pub email_subject: String,
}

impl Default for ShareConfig {
    fn default() -> Self {
        Self {
            page_url: "http://localhost:3000/".to_string(),
            email_subject: "My London Uber Driver Earnings Estimate".to_string(),
        }
    }
}

/// The complete estimator configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EstimatorConfig {
    /// Formula constants.
    pub rates: RateCard,
    /// Share link settings.
    pub share: ShareConfig,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_default_rate_card_holds_london_figures() {
        let card = RateCard::default();
        assert_eq!(card.base_rate, dec("18.0"));
        assert_eq!(card.fuel_rate_per_hour, dec("2.5"));
        assert_eq!(card.other_weekly_cost, dec("40.0"));
        assert_eq!(card.weekend_multiplier, dec("1.1"));
        assert_eq!(card.weeks_per_month, dec("4.33"));
    }

    #[test]
    fn test_default_car_rates_match_categories() {
        let cars = CarRates::default();
        for category in CarCategory::ALL {
            let rate = cars.get(category);
            assert_eq!(rate.multiplier, category.multiplier());
            assert_eq!(rate.weekly_cost, category.weekly_cost());
        }
    }

    #[test]
    fn test_weekend_multiplier_for() {
        let card = RateCard::default();
        assert_eq!(card.weekend_multiplier_for(true), dec("1.1"));
        assert_eq!(card.weekend_multiplier_for(false), Decimal::ONE);
    }

    #[test]
    fn test_default_rate_card_is_valid() {
        assert!(RateCard::default().validate().is_ok());
    }

    #[test]
    fn test_negative_cost_is_invalid() {
        let card = RateCard {
            fuel_rate_per_hour: dec("-1"),
            ..RateCard::default()
        };
        match card.validate() {
            Err(EstimatorError::InvalidConfig { field, .. }) => {
                assert_eq!(field, "fuel_rate_per_hour")
            }
            other => panic!("Expected InvalidConfig, got {:?}", other),
        }
    }

    #[test]
    fn test_zero_multiplier_is_invalid() {
        let mut card = RateCard::default();
        card.cars.executive.multiplier = Decimal::ZERO;
        match card.validate() {
            Err(EstimatorError::InvalidConfig { field, message }) => {
                assert_eq!(field, "cars.executive.multiplier");
                assert_eq!(message, "must be greater than zero");
            }
            other => panic!("Expected InvalidConfig, got {:?}", other),
        }
    }

    #[test]
    fn test_default_share_config() {
        let share = ShareConfig::default();
        assert_eq!(share.email_subject, "My London Uber Driver Earnings Estimate");
    }
}
