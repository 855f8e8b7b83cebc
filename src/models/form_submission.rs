//! Raw form values and their validation.
//!
//! A [`FormSubmission`] mirrors what the estimator form sends: every field
//! may be missing or malformed. [`FormSubmission::validate`] turns it into an
//! [`EarningsInput`] or reports the first advisory problem, checking hours,
//! then the weekend choice, then the car category.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::calculation::is_valid_time_multiplier;
use crate::error::{EstimatorError, EstimatorResult};

use super::{CarCategory, EarningsInput, TimeSlot, WeeklyHours, WorkTimeSelection};

/// The weekend radio choice.
///
/// Deserializes through [`FromStr`], so JSON accepts the same spellings as
/// the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", try_from = "String")]
pub enum WeekendChoice {
    /// Works weekends as well.
    Yes,
    /// Weekdays only.
    No,
}

impl WeekendChoice {
    /// Returns true when the choice is `Yes`.
    pub fn works_weekend(self) -> bool {
        matches!(self, WeekendChoice::Yes)
    }
}

impl FromStr for WeekendChoice {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "yes" | "y" | "true" => Ok(WeekendChoice::Yes),
            "no" | "n" | "false" => Ok(WeekendChoice::No),
            other => Err(format!("expected yes or no, got '{}'", other)),
        }
    }
}

impl TryFrom<String> for WeekendChoice {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// The hours field as submitted, either a number or form text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum HoursField {
    /// A whole number.
    Whole(i64),
    /// A fractional number, truncated towards zero.
    Fractional(f64),
    /// Text from a form control.
    Text(String),
}

impl HoursField {
    /// Returns the whole number of hours, if one can be read.
    ///
    /// Text is read like a form integer: leading whitespace and an optional
    /// sign, then as many digits as follow. `"40 hours"` reads as 40, `"abc"`
    /// reads as nothing.
    pub fn whole_hours(&self) -> Option<i64> {
        match self {
            HoursField::Whole(hours) => Some(*hours),
            HoursField::Fractional(hours) if hours.is_finite() => Some(hours.trunc() as i64),
            HoursField::Fractional(_) => None,
            HoursField::Text(text) => parse_leading_integer(text),
        }
    }
}

impl fmt::Display for HoursField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HoursField::Whole(hours) => write!(f, "{}", hours),
            HoursField::Fractional(hours) => write!(f, "{}", hours),
            HoursField::Text(text) => f.write_str(text),
        }
    }
}

fn parse_leading_integer(text: &str) -> Option<i64> {
    let trimmed = text.trim_start();
    let (sign, rest) = match trimmed.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };

    let digits: String = rest.chars().take_while(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return None;
    }

    digits.parse::<i64>().ok().map(|value| sign * value)
}

/// The estimator form as submitted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FormSubmission {
    /// Weekly hours from the slider.
    #[serde(default)]
    pub hours: Option<HoursField>,
    /// Ticked time slots with their multipliers.
    #[serde(default)]
    pub work_times: Vec<WorkTimeSelection>,
    /// The weekend radio choice, if one was made.
    #[serde(default)]
    pub weekend: Option<WeekendChoice>,
    /// The car category radio value, if one was made.
    #[serde(default)]
    pub car_category: Option<String>,
}

/// A form that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedForm {
    /// The calculator input.
    pub input: EarningsInput,
    /// Every slot that was ticked, in form order, for the description.
    pub time_slots: Vec<TimeSlot>,
}

impl FormSubmission {
    /// Validates the form into calculator input.
    ///
    /// Multipliers outside `[0.5, 2.0]` are dropped without an error.
    ///
    /// # Errors
    ///
    /// - `InvalidHours` when hours are missing, unparseable or outside 20..=90
    /// - `MissingWeekendChoice` when no weekend option was chosen
    /// - `MissingCarCategory` when no car category was chosen
    /// - `UnknownCarCategory` when the car value is not recognised
    ///
    /// # Example
    ///
    /// ```
    /// use driver_earnings::models::{FormSubmission, HoursField, WeekendChoice};
    ///
    /// let form = FormSubmission {
    ///     hours: Some(HoursField::Text("40".to_string())),
    ///     work_times: vec![],
    ///     weekend: Some(WeekendChoice::No),
    ///     car_category: Some("normal".to_string()),
    /// };
    /// let validated = form.validate().unwrap();
    /// assert_eq!(validated.input.hours_per_week.get(), 40);
    /// ```
    pub fn validate(&self) -> EstimatorResult<ValidatedForm> {
        let hours_per_week = self.validate_hours()?;

        let time_multipliers = self
            .work_times
            .iter()
            .map(|selection| selection.multiplier)
            .filter(|multiplier| {
                let valid = is_valid_time_multiplier(*multiplier);
                if !valid {
                    debug!(multiplier = %multiplier, "Dropping out-of-range time multiplier");
                }
                valid
            })
            .collect();
        let time_slots = self.work_times.iter().map(|selection| selection.slot).collect();

        let works_weekend = self
            .weekend
            .ok_or(EstimatorError::MissingWeekendChoice)?
            .works_weekend();

        let car_category = match self.car_category.as_deref() {
            None => return Err(EstimatorError::MissingCarCategory),
            Some(value) if value.trim().is_empty() => {
                return Err(EstimatorError::MissingCarCategory);
            }
            Some(value) => CarCategory::from_str(value)?,
        };

        Ok(ValidatedForm {
            input: EarningsInput::new(hours_per_week, time_multipliers, works_weekend, car_category),
            time_slots,
        })
    }

    fn validate_hours(&self) -> EstimatorResult<WeeklyHours> {
        let field = self.hours.as_ref().ok_or_else(|| EstimatorError::InvalidHours {
            value: String::new(),
        })?;

        let invalid = || EstimatorError::InvalidHours {
            value: field.to_string(),
        };

        let hours = field.whole_hours().ok_or_else(invalid)?;
        let hours = u32::try_from(hours).map_err(|_| invalid())?;
        WeeklyHours::new(hours).map_err(|_| invalid())
    }
}
