//! Time-of-day slots and the multipliers attached to them.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::EstimatorError;

/// A shift slot the driver can tick on the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeSlot {
    /// Early morning shifts.
    EarlyMorning,
    /// Afternoon shifts.
    Afternoon,
    /// Evening shifts.
    Evening,
    /// Late night shifts.
    LateNight,
}

impl TimeSlot {
    /// Returns the plural phrase used in the "Based on" line.
    pub fn description(self) -> &'static str {
        match self {
            TimeSlot::EarlyMorning => "early mornings",
            TimeSlot::Afternoon => "afternoons",
            TimeSlot::Evening => "evenings",
            TimeSlot::LateNight => "late nights",
        }
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TimeSlot::EarlyMorning => "early_morning",
            TimeSlot::Afternoon => "afternoon",
            TimeSlot::Evening => "evening",
            TimeSlot::LateNight => "late_night",
        };
        f.write_str(name)
    }
}

impl FromStr for TimeSlot {
    type Err = EstimatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .map(|c| c.to_ascii_lowercase())
            .collect();

        match normalized.as_str() {
            "earlymorning" => Ok(TimeSlot::EarlyMorning),
            "afternoon" => Ok(TimeSlot::Afternoon),
            "evening" => Ok(TimeSlot::Evening),
            "latenight" => Ok(TimeSlot::LateNight),
            _ => Err(EstimatorError::UnknownTimeSlot {
                value: s.to_string(),
            }),
        }
    }
}

/// A ticked time slot together with the multiplier its checkbox carries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkTimeSelection {
    /// The slot that was ticked.
    pub slot: TimeSlot,
    /// The fare multiplier for that slot.
    pub multiplier: Decimal,
}

impl WorkTimeSelection {
    /// Creates a new selection.
    pub fn new(slot: TimeSlot, multiplier: Decimal) -> Self {
        Self { slot, multiplier }
    }
}

impl FromStr for WorkTimeSelection {
    type Err = EstimatorError;

    /// Parses `slot=multiplier`, e.g. `late-night=1.5`.
    ///
    /// The multiplier must be present and numeric. A number outside
    /// 0.5..=2.0 is accepted here and dropped later by validation.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || EstimatorError::InvalidTimeSelection {
            value: s.to_string(),
        };
        let (slot, multiplier) = s.split_once('=').ok_or_else(invalid)?;
        let slot = TimeSlot::from_str(slot)?;
        let multiplier = Decimal::from_str(multiplier.trim()).map_err(|_| invalid())?;
        Ok(Self { slot, multiplier })
    }
}

/// Joins slot descriptions the way the breakdown reads them.
///
/// No slots gives `no specific times`, two slots are joined with ` & `, and
/// three or more use commas with ` & ` before the last one.
///
/// # Example
///
/// ```
/// use driver_earnings::models::{describe_time_slots, TimeSlot};
///
/// let text = describe_time_slots(&[TimeSlot::EarlyMorning, TimeSlot::Evening, TimeSlot::LateNight]);
/// assert_eq!(text, "early mornings, evenings & late nights");
/// ```
pub fn describe_time_slots(slots: &[TimeSlot]) -> String {
    let descriptions: Vec<&str> = slots.iter().map(|slot| slot.description()).collect();

    match descriptions.as_slice() {
        [] => "no specific times".to_string(),
        [only] => (*only).to_string(),
        [first, second] => format!("{} & {}", first, second),
        [init @ .., last] => format!("{} & {}", init.join(", "), last),
    }
}
