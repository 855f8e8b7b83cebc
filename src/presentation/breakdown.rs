//! Human-readable earnings breakdown.
//!
//! The breakdown has the same sections as the estimator's result card: a
//! gross earnings headline, the inputs it was based on, the weekly costs and
//! the net figures. It serializes as structured lines for the API and
//! displays as plain text for the CLI.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::calculation::{format_pounds, format_pounds_fixed};
use crate::models::{EarningsInput, EarningsResult, TimeSlot, describe_time_slots};

/// The title shown above a breakdown.
pub const BREAKDOWN_TITLE: &str = "Your Earnings Estimate";

/// A rendered earnings breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EarningsBreakdown {
    /// `Gross Earnings: £x/hour (£y/week)`.
    pub gross: String,
    /// `Based on: ...` describing the inputs.
    pub based_on: String,
    /// One line per weekly cost.
    pub costs: Vec<String>,
    /// `Total Weekly Costs: £x.xx`.
    pub total_cost: String,
    /// `Net Weekly: £x`.
    pub net_weekly: String,
    /// `Net Hourly: £x`.
    pub net_hourly: String,
    /// `Net Monthly: £x`.
    pub net_monthly: String,
}

impl EarningsBreakdown {
    /// Builds the breakdown for a result and the input it came from.
    ///
    /// `time_slots` are the ticked slots, used only to describe the shift
    /// pattern.
    ///
    /// # Example
    ///
    /// ```
    /// use driver_earnings::calculation::compute;
    /// use driver_earnings::models::{CarCategory, EarningsInput, WeeklyHours};
    /// use driver_earnings::presentation::EarningsBreakdown;
    ///
    /// let input = EarningsInput::new(WeeklyHours::new(40).unwrap(), vec![], false, CarCategory::Normal);
    /// let breakdown = EarningsBreakdown::new(&input, &[], &compute(&input));
    /// assert_eq!(breakdown.net_weekly, "Net Weekly: £350");
    /// assert_eq!(breakdown.total_cost, "Total Weekly Costs: £370.00");
    /// ```
    pub fn new(input: &EarningsInput, time_slots: &[TimeSlot], result: &EarningsResult) -> Self {
        Self {
            gross: format!(
                "Gross Earnings: {}/hour ({}/week)",
                format_pounds(result.gross_hourly),
                format_pounds(result.gross_weekly)
            ),
            based_on: format!("Based on: {}", describe_inputs(input, time_slots)),
            costs: vec![
                format!("Vehicle: {}", format_pounds(result.vehicle_cost)),
                format!("Fuel: {}", format_pounds_fixed(result.fuel_cost)),
                format!(
                    "Cleaning, parking & data: {}",
                    format_pounds(result.other_costs)
                ),
            ],
            total_cost: format!(
                "Total Weekly Costs: {}",
                format_pounds_fixed(result.total_cost)
            ),
            net_weekly: format!("Net Weekly: {}", format_pounds(result.net_weekly)),
            net_hourly: format!("Net Hourly: {}", format_pounds(result.net_hourly)),
            net_monthly: format!("Net Monthly: {}", format_pounds(result.net_monthly)),
        }
    }
}

impl fmt::Display for EarningsBreakdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", BREAKDOWN_TITLE)?;
        writeln!(f)?;
        writeln!(f, "{}", self.gross)?;
        writeln!(f, "{}", self.based_on)?;
        writeln!(f)?;
        writeln!(f, "Weekly Costs:")?;
        for line in &self.costs {
            writeln!(f, "  • {}", line)?;
        }
        writeln!(f, "{}", self.total_cost)?;
        writeln!(f)?;
        writeln!(f, "{}", self.net_weekly)?;
        writeln!(f, "{}", self.net_hourly)?;
        write!(f, "{}", self.net_monthly)
    }
}

/// Describes the inputs as `40 hours/week, evenings, weekend work, normal car`.
pub fn describe_inputs(input: &EarningsInput, time_slots: &[TimeSlot]) -> String {
    let weekend = if input.works_weekend {
        "weekend work"
    } else {
        "weekdays only"
    };

    format!(
        "{} hours/week, {}, {}, {}",
        input.hours_per_week,
        describe_time_slots(time_slots),
        weekend,
        input.car_category.description()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::compute;
    use crate::models::{CarCategory, WeeklyHours};
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn baseline_input() -> EarningsInput {
        EarningsInput::new(
            WeeklyHours::new(40).unwrap(),
            vec![],
            false,
            CarCategory::Normal,
        )
    }

    #[test]
    fn test_baseline_breakdown_lines() {
        let input = baseline_input();
        let breakdown = EarningsBreakdown::new(&input, &[], &compute(&input));

        assert_eq!(breakdown.gross, "Gross Earnings: £18/hour (£720/week)");
        assert_eq!(
            breakdown.based_on,
            "Based on: 40 hours/week, no specific times, weekdays only, normal car"
        );
        assert_eq!(
            breakdown.costs,
            vec![
                "Vehicle: £230".to_string(),
                "Fuel: £100.00".to_string(),
                "Cleaning, parking & data: £40".to_string(),
            ]
        );
        assert_eq!(breakdown.total_cost, "Total Weekly Costs: £370.00");
        assert_eq!(breakdown.net_weekly, "Net Weekly: £350");
        assert_eq!(breakdown.net_hourly, "Net Hourly: £8.75");
        assert_eq!(breakdown.net_monthly, "Net Monthly: £1515.5");
    }

    #[test]
    fn test_based_on_with_slots_and_weekend() {
        let input = EarningsInput::new(
            WeeklyHours::new(60).unwrap(),
            vec![dec("1.2"), dec("1.5")],
            true,
            CarCategory::Executive,
        );

        assert_eq!(
            describe_inputs(&input, &[TimeSlot::Evening, TimeSlot::LateNight]),
            "60 hours/week, evenings & late nights, weekend work, executive car"
        );
    }

    #[test]
    fn test_display_renders_all_sections() {
        let input = baseline_input();
        let text = EarningsBreakdown::new(&input, &[], &compute(&input)).to_string();

        assert!(text.starts_with("Your Earnings Estimate"));
        assert!(text.contains("Weekly Costs:"));
        assert!(text.contains("  • Fuel: £100.00"));
        assert!(text.ends_with("Net Monthly: £1515.5"));
    }

    #[test]
    fn test_only_fuel_and_total_are_padded() {
        let input = EarningsInput::new(
            WeeklyHours::new(60).unwrap(),
            vec![dec("1.2"), dec("1.5")],
            true,
            CarCategory::Executive,
        );
        let breakdown = EarningsBreakdown::new(&input, &[], &compute(&input));

        assert_eq!(breakdown.gross, "Gross Earnings: £33.41/hour (£2004.75/week)");
        assert_eq!(breakdown.costs[0], "Vehicle: £300");
        assert_eq!(breakdown.costs[1], "Fuel: £150.00");
        assert_eq!(breakdown.total_cost, "Total Weekly Costs: £490.00");
        assert_eq!(breakdown.net_monthly, "Net Monthly: £6558.87");
    }

    #[test]
    fn test_negative_net_is_signed() {
        let input = EarningsInput::new(
            WeeklyHours::new(20).unwrap(),
            vec![dec("0.5")],
            false,
            CarCategory::Normal,
        );
        let breakdown = EarningsBreakdown::new(&input, &[TimeSlot::EarlyMorning], &compute(&input));

        assert_eq!(breakdown.net_weekly, "Net Weekly: -£140");
        assert_eq!(breakdown.net_hourly, "Net Hourly: -£7");
        assert_eq!(breakdown.net_monthly, "Net Monthly: -£606.2");
    }
}
