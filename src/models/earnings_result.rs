//! Calculation result models.
//!
//! This module contains the [`EarningsResult`] figures returned by the
//! calculator, and the [`EarningsCalculation`] wrapper that pairs them with
//! an audit trace explaining each step.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Weekly gross and net earnings with the cost breakdown behind them.
///
/// The gross and net figures are rounded to two decimal places. The costs
/// are exact; `fuel_cost` and `total_cost` are shown with two decimal places
/// when rendered.
///
/// # Example
///
/// ```
/// use driver_earnings::calculation::compute;
/// use driver_earnings::models::{CarCategory, EarningsInput, WeeklyHours};
/// use rust_decimal::Decimal;
///
/// let input = EarningsInput::new(WeeklyHours::new(40).unwrap(), vec![], false, CarCategory::Normal);
/// let result = compute(&input);
/// assert_eq!(result.net_weekly, Decimal::new(35000, 2));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EarningsResult {
    /// Gross earnings per hour before costs.
    pub gross_hourly: Decimal,
    /// Gross earnings per week before costs.
    pub gross_weekly: Decimal,
    /// Weekly ownership/lease cost of the car.
    pub vehicle_cost: Decimal,
    /// Weekly fuel cost.
    pub fuel_cost: Decimal,
    /// Weekly cleaning, parking and data cost.
    pub other_costs: Decimal,
    /// Sum of all weekly costs.
    pub total_cost: Decimal,
    /// Earnings per week after costs.
    pub net_weekly: Decimal,
    /// Earnings per hour after costs.
    pub net_hourly: Decimal,
    /// Earnings per month after costs.
    pub net_monthly: Decimal,
}

/// A single step in the audit trace recording how a figure was derived.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number, starting at 1.
    pub step_number: u32,
    /// The identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the step.
    pub reasoning: String,
}

/// The result of a calculation together with its audit trace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EarningsCalculation {
    /// The calculated figures.
    pub result: EarningsResult,
    /// Every step taken to reach `result`, in order.
    pub audit_trace: Vec<AuditStep>,
}
