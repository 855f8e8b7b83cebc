//! Weekly earnings calculation.
//!
//! This module turns an [`EarningsInput`] into gross and net earnings. The
//! calculation is a pure function of the input and the rate card: there is
//! no state between calls and no failure path.
//!
//! Every intermediate value is kept at full precision. Only the final gross
//! and net figures are rounded to pence.

use rust_decimal::Decimal;
use tracing::debug;

use crate::config::RateCard;
use crate::models::{AuditStep, EarningsCalculation, EarningsInput, EarningsResult};

use super::rounding::round_money;
use super::time_multiplier::{average_time_multiplier, is_valid_time_multiplier};

/// Calculates earnings with the built-in London rate card.
///
/// # Examples
///
/// ```
/// use driver_earnings::calculation::compute;
/// use driver_earnings::models::{CarCategory, EarningsInput, WeeklyHours};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let input = EarningsInput::new(
///     WeeklyHours::new(60).unwrap(),
///     vec![Decimal::from_str("1.2").unwrap(), Decimal::from_str("1.5").unwrap()],
///     true,
///     CarCategory::Executive,
/// );
///
/// let result = compute(&input);
/// assert_eq!(result.gross_hourly, Decimal::from_str("33.41").unwrap());
/// assert_eq!(result.net_weekly, Decimal::from_str("1514.75").unwrap());
/// assert_eq!(result.net_monthly, Decimal::from_str("6558.87").unwrap());
/// ```
pub fn compute(input: &EarningsInput) -> EarningsResult {
    compute_with_rates(input, &RateCard::default())
}

/// Calculates earnings with the given rate card.
pub fn compute_with_rates(input: &EarningsInput, rates: &RateCard) -> EarningsResult {
    calculate_earnings(input, rates).result
}

/// Calculates earnings and records an audit step for each stage.
///
/// The trace holds four steps in order: `time_multiplier`,
/// `gross_earnings`, `weekly_costs` and `net_earnings`.
pub fn calculate_earnings(input: &EarningsInput, rates: &RateCard) -> EarningsCalculation {
    let hours = input.hours_per_week.as_decimal();
    let car = rates.cars.get(input.car_category);

    // Step 1: time multiplier
    let time_multiplier = average_time_multiplier(&input.time_multipliers);
    let used: Vec<String> = input
        .time_multipliers
        .iter()
        .filter(|m| is_valid_time_multiplier(**m))
        .map(|m| m.normalize().to_string())
        .collect();
    let time_step = AuditStep {
        step_number: 1,
        rule_id: "time_multiplier".to_string(),
        rule_name: "Time Multiplier".to_string(),
        input: serde_json::json!({
            "selected": input
                .time_multipliers
                .iter()
                .map(|m| m.normalize().to_string())
                .collect::<Vec<_>>(),
        }),
        output: serde_json::json!({
            "used": used,
            "time_multiplier": time_multiplier.normalize().to_string()
        }),
        reasoning: if input.time_multipliers.is_empty() {
            "No time slots selected - multiplier is 1".to_string()
        } else if used.is_empty() {
            "No valid multipliers - multiplier is 1".to_string()
        } else {
            format!(
                "Mean of [{}] = {}",
                used.join(", "),
                time_multiplier.normalize()
            )
        },
    };

    // Step 2: gross earnings
    let weekend_multiplier = rates.weekend_multiplier_for(input.works_weekend);
    let gross_hourly = rates.base_rate * time_multiplier * weekend_multiplier * car.multiplier;
    let gross_weekly = gross_hourly * hours;
    let gross_step = AuditStep {
        step_number: 2,
        rule_id: "gross_earnings".to_string(),
        rule_name: "Gross Earnings".to_string(),
        input: serde_json::json!({
            "base_rate": rates.base_rate.normalize().to_string(),
            "time_multiplier": time_multiplier.normalize().to_string(),
            "weekend_multiplier": weekend_multiplier.normalize().to_string(),
            "car_category": input.car_category.as_str(),
            "car_multiplier": car.multiplier.normalize().to_string(),
            "hours_per_week": input.hours_per_week.get()
        }),
        output: serde_json::json!({
            "gross_hourly": gross_hourly.normalize().to_string(),
            "gross_weekly": gross_weekly.normalize().to_string()
        }),
        reasoning: format!(
            "£{} x {} x {} x {} = £{}/hour; x {} hours = £{}/week",
            rates.base_rate.normalize(),
            time_multiplier.normalize(),
            weekend_multiplier.normalize(),
            car.multiplier.normalize(),
            gross_hourly.normalize(),
            input.hours_per_week,
            gross_weekly.normalize()
        ),
    };

    // Step 3: weekly costs
    let vehicle_cost = car.weekly_cost;
    let fuel_cost = rates.fuel_rate_per_hour * hours;
    let other_costs = rates.other_weekly_cost;
    let total_cost = vehicle_cost + fuel_cost + other_costs;
    let cost_step = AuditStep {
        step_number: 3,
        rule_id: "weekly_costs".to_string(),
        rule_name: "Weekly Costs".to_string(),
        input: serde_json::json!({
            "car_category": input.car_category.as_str(),
            "fuel_rate_per_hour": rates.fuel_rate_per_hour.normalize().to_string(),
            "hours_per_week": input.hours_per_week.get()
        }),
        output: serde_json::json!({
            "vehicle_cost": vehicle_cost.normalize().to_string(),
            "fuel_cost": fuel_cost.normalize().to_string(),
            "other_costs": other_costs.normalize().to_string(),
            "total_cost": total_cost.normalize().to_string()
        }),
        reasoning: format!(
            "Vehicle £{} + fuel £{} x {} hours + other £{} = £{}",
            vehicle_cost.normalize(),
            rates.fuel_rate_per_hour.normalize(),
            input.hours_per_week,
            other_costs.normalize(),
            total_cost.normalize()
        ),
    };

    // Step 4: net earnings
    let net_weekly = gross_weekly - total_cost;
    let net_hourly = net_weekly / hours;
    let net_monthly = net_weekly * rates.weeks_per_month;
    let net_step = AuditStep {
        step_number: 4,
        rule_id: "net_earnings".to_string(),
        rule_name: "Net Earnings".to_string(),
        input: serde_json::json!({
            "gross_weekly": gross_weekly.normalize().to_string(),
            "total_cost": total_cost.normalize().to_string(),
            "weeks_per_month": rates.weeks_per_month.normalize().to_string()
        }),
        output: serde_json::json!({
            "net_weekly": round_money(net_weekly).to_string(),
            "net_hourly": round_money(net_hourly).to_string(),
            "net_monthly": round_money(net_monthly).to_string()
        }),
        reasoning: format!(
            "£{} - £{} = £{}/week; / {} hours = £{}/hour; x {} = £{}/month",
            gross_weekly.normalize(),
            total_cost.normalize(),
            net_weekly.normalize(),
            input.hours_per_week,
            round_money(net_hourly),
            rates.weeks_per_month.normalize(),
            round_money(net_monthly)
        ),
    };

    let result = EarningsResult {
        gross_hourly: round_money(gross_hourly),
        gross_weekly: round_money(gross_weekly),
        vehicle_cost,
        fuel_cost,
        other_costs,
        total_cost,
        net_weekly: round_money(net_weekly),
        net_hourly: round_money(net_hourly),
        net_monthly: round_money(net_monthly),
    };

    debug!(
        hours = input.hours_per_week.get(),
        car_category = %input.car_category,
        works_weekend = input.works_weekend,
        time_multiplier = %time_multiplier.normalize(),
        gross_weekly = %result.gross_weekly,
        total_cost = %result.total_cost,
        net_weekly = %result.net_weekly,
        "Earnings calculated"
    );

    EarningsCalculation {
        result,
        audit_trace: vec![time_step, gross_step, cost_step, net_step],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CarRate;
    use crate::models::{CarCategory, WeeklyHours};
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn input(hours: u32, multipliers: &[&str], weekend: bool, car: CarCategory) -> EarningsInput {
        EarningsInput::new(
            WeeklyHours::new(hours).unwrap(),
            multipliers.iter().map(|m| dec(m)).collect(),
            weekend,
            car,
        )
    }

    /// 40 hours, no slots, weekdays only, normal car.
    #[test]
    fn test_baseline_normal_car_40_hours() {
        let result = compute(&input(40, &[], false, CarCategory::Normal));

        assert_eq!(result.gross_hourly, dec("18.00"));
        assert_eq!(result.gross_weekly, dec("720.00"));
        assert_eq!(result.vehicle_cost, dec("230"));
        assert_eq!(result.fuel_cost, dec("100.00"));
        assert_eq!(result.other_costs, dec("40"));
        assert_eq!(result.total_cost, dec("370.00"));
        assert_eq!(result.net_weekly, dec("350.00"));
        assert_eq!(result.net_hourly, dec("8.75"));
        assert_eq!(result.net_monthly, dec("1515.50"));
    }

    /// 60 hours, two slots, weekends, executive car.
    #[test]
    fn test_executive_weekend_60_hours() {
        let result = compute(&input(60, &["1.2", "1.5"], true, CarCategory::Executive));

        assert_eq!(result.gross_hourly, dec("33.41"));
        assert_eq!(result.gross_weekly, dec("2004.75"));
        assert_eq!(result.vehicle_cost, dec("300"));
        assert_eq!(result.fuel_cost, dec("150.00"));
        assert_eq!(result.total_cost, dec("490.00"));
        assert_eq!(result.net_weekly, dec("1514.75"));
        assert_eq!(result.net_hourly, dec("25.25"));
        assert_eq!(result.net_monthly, dec("6558.87"));
    }

    #[test]
    fn test_gross_weekly_uses_unrounded_hourly() {
        // 33.4125 x 60 = 2004.75, whereas 33.41 x 60 would be 2004.60
        let result = compute(&input(60, &["1.2", "1.5"], true, CarCategory::Executive));
        assert_ne!(result.gross_weekly, result.gross_hourly * dec("60"));
    }

    #[test]
    fn test_seven_seater_costs() {
        let result = compute(&input(50, &[], false, CarCategory::SevenSeater));

        // 18 x 1.2 = 21.6/hour, 1080/week
        assert_eq!(result.gross_hourly, dec("21.60"));
        assert_eq!(result.gross_weekly, dec("1080.00"));
        assert_eq!(result.vehicle_cost, dec("270"));
        assert_eq!(result.fuel_cost, dec("125"));
        assert_eq!(result.total_cost, dec("435"));
        assert_eq!(result.net_weekly, dec("645.00"));
        assert_eq!(result.net_hourly, dec("12.90"));
        assert_eq!(result.net_monthly, dec("2792.85"));
    }

    #[test]
    fn test_weekend_adds_ten_percent() {
        let weekday = compute(&input(40, &[], false, CarCategory::Normal));
        let weekend = compute(&input(40, &[], true, CarCategory::Normal));

        assert_eq!(weekday.gross_hourly, dec("18.00"));
        assert_eq!(weekend.gross_hourly, dec("19.80"));
        assert_eq!(weekday.total_cost, weekend.total_cost);
    }

    #[test]
    fn test_low_earnings_can_be_negative() {
        // 18 x 0.5 = 9/hour x 20 = 180 gross; costs 230 + 50 + 40 = 320
        let result = compute(&input(20, &["0.5"], false, CarCategory::Normal));

        assert_eq!(result.gross_weekly, dec("180.00"));
        assert_eq!(result.net_weekly, dec("-140.00"));
        assert_eq!(result.net_hourly, dec("-7.00"));
        assert_eq!(result.net_monthly, dec("-606.20"));
    }

    #[test]
    fn test_out_of_range_multiplier_ignored() {
        let with_junk = compute(&input(40, &["3.0", "1.5"], false, CarCategory::Normal));
        let clean = compute(&input(40, &["1.5"], false, CarCategory::Normal));
        assert_eq!(with_junk, clean);
    }

    #[test]
    fn test_compute_is_idempotent() {
        let input = input(45, &["0.8", "1.1", "1.7"], true, CarCategory::SevenSeater);
        assert_eq!(compute(&input), compute(&input));
    }

    #[test]
    fn test_custom_rate_card() {
        let mut rates = RateCard {
            base_rate: dec("20"),
            fuel_rate_per_hour: dec("3"),
            ..RateCard::default()
        };
        rates.cars.normal = CarRate {
            multiplier: dec("1.0"),
            weekly_cost: dec("200"),
        };

        let result = compute_with_rates(&input(40, &[], false, CarCategory::Normal), &rates);

        assert_eq!(result.gross_weekly, dec("800.00"));
        assert_eq!(result.fuel_cost, dec("120"));
        assert_eq!(result.total_cost, dec("360"));
        assert_eq!(result.net_weekly, dec("440.00"));
    }

    #[test]
    fn test_audit_trace_has_four_ordered_steps() {
        let calculation = calculate_earnings(
            &input(60, &["1.2", "1.5"], true, CarCategory::Executive),
            &RateCard::default(),
        );

        let ids: Vec<&str> = calculation
            .audit_trace
            .iter()
            .map(|step| step.rule_id.as_str())
            .collect();
        assert_eq!(
            ids,
            vec!["time_multiplier", "gross_earnings", "weekly_costs", "net_earnings"]
        );

        let numbers: Vec<u32> = calculation
            .audit_trace
            .iter()
            .map(|step| step.step_number)
            .collect();
        assert_eq!(numbers, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_audit_time_step_explains_mean() {
        let calculation = calculate_earnings(
            &input(60, &["1.2", "1.5"], true, CarCategory::Executive),
            &RateCard::default(),
        );
        let step = &calculation.audit_trace[0];

        assert_eq!(step.output["time_multiplier"].as_str().unwrap(), "1.35");
        assert!(step.reasoning.contains("1.2, 1.5"));
    }

    #[test]
    fn test_audit_time_step_with_no_selection() {
        let calculation =
            calculate_earnings(&input(40, &[], false, CarCategory::Normal), &RateCard::default());
        let step = &calculation.audit_trace[0];

        assert_eq!(step.output["time_multiplier"].as_str().unwrap(), "1");
        assert!(step.reasoning.contains("No time slots selected"));
    }

    #[test]
    fn test_audit_time_step_when_every_multiplier_dropped() {
        let calculation = calculate_earnings(
            &input(40, &["0.2", "2.5"], false, CarCategory::Normal),
            &RateCard::default(),
        );
        let step = &calculation.audit_trace[0];

        assert_eq!(step.output["time_multiplier"].as_str().unwrap(), "1");
        assert_eq!(step.reasoning, "No valid multipliers - multiplier is 1");
    }

    #[test]
    fn test_audit_gross_step_records_inputs() {
        let calculation = calculate_earnings(
            &input(60, &["1.2", "1.5"], true, CarCategory::Executive),
            &RateCard::default(),
        );
        let step = &calculation.audit_trace[1];

        assert_eq!(step.input["car_category"].as_str().unwrap(), "executive");
        assert_eq!(step.input["weekend_multiplier"].as_str().unwrap(), "1.1");
        assert_eq!(step.output["gross_hourly"].as_str().unwrap(), "33.4125");
        assert_eq!(step.output["gross_weekly"].as_str().unwrap(), "2004.75");
    }

    #[test]
    fn test_audit_net_step_matches_result() {
        let calculation = calculate_earnings(
            &input(60, &["1.2", "1.5"], true, CarCategory::Executive),
            &RateCard::default(),
        );
        let step = &calculation.audit_trace[3];

        assert_eq!(step.output["net_weekly"].as_str().unwrap(), "1514.75");
        assert_eq!(step.output["net_hourly"].as_str().unwrap(), "25.25");
        assert_eq!(step.output["net_monthly"].as_str().unwrap(), "6558.87");
    }
}
