//! Time-of-day multiplier averaging.
//!
//! The fare multiplier for a driver's shift pattern is the unweighted mean
//! of the multipliers of every selected time slot. With nothing selected the
//! multiplier is exactly one.

use rust_decimal::Decimal;

/// Returns the smallest multiplier a time slot may carry (0.5).
pub fn min_time_multiplier() -> Decimal {
    Decimal::new(5, 1)
}

/// Returns the largest multiplier a time slot may carry (2.0).
pub fn max_time_multiplier() -> Decimal {
    Decimal::new(20, 1)
}

/// Returns true if a time slot multiplier lies within `[0.5, 2.0]`.
pub fn is_valid_time_multiplier(multiplier: Decimal) -> bool {
    multiplier >= min_time_multiplier() && multiplier <= max_time_multiplier()
}

/// Averages the selected time slot multipliers.
///
/// Values outside `[0.5, 2.0]` are left out of the average. If no value
/// remains the result is `1`.
///
/// # Examples
///
/// ```
/// use driver_earnings::calculation::average_time_multiplier;
/// use rust_decimal::Decimal;
///
/// assert_eq!(average_time_multiplier(&[]), Decimal::ONE);
///
/// let mean = average_time_multiplier(&[Decimal::new(12, 1), Decimal::new(15, 1)]);
/// assert_eq!(mean, Decimal::new(135, 2));
/// ```
pub fn average_time_multiplier(multipliers: &[Decimal]) -> Decimal {
    let valid: Vec<Decimal> = multipliers
        .iter()
        .copied()
        .filter(|multiplier| is_valid_time_multiplier(*multiplier))
        .collect();

    if valid.is_empty() {
        return Decimal::ONE;
    }

    let sum: Decimal = valid.iter().sum();
    sum / Decimal::from(valid.len())
}
