//! Money rounding and display.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds a money amount to pence, halves away from zero.
///
/// # Examples
///
/// ```
/// use driver_earnings::calculation::round_money;
/// use rust_decimal::Decimal;
///
/// assert_eq!(round_money(Decimal::new(334125, 4)), Decimal::new(3341, 2));
/// assert_eq!(round_money(Decimal::new(1005, 3)), Decimal::new(101, 2));
/// assert_eq!(round_money(Decimal::new(-1005, 3)), Decimal::new(-101, 2));
/// ```
pub fn round_money(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Formats a money amount as pounds in its shortest exact form.
///
/// The amount is rounded to pence and trailing zeros are dropped, so whole
/// pounds print without a fractional part. Negative amounts put the sign
/// before the pound symbol.
///
/// # Examples
///
/// ```
/// use driver_earnings::calculation::format_pounds;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_pounds(Decimal::new(35000, 2)), "£350");
/// assert_eq!(format_pounds(Decimal::new(151550, 2)), "£1515.5");
/// assert_eq!(format_pounds(Decimal::new(875, 2)), "£8.75");
/// ```
pub fn format_pounds(amount: Decimal) -> String {
    with_pound_sign(round_money(amount).normalize())
}

/// Formats a money amount as pounds with exactly two decimal places.
///
/// # Examples
///
/// ```
/// use driver_earnings::calculation::format_pounds_fixed;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_pounds_fixed(Decimal::from(100)), "£100.00");
/// assert_eq!(format_pounds_fixed(Decimal::new(3705, 1)), "£370.50");
/// ```
pub fn format_pounds_fixed(amount: Decimal) -> String {
    let mut rounded = round_money(amount);
    rounded.rescale(2);
    with_pound_sign(rounded)
}

fn with_pound_sign(amount: Decimal) -> String {
    if amount < Decimal::ZERO {
        format!("-£{}", amount.abs())
    } else {
        format!("£{}", amount.abs())
    }
}
