//! Calculation logic for the earnings estimator.
//!
//! This module contains the earnings formula itself, the averaging of
//! time-of-day multipliers, and money rounding and formatting. None of it
//! depends on the HTTP or CLI front ends.

mod earnings;
mod rounding;
mod time_multiplier;

pub use earnings::{calculate_earnings, compute, compute_with_rates};
pub use rounding::{format_pounds, format_pounds_fixed, round_money};
pub use time_multiplier::{
    average_time_multiplier, is_valid_time_multiplier, max_time_multiplier, min_time_multiplier,
};
