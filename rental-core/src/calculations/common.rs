//! Common utility functions for profitability calculations.
//!
//! This module provides shared rounding helpers used across the
//! calculation modules.

use rust_decimal::Decimal;

/// Rounds a decimal value to cents using half-up rounding.
///
/// Midpoints round away from zero, the usual financial convention: a value
/// ending in exactly 0.005 becomes 0.01.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use rental_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(123.454)), dec!(123.45));
/// assert_eq!(round_half_up(dec!(123.455)), dec!(123.46));
/// assert_eq!(round_half_up(dec!(-123.455)), dec!(-123.46)); // Away from zero
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}

/// Rounds a decimal value to the nearest whole dollar using half-up rounding.
///
/// Used for figures conventionally reported without cents, such as annual
/// depreciation and the year-one interest estimate.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use rental_core::calculations::common::round_whole;
///
/// assert_eq!(round_whole(dec!(77272.72)), dec!(77273));
/// assert_eq!(round_whole(dec!(77272.49)), dec!(77272));
/// assert_eq!(round_whole(dec!(-10.5)), dec!(-11)); // Away from zero
/// ```
pub fn round_whole(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(0, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}
