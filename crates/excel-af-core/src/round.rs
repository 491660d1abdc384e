//! Decimal rounding for values written to cells

use std::str::FromStr;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Round `number` to `digits` places after the decimal separator.
///
/// Midpoints round away from zero, on the decimal value the float displays as
/// (so `1.005` becomes `1.01`, not `1.0`). Non-finite numbers and numbers
/// outside the decimal range are returned unchanged.
pub fn math_round(number: f64, digits: u32) -> f64 {
    if !number.is_finite() {
        return number;
    }
    // shortest round-trip form, so 1.005 is rounded as 1.005 and not 1.00499...
    let Ok(decimal) = Decimal::from_str(&number.to_string()) else {
        return number;
    };
    decimal
        .round_dp_with_strategy(digits, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or(number)
}
