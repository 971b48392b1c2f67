//! Plain-number text for NUMBER cells.
//!
//! Doubles inside the safe-integer range, and integral doubles that fit an
//! `i64`, print as the shortest round-trip decimal. Anything larger is an
//! integer that the shortest form would pad with zeros, so it is expanded
//! exactly instead.

use num_bigint::BigInt;
use num_traits::FromPrimitive;

/// 2^53, the largest magnitude below which every integer is a double.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_992.0;
/// 2^63.
const I64_LIMIT: f64 = 9_223_372_036_854_775_808.0;

fn fits_i64(value: f64) -> bool {
    (-I64_LIMIT..I64_LIMIT).contains(&value) && value.trunc() == value
}

pub fn render_number(value: f64) -> String {
    if !value.is_finite()
        || fits_i64(value)
        || (-MAX_SAFE_INTEGER..=MAX_SAFE_INTEGER).contains(&value)
    {
        return format!("{value}");
    }
    exact_integer_text(value)
}

/// Exact base-10 digits of a finite double whose magnitude is at least 2^53.
/// Such doubles are always integral, so the conversion loses nothing.
fn exact_integer_text(value: f64) -> String {
    BigInt::from_f64(value).map_or_else(|| format!("{value}"), |big| big.to_string())
}
