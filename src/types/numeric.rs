//! Numeric range checks and conversions shared by the value accessors
//!
//! Narrowing is checked: a value that does not fit the target is a
//! [`Error::NumericOverflow`]. The one exception (int2 to byte truncation)
//! lives in the int2 accessor itself.

use std::str::FromStr;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::error::{Error, Result};

/// Narrow a wide integer into `T`, failing when out of range
pub fn narrow<T: TryFrom<i64>>(value: i64, target: &'static str) -> Result<T> {
    T::try_from(value).map_err(|_| Error::overflow(target, value))
}

/// Convert a float to an integral target, truncating toward zero
pub fn float_to_integral<T: TryFrom<i64>>(value: f64, target: &'static str) -> Result<T> {
    // i64::MAX rounds up to 2^63 as f64, so that bound is exclusive
    if value.is_nan() || value < i64::MIN as f64 || value >= i64::MAX as f64 {
        return Err(Error::overflow(target, value));
    }
    T::try_from(value.trunc() as i64).map_err(|_| Error::overflow(target, value))
}

/// Convert a decimal to an integral target, truncating toward zero
pub fn decimal_to_integral<T: TryFrom<i64>>(value: Decimal, target: &'static str) -> Result<T> {
    value
        .trunc()
        .to_i64()
        .and_then(|wide| T::try_from(wide).ok())
        .ok_or_else(|| Error::overflow(target, value))
}

/// Convert a decimal to f64
pub fn decimal_to_f64(value: Decimal) -> Result<f64> {
    value
        .to_f64()
        .ok_or_else(|| Error::overflow("double", value))
}

/// Convert a decimal to f32
pub fn decimal_to_f32(value: Decimal) -> Result<f32> {
    value
        .to_f32()
        .ok_or_else(|| Error::overflow("float", value))
}

/// Parse decimal text in plain or scientific notation
pub fn parse_decimal(text: &str) -> Result<Decimal> {
    Decimal::from_str(text)
        .or_else(|_| Decimal::from_scientific(text))
        .map_err(|_| Error::DataConversion(format!("bad value for type BigDecimal: {}", text)))
}

/// Convert a float to a decimal through its shortest decimal rendering
pub fn float_to_decimal(value: f64, rendered: &str) -> Result<Decimal> {
    if !value.is_finite() {
        return Err(Error::DataConversion(format!(
            "bad value for type BigDecimal: {}",
            render_f64(value)
        )));
    }
    Decimal::from_str(rendered).map_err(|_| Error::overflow("BigDecimal", rendered))
}

/// Parse an integral target out of text
///
/// Whole numbers are parsed directly. Anything else goes through a decimal
/// parse and is truncated toward zero before the range check.
pub fn parse_integral<T: TryFrom<i64>>(text: &str, target: &'static str) -> Result<T> {
    let wide = match text.parse::<i64>() {
        Ok(v) => v,
        Err(_) => {
            let d = parse_decimal(text).map_err(|_| {
                Error::DataConversion(format!("bad value for type {}: {}", target, text))
            })?;
            d.trunc()
                .to_i64()
                .ok_or_else(|| Error::overflow(target, text))?
        }
    };
    T::try_from(wide).map_err(|_| Error::overflow(target, text))
}

/// Parse a floating point value out of text
pub fn parse_f64(text: &str, target: &'static str) -> Result<f64> {
    text.parse::<f64>()
        .map_err(|_| Error::DataConversion(format!("bad value for type {}: {}", target, text)))
}

/// Render a double the way the server prints it
///
/// Shortest round-trip digits, switching to exponent form (`1e+21`,
/// `1.5e-05`) outside the range the server prints plainly.
pub fn render_f64(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        let sign = if value > 0.0 { "" } else { "-" };
        format!("{}Infinity", sign)
    } else {
        render_finite(value.to_string(), format!("{:e}", value), DBL_DIG)
    }
}

/// Render a real the way the server prints it
pub fn render_f32(value: f32) -> String {
    if value.is_finite() {
        render_finite(value.to_string(), format!("{:e}", value), FLT_DIG)
    } else {
        render_f64(value as f64)
    }
}

const DBL_DIG: i32 = 15;
const FLT_DIG: i32 = 6;

// Exponent form when the decimal exponent is below -4 or at least `digits`
fn render_finite(plain: String, scientific: String, digits: i32) -> String {
    let Some((mantissa, exp)) = scientific.split_once('e') else {
        return plain;
    };
    let Ok(exp) = exp.parse::<i32>() else {
        return plain;
    };
    if (-4..digits).contains(&exp) {
        plain
    } else {
        let sign = if exp < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", mantissa, sign, exp.abs())
    }
}
