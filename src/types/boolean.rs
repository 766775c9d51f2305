//! Boolean coercion from numeric and textual backend values
//!
//! The rules follow the server's own `boolean` input function for text, and
//! the driver-wide number rule for numerics: `0` is false, `1` is true. What
//! happens to any other number depends on the [`BooleanCoercion`] policy.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;

use crate::error::{Error, Result};

const TRUE_WORDS: [&str; 6] = ["1", "true", "t", "yes", "y", "on"];
const FALSE_WORDS: [&str; 6] = ["0", "false", "f", "no", "n", "off"];

/// Policy for turning non-boolean values into booleans
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BooleanCoercion {
    /// Zero is false, any other number is true
    #[default]
    Lenient,
    /// Only `0` and `1` (and the canonical words) are accepted
    Strict,
}

impl BooleanCoercion {
    /// Coerce an integral value
    pub fn from_i64(self, value: i64) -> Result<bool> {
        match (self, value) {
            (_, 0) => Ok(false),
            (_, 1) => Ok(true),
            (BooleanCoercion::Lenient, _) => Ok(true),
            (BooleanCoercion::Strict, v) => Err(Error::CannotCoerce(v.to_string())),
        }
    }

    /// Coerce a floating point value
    pub fn from_f64(self, value: f64) -> Result<bool> {
        if value == 0.0 {
            return Ok(false);
        }
        if value == 1.0 {
            return Ok(true);
        }
        match self {
            // NaN has no truth value even when lenient
            BooleanCoercion::Lenient if !value.is_nan() => Ok(true),
            _ => Err(Error::CannotCoerce(value.to_string())),
        }
    }

    /// Coerce an exact decimal value
    pub fn from_decimal(self, value: Decimal) -> Result<bool> {
        if value.is_zero() {
            return Ok(false);
        }
        if value == Decimal::ONE {
            return Ok(true);
        }
        match self {
            BooleanCoercion::Lenient => Ok(true),
            BooleanCoercion::Strict => Err(Error::CannotCoerce(value.to_string())),
        }
    }

    /// Coerce a textual value
    pub fn from_text(self, value: &str) -> Result<bool> {
        let trimmed = value.trim();
        if TRUE_WORDS.iter().any(|w| w.eq_ignore_ascii_case(trimmed)) {
            return Ok(true);
        }
        if FALSE_WORDS.iter().any(|w| w.eq_ignore_ascii_case(trimmed)) {
            return Ok(false);
        }
        if self == BooleanCoercion::Lenient {
            if let Ok(number) = trimmed.parse::<f64>() {
                return self.from_f64(number);
            }
        }
        Err(Error::CannotCoerce(value.to_string()))
    }
}

impl FromStr for BooleanCoercion {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        if s.eq_ignore_ascii_case("lenient") {
            Ok(BooleanCoercion::Lenient)
        } else if s.eq_ignore_ascii_case("strict") {
            Ok(BooleanCoercion::Strict)
        } else {
            Err(Error::InvalidConfig(format!(
                "invalid boolean coercion policy: {}",
                s
            )))
        }
    }
}

impl fmt::Display for BooleanCoercion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BooleanCoercion::Lenient => write!(f, "lenient"),
            BooleanCoercion::Strict => write!(f, "strict"),
        }
    }
}
