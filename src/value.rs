//! Decoded scalar values
//!
//! A [`ScalarValue`] is what the protocol decoder hands over for one
//! attribute: a backend-typed primitive, or NULL.

use std::fmt;

use rust_decimal::Decimal;

use crate::constants::oid;

/// A single decoded backend value.
///
/// # Example
///
/// ```rust
/// use pgudt::ScalarValue;
///
/// fn describe(value: &ScalarValue) -> String {
///     match value {
///         ScalarValue::Null => "NULL".to_string(),
///         ScalarValue::Text(s) => format!("text {}", s),
///         ScalarValue::Int4(i) => format!("int4 {}", i),
///         other => other.to_string(),
///     }
/// }
///
/// assert_eq!(describe(&ScalarValue::from(42)), "int4 42");
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ScalarValue {
    /// NULL value
    #[default]
    Null,
    /// BOOLEAN
    Bool(bool),
    /// SMALLINT
    Int2(i16),
    /// INTEGER
    Int4(i32),
    /// BIGINT
    Int8(i64),
    /// REAL
    Float4(f32),
    /// DOUBLE PRECISION
    Float8(f64),
    /// NUMERIC
    Numeric(Decimal),
    /// TEXT, VARCHAR, BPCHAR and other textual types
    Text(String),
}

impl ScalarValue {
    /// Check if this value is NULL
    pub fn is_null(&self) -> bool {
        matches!(self, ScalarValue::Null)
    }

    /// Get the oid naturally associated with this variant
    ///
    /// NULL carries no type of its own and reports [`oid::UNSPECIFIED`].
    pub fn natural_oid(&self) -> u32 {
        match self {
            ScalarValue::Null => oid::UNSPECIFIED,
            ScalarValue::Bool(_) => oid::BOOL,
            ScalarValue::Int2(_) => oid::INT2,
            ScalarValue::Int4(_) => oid::INT4,
            ScalarValue::Int8(_) => oid::INT8,
            ScalarValue::Float4(_) => oid::FLOAT4,
            ScalarValue::Float8(_) => oid::FLOAT8,
            ScalarValue::Numeric(_) => oid::NUMERIC,
            ScalarValue::Text(_) => oid::TEXT,
        }
    }

    /// Try to get as a string reference
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ScalarValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get as a 64-bit integer, without narrowing or parsing
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            ScalarValue::Int2(v) => Some(*v as i64),
            ScalarValue::Int4(v) => Some(*v as i64),
            ScalarValue::Int8(v) => Some(*v),
            _ => None,
        }
    }

    /// Try to get as a boolean
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ScalarValue::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

impl From<bool> for ScalarValue {
    fn from(v: bool) -> Self {
        ScalarValue::Bool(v)
    }
}

impl From<i16> for ScalarValue {
    fn from(v: i16) -> Self {
        ScalarValue::Int2(v)
    }
}

impl From<i32> for ScalarValue {
    fn from(v: i32) -> Self {
        ScalarValue::Int4(v)
    }
}

impl From<i64> for ScalarValue {
    fn from(v: i64) -> Self {
        ScalarValue::Int8(v)
    }
}

impl From<f32> for ScalarValue {
    fn from(v: f32) -> Self {
        ScalarValue::Float4(v)
    }
}

impl From<f64> for ScalarValue {
    fn from(v: f64) -> Self {
        ScalarValue::Float8(v)
    }
}

impl From<Decimal> for ScalarValue {
    fn from(v: Decimal) -> Self {
        ScalarValue::Numeric(v)
    }
}

impl From<String> for ScalarValue {
    fn from(v: String) -> Self {
        ScalarValue::Text(v)
    }
}

impl From<&str> for ScalarValue {
    fn from(v: &str) -> Self {
        ScalarValue::Text(v.to_string())
    }
}

impl<T: Into<ScalarValue>> From<Option<T>> for ScalarValue {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(inner) => inner.into(),
            None => ScalarValue::Null,
        }
    }
}

impl fmt::Display for ScalarValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScalarValue::Null => write!(f, "NULL"),
            ScalarValue::Bool(b) => write!(f, "{}", if *b { "t" } else { "f" }),
            ScalarValue::Int2(v) => write!(f, "{}", v),
            ScalarValue::Int4(v) => write!(f, "{}", v),
            ScalarValue::Int8(v) => write!(f, "{}", v),
            ScalarValue::Float4(v) => write!(f, "{}", crate::types::render_f32(*v)),
            ScalarValue::Float8(v) => write!(f, "{}", crate::types::render_f64(*v)),
            ScalarValue::Numeric(d) => write!(f, "{}", d),
            ScalarValue::Text(s) => write!(f, "{}", s),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_null() {
        let v = ScalarValue::Null;
        assert!(v.is_null());
        assert!(v.as_str().is_none());
        assert!(v.as_i64().is_none());
        assert_eq!(v.natural_oid(), oid::UNSPECIFIED);
        assert_eq!(ScalarValue::default(), ScalarValue::Null);
    }

    #[test]
    fn test_value_text() {
        let v = ScalarValue::from("hello");
        assert!(!v.is_null());
        assert_eq!(v.as_str(), Some("hello"));
        assert_eq!(v.natural_oid(), oid::TEXT);
        assert_eq!(format!("{}", v), "hello");
    }

    #[test]
    fn test_value_integers() {
        assert_eq!(ScalarValue::from(7i16).as_i64(), Some(7));
        assert_eq!(ScalarValue::from(7i32).natural_oid(), oid::INT4);
        assert_eq!(ScalarValue::from(-7i64).as_i64(), Some(-7));
    }

    #[test]
    fn test_value_from_option() {
        assert!(ScalarValue::from(None::<i32>).is_null());
        assert_eq!(ScalarValue::from(Some(true)).as_bool(), Some(true));
    }

    #[test]
    fn test_value_display() {
        assert_eq!(format!("{}", ScalarValue::Null), "NULL");
        assert_eq!(format!("{}", ScalarValue::Bool(true)), "t");
        assert_eq!(format!("{}", ScalarValue::Float8(f64::NEG_INFINITY)), "-Infinity");
        assert_eq!(format!("{}", ScalarValue::Numeric(Decimal::new(150, 2))), "1.50");
    }
}
