//! Accessor for the textual backend types
//!
//! Covers text, varchar, bpchar, name and untyped literals, and is the
//! fallback for any oid without a dedicated accessor (a domain reported by its
//! own oid, an enum, ...). Numbers are parsed out of the text using the
//! connection's trimming setting.

use rust_decimal::Decimal;

use super::{convert, Backend, Nullable, ValueAccess};
use crate::config::ConnectionContext;
use crate::error::Result;
use crate::types::numeric::{parse_f64, parse_integral};
use crate::types::parse_decimal;
use crate::value::ScalarValue;

/// Accessor for a textual value
#[derive(Debug, Clone)]
pub struct TextAccess {
    ctx: ConnectionContext,
    type_oid: u32,
    value: Option<String>,
}

impl TextAccess {
    /// Wrap a textual value reported with `type_oid` (`None` for NULL)
    pub fn new(ctx: ConnectionContext, type_oid: u32, value: Option<String>) -> Self {
        Self {
            ctx,
            type_oid,
            value,
        }
    }

    /// The text handed to numeric parsers, trimmed when configured
    fn numeric_text<'a>(&self, s: &'a str) -> &'a str {
        if self.ctx.trim_numeric_text() {
            s.trim()
        } else {
            s
        }
    }
}

impl Backend for TextAccess {
    fn oid(&self) -> u32 {
        self.type_oid
    }
}

impl ValueAccess for TextAccess {
    fn is_null(&self) -> bool {
        self.value.is_none()
    }

    fn get_string(&self) -> Result<Nullable<String>> {
        convert(&self.value, |v| Ok(v.clone()))
    }

    fn get_boolean(&self) -> Result<Nullable<bool>> {
        convert(&self.value, |v| self.ctx.bool_coercion().from_text(v))
    }

    fn get_byte(&self) -> Result<Nullable<i8>> {
        convert(&self.value, |v| {
            parse_integral(self.numeric_text(v), "byte")
        })
    }

    fn get_short(&self) -> Result<Nullable<i16>> {
        convert(&self.value, |v| {
            parse_integral(self.numeric_text(v), "short")
        })
    }

    fn get_int(&self) -> Result<Nullable<i32>> {
        convert(&self.value, |v| {
            parse_integral(self.numeric_text(v), "int")
        })
    }

    fn get_long(&self) -> Result<Nullable<i64>> {
        convert(&self.value, |v| {
            parse_integral(self.numeric_text(v), "long")
        })
    }

    fn get_float(&self) -> Result<Nullable<f32>> {
        convert(&self.value, |v| {
            parse_f64(self.numeric_text(v), "float").map(|f| f as f32)
        })
    }

    fn get_double(&self) -> Result<Nullable<f64>> {
        convert(&self.value, |v| {
            parse_f64(self.numeric_text(v), "double")
        })
    }

    fn get_decimal(&self) -> Result<Nullable<Decimal>> {
        convert(&self.value, |v| parse_decimal(self.numeric_text(v)))
    }

    fn get_object(&self) -> Result<Nullable<ScalarValue>> {
        convert(&self.value, |v| Ok(ScalarValue::Text(v.clone())))
    }
}
