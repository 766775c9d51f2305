//! Accessors for the integral backend types: int2, int4, int8

use rust_decimal::Decimal;

use super::{convert, Backend, Nullable, ValueAccess};
use crate::config::ConnectionContext;
use crate::constants::oid;
use crate::error::Result;
use crate::types::numeric::narrow;
use crate::value::ScalarValue;

/// Accessor for a SMALLINT value
#[derive(Debug, Clone)]
pub struct Int2Access {
    ctx: ConnectionContext,
    value: Option<i16>,
}

impl Int2Access {
    /// Wrap an int2 value (`None` for NULL)
    pub fn new(ctx: ConnectionContext, value: Option<i16>) -> Self {
        Self { ctx, value }
    }
}

impl Backend for Int2Access {
    fn oid(&self) -> u32 {
        oid::INT2
    }
}

impl ValueAccess for Int2Access {
    fn is_null(&self) -> bool {
        self.value.is_none()
    }

    fn get_string(&self) -> Result<Nullable<String>> {
        convert(&self.value, |v| Ok(v.to_string()))
    }

    fn get_boolean(&self) -> Result<Nullable<bool>> {
        convert(&self.value, |v| self.ctx.bool_coercion().from_i64(*v as i64))
    }

    /// Keeps the low 8 bits, the same narrowing the driver applies to int2
    /// columns everywhere else. Out-of-range values do not fail.
    fn get_byte(&self) -> Result<Nullable<i8>> {
        convert(&self.value, |v| Ok(*v as i8))
    }

    fn get_short(&self) -> Result<Nullable<i16>> {
        convert(&self.value, |v| Ok(*v))
    }

    fn get_int(&self) -> Result<Nullable<i32>> {
        convert(&self.value, |v| Ok(*v as i32))
    }

    fn get_long(&self) -> Result<Nullable<i64>> {
        convert(&self.value, |v| Ok(*v as i64))
    }

    fn get_float(&self) -> Result<Nullable<f32>> {
        convert(&self.value, |v| Ok(*v as f32))
    }

    fn get_double(&self) -> Result<Nullable<f64>> {
        convert(&self.value, |v| Ok(*v as f64))
    }

    fn get_decimal(&self) -> Result<Nullable<Decimal>> {
        convert(&self.value, |v| Ok(Decimal::from(*v)))
    }

    fn get_object(&self) -> Result<Nullable<ScalarValue>> {
        convert(&self.value, |v| Ok(ScalarValue::Int2(*v)))
    }
}

/// Accessor for an INTEGER value
#[derive(Debug, Clone)]
pub struct Int4Access {
    ctx: ConnectionContext,
    value: Option<i32>,
}

impl Int4Access {
    /// Wrap an int4 value (`None` for NULL)
    pub fn new(ctx: ConnectionContext, value: Option<i32>) -> Self {
        Self { ctx, value }
    }
}

impl Backend for Int4Access {
    fn oid(&self) -> u32 {
        oid::INT4
    }
}

impl ValueAccess for Int4Access {
    fn is_null(&self) -> bool {
        self.value.is_none()
    }

    fn get_string(&self) -> Result<Nullable<String>> {
        convert(&self.value, |v| Ok(v.to_string()))
    }

    fn get_boolean(&self) -> Result<Nullable<bool>> {
        convert(&self.value, |v| self.ctx.bool_coercion().from_i64(*v as i64))
    }

    fn get_byte(&self) -> Result<Nullable<i8>> {
        convert(&self.value, |v| narrow(*v as i64, "byte"))
    }

    fn get_short(&self) -> Result<Nullable<i16>> {
        convert(&self.value, |v| narrow(*v as i64, "short"))
    }

    fn get_int(&self) -> Result<Nullable<i32>> {
        convert(&self.value, |v| Ok(*v))
    }

    fn get_long(&self) -> Result<Nullable<i64>> {
        convert(&self.value, |v| Ok(*v as i64))
    }

    fn get_float(&self) -> Result<Nullable<f32>> {
        convert(&self.value, |v| Ok(*v as f32))
    }

    fn get_double(&self) -> Result<Nullable<f64>> {
        convert(&self.value, |v| Ok(*v as f64))
    }

    fn get_decimal(&self) -> Result<Nullable<Decimal>> {
        convert(&self.value, |v| Ok(Decimal::from(*v)))
    }

    fn get_object(&self) -> Result<Nullable<ScalarValue>> {
        convert(&self.value, |v| Ok(ScalarValue::Int4(*v)))
    }
}

/// Accessor for a BIGINT value
#[derive(Debug, Clone)]
pub struct Int8Access {
    ctx: ConnectionContext,
    value: Option<i64>,
}

impl Int8Access {
    /// Wrap an int8 value (`None` for NULL)
    pub fn new(ctx: ConnectionContext, value: Option<i64>) -> Self {
        Self { ctx, value }
    }
}

impl Backend for Int8Access {
    fn oid(&self) -> u32 {
        oid::INT8
    }
}

impl ValueAccess for Int8Access {
    fn is_null(&self) -> bool {
        self.value.is_none()
    }

    fn get_string(&self) -> Result<Nullable<String>> {
        convert(&self.value, |v| Ok(v.to_string()))
    }

    fn get_boolean(&self) -> Result<Nullable<bool>> {
        convert(&self.value, |v| self.ctx.bool_coercion().from_i64(*v))
    }

    fn get_byte(&self) -> Result<Nullable<i8>> {
        convert(&self.value, |v| narrow(*v, "byte"))
    }

    fn get_short(&self) -> Result<Nullable<i16>> {
        convert(&self.value, |v| narrow(*v, "short"))
    }

    fn get_int(&self) -> Result<Nullable<i32>> {
        convert(&self.value, |v| narrow(*v, "int"))
    }

    fn get_long(&self) -> Result<Nullable<i64>> {
        convert(&self.value, |v| Ok(*v))
    }

    fn get_float(&self) -> Result<Nullable<f32>> {
        convert(&self.value, |v| Ok(*v as f32))
    }

    fn get_double(&self) -> Result<Nullable<f64>> {
        convert(&self.value, |v| Ok(*v as f64))
    }

    fn get_decimal(&self) -> Result<Nullable<Decimal>> {
        convert(&self.value, |v| Ok(Decimal::from(*v)))
    }

    fn get_object(&self) -> Result<Nullable<ScalarValue>> {
        convert(&self.value, |v| Ok(ScalarValue::Int8(*v)))
    }
}
