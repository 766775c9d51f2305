//! Accessors for the floating point backend types: float4, float8

use rust_decimal::Decimal;

use super::{convert, Backend, Nullable, ValueAccess};
use crate::config::ConnectionContext;
use crate::constants::oid;
use crate::error::Result;
use crate::types::numeric::{float_to_decimal, float_to_integral};
use crate::types::{render_f32, render_f64};
use crate::value::ScalarValue;

/// Accessor for a REAL value
#[derive(Debug, Clone)]
pub struct Float4Access {
    ctx: ConnectionContext,
    value: Option<f32>,
}

impl Float4Access {
    /// Wrap a float4 value (`None` for NULL)
    pub fn new(ctx: ConnectionContext, value: Option<f32>) -> Self {
        Self { ctx, value }
    }
}

impl Backend for Float4Access {
    fn oid(&self) -> u32 {
        oid::FLOAT4
    }
}

impl ValueAccess for Float4Access {
    fn is_null(&self) -> bool {
        self.value.is_none()
    }

    fn get_string(&self) -> Result<Nullable<String>> {
        convert(&self.value, |v| Ok(render_f32(*v)))
    }

    fn get_boolean(&self) -> Result<Nullable<bool>> {
        convert(&self.value, |v| self.ctx.bool_coercion().from_f64(*v as f64))
    }

    fn get_byte(&self) -> Result<Nullable<i8>> {
        convert(&self.value, |v| float_to_integral(*v as f64, "byte"))
    }

    fn get_short(&self) -> Result<Nullable<i16>> {
        convert(&self.value, |v| float_to_integral(*v as f64, "short"))
    }

    fn get_int(&self) -> Result<Nullable<i32>> {
        convert(&self.value, |v| float_to_integral(*v as f64, "int"))
    }

    fn get_long(&self) -> Result<Nullable<i64>> {
        convert(&self.value, |v| float_to_integral(*v as f64, "long"))
    }

    fn get_float(&self) -> Result<Nullable<f32>> {
        convert(&self.value, |v| Ok(*v))
    }

    fn get_double(&self) -> Result<Nullable<f64>> {
        convert(&self.value, |v| Ok(*v as f64))
    }

    // Rendered through f32 so 0.1 stays 0.1 rather than 0.100000001490116
    fn get_decimal(&self) -> Result<Nullable<Decimal>> {
        convert(&self.value, |v| float_to_decimal(*v as f64, &v.to_string()))
    }

    fn get_object(&self) -> Result<Nullable<ScalarValue>> {
        convert(&self.value, |v| Ok(ScalarValue::Float4(*v)))
    }
}

/// Accessor for a DOUBLE PRECISION value
#[derive(Debug, Clone)]
pub struct Float8Access {
    ctx: ConnectionContext,
    value: Option<f64>,
}

impl Float8Access {
    /// Wrap a float8 value (`None` for NULL)
    pub fn new(ctx: ConnectionContext, value: Option<f64>) -> Self {
        Self { ctx, value }
    }
}

impl Backend for Float8Access {
    fn oid(&self) -> u32 {
        oid::FLOAT8
    }
}

impl ValueAccess for Float8Access {
    fn is_null(&self) -> bool {
        self.value.is_none()
    }

    fn get_string(&self) -> Result<Nullable<String>> {
        convert(&self.value, |v| Ok(render_f64(*v)))
    }

    fn get_boolean(&self) -> Result<Nullable<bool>> {
        convert(&self.value, |v| self.ctx.bool_coercion().from_f64(*v))
    }

    fn get_byte(&self) -> Result<Nullable<i8>> {
        convert(&self.value, |v| float_to_integral(*v, "byte"))
    }

    fn get_short(&self) -> Result<Nullable<i16>> {
        convert(&self.value, |v| float_to_integral(*v, "short"))
    }

    fn get_int(&self) -> Result<Nullable<i32>> {
        convert(&self.value, |v| float_to_integral(*v, "int"))
    }

    fn get_long(&self) -> Result<Nullable<i64>> {
        convert(&self.value, |v| float_to_integral(*v, "long"))
    }

    // Narrowing to f32 follows IEEE rounding, overflow becomes infinity
    fn get_float(&self) -> Result<Nullable<f32>> {
        convert(&self.value, |v| Ok(*v as f32))
    }

    fn get_double(&self) -> Result<Nullable<f64>> {
        convert(&self.value, |v| Ok(*v))
    }

    fn get_decimal(&self) -> Result<Nullable<Decimal>> {
        convert(&self.value, |v| float_to_decimal(*v, &v.to_string()))
    }

    fn get_object(&self) -> Result<Nullable<ScalarValue>> {
        convert(&self.value, |v| Ok(ScalarValue::Float8(*v)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn float8(v: f64) -> Float8Access {
        Float8Access::new(ConnectionContext::default(), Some(v))
    }

    #[test]
    fn test_float8_string() {
        assert_eq!(float8(2.5).get_string().unwrap().into_value(), "2.5");
        assert_eq!(float8(3.0).get_string().unwrap().into_value(), "3");
        assert_eq!(float8(f64::NAN).get_string().unwrap().into_value(), "NaN");
        assert_eq!(
            float8(f64::INFINITY).get_string().unwrap().into_value(),
            "Infinity"
        );
    }

    #[test]
    fn test_float8_integral_truncates_in_range() {
        assert_eq!(*float8(99.99).get_int().unwrap().value(), 99);
        assert_eq!(*float8(-1.5).get_byte().unwrap().value(), -1);
        assert!(matches!(
            float8(1000.0).get_byte(),
            Err(Error::NumericOverflow { target: "byte", .. })
        ));
        assert!(float8(f64::NAN).get_long().is_err());
        assert!(float8(f64::INFINITY).get_long().is_err());
    }

    #[test]
    fn test_float8_decimal() {
        let d = float8(12.25).get_decimal().unwrap().into_value();
        assert_eq!(d, Decimal::new(1225, 2));
        assert!(float8(f64::NAN).get_decimal().unwrap_err().is_data_error());
    }

    #[test]
    fn test_float4_values() {
        let access = Float4Access::new(ConnectionContext::default(), Some(0.1));
        assert_eq!(access.get_string().unwrap().into_value(), "0.1");
        assert_eq!(access.get_decimal().unwrap().into_value(), Decimal::new(1, 1));
        assert_eq!(*access.get_int().unwrap().value(), 0);
        assert!(*access.get_boolean().unwrap().value());
    }

    #[test]
    fn test_float_null() {
        let access = Float4Access::new(ConnectionContext::default(), None);
        assert!(access.is_null());
        assert!(access.get_string().unwrap().is_null());
        assert!(access.get_decimal().unwrap().is_null());
    }
}
