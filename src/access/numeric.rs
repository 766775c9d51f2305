//! Accessor for NUMERIC values

use rust_decimal::Decimal;

use super::{convert, Backend, Nullable, ValueAccess};
use crate::config::ConnectionContext;
use crate::constants::oid;
use crate::error::Result;
use crate::types::numeric::{decimal_to_f32, decimal_to_f64, decimal_to_integral};
use crate::value::ScalarValue;

/// Accessor for a NUMERIC value
#[derive(Debug, Clone)]
pub struct NumericAccess {
    ctx: ConnectionContext,
    value: Option<Decimal>,
}

impl NumericAccess {
    /// Wrap a numeric value (`None` for NULL)
    pub fn new(ctx: ConnectionContext, value: Option<Decimal>) -> Self {
        Self { ctx, value }
    }
}

impl Backend for NumericAccess {
    fn oid(&self) -> u32 {
        oid::NUMERIC
    }
}

impl ValueAccess for NumericAccess {
    fn is_null(&self) -> bool {
        self.value.is_none()
    }

    fn get_string(&self) -> Result<Nullable<String>> {
        convert(&self.value, |v| Ok(v.to_string()))
    }

    fn get_boolean(&self) -> Result<Nullable<bool>> {
        convert(&self.value, |v| self.ctx.bool_coercion().from_decimal(*v))
    }

    fn get_byte(&self) -> Result<Nullable<i8>> {
        convert(&self.value, |v| decimal_to_integral(*v, "byte"))
    }

    fn get_short(&self) -> Result<Nullable<i16>> {
        convert(&self.value, |v| decimal_to_integral(*v, "short"))
    }

    fn get_int(&self) -> Result<Nullable<i32>> {
        convert(&self.value, |v| decimal_to_integral(*v, "int"))
    }

    fn get_long(&self) -> Result<Nullable<i64>> {
        convert(&self.value, |v| decimal_to_integral(*v, "long"))
    }

    fn get_float(&self) -> Result<Nullable<f32>> {
        convert(&self.value, |v| decimal_to_f32(*v))
    }

    fn get_double(&self) -> Result<Nullable<f64>> {
        convert(&self.value, |v| decimal_to_f64(*v))
    }

    fn get_decimal(&self) -> Result<Nullable<Decimal>> {
        convert(&self.value, |v| Ok(*v))
    }

    fn get_object(&self) -> Result<Nullable<ScalarValue>> {
        convert(&self.value, |v| Ok(ScalarValue::Numeric(*v)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numeric(v: Decimal) -> NumericAccess {
        NumericAccess::new(ConnectionContext::default(), Some(v))
    }

    #[test]
    fn test_numeric_keeps_scale_in_text() {
        let access = numeric(Decimal::new(1050, 2));
        assert_eq!(access.get_string().unwrap().into_value(), "10.50");
        assert_eq!(access.get_decimal().unwrap().into_value().scale(), 2);
    }

    #[test]
    fn test_numeric_integral_truncates_then_checks() {
        let access = numeric(Decimal::new(-12799, 2));
        assert_eq!(*access.get_byte().unwrap().value(), -127);
        assert_eq!(*access.get_long().unwrap().value(), -127);

        let access = numeric(Decimal::new(12800, 2));
        assert!(access.get_byte().unwrap_err().is_data_error());
        assert_eq!(*access.get_short().unwrap().value(), 128);
    }

    #[test]
    fn test_numeric_floats() {
        let access = numeric(Decimal::new(25, 1));
        assert_eq!(*access.get_double().unwrap().value(), 2.5);
        assert_eq!(*access.get_float().unwrap().value(), 2.5);
    }

    #[test]
    fn test_numeric_boolean() {
        assert!(*numeric(Decimal::ONE).get_boolean().unwrap().value());
        assert!(!*numeric(Decimal::ZERO).get_boolean().unwrap().value());
    }
}
