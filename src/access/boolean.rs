//! Accessor for BOOLEAN values

use rust_decimal::Decimal;

use super::{convert, Backend, Nullable, ValueAccess};
use crate::config::ConnectionContext;
use crate::constants::oid;
use crate::error::{Error, Result};
use crate::value::ScalarValue;

/// Accessor for a BOOLEAN value
///
/// Integral getters return `1` / `0`. There is no floating point or decimal
/// view of a boolean.
#[derive(Debug, Clone)]
pub struct BoolAccess {
    ctx: ConnectionContext,
    value: Option<bool>,
}

impl BoolAccess {
    /// Wrap a boolean value (`None` for NULL)
    pub fn new(ctx: ConnectionContext, value: Option<bool>) -> Self {
        Self { ctx, value }
    }

    /// Get the connection context this value was decoded under
    pub fn context(&self) -> &ConnectionContext {
        &self.ctx
    }

    fn unsupported(&self, target: &'static str) -> Error {
        Error::UnsupportedConversion {
            backend: self.backend_name(),
            target,
        }
    }
}

impl Backend for BoolAccess {
    fn oid(&self) -> u32 {
        oid::BOOL
    }
}

impl ValueAccess for BoolAccess {
    fn is_null(&self) -> bool {
        self.value.is_none()
    }

    fn get_string(&self) -> Result<Nullable<String>> {
        convert(&self.value, |v| Ok(if *v { "t" } else { "f" }.to_string()))
    }

    fn get_boolean(&self) -> Result<Nullable<bool>> {
        convert(&self.value, |v| Ok(*v))
    }

    fn get_byte(&self) -> Result<Nullable<i8>> {
        convert(&self.value, |v| Ok(*v as i8))
    }

    fn get_short(&self) -> Result<Nullable<i16>> {
        convert(&self.value, |v| Ok(*v as i16))
    }

    fn get_int(&self) -> Result<Nullable<i32>> {
        convert(&self.value, |v| Ok(*v as i32))
    }

    fn get_long(&self) -> Result<Nullable<i64>> {
        convert(&self.value, |v| Ok(*v as i64))
    }

    fn get_float(&self) -> Result<Nullable<f32>> {
        convert(&self.value, |_| Err(self.unsupported("float")))
    }

    fn get_double(&self) -> Result<Nullable<f64>> {
        convert(&self.value, |_| Err(self.unsupported("double")))
    }

    fn get_decimal(&self) -> Result<Nullable<Decimal>> {
        convert(&self.value, |_| Err(self.unsupported("BigDecimal")))
    }

    fn get_object(&self) -> Result<Nullable<ScalarValue>> {
        convert(&self.value, |v| Ok(ScalarValue::Bool(*v)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::types::BooleanCoercion;

    #[test]
    fn test_bool_keeps_context() {
        let ctx = ConnectionContext::new(Config::new().bool_coercion(BooleanCoercion::Strict));
        let access = BoolAccess::new(ctx, Some(true));
        assert_eq!(access.context().bool_coercion(), BooleanCoercion::Strict);
    }

    #[test]
    fn test_bool_views() {
        let access = BoolAccess::new(ConnectionContext::default(), Some(true));
        assert_eq!(access.get_string().unwrap().into_value(), "t");
        assert!(*access.get_boolean().unwrap().value());
        assert_eq!(*access.get_int().unwrap().value(), 1);

        let access = BoolAccess::new(ConnectionContext::default(), Some(false));
        assert_eq!(access.get_string().unwrap().into_value(), "f");
        assert_eq!(*access.get_long().unwrap().value(), 0);
    }

    #[test]
    fn test_bool_has_no_float_view() {
        let access = BoolAccess::new(ConnectionContext::default(), Some(true));
        let err = access.get_double().unwrap_err();
        assert!(err.is_data_error());
        assert_eq!(err.to_string(), "cannot convert bool value to double");
    }

    #[test]
    fn test_bool_null_never_fails() {
        let access = BoolAccess::new(ConnectionContext::default(), None);
        assert!(access.get_double().unwrap().is_null());
        assert!(access.get_decimal().unwrap().is_null());
    }
}
