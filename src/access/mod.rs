//! Typed access to one decoded backend value
//!
//! Each backend scalar family has its own accessor type implementing
//! [`ValueAccess`]. The getters convert according to the backend type's
//! semantics, not by generic parsing, and never fail on NULL: a NULL value
//! comes back as the target's default with the null flag set.
//!
//! # Example
//!
//! ```rust
//! use pgudt::access::{self, ValueAccess};
//! use pgudt::constants::oid;
//! use pgudt::{ConnectionContext, ScalarValue};
//!
//! let ctx = ConnectionContext::default();
//! let access = access::for_value(oid::INT2, ScalarValue::Int2(300), ctx);
//!
//! assert_eq!(access.get_string().unwrap().into_option(), Some("300".to_string()));
//! assert_eq!(*access.get_byte().unwrap().value(), 44);
//! ```

mod boolean;
mod float;
mod int;
mod numeric;
mod text;

pub use boolean::BoolAccess;
pub use float::{Float4Access, Float8Access};
pub use int::{Int2Access, Int4Access, Int8Access};
pub use numeric::NumericAccess;
pub use text::TextAccess;

use std::fmt;

use rust_decimal::Decimal;

use crate::config::ConnectionContext;
use crate::constants::{self, oid};
use crate::error::Result;
use crate::value::ScalarValue;

pub(crate) use private::Backend;

mod private {
    /// Backend identity of an accessor, for diagnostics only
    pub trait Backend {
        /// Backend type oid of the wrapped value
        fn oid(&self) -> u32;

        /// Backend type name of the wrapped value
        fn backend_name(&self) -> &'static str {
            crate::constants::oid_name(self.oid()).unwrap_or("unknown")
        }
    }
}

/// The result of a getter: a value plus the SQL NULL indicator.
///
/// When the underlying value is NULL, `value` holds the target type's default
/// (`0`, `false`, an empty string, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Nullable<T> {
    value: T,
    null: bool,
}

impl<T> Nullable<T> {
    /// Wrap a non-null value
    pub fn new(value: T) -> Self {
        Self { value, null: false }
    }

    /// Whether the underlying value was NULL
    pub fn is_null(&self) -> bool {
        self.null
    }

    /// Get the value (the default when NULL)
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Consume and return the value (the default when NULL)
    pub fn into_value(self) -> T {
        self.value
    }

    /// Consume and return `None` for NULL
    pub fn into_option(self) -> Option<T> {
        if self.null {
            None
        } else {
            Some(self.value)
        }
    }
}

impl<T: Default> Nullable<T> {
    /// The NULL result for `T`
    pub fn null() -> Self {
        Self {
            value: T::default(),
            null: true,
        }
    }
}

/// Typed getters over one decoded backend value.
///
/// Implemented by the accessors in this module only. Accessors are created
/// per cell, are stateless, and must not be shared between conversions.
pub trait ValueAccess: Backend + Send + fmt::Debug {
    /// Whether the wrapped value is NULL
    fn is_null(&self) -> bool;

    /// Get as text
    fn get_string(&self) -> Result<Nullable<String>>;

    /// Get as boolean
    fn get_boolean(&self) -> Result<Nullable<bool>>;

    /// Get as signed 8-bit integer
    fn get_byte(&self) -> Result<Nullable<i8>>;

    /// Get as signed 16-bit integer
    fn get_short(&self) -> Result<Nullable<i16>>;

    /// Get as signed 32-bit integer
    fn get_int(&self) -> Result<Nullable<i32>>;

    /// Get as signed 64-bit integer
    fn get_long(&self) -> Result<Nullable<i64>>;

    /// Get as single precision float
    fn get_float(&self) -> Result<Nullable<f32>>;

    /// Get as double precision float
    fn get_double(&self) -> Result<Nullable<f64>>;

    /// Get as exact decimal
    fn get_decimal(&self) -> Result<Nullable<Decimal>>;

    /// Get the decoded value itself
    fn get_object(&self) -> Result<Nullable<ScalarValue>>;
}

/// Run a conversion on a possibly-NULL value
pub(crate) fn convert<V, T, F>(value: &Option<V>, f: F) -> Result<Nullable<T>>
where
    T: Default,
    F: FnOnce(&V) -> Result<T>,
{
    match value {
        None => Ok(Nullable::null()),
        Some(v) => f(v).map(Nullable::new),
    }
}

/// Wrap a decoded value in the accessor for its backend type.
///
/// Never fails. A non-null value selects the accessor by its variant; NULL
/// selects by `type_oid`, falling back to a text accessor for oids this crate
/// does not know.
pub fn for_value(type_oid: u32, value: ScalarValue, ctx: ConnectionContext) -> Box<dyn ValueAccess> {
    if !value.is_null() && !compatible(type_oid, &value) {
        tracing::warn!(
            oid = type_oid,
            variant = value.natural_oid(),
            "Decoded value does not match reported type oid"
        );
    }

    match value {
        ScalarValue::Bool(v) => Box::new(BoolAccess::new(ctx, Some(v))),
        ScalarValue::Int2(v) => Box::new(Int2Access::new(ctx, Some(v))),
        ScalarValue::Int4(v) => Box::new(Int4Access::new(ctx, Some(v))),
        ScalarValue::Int8(v) => Box::new(Int8Access::new(ctx, Some(v))),
        ScalarValue::Float4(v) => Box::new(Float4Access::new(ctx, Some(v))),
        ScalarValue::Float8(v) => Box::new(Float8Access::new(ctx, Some(v))),
        ScalarValue::Numeric(v) => Box::new(NumericAccess::new(ctx, Some(v))),
        ScalarValue::Text(v) => Box::new(TextAccess::new(ctx, type_oid, Some(v))),
        ScalarValue::Null => null_for(type_oid, ctx),
    }
}

fn compatible(type_oid: u32, value: &ScalarValue) -> bool {
    match value {
        // Oids outside the known set are domains, enums and the like, all sent as text
        ScalarValue::Text(_) => {
            constants::is_textual(type_oid) || constants::oid_name(type_oid).is_none()
        }
        ScalarValue::Int4(_) => type_oid == oid::INT4 || type_oid == oid::OID,
        other => other.natural_oid() == type_oid,
    }
}

fn null_for(type_oid: u32, ctx: ConnectionContext) -> Box<dyn ValueAccess> {
    match type_oid {
        oid::BOOL => Box::new(BoolAccess::new(ctx, None)),
        oid::INT2 => Box::new(Int2Access::new(ctx, None)),
        oid::INT4 | oid::OID => Box::new(Int4Access::new(ctx, None)),
        oid::INT8 => Box::new(Int8Access::new(ctx, None)),
        oid::FLOAT4 => Box::new(Float4Access::new(ctx, None)),
        oid::FLOAT8 => Box::new(Float8Access::new(ctx, None)),
        oid::NUMERIC => Box::new(NumericAccess::new(ctx, None)),
        other => Box::new(TextAccess::new(ctx, other, None)),
    }
}
