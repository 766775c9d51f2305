#![warn(missing_docs)]

//! # pgudt
//!
//! Typed value access and scalar custom types for a PostgreSQL driver.
//!
//! Each decoded column value is wrapped in a [`ValueAccess`] chosen by its
//! backend type. The accessor converts the value to whatever Rust type the
//! caller asks for, applying the driver's conversion rules. On top of that,
//! a custom type implementing [`SqlData`] can be materialized from a single
//! attribute, which is how domains over base types (an `email` domain over
//! `text`, say) become application types.
//!
//! ## Features
//!
//! - **Typed getters** - string, boolean, integral, floating point, decimal
//!   and the raw decoded value, with SQL NULL kept apart from zero
//! - **Checked conversions** - narrowing fails with an overflow error
//!   instead of wrapping
//! - **Scalar custom types** - register a type under a backend type name or
//!   request it directly by Rust type
//! - **Configurable** - boolean coercion and numeric text trimming
//!
//! ## Quick Start
//!
//! ```rust
//! use pgudt::constants::oid;
//! use pgudt::{access, ConnectionContext, ScalarValue, ValueAccess};
//!
//! let ctx = ConnectionContext::default();
//!
//! let port = access::for_value(oid::INT4, ScalarValue::Int4(5432), ctx.clone());
//! assert_eq!(port.get_long().unwrap().into_value(), 5432);
//! assert_eq!(port.get_string().unwrap().into_value(), "5432");
//!
//! let missing = access::for_value(oid::INT4, ScalarValue::Null, ctx);
//! let value = missing.get_int().unwrap();
//! assert!(value.is_null());
//! assert_eq!(value.into_value(), 0);
//! ```
//!
//! ## Custom Types
//!
//! ```rust
//! use pgudt::constants::oid;
//! use pgudt::udt::{self, MappedValue};
//! use pgudt::{access, ConnectionContext, CustomTypeHandle, ScalarValue};
//! use pgudt::{SingleAttributeInput, SqlData, UdtMap};
//!
//! #[derive(Debug, Default)]
//! struct Email(String);
//!
//! impl SqlData for Email {
//!     fn read_sql(&mut self, input: &mut SingleAttributeInput, _type_name: &str) -> pgudt::Result<()> {
//!         self.0 = input.read_string()?.unwrap_or_default();
//!         Ok(())
//!     }
//! }
//!
//! // Every text column becomes an Email
//! let mut udt_map = UdtMap::new();
//! udt_map.register("text", CustomTypeHandle::of::<Email>());
//!
//! let value = access::for_value(oid::TEXT, ScalarValue::from("a@b.com"), ConnectionContext::default());
//! let mapped = udt::get_object(&udt_map, "text", value).unwrap();
//! assert_eq!(mapped.as_custom::<Email>().map(|e| e.0.as_str()), Some("a@b.com"));
//! ```
//!
//! ## Type Conversions
//!
//! | Backend type | Accessor |
//! |--------------|----------|
//! | `int2`, `int4`, `int8` | [`access::Int2Access`], [`access::Int4Access`], [`access::Int8Access`] |
//! | `float4`, `float8` | [`access::Float4Access`], [`access::Float8Access`] |
//! | `numeric` | [`access::NumericAccess`] |
//! | `bool` | [`access::BoolAccess`] |
//! | `text`, `varchar`, `bpchar`, `name`, anything else | [`access::TextAccess`] |

pub mod access;
pub mod config;
pub mod constants;
pub mod error;
pub mod types;
pub mod udt;
pub mod value;

// Re-export commonly used types
pub use access::{Nullable, ValueAccess};
pub use config::{Config, ConnectionContext};
pub use error::{Error, ErrorKind, Result};
pub use types::BooleanCoercion;
pub use udt::{
    get_object, materialize, materialize_as, resolve_and_materialize, CustomTypeHandle,
    MappedValue, SingleAttributeInput, SqlData, UdtMap,
};
pub use value::ScalarValue;

// Re-export rust_decimal for users working with numeric columns
pub use rust_decimal::Decimal;
