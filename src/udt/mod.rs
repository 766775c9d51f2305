//! User-defined type support
//!
//! This module provides the pieces needed to turn one decoded value into a
//! caller-defined Rust type:
//! - [`SqlData`]: the capability a scalar custom type implements
//! - [`CustomTypeHandle`]: a registered factory plus an explicit capability tag
//! - [`UdtMap`]: backend type name to handle registry
//! - [`SingleAttributeInput`]: the one-attribute read bridge
//! - [`materialize`] and friends: the dispatcher
//!
//! # Example
//!
//! ```rust
//! use pgudt::access;
//! use pgudt::constants::oid;
//! use pgudt::udt::{self, CustomTypeHandle, SingleAttributeInput, SqlData, UdtMap};
//! use pgudt::{ConnectionContext, ScalarValue};
//!
//! #[derive(Debug, Default, PartialEq)]
//! struct Email(String);
//!
//! impl SqlData for Email {
//!     fn read_sql(&mut self, input: &mut SingleAttributeInput, _type_name: &str) -> pgudt::Result<()> {
//!         self.0 = input.read_string()?.unwrap_or_default();
//!         Ok(())
//!     }
//! }
//!
//! let mut udt_map = UdtMap::new();
//! udt_map.register("public.email", CustomTypeHandle::of::<Email>());
//!
//! // The server reports a domain by its base type, so the mapping is
//! // inferred from the requested type.
//! let access = access::for_value(oid::TEXT, ScalarValue::from("a@b.com"), ConnectionContext::default());
//! let email: Option<Email> = udt::materialize_as(&udt_map, "public.email", &CustomTypeHandle::of::<Email>(), access).unwrap();
//! assert_eq!(email, Some(Email("a@b.com".to_string())));
//! ```

mod dispatch;
mod input;

pub use dispatch::{get_object, materialize, materialize_as, resolve_and_materialize, MappedValue};
pub use input::{ReadState, SingleAttributeInput};

use std::any::{Any, TypeId};
use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;

use crate::error::{BoxError, Error, Result};

/// Conversion of a boxed value into `Box<dyn Any>`, implemented for every
/// `'static` type
pub trait AsAny: Any {
    /// Convert into `Box<dyn Any>` for downcasting
    fn into_any(self: Box<Self>) -> Box<dyn Any>;

    /// Borrow as `&dyn Any`
    fn as_any(&self) -> &dyn Any;

    /// Name of the concrete type
    fn type_name(&self) -> &'static str;
}

impl<T: Any> AsAny for T {
    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn type_name(&self) -> &'static str {
        std::any::type_name::<T>()
    }
}

/// A custom type populated from a single attribute.
///
/// `read_sql` must issue exactly one read against `input` before returning
/// `Ok`. Returning without a read is reported as
/// [`Error::NoAttributesRead`]; a second read fails with
/// [`Error::MultipleAttributes`].
pub trait SqlData: AsAny + Send + fmt::Debug {
    /// Populate `self` from `input`, given the backend type name
    fn read_sql(&mut self, input: &mut SingleAttributeInput, type_name: &str) -> Result<()>;
}

impl dyn SqlData {
    /// Check whether this object is a `T`
    pub fn is<T: SqlData>(&self) -> bool {
        self.as_any().is::<T>()
    }

    /// Borrow the concrete type, if this object is a `T`
    pub fn downcast_ref<T: SqlData>(&self) -> Option<&T> {
        self.as_any().downcast_ref::<T>()
    }

    /// Recover the concrete type of a materialized object
    pub fn downcast<T: SqlData>(self: Box<Self>) -> Result<Box<T>> {
        let actual = (*self).type_name().to_string();
        self.into_any().downcast::<T>().map_err(|_| Error::TypeMismatch {
            expected: std::any::type_name::<T>().to_string(),
            actual,
        })
    }
}

/// Factory producing a fresh, unpopulated custom type instance
pub type Factory = Arc<dyn Fn() -> std::result::Result<Box<dyn SqlData>, BoxError> + Send + Sync>;

/// What a registered custom type is able to do
#[derive(Clone)]
pub enum Capability {
    /// Scalar custom type built by a factory and read from one attribute
    SqlData(Factory),
    /// Structured (record) type; not supported by the single-attribute path
    Struct,
}

impl fmt::Debug for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Capability::SqlData(_) => write!(f, "SqlData(<factory>)"),
            Capability::Struct => write!(f, "Struct"),
        }
    }
}

/// A caller-registered custom type
#[derive(Debug, Clone)]
pub struct CustomTypeHandle {
    name: String,
    type_id: Option<TypeId>,
    capability: Capability,
}

impl CustomTypeHandle {
    /// Handle for a `SqlData` type constructed with `Default`
    pub fn of<T: SqlData + Default>() -> Self {
        Self::with_factory::<T, _, std::convert::Infallible>(|| Ok(T::default()))
    }

    /// Handle for a `SqlData` type built by a fallible factory
    pub fn with_factory<T, F, E>(factory: F) -> Self
    where
        T: SqlData,
        F: Fn() -> std::result::Result<T, E> + Send + Sync + 'static,
        E: Into<BoxError>,
    {
        let factory: Factory = Arc::new(move || -> std::result::Result<Box<dyn SqlData>, BoxError> {
            factory()
                .map(|value| Box::new(value) as Box<dyn SqlData>)
                .map_err(Into::into)
        });
        Self {
            name: std::any::type_name::<T>().to_string(),
            type_id: Some(TypeId::of::<T>()),
            capability: Capability::SqlData(factory),
        }
    }

    /// Handle for a structured type, which cannot be materialized here
    pub fn structured(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_id: None,
            capability: Capability::Struct,
        }
    }

    /// Get the display name of the custom type
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the capability tag
    pub fn capability(&self) -> &Capability {
        &self.capability
    }

    /// Whether this type supports single-attribute reads
    pub fn is_sql_data(&self) -> bool {
        matches!(self.capability, Capability::SqlData(_))
    }

    /// Whether this handle produces values of type `T`
    pub fn produces<T: 'static>(&self) -> bool {
        self.type_id == Some(TypeId::of::<T>())
    }
}

/// Registry of backend type names to custom types.
///
/// Names are kept exactly as registered, including schema qualification and
/// identifier quoting (`public.email`, `"Port"`).
#[derive(Debug, Clone, Default)]
pub struct UdtMap {
    entries: IndexMap<String, CustomTypeHandle>,
}

impl UdtMap {
    /// Create an empty map
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a custom type, returning the handle it replaced
    pub fn register(
        &mut self,
        type_name: impl Into<String>,
        handle: CustomTypeHandle,
    ) -> Option<CustomTypeHandle> {
        self.entries.insert(type_name.into(), handle)
    }

    /// Look up the handle for a backend type name
    pub fn get(&self, type_name: &str) -> Option<&CustomTypeHandle> {
        self.entries.get(type_name)
    }

    /// Check if a backend type name is mapped
    pub fn contains(&self, type_name: &str) -> bool {
        self.entries.contains_key(type_name)
    }

    /// Number of registered types
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the map is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate in registration order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &CustomTypeHandle)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}
