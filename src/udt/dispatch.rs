//! Materialization of scalar custom types
//!
//! [`materialize`] is the core: run the registered factory, let the instance
//! read its one attribute, and reject instances that read nothing.
//! [`resolve_and_materialize`] adds the capability check used when the
//! mapping is inferred from the requested type. [`materialize_as`] and
//! [`get_object`] are the column-level entry points built on top.

use super::{Capability, CustomTypeHandle, SingleAttributeInput, SqlData, UdtMap};
use crate::access::ValueAccess;
use crate::error::{Error, Result};
use crate::value::ScalarValue;

/// A column value after type map resolution
#[derive(Debug)]
pub enum MappedValue {
    /// SQL NULL
    Null,
    /// No mapping applied; the decoded value as is
    Base(ScalarValue),
    /// Materialized custom type
    Custom(Box<dyn SqlData>),
}

impl MappedValue {
    /// Check if this value is NULL
    pub fn is_null(&self) -> bool {
        matches!(self, MappedValue::Null)
    }

    /// Try to get the unmapped value
    pub fn as_base(&self) -> Option<&ScalarValue> {
        match self {
            MappedValue::Base(v) => Some(v),
            _ => None,
        }
    }

    /// Try to get the custom type as a `T`
    pub fn as_custom<T: SqlData>(&self) -> Option<&T> {
        match self {
            MappedValue::Custom(obj) => obj.downcast_ref::<T>(),
            _ => None,
        }
    }
}

/// Instantiate a custom type and populate it from a single attribute.
///
/// Fails with
/// - [`Error::NotSqlData`] if `handle` lacks the single-attribute capability,
/// - [`Error::Construction`] if the registered factory fails,
/// - [`Error::MultipleAttributes`] if `read_sql` issued more than one read,
///   even when it ignored the rejection,
/// - [`Error::NoAttributesRead`] if `read_sql` returned without reading,
/// - whatever `read_sql` itself returned.
///
/// Never returns a partially populated object.
pub fn materialize(
    type_name: &str,
    handle: &CustomTypeHandle,
    input: &mut SingleAttributeInput,
) -> Result<Box<dyn SqlData>> {
    let factory = match handle.capability() {
        Capability::SqlData(factory) => factory,
        Capability::Struct => {
            return Err(Error::NotSqlData {
                type_name: handle.name().to_string(),
            })
        }
    };

    tracing::trace!(
        type_name = type_name,
        custom_type = handle.name(),
        "Constructing custom type"
    );
    let mut instance = factory().map_err(|e| Error::construction(handle.name(), e))?;

    let outcome = instance.read_sql(input, type_name);

    // Checked before the outcome so a swallowed rejection still fails
    if input.attempts() > 1 {
        return Err(Error::MultipleAttributes {
            attempt: input.attempts(),
        });
    }
    outcome?;

    if !input.is_read_done() {
        return Err(Error::NoAttributesRead {
            type_name: handle.name().to_string(),
        });
    }

    Ok(instance)
}

/// Materialize the custom type the caller asked for.
///
/// Used when the server reported the base type of a domain, so the mapping is
/// inferred from `requested` rather than from `type_name`. A `requested` type
/// without the single-attribute capability fails with
/// [`Error::NotSqlData`] before anything is constructed. `udt_map` is only
/// consulted for diagnostics.
pub fn resolve_and_materialize(
    udt_map: &UdtMap,
    type_name: &str,
    requested: &CustomTypeHandle,
    input: &mut SingleAttributeInput,
) -> Result<Box<dyn SqlData>> {
    if !requested.is_sql_data() {
        return Err(Error::NotSqlData {
            type_name: requested.name().to_string(),
        });
    }

    if let Some(mapped) = udt_map.get(type_name) {
        if mapped.name() != requested.name() {
            tracing::debug!(
                type_name = type_name,
                mapped = mapped.name(),
                requested = requested.name(),
                "Requested custom type overrides type map entry"
            );
        }
    }

    materialize(type_name, requested, input)
}

/// Read one column as the custom type `T`.
///
/// Returns `Ok(None)` for SQL NULL without constructing anything.
/// `requested` must be a handle producing `T`; otherwise this fails with
/// [`Error::TypeMismatch`], also before construction.
pub fn materialize_as<T: SqlData>(
    udt_map: &UdtMap,
    type_name: &str,
    requested: &CustomTypeHandle,
    access: Box<dyn ValueAccess>,
) -> Result<Option<T>> {
    if !requested.is_sql_data() {
        return Err(Error::NotSqlData {
            type_name: requested.name().to_string(),
        });
    }
    if !requested.produces::<T>() {
        return Err(Error::TypeMismatch {
            expected: std::any::type_name::<T>().to_string(),
            actual: requested.name().to_string(),
        });
    }
    if access.is_null() {
        return Ok(None);
    }

    let mut input = SingleAttributeInput::new(access);
    let instance = resolve_and_materialize(udt_map, type_name, requested, &mut input)?;
    Ok(Some(*instance.downcast::<T>()?))
}

/// Read one column, applying the type map by backend type name.
///
/// A mapping for `type_name` wins over the base value, so mapping `text`
/// turns every text column into the custom type. Without a mapping the
/// decoded value comes back unchanged.
pub fn get_object(
    udt_map: &UdtMap,
    type_name: &str,
    access: Box<dyn ValueAccess>,
) -> Result<MappedValue> {
    if access.is_null() {
        return Ok(MappedValue::Null);
    }

    match udt_map.get(type_name) {
        Some(handle) => {
            tracing::trace!(type_name = type_name, "Applying type map entry");
            let mut input = SingleAttributeInput::new(access);
            materialize(type_name, handle, &mut input).map(MappedValue::Custom)
        }
        None => access
            .get_object()
            .map(|value| MappedValue::Base(value.into_value())),
    }
}
