//! Error types for value access and UDT materialization
//!
//! Every failure belongs to one of three kinds: data errors (the value cannot
//! be represented as requested, or a custom type consumed nothing), system
//! errors (a custom type could not be constructed), and not-implemented errors
//! (the requested shape is outside the single-attribute profile).

use thiserror::Error;

use crate::constants::sql_state;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Boxed error carried as the cause of a construction failure
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Broad classification of an [`Error`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The value or the custom type's use of it is invalid
    Data,
    /// The custom type registration is broken
    System,
    /// The requested behavior is outside the supported profile
    NotImplemented,
    /// A conversion setting could not be parsed
    Config,
}

/// Main error type
#[derive(Error, Debug)]
#[allow(missing_docs)]
pub enum Error {
    // =========================================================================
    // Data Errors
    // =========================================================================
    /// A custom type returned from `read_sql` without reading its attribute
    #[error("no attributes read by custom type instance of {type_name}")]
    NoAttributesRead { type_name: String },

    /// Value does not fit the requested numeric target
    #[error("bad value for type {target}: {value}")]
    NumericOverflow { target: &'static str, value: String },

    /// Value could not be parsed or converted
    #[error("data conversion error: {0}")]
    DataConversion(String),

    /// Value cannot be coerced to a boolean
    #[error("cannot cast to boolean: \"{0}\"")]
    CannotCoerce(String),

    /// The backend type has no conversion to the requested target
    #[error("cannot convert {backend} value to {target}")]
    UnsupportedConversion {
        backend: &'static str,
        target: &'static str,
    },

    // =========================================================================
    // System Errors
    // =========================================================================
    /// The registered factory for a custom type failed
    #[error("failed to construct custom type {type_name}: {source}")]
    Construction {
        type_name: String,
        #[source]
        source: BoxError,
    },

    /// A materialized object is not of the requested Rust type
    #[error("custom type {actual} cannot be used as {expected}")]
    TypeMismatch { expected: String, actual: String },

    // =========================================================================
    // Not Implemented
    // =========================================================================
    /// The requested type does not support single-attribute reads
    #[error("custom type does not implement SqlData: {type_name}")]
    NotSqlData { type_name: String },

    /// A second attribute was read from a single-attribute input
    #[error("only a single attribute is supported for scalar custom types, attempted read #{attempt}")]
    MultipleAttributes { attempt: usize },
    // =========================================================================
    // Configuration Errors
    // =========================================================================
    /// Invalid conversion setting
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl Error {
    /// Build an overflow error for a value that does not fit `target`
    pub fn overflow(target: &'static str, value: impl ToString) -> Self {
        Error::NumericOverflow {
            target,
            value: value.to_string(),
        }
    }

    /// Build a construction error from any factory failure
    pub fn construction(type_name: impl Into<String>, source: impl Into<BoxError>) -> Self {
        Error::Construction {
            type_name: type_name.into(),
            source: source.into(),
        }
    }

    /// Get the kind of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::NoAttributesRead { .. }
            | Error::NumericOverflow { .. }
            | Error::DataConversion(_)
            | Error::CannotCoerce(_)
            | Error::UnsupportedConversion { .. } => ErrorKind::Data,
            Error::Construction { .. } | Error::TypeMismatch { .. } => ErrorKind::System,
            Error::NotSqlData { .. } | Error::MultipleAttributes { .. } => {
                ErrorKind::NotImplemented
            }
            Error::InvalidConfig(_) => ErrorKind::Config,
        }
    }

    /// Get the SQLSTATE code for this error
    pub fn sql_state(&self) -> &'static str {
        match self {
            Error::CannotCoerce(_) => sql_state::CANNOT_COERCE,
            Error::NumericOverflow { .. } => sql_state::NUMERIC_VALUE_OUT_OF_RANGE,
            _ => match self.kind() {
                ErrorKind::Data => sql_state::DATA_ERROR,
                ErrorKind::System => sql_state::SYSTEM_ERROR,
                ErrorKind::NotImplemented => sql_state::NOT_IMPLEMENTED,
                ErrorKind::Config => sql_state::INVALID_PARAMETER_VALUE,
            },
        }
    }

    /// Check if this is a data error
    pub fn is_data_error(&self) -> bool {
        self.kind() == ErrorKind::Data
    }

    /// Check if this is a system error
    pub fn is_system_error(&self) -> bool {
        self.kind() == ErrorKind::System
    }

    /// Check if this is a configuration error
    pub fn is_config_error(&self) -> bool {
        self.kind() == ErrorKind::Config
    }

    /// Check if this is a not-implemented error
    pub fn is_not_implemented(&self) -> bool {
        self.kind() == ErrorKind::NotImplemented
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_no_attributes_display() {
        let err = Error::NoAttributesRead {
            type_name: "app::Email".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "no attributes read by custom type instance of app::Email"
        );
        assert!(err.is_data_error());
        assert_eq!(err.sql_state(), "22000");
    }

    #[test]
    fn test_kinds() {
        assert_eq!(Error::overflow("byte", 1000).kind(), ErrorKind::Data);
        assert_eq!(Error::CannotCoerce("2".into()).sql_state(), "22018");
        assert!(Error::NotSqlData {
            type_name: "Point".into()
        }
        .is_not_implemented());
        assert!(Error::MultipleAttributes { attempt: 2 }.is_not_implemented());
        assert_eq!(
            Error::MultipleAttributes { attempt: 2 }.sql_state(),
            "0A000"
        );
    }

    #[test]
    fn test_invalid_config_kind() {
        let err = Error::InvalidConfig("unknown conversion parameter: foo".into());
        assert!(err.is_config_error());
        assert!(!err.is_data_error());
        assert_eq!(err.sql_state(), "22023");
        assert_eq!(
            err.to_string(),
            "invalid configuration: unknown conversion parameter: foo"
        );
    }

    #[test]
    fn test_construction_keeps_source() {
        let io = std::io::Error::new(std::io::ErrorKind::Other, "factory exploded");
        let err = Error::construction("app::Port", io);
        assert!(err.is_system_error());
        assert_eq!(err.sql_state(), "60000");
        assert_eq!(err.source().map(|s| s.to_string()), Some("factory exploded".to_string()));
    }
}
