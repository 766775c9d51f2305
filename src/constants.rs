//! PostgreSQL protocol constants
//!
//! Type oids for the scalar families this crate materializes, and the
//! SQLSTATE codes attached to its errors.

// =============================================================================
// Type OIDs
// =============================================================================

/// Backend type oids (from `pg_type.dat`)
pub mod oid {
    /// Unspecified type
    pub const UNSPECIFIED: u32 = 0;
    /// BOOLEAN
    pub const BOOL: u32 = 16;
    /// Internal single-byte "char"
    pub const CHAR: u32 = 18;
    /// NAME (63-byte identifier)
    pub const NAME: u32 = 19;
    /// BIGINT
    pub const INT8: u32 = 20;
    /// SMALLINT
    pub const INT2: u32 = 21;
    /// INTEGER
    pub const INT4: u32 = 23;
    /// TEXT
    pub const TEXT: u32 = 25;
    /// OID
    pub const OID: u32 = 26;
    /// REAL
    pub const FLOAT4: u32 = 700;
    /// DOUBLE PRECISION
    pub const FLOAT8: u32 = 701;
    /// Untyped literal
    pub const UNKNOWN: u32 = 705;
    /// CHARACTER(n)
    pub const BPCHAR: u32 = 1042;
    /// CHARACTER VARYING(n)
    pub const VARCHAR: u32 = 1043;
    /// NUMERIC
    pub const NUMERIC: u32 = 1700;
}

/// Get the backend type name for an oid, if it is one of the scalar types
/// this crate knows about
pub fn oid_name(oid: u32) -> Option<&'static str> {
    let name = match oid {
        oid::UNSPECIFIED => "unspecified",
        oid::BOOL => "bool",
        oid::CHAR => "char",
        oid::NAME => "name",
        oid::INT8 => "int8",
        oid::INT2 => "int2",
        oid::INT4 => "int4",
        oid::TEXT => "text",
        oid::OID => "oid",
        oid::FLOAT4 => "float4",
        oid::FLOAT8 => "float8",
        oid::UNKNOWN => "unknown",
        oid::BPCHAR => "bpchar",
        oid::VARCHAR => "varchar",
        oid::NUMERIC => "numeric",
        _ => return None,
    };
    Some(name)
}

/// Check if an oid belongs to the textual family
pub fn is_textual(oid: u32) -> bool {
    matches!(
        oid,
        oid::TEXT | oid::VARCHAR | oid::BPCHAR | oid::NAME | oid::CHAR | oid::UNKNOWN
    )
}

// =============================================================================
// SQLSTATE codes
// =============================================================================

/// SQLSTATE codes reported by [`crate::Error::sql_state`]
pub mod sql_state {
    /// Class 22 - data exception
    pub const DATA_ERROR: &str = "22000";
    /// Invalid character value for cast
    pub const CANNOT_COERCE: &str = "22018";
    /// Numeric value out of range
    pub const NUMERIC_VALUE_OUT_OF_RANGE: &str = "22003";
    /// Invalid parameter value, used for bad conversion settings
    pub const INVALID_PARAMETER_VALUE: &str = "22023";
    /// Driver-side system error
    pub const SYSTEM_ERROR: &str = "60000";
    /// Feature not supported
    pub const NOT_IMPLEMENTED: &str = "0A000";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_oid_names() {
        assert_eq!(oid_name(oid::INT2), Some("int2"));
        assert_eq!(oid_name(oid::NUMERIC), Some("numeric"));
        assert_eq!(oid_name(123_456), None);
    }

    #[test]
    fn test_textual_family() {
        assert!(is_textual(oid::TEXT));
        assert!(is_textual(oid::VARCHAR));
        assert!(is_textual(oid::BPCHAR));
        assert!(!is_textual(oid::INT4));
        assert!(!is_textual(oid::NUMERIC));
    }
}
