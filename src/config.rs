//! Conversion configuration and the connection-scoped context
//!
//! Settings are read from `key=value` pairs, the same shape as connection
//! URL parameters:
//! - `boolCoercion=strict&trimNumericText=false`
//! - `boolCoercion=lenient; trimNumericText=true`

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crate::error::{Error, Result};
use crate::types::BooleanCoercion;

/// Parameter name for [`Config::bool_coercion`]
pub const PARAM_BOOL_COERCION: &str = "boolCoercion";

/// Parameter name for [`Config::trim_numeric_text`]
pub const PARAM_TRIM_NUMERIC_TEXT: &str = "trimNumericText";

/// Value conversion settings for one connection.
///
/// # Examples
///
/// ```rust
/// use pgudt::{BooleanCoercion, Config};
///
/// let config = Config::new()
///     .bool_coercion(BooleanCoercion::Strict)
///     .trim_numeric_text(false);
///
/// let parsed: Config = "boolCoercion=strict&trimNumericText=false".parse().unwrap();
/// assert_eq!(config, parsed);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// How numbers and text become booleans
    pub bool_coercion: BooleanCoercion,
    /// Whether surrounding whitespace is ignored when text is read as a number
    pub trim_numeric_text: bool,
}

impl Config {
    /// Create a configuration with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the boolean coercion policy
    pub fn bool_coercion(mut self, policy: BooleanCoercion) -> Self {
        self.bool_coercion = policy;
        self
    }

    /// Set whether numeric text is trimmed before parsing
    pub fn trim_numeric_text(mut self, trim: bool) -> Self {
        self.trim_numeric_text = trim;
        self
    }

    /// Apply one `key=value` setting
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            PARAM_BOOL_COERCION => self.bool_coercion = value.parse()?,
            PARAM_TRIM_NUMERIC_TEXT => {
                self.trim_numeric_text = match value {
                    "true" => true,
                    "false" => false,
                    other => {
                        return Err(Error::InvalidConfig(format!(
                            "invalid value for {}: {}",
                            PARAM_TRIM_NUMERIC_TEXT, other
                        )))
                    }
                }
            }
            other => {
                return Err(Error::InvalidConfig(format!(
                    "unknown conversion parameter: {}",
                    other
                )))
            }
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bool_coercion: BooleanCoercion::default(),
            trim_numeric_text: true,
        }
    }
}

impl FromStr for Config {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let mut config = Config::default();

        for pair in s.split(['&', ';']) {
            let pair = pair.trim();
            if pair.is_empty() {
                continue;
            }
            let (key, value) = pair.split_once('=').ok_or_else(|| {
                Error::InvalidConfig(format!("expected key=value, got: {}", pair))
            })?;
            config.set(key.trim(), value.trim())?;
        }

        Ok(config)
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}={}&{}={}",
            PARAM_BOOL_COERCION, self.bool_coercion, PARAM_TRIM_NUMERIC_TEXT, self.trim_numeric_text
        )
    }
}

/// Connection-scoped context shared read-only by every accessor created for
/// that connection
#[derive(Debug, Clone, Default)]
pub struct ConnectionContext {
    config: Arc<Config>,
}

impl ConnectionContext {
    /// Create a context from a configuration
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Get the boolean coercion policy
    pub fn bool_coercion(&self) -> BooleanCoercion {
        self.config.bool_coercion
    }

    /// Whether numeric text is trimmed before parsing
    pub fn trim_numeric_text(&self) -> bool {
        self.config.trim_numeric_text
    }
}
