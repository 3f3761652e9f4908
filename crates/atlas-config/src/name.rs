//! Property name validation and environment-variable naming.

use std::sync::OnceLock;

use regex::Regex;

use crate::ConfigError;

/// Allowed property name syntax: ASCII letters, digits, dot, dash, whitespace.
fn property_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^[A-Za-z0-9.\-\s]+$").expect("property name pattern is valid")
    })
}

/// Validate a property name against the allowed character set.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidPropertyFormat`] carrying the offending
/// name when it contains any other character (or is empty).
pub fn validate(property: &str) -> Result<(), ConfigError> {
    if property_pattern().is_match(property) {
        Ok(())
    } else {
        Err(ConfigError::invalid_property(property))
    }
}

/// Derive the environment-variable name for a property name.
///
/// The property name is uppercased, dots become underscores and dashes are
/// deleted (not converted). Only the source property name is validated;
/// the derived name is used as-is.
///
/// # Example
///
/// ```
/// use atlas_config::env_name;
///
/// assert_eq!(env_name("server.http-port"), "SERVER_HTTPPORT");
/// ```
#[must_use]
pub fn env_name(property: &str) -> String {
    property.to_uppercase().replace('.', "_").replace('-', "")
}
