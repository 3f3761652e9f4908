//! Property resolution error types.

use thiserror::Error;

/// Errors that can occur while resolving directives.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Directive contains more than one unescaped separator.
    #[error("invalid directive format (property|default): {tag}")]
    TagFormat {
        /// The offending directive, verbatim.
        tag: String,
    },

    /// Property name contains characters outside the allowed set.
    #[error(
        "unsupported property format, only letters, digits, dots, dashes and spaces are allowed: {property}"
    )]
    InvalidPropertyFormat {
        /// The offending property name.
        property: String,
    },

    /// Raw text could not be coerced to the target type.
    #[error("failed to parse value {value:?} for directive {tag}: {reason}")]
    ValueParse {
        /// The raw text that failed to parse.
        value: String,
        /// The directive being resolved.
        tag: String,
        /// Explanation of the parsing failure.
        reason: String,
    },

    /// The target field's type has no coercion rule.
    #[error("unsupported field type for property resolution: {type_name}")]
    UnsupportedType {
        /// Name of the unsupported type.
        type_name: String,
    },

    /// A duration was requested through an entry point that cannot infer a unit.
    #[error("duration target for directive {tag} has no field name to infer a unit from; use duration() with an explicit unit")]
    DurationNotSupported {
        /// The directive being resolved.
        tag: String,
    },
}

impl ConfigError {
    /// Create a new tag format error.
    pub fn tag_format(tag: impl Into<String>) -> Self {
        Self::TagFormat { tag: tag.into() }
    }

    /// Create a new invalid property format error.
    pub fn invalid_property(property: impl Into<String>) -> Self {
        Self::InvalidPropertyFormat {
            property: property.into(),
        }
    }

    /// Create a new value parse error.
    pub fn value_parse(
        value: impl Into<String>,
        tag: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::ValueParse {
            value: value.into(),
            tag: tag.into(),
            reason: reason.into(),
        }
    }

    /// Create a new unsupported type error.
    pub fn unsupported_type(type_name: impl Into<String>) -> Self {
        Self::UnsupportedType {
            type_name: type_name.into(),
        }
    }

    /// Create a new duration-not-supported error.
    pub fn duration_not_supported(tag: impl Into<String>) -> Self {
        Self::DurationNotSupported { tag: tag.into() }
    }
}
