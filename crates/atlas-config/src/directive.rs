//! Directive parsing.
//!
//! A directive is the per-field tag string `property[|default]`. A literal
//! pipe inside the default value is written as `||`.

use crate::ConfigError;

/// The reserved separator between property name and default value.
const SEPARATOR: &str = "|";
/// Escape sequence for a literal separator inside the default value.
const ESCAPED_SEPARATOR: &str = "||";
/// Stand-in for the escaped separator during splitting. U+0001 does not
/// occur in handwritten directive strings.
const SEPARATOR_SENTINEL: &str = "\u{1}";

/// A parsed directive: a logical property name and an optional default.
///
/// # Example
///
/// ```
/// use atlas_config::Directive;
///
/// let directive = Directive::parse("server.port|8000")?;
/// assert_eq!(directive.property, "server.port");
/// assert_eq!(directive.default, "8000");
/// # Ok::<(), atlas_config::ConfigError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Directive {
    /// Dotted, lowercase-by-convention property name.
    pub property: String,
    /// Raw textual default, unescaped. Empty means "no default supplied".
    pub default: String,
}

impl Directive {
    /// Parse a directive string.
    ///
    /// The escaped separator is masked before splitting and restored inside
    /// the default segment afterwards, so `a|blue||red` yields the default
    /// `blue|red`. A missing second segment means an empty default.
    ///
    /// An empty input parses into an empty property name; it is rejected by
    /// property validation during resolution, not here.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::TagFormat`] when the directive contains more
    /// than one unescaped separator.
    pub fn parse(tag: &str) -> Result<Self, ConfigError> {
        let masked = tag.replace(ESCAPED_SEPARATOR, SEPARATOR_SENTINEL);
        let segments: Vec<&str> = masked.split(SEPARATOR).collect();
        if segments.len() > 2 {
            return Err(ConfigError::tag_format(tag));
        }

        // The sentinel is restored in the default segment only; a masked
        // separator in the property segment fails validation downstream.
        Ok(Self {
            property: segments[0].to_owned(),
            default: segments
                .get(1)
                .map(|segment| segment.replace(SEPARATOR_SENTINEL, SEPARATOR))
                .unwrap_or_default(),
        })
    }

    /// Render the directive back into its tag form, re-escaping any literal
    /// separators in the default value.
    #[must_use]
    pub fn as_tag(&self) -> String {
        if self.default.is_empty() {
            self.property.clone()
        } else {
            format!(
                "{}{SEPARATOR}{}",
                self.property,
                self.default.replace(SEPARATOR, ESCAPED_SEPARATOR)
            )
        }
    }
}
