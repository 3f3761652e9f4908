//! Value resolution.
//!
//! Given a parsed directive and a target slot, pick the raw textual value
//! by the fixed source precedence (environment variable, then property
//! store, then declared default), coerce it to the target type, assign it
//! and mirror it into the store.

use std::env;

use tracing::{debug, trace};

use crate::directive::Directive;
use crate::populate::Slot;
use crate::store::{PropertyStore, PropertyValue};
use crate::unit::DurationUnit;
use crate::{name, ConfigError};

/// Which source supplied the raw value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Source {
    Environment,
    Store,
    Default,
}

impl Source {
    const fn as_str(self) -> &'static str {
        match self {
            Self::Environment => "environment",
            Self::Store => "store",
            Self::Default => "default",
        }
    }
}

/// Pick the raw textual value for a directive.
///
/// An environment variable wins on presence alone, even when its value is
/// empty. The store is consulted next, textually; an absent (or empty)
/// entry falls through to the directive default.
fn select_raw(store: &PropertyStore, directive: &Directive) -> (String, Source) {
    let env_key = name::env_name(&directive.property);
    if let Some(value) = env::var_os(&env_key) {
        return (value.to_string_lossy().into_owned(), Source::Environment);
    }

    let stored = store.get_text(&directive.property);
    if !stored.is_empty() {
        return (stored, Source::Store);
    }

    (directive.default.clone(), Source::Default)
}

/// Resolve one directive into a target slot.
///
/// `field_name` is the declared name of the field being populated; it only
/// participates in unit inference for duration targets. On success the
/// coerced value is written into the store under the property name.
///
/// An empty selected raw value leaves the target at its zero value and
/// writes nothing to the store; text targets become the empty string and
/// text-list targets a zero-length list.
pub(crate) fn apply(
    store: &PropertyStore,
    slot: Slot<'_>,
    field_name: &str,
    tag: &str,
) -> Result<(), ConfigError> {
    let directive = Directive::parse(tag)?;
    name::validate(&directive.property)?;

    let (raw, source) = select_raw(store, &directive);
    debug!(
        property = %directive.property,
        source = source.as_str(),
        "resolved raw property value"
    );

    match slot {
        Slot::Text(target) => {
            *target = raw.clone();
            if raw.is_empty() {
                return Ok(());
            }
            store.set(directive.property, PropertyValue::Text(raw));
        }
        Slot::TextList(target) => {
            if raw.is_empty() {
                target.clear();
                return Ok(());
            }
            let values: Vec<String> = raw.split(' ').map(|part| part.to_owned()).collect();
            *target = values.clone();
            store.set(directive.property, PropertyValue::TextList(values));
        }
        Slot::Bool(target) => {
            if raw.is_empty() {
                return Ok(());
            }
            let value = parse_bool(&raw)
                .ok_or_else(|| ConfigError::value_parse(&raw, tag, "expected a boolean"))?;
            *target = value;
            store.set(directive.property, PropertyValue::Bool(value));
        }
        Slot::I8(target) => {
            if raw.is_empty() {
                return Ok(());
            }
            let value = parse_int::<i8>(&raw, tag)?;
            *target = value;
            store.set(directive.property, PropertyValue::Int(i64::from(value)));
        }
        Slot::I16(target) => {
            if raw.is_empty() {
                return Ok(());
            }
            let value = parse_int::<i16>(&raw, tag)?;
            *target = value;
            store.set(directive.property, PropertyValue::Int(i64::from(value)));
        }
        Slot::I32(target) => {
            if raw.is_empty() {
                return Ok(());
            }
            let value = parse_int::<i32>(&raw, tag)?;
            *target = value;
            store.set(directive.property, PropertyValue::Int(i64::from(value)));
        }
        Slot::I64(target) => {
            if raw.is_empty() {
                return Ok(());
            }
            let value = parse_int::<i64>(&raw, tag)?;
            *target = value;
            store.set(directive.property, PropertyValue::Int(value));
        }
        Slot::Duration(target) => {
            if raw.is_empty() {
                return Ok(());
            }
            let unit = DurationUnit::infer(field_name);
            let value = unit.parse_count(&raw).ok_or_else(|| {
                ConfigError::value_parse(&raw, tag, format!("expected a bare number of {unit}"))
            })?;
            *target = value;
            store.set(directive.property, PropertyValue::Duration(value));
        }
        Slot::Unsupported { type_name } => {
            return Err(ConfigError::unsupported_type(type_name));
        }
    }

    trace!(tag, "stored resolved property value");
    Ok(())
}

/// Parse a boolean from conventional true/false tokens.
fn parse_bool(raw: &str) -> Option<bool> {
    match raw.to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Parse a base-10 signed integer at the slot's width.
fn parse_int<T>(raw: &str, tag: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr<Err = std::num::ParseIntError>,
{
    raw.parse::<T>()
        .map_err(|err| ConfigError::value_parse(raw, tag, err.to_string()))
}
