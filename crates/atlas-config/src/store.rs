//! Shared property store.
//!
//! Resolved values are mirrored into a [`PropertyStore`] under their
//! property name, where they act as the second-priority source for later
//! resolutions and as a read surface for collaborators (health endpoints,
//! diagnostics) that look configuration up by logical name after bootstrap.

use std::collections::{BTreeMap, HashMap};
use std::env;
use std::sync::OnceLock;
use std::time::Duration;

use parking_lot::RwLock;
use serde::Serialize;

/// A coerced configuration value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PropertyValue {
    /// Verbatim text.
    Text(String),
    /// Space-separated list of text values.
    TextList(Vec<String>),
    /// Boolean.
    Bool(bool),
    /// Signed integer (all widths widen to 64 bits).
    Int(i64),
    /// Time interval.
    Duration(Duration),
}

impl PropertyValue {
    /// Textual representation of the value.
    ///
    /// Lists join with single spaces (the inverse of the resolver's
    /// splitter); durations render as their whole-nanosecond count, the
    /// canonical numeric representation the resolver persists.
    #[must_use]
    pub fn as_text(&self) -> String {
        match self {
            Self::Text(value) => value.clone(),
            Self::TextList(values) => values.join(" "),
            Self::Bool(value) => value.to_string(),
            Self::Int(value) => value.to_string(),
            Self::Duration(value) => value.as_nanos().to_string(),
        }
    }
}

impl std::fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_text())
    }
}

/// Thread-safe mapping from property name to resolved value.
///
/// Reads and writes are serialized through a reader/writer lock; no caller
/// observes a half-written value. Entries live for the process lifetime,
/// last write wins.
///
/// The store is an explicit context object threaded through resolution
/// calls. A process-wide default instance is available through
/// [`PropertyStore::global`] for bootstrap ergonomics.
#[derive(Debug, Default)]
pub struct PropertyStore {
    values: RwLock<HashMap<String, PropertyValue>>,
}

impl PropertyStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide default store.
    ///
    /// Used by the `*_or_panic` bootstrap helpers; everywhere else the
    /// store is passed explicitly.
    pub fn global() -> &'static Self {
        static GLOBAL: OnceLock<PropertyStore> = OnceLock::new();
        GLOBAL.get_or_init(Self::default)
    }

    /// Store a value under a property name, overwriting any prior value.
    pub fn set(&self, name: impl Into<String>, value: PropertyValue) {
        self.values.write().insert(name.into(), value);
    }

    /// Read a value by property name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<PropertyValue> {
        self.values.read().get(name).cloned()
    }

    /// Read a value by property name as text.
    ///
    /// Returns the empty string when the property is absent.
    #[must_use]
    pub fn get_text(&self, name: &str) -> String {
        self.values
            .read()
            .get(name)
            .map(PropertyValue::as_text)
            .unwrap_or_default()
    }

    /// An ordered snapshot of all stored properties.
    ///
    /// Intended for read-only surfaces such as health or diagnostics
    /// endpoints; [`PropertyValue`] serializes so the snapshot can be
    /// rendered directly.
    #[must_use]
    pub fn snapshot(&self) -> BTreeMap<String, PropertyValue> {
        self.values
            .read()
            .iter()
            .map(|(name, value)| (name.clone(), value.clone()))
            .collect()
    }

    /// Drop all stored entries and clear the process environment table.
    ///
    /// Test isolation only: wiping the environment removes every variable
    /// of the process, not just the ones resolution consulted.
    pub fn clear(&self) {
        self.values.write().clear();
        let keys: Vec<std::ffi::OsString> = env::vars_os().map(|(key, _)| key).collect();
        for key in keys {
            env::remove_var(key);
        }
    }
}
