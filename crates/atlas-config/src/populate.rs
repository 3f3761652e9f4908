//! Structure population.
//!
//! "Declare once, resolve automatically" without runtime type inspection:
//! a structure lists its fields as an explicit, ordered table of
//! [`Binding`]s, each naming the field, its directive and a typed [`Slot`]
//! pointing at the field to assign.

use std::time::Duration;

use tracing::trace;

use crate::resolve;
use crate::store::PropertyStore;
use crate::ConfigError;

/// A typed reference to one field to populate.
///
/// The variants cover every target kind with a coercion rule. A field of
/// any other type is declared as [`Slot::Unsupported`], which fails
/// resolution with [`ConfigError::UnsupportedType`]: a tagged field the
/// resolver cannot coerce is an error, not a silent skip.
#[derive(Debug)]
pub enum Slot<'a> {
    /// Verbatim text.
    Text(&'a mut String),
    /// Space-separated list; empty raw text yields an empty list.
    TextList(&'a mut Vec<String>),
    /// Boolean.
    Bool(&'a mut bool),
    /// 8-bit signed integer.
    I8(&'a mut i8),
    /// 16-bit signed integer.
    I16(&'a mut i16),
    /// 32-bit signed integer.
    I32(&'a mut i32),
    /// 64-bit signed integer.
    I64(&'a mut i64),
    /// Time interval; the unit is inferred from the field name.
    Duration(&'a mut Duration),
    /// A field whose type has no coercion rule.
    Unsupported {
        /// Type name reported in the error.
        type_name: &'static str,
    },
}

/// One field descriptor: declared name, directive and target slot.
#[derive(Debug)]
pub struct Binding<'a> {
    pub(crate) name: &'static str,
    pub(crate) tag: &'static str,
    pub(crate) slot: Slot<'a>,
}

impl<'a> Binding<'a> {
    /// Describe one field.
    ///
    /// `name` is the declared field name (it drives duration unit
    /// inference), `tag` the directive string. An empty tag marks a field
    /// resolution should skip.
    #[must_use]
    pub fn new(name: &'static str, tag: &'static str, slot: Slot<'a>) -> Self {
        Self { name, tag, slot }
    }
}

/// A structure that can be populated from directives.
///
/// Implementors return their bindings in declaration order. Nested
/// configuration sections are not traversed; populate each section with
/// its own [`populate`] call.
pub trait Resolvable {
    /// The field table, in declaration order.
    fn bindings(&mut self) -> Vec<Binding<'_>>;
}

/// Resolve every bound field of a structure.
///
/// Fields resolve in declaration order, stopping at the first error;
/// fields resolved before the failing one keep their assigned values.
/// Bindings with an empty directive are skipped silently.
///
/// # Example
///
/// ```
/// use atlas_config::{populate, Binding, PropertyStore, Resolvable, Slot};
///
/// #[derive(Default)]
/// struct Server {
///     port: i32,
/// }
///
/// impl Resolvable for Server {
///     fn bindings(&mut self) -> Vec<Binding<'_>> {
///         vec![Binding::new("port", "server.port|8000", Slot::I32(&mut self.port))]
///     }
/// }
///
/// let store = PropertyStore::new();
/// let mut server = Server::default();
/// populate(&store, &mut server)?;
/// assert_eq!(server.port, 8000);
/// # Ok::<(), atlas_config::ConfigError>(())
/// ```
///
/// # Errors
///
/// Returns the first [`ConfigError`] encountered across the bindings.
pub fn populate<T: Resolvable + ?Sized>(
    store: &PropertyStore,
    target: &mut T,
) -> Result<(), ConfigError> {
    for binding in target.bindings() {
        if binding.tag.is_empty() {
            trace!(field = binding.name, "no directive, skipping field");
            continue;
        }
        resolve::apply(store, binding.slot, binding.name, binding.tag)?;
    }
    Ok(())
}

/// Resolve every bound field against the global store, panicking on error.
///
/// Bootstrap variant for service startup, where an invalid configuration
/// is unrecoverable.
///
/// # Panics
///
/// Panics on any resolution error.
pub fn populate_or_panic<T: Resolvable + ?Sized>(target: &mut T) {
    if let Err(err) = populate(PropertyStore::global(), target) {
        panic!("unable to resolve configuration: {err}");
    }
}

/// Resolve a single directive into a caller-supplied slot.
///
/// Duration slots are rejected: there is no containing field name to
/// infer a unit from. Use [`duration`] with an explicit unit instead.
///
/// # Errors
///
/// Returns [`ConfigError::DurationNotSupported`] for duration slots, or
/// any resolution error for the directive.
pub fn set_value(store: &PropertyStore, slot: Slot<'_>, tag: &str) -> Result<(), ConfigError> {
    if matches!(slot, Slot::Duration(_)) {
        return Err(ConfigError::duration_not_supported(tag));
    }
    resolve::apply(store, slot, "", tag)
}

/// Resolve a single directive against the global store, panicking on error.
///
/// # Panics
///
/// Panics on duration slots and on any resolution error.
pub fn value_or_panic(slot: Slot<'_>, tag: &str) {
    if let Err(err) = set_value(PropertyStore::global(), slot, tag) {
        panic!("unable to resolve value: {err}");
    }
}

/// Resolve a duration directive with a caller-supplied unit.
///
/// `unit` goes through the same suffix inference as a field name, so
/// `"seconds"`, `"poll_minutes"` and friends all work, and an
/// unrecognized unit falls back to milliseconds.
///
/// # Example
///
/// ```
/// use std::time::Duration;
///
/// use atlas_config::{duration, PropertyStore};
///
/// let store = PropertyStore::new();
/// let timeout = duration(&store, "upstream.timeout|5", "seconds")?;
/// assert_eq!(timeout, Duration::from_secs(5));
/// # Ok::<(), atlas_config::ConfigError>(())
/// ```
///
/// # Errors
///
/// Returns any resolution error for the directive.
pub fn duration(store: &PropertyStore, tag: &str, unit: &str) -> Result<Duration, ConfigError> {
    let mut value = Duration::ZERO;
    resolve::apply(store, Slot::Duration(&mut value), unit, tag)?;
    Ok(value)
}

/// Resolve a duration directive against the global store, panicking on
/// error.
///
/// # Panics
///
/// Panics on any resolution error.
#[must_use]
pub fn duration_or_panic(tag: &str, unit: &str) -> Duration {
    match duration(PropertyStore::global(), tag, unit) {
        Ok(value) => value,
        Err(err) => panic!("unable to resolve duration: {err}"),
    }
}

/// Load a `.env` file into the process environment, if one exists.
///
/// Feeds the highest-precedence source before resolution; a missing file
/// is ignored.
pub fn load_dotenv() {
    let _ = dotenvy::dotenv();
}
