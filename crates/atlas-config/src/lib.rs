//! Directive-driven property resolution for Atlas services.
//!
//! Configuration structures declare, per field, a directive naming a
//! logical property and an optional default (`server.port|8000`). For each
//! bound field, resolution picks the raw value by a fixed precedence:
//!
//! 1. the environment variable derived from the property name (presence
//!    wins, even when the value is empty),
//! 2. the shared [`PropertyStore`],
//! 3. the directive's default.
//!
//! The raw value is coerced to the field's type, assigned, and mirrored
//! into the store under its property name, where collaborators can look it
//! up by logical name after bootstrap.
//!
//! # Directive format
//!
//! `<property>[|<default>]`, where a literal pipe inside the default is
//! written as `||`. Property names consist of letters, digits, dots, dashes and
//! spaces. The environment-variable name is derived by uppercasing,
//! turning dots into underscores and deleting dashes: `server.http-port`
//! is overridden by `SERVER_HTTPPORT`.
//!
//! Duration fields hold a bare number; the unit comes from the declared
//! field name's suffix (`nanos`, `micros`, `millis`, `seconds`, `minutes`,
//! `hours`), with milliseconds as the fallback.
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//!
//! use atlas_config::{populate, Binding, PropertyStore, Resolvable, Slot};
//!
//! #[derive(Default)]
//! struct Upstream {
//!     endpoint: String,
//!     timeout_seconds: Duration,
//! }
//!
//! impl Resolvable for Upstream {
//!     fn bindings(&mut self) -> Vec<Binding<'_>> {
//!         vec![
//!             Binding::new(
//!                 "endpoint",
//!                 "upstream.endpoint|http://localhost:9200",
//!                 Slot::Text(&mut self.endpoint),
//!             ),
//!             Binding::new(
//!                 "timeout_seconds",
//!                 "upstream.timeout|5",
//!                 Slot::Duration(&mut self.timeout_seconds),
//!             ),
//!         ]
//!     }
//! }
//!
//! let store = PropertyStore::new();
//! let mut upstream = Upstream::default();
//! populate(&store, &mut upstream)?;
//!
//! assert_eq!(upstream.endpoint, "http://localhost:9200");
//! assert_eq!(upstream.timeout_seconds, Duration::from_secs(5));
//! assert_eq!(store.get_text("upstream.timeout"), "5000000000");
//! # Ok::<(), atlas_config::ConfigError>(())
//! ```

mod directive;
mod error;
mod name;
mod populate;
mod resolve;
mod store;
mod unit;

pub use directive::Directive;
pub use error::ConfigError;
pub use name::env_name;
pub use populate::{
    duration, duration_or_panic, load_dotenv, populate, populate_or_panic, set_value,
    value_or_panic, Binding, Resolvable, Slot,
};
pub use store::{PropertyStore, PropertyValue};
pub use unit::DurationUnit;
