//! Duration unit inference.
//!
//! A duration directive supplies only a bare number; the unit comes from
//! the declared field name, since the directive format has no unit slot.

use std::time::Duration;

/// Time unit applied to a bare duration count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DurationUnit {
    /// Nanoseconds.
    Nanos,
    /// Microseconds.
    Micros,
    /// Milliseconds.
    Millis,
    /// Seconds.
    Seconds,
    /// Minutes.
    Minutes,
    /// Hours.
    Hours,
}

impl DurationUnit {
    /// Infer the unit from a declared field name.
    ///
    /// Case-insensitive suffix match, checked in fixed priority order:
    /// `nanos`, `micros`, `millis`, `seconds`, `minutes`, `hours`.
    /// Milliseconds when nothing matches.
    #[must_use]
    pub fn infer(field_name: &str) -> Self {
        let field_name = field_name.to_lowercase();
        if field_name.ends_with("nanos") {
            return Self::Nanos;
        }
        if field_name.ends_with("micros") {
            return Self::Micros;
        }
        if field_name.ends_with("millis") {
            return Self::Millis;
        }
        if field_name.ends_with("seconds") {
            return Self::Seconds;
        }
        if field_name.ends_with("minutes") {
            return Self::Minutes;
        }
        if field_name.ends_with("hours") {
            return Self::Hours;
        }
        Self::Millis
    }

    /// Short suffix for the unit, as used in duration expressions.
    #[must_use]
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::Nanos => "ns",
            Self::Micros => "us",
            Self::Millis => "ms",
            Self::Seconds => "s",
            Self::Minutes => "m",
            Self::Hours => "h",
        }
    }

    const fn nanos(self) -> u64 {
        match self {
            Self::Nanos => 1,
            Self::Micros => 1_000,
            Self::Millis => 1_000_000,
            Self::Seconds => 1_000_000_000,
            Self::Minutes => 60_000_000_000,
            Self::Hours => 3_600_000_000_000,
        }
    }

    /// Compose a bare numeric count with this unit.
    ///
    /// Whole counts scale exactly; fractional counts go through float
    /// math. Negative, non-finite or overflowing counts yield `None`.
    pub(crate) fn parse_count(self, raw: &str) -> Option<Duration> {
        if let Ok(count) = raw.parse::<u64>() {
            return self.nanos().checked_mul(count).map(Duration::from_nanos);
        }
        let count: f64 = raw.parse().ok()?;
        if !count.is_finite() || count < 0.0 {
            return None;
        }
        Duration::try_from_secs_f64(count * self.nanos() as f64 / 1_000_000_000.0).ok()
    }
}

impl std::fmt::Display for DurationUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.suffix())
    }
}
