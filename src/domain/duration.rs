//! Server duration tokens
//!
//! Server configuration reports durations as `<digits><unit>` tokens such as
//! `"30s"` or `"500ms"`. [`parse`] accepts exactly that grammar and nothing else.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

use crate::shared::error::{AppError, AppResult};

// `ms` must come before `m` in the alternation.
static DURATION_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<magnitude>[0-9]+)(?P<unit>ms|s|m|h|d)$").expect("duration token pattern is valid")
});

const MILLIS_PER_SECOND: u128 = 1_000;
const MILLIS_PER_MINUTE: u128 = 60 * MILLIS_PER_SECOND;
const MILLIS_PER_HOUR: u128 = 60 * MILLIS_PER_MINUTE;
const MILLIS_PER_DAY: u128 = 24 * MILLIS_PER_HOUR;

/// Unit of a parsed duration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum DurationUnit {
    Milliseconds,
    Seconds,
    Minutes,
    Hours,
    Days,
}

impl DurationUnit {
    /// Token suffix
    pub fn suffix(&self) -> &'static str {
        match self {
            DurationUnit::Milliseconds => "ms",
            DurationUnit::Seconds => "s",
            DurationUnit::Minutes => "m",
            DurationUnit::Hours => "h",
            DurationUnit::Days => "d",
        }
    }

    fn from_suffix(suffix: &str) -> Option<Self> {
        match suffix {
            "ms" => Some(DurationUnit::Milliseconds),
            "s" => Some(DurationUnit::Seconds),
            "m" => Some(DurationUnit::Minutes),
            "h" => Some(DurationUnit::Hours),
            "d" => Some(DurationUnit::Days),
            _ => None,
        }
    }

    fn millis(&self) -> u128 {
        match self {
            DurationUnit::Milliseconds => 1,
            DurationUnit::Seconds => MILLIS_PER_SECOND,
            DurationUnit::Minutes => MILLIS_PER_MINUTE,
            DurationUnit::Hours => MILLIS_PER_HOUR,
            DurationUnit::Days => MILLIS_PER_DAY,
        }
    }
}

/// Immutable duration value: a magnitude in a given unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Duration {
    magnitude: u64,
    unit: DurationUnit,
}

impl Duration {
    pub fn new(magnitude: u64, unit: DurationUnit) -> Self {
        Self { magnitude, unit }
    }

    /// Magnitude as written in the token
    pub fn magnitude(&self) -> u64 {
        self.magnitude
    }

    pub fn unit(&self) -> DurationUnit {
        self.unit
    }

    pub fn to_millis(&self) -> u64 {
        self.convert(DurationUnit::Milliseconds)
    }

    pub fn seconds(&self) -> u64 {
        self.convert(DurationUnit::Seconds)
    }

    pub fn to_minutes(&self) -> u64 {
        self.convert(DurationUnit::Minutes)
    }

    pub fn to_hours(&self) -> u64 {
        self.convert(DurationUnit::Hours)
    }

    pub fn to_days(&self) -> u64 {
        self.convert(DurationUnit::Days)
    }

    /// Equivalent standard library duration, saturating at `u64::MAX` seconds
    pub fn to_std(&self) -> std::time::Duration {
        let millis = self.total_millis();
        let secs = u64::try_from(millis / MILLIS_PER_SECOND).unwrap_or(u64::MAX);
        let nanos = (millis % MILLIS_PER_SECOND) as u32 * 1_000_000;
        std::time::Duration::new(secs, nanos)
    }

    fn total_millis(&self) -> u128 {
        u128::from(self.magnitude) * self.unit.millis()
    }

    // Same unit returns the magnitude untouched; otherwise truncate and saturate.
    fn convert(&self, target: DurationUnit) -> u64 {
        if target == self.unit {
            return self.magnitude;
        }
        u64::try_from(self.total_millis() / target.millis()).unwrap_or(u64::MAX)
    }
}

/// Parse a `<digits><unit>` duration token.
pub fn parse(token: &str) -> AppResult<Duration> {
    let malformed = || AppError::MalformedDurationToken { token: token.to_string() };

    let captures = DURATION_TOKEN.captures(token).ok_or_else(malformed)?;

    let magnitude = captures["magnitude"].parse::<u64>().map_err(|_| malformed())?;
    let unit = DurationUnit::from_suffix(&captures["unit"]).ok_or_else(malformed)?;

    Ok(Duration::new(magnitude, unit))
}

impl std::str::FromStr for Duration {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.magnitude, self.unit.suffix())
    }
}

impl Serialize for Duration {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Duration {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let token = String::deserialize(deserializer)?;
        parse(&token).map_err(serde::de::Error::custom)
    }
}
