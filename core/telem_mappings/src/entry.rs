//! Per-entry configuration.
//!
//! Each telemetry entry can carry a small key/value map, written in RON:
//!
//! ```ron
//! { "unit": "inches" }
//! ```
//!
//! The `unit` key is the config string handed to the entry's mapping.

use log::debug;
use ron::value::Value as RonValue;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt::{self, Display};
use telem_traits::{TelemError, TelemResult};

pub const UNIT_KEY: &str = "unit";

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(transparent)]
pub struct EntryConfig(pub HashMap<String, ConfigValue>);

impl Display for EntryConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        write!(f, "{{")?;
        for (key, value) in self.0.iter() {
            if !first {
                write!(f, ", ")?;
            }
            write!(f, "{key}: {value}")?;
            first = false;
        }
        write!(f, "}}")
    }
}

impl EntryConfig {
    pub fn new() -> Self {
        EntryConfig(HashMap::new())
    }

    /// Shorthand for a config that only selects a unit.
    pub fn with_unit(unit: &str) -> Self {
        let mut config = Self::new();
        config.set(UNIT_KEY, unit);
        config
    }

    pub fn from_ron(text: &str) -> TelemResult<Self> {
        let config: EntryConfig = ron::from_str(text)
            .map_err(|e| TelemError::Config(format!("Failed to parse entry config: {e}")))?;
        debug!("Parsed entry config {config}");
        Ok(config)
    }

    pub fn to_ron(&self) -> TelemResult<String> {
        ron::to_string(self)
            .map_err(|e| TelemError::Config(format!("Failed to serialize entry config: {e}")))
    }

    /// `Ok(None)` when the key is absent, an error when it holds a value of another type.
    pub fn get<T>(&self, key: &str) -> TelemResult<Option<T>>
    where
        T: TryFrom<ConfigValue, Error = TelemError>,
    {
        self.0.get(key).cloned().map(T::try_from).transpose()
    }

    pub fn set<T: Into<ConfigValue>>(&mut self, key: &str, value: T) {
        self.0.insert(key.to_string(), value.into());
    }

    /// The unit string for the entry's mapping, if one is configured.
    pub fn unit(&self) -> TelemResult<Option<String>> {
        self.get::<String>(UNIT_KEY)
    }
}

/// Wrapper around the ron::Value to allow for custom serialization.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(transparent)]
pub struct ConfigValue(RonValue);

impl From<String> for ConfigValue {
    fn from(value: String) -> Self {
        ConfigValue(RonValue::String(value))
    }
}

impl From<&str> for ConfigValue {
    fn from(value: &str) -> Self {
        ConfigValue(RonValue::String(value.to_string()))
    }
}

impl From<f64> for ConfigValue {
    fn from(value: f64) -> Self {
        ConfigValue(RonValue::Number(value.into()))
    }
}

impl From<bool> for ConfigValue {
    fn from(value: bool) -> Self {
        ConfigValue(RonValue::Bool(value))
    }
}

impl TryFrom<ConfigValue> for String {
    type Error = TelemError;

    fn try_from(value: ConfigValue) -> Result<Self, Self::Error> {
        match value.0 {
            RonValue::String(s) => Ok(s),
            other => Err(TelemError::Config(format!(
                "Expected a String but got {other:?}"
            ))),
        }
    }
}

impl TryFrom<ConfigValue> for f64 {
    type Error = TelemError;

    fn try_from(value: ConfigValue) -> Result<Self, Self::Error> {
        match value.0 {
            RonValue::Number(num) => num
                .as_f64()
                .or_else(|| num.as_i64().map(|i| i as f64))
                .ok_or_else(|| TelemError::Config(format!("Expected a number but got {num:?}"))),
            other => Err(TelemError::Config(format!(
                "Expected a Number but got {other:?}"
            ))),
        }
    }
}

impl TryFrom<ConfigValue> for bool {
    type Error = TelemError;

    fn try_from(value: ConfigValue) -> Result<Self, Self::Error> {
        match value.0 {
            RonValue::Bool(b) => Ok(b),
            other => Err(TelemError::Config(format!(
                "Expected a Boolean but got {other:?}"
            ))),
        }
    }
}

impl Display for ConfigValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            RonValue::Number(n) => match (n.as_i64(), n.as_f64()) {
                (Some(i), _) => write!(f, "{i}"),
                (None, Some(x)) => write!(f, "{x}"),
                (None, None) => write!(f, "{n:?}"),
            },
            RonValue::String(s) => write!(f, "{s}"),
            RonValue::Bool(b) => write!(f, "{b}"),
            RonValue::Map(m) => write!(f, "{m:?}"),
            RonValue::Char(c) => write!(f, "{c:?}"),
            RonValue::Unit => write!(f, "unit"),
            RonValue::Option(o) => write!(f, "{o:?}"),
            RonValue::Seq(s) => write!(f, "{s:?}"),
        }
    }
}
