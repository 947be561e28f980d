//! Caller origin as received at the RPC boundary.
//!
//! The transport does not guarantee a string-typed origin, so every JSON
//! shape is represented explicitly. Only [`Origin::Text`] can ever be granted
//! permissions.

use serde::de::{self, IgnoredAny, MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer};
use serde_json::{Number, Value};
use std::fmt;

/// Origin of an inbound keyring RPC request.
///
/// As a struct field it needs no `#[serde(default)]`: a missing field
/// deserializes to [`Origin::Absent`]. Deserialization goes through
/// `deserialize_option`, so JSON `null` in a field also arrives as
/// [`Origin::Absent`]; [`Origin::Null`] is produced by the `From<&Value>`
/// conversion. Both resolve to no permissions.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Origin {
    /// String origin: a URL, the internal caller token, or garbage.
    Text(String),
    /// No origin supplied.
    #[default]
    Absent,
    /// JSON `null`.
    Null,
    /// JSON boolean.
    Bool(bool),
    /// JSON number.
    Number(Number),
    /// JSON array or object.
    Structured,
}

impl Origin {
    /// String contents, if this origin is a string.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Origin::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Shape of the origin, for diagnostics that must not echo the value.
    pub fn kind(&self) -> &'static str {
        match self {
            Origin::Text(_) => "string",
            Origin::Absent => "absent",
            Origin::Null => "null",
            Origin::Bool(_) => "boolean",
            Origin::Number(_) => "number",
            Origin::Structured => "structured",
        }
    }
}

impl From<&Value> for Origin {
    fn from(value: &Value) -> Self {
        match value {
            Value::String(s) => Origin::Text(s.clone()),
            Value::Null => Origin::Null,
            Value::Bool(b) => Origin::Bool(*b),
            Value::Number(n) => Origin::Number(n.clone()),
            Value::Array(_) | Value::Object(_) => Origin::Structured,
        }
    }
}

impl From<Value> for Origin {
    fn from(value: Value) -> Self {
        match value {
            Value::String(s) => Origin::Text(s),
            other => Origin::from(&other),
        }
    }
}

impl From<Option<&Value>> for Origin {
    fn from(value: Option<&Value>) -> Self {
        value.map_or(Origin::Absent, Origin::from)
    }
}

impl From<&str> for Origin {
    fn from(value: &str) -> Self {
        Origin::Text(value.to_string())
    }
}

impl From<String> for Origin {
    fn from(value: String) -> Self {
        Origin::Text(value)
    }
}

impl From<Option<&str>> for Origin {
    fn from(value: Option<&str>) -> Self {
        value.map_or(Origin::Absent, Origin::from)
    }
}

impl From<bool> for Origin {
    fn from(value: bool) -> Self {
        Origin::Bool(value)
    }
}

impl From<i64> for Origin {
    fn from(value: i64) -> Self {
        Origin::Number(Number::from(value))
    }
}

impl From<u64> for Origin {
    fn from(value: u64) -> Self {
        Origin::Number(Number::from(value))
    }
}

struct OriginVisitor;

impl<'de> Visitor<'de> for OriginVisitor {
    type Value = Origin;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("any JSON value")
    }

    // Missing fields land here as well as `null` from formats that route it
    // through `deserialize_option`.
    fn visit_none<E: de::Error>(self) -> Result<Origin, E> {
        Ok(Origin::Absent)
    }

    fn visit_some<D>(self, deserializer: D) -> Result<Origin, D::Error>
    where
        D: Deserializer<'de>,
    {
        Value::deserialize(deserializer).map(Origin::from)
    }

    fn visit_unit<E: de::Error>(self) -> Result<Origin, E> {
        Ok(Origin::Null)
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<Origin, E> {
        Ok(Origin::Bool(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Origin, E> {
        Ok(Origin::from(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Origin, E> {
        Ok(Origin::from(v))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Origin, E> {
        Ok(Origin::from(Value::from(v)))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Origin, E> {
        Ok(Origin::from(v))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<Origin, E> {
        Ok(Origin::Text(v))
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Origin, A::Error>
    where
        A: SeqAccess<'de>,
    {
        while seq.next_element::<IgnoredAny>()?.is_some() {}
        Ok(Origin::Structured)
    }

    fn visit_map<A>(self, mut map: A) -> Result<Origin, A::Error>
    where
        A: MapAccess<'de>,
    {
        while map.next_entry::<IgnoredAny, IgnoredAny>()?.is_some() {}
        Ok(Origin::Structured)
    }
}

impl<'de> Deserialize<'de> for Origin {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_option(OriginVisitor)
    }
}
