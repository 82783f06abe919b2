//! Framework-neutral property values
//!
//! Adapters describe component configuration as `Props` and render them with
//! their own formatter; nothing here knows about quoting rules.

use indexmap::IndexMap;
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Ordered property bag.
pub type Props = IndexMap<String, PropValue>;

/// Key of the single-entry object that carries a `Code` value through JSON or TOML.
pub const CODE_KEY: &str = "$code";

/// A single configuration value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PropValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    Array(Vec<PropValue>),
    Object(Props),
    /// Source text emitted verbatim: arrow functions, constructor calls.
    /// Serialized as `{ "$code": "..." }`.
    #[serde(serialize_with = "serialize_code")]
    Code(String),
}

impl PropValue {
    pub fn str(value: impl Into<String>) -> Self {
        PropValue::Str(value.into())
    }

    pub fn code(source: impl Into<String>) -> Self {
        PropValue::Code(source.into())
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            PropValue::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&Props> {
        match self {
            PropValue::Object(props) => Some(props),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, PropValue::Null)
    }
}

impl From<&str> for PropValue {
    fn from(value: &str) -> Self {
        PropValue::Str(value.to_string())
    }
}

impl From<String> for PropValue {
    fn from(value: String) -> Self {
        PropValue::Str(value)
    }
}

impl From<bool> for PropValue {
    fn from(value: bool) -> Self {
        PropValue::Bool(value)
    }
}

impl From<i64> for PropValue {
    fn from(value: i64) -> Self {
        PropValue::Int(value)
    }
}

impl From<i32> for PropValue {
    fn from(value: i32) -> Self {
        PropValue::Int(i64::from(value))
    }
}

impl From<f64> for PropValue {
    fn from(value: f64) -> Self {
        PropValue::Float(value)
    }
}

impl<T: Into<PropValue>> From<Vec<T>> for PropValue {
    fn from(values: Vec<T>) -> Self {
        PropValue::Array(values.into_iter().map(Into::into).collect())
    }
}

impl From<Props> for PropValue {
    fn from(props: Props) -> Self {
        PropValue::Object(props)
    }
}

impl From<serde_json::Value> for PropValue {
    fn from(value: serde_json::Value) -> Self {
        use serde_json::Value;
        match value {
            Value::Null => PropValue::Null,
            Value::Bool(b) => PropValue::Bool(b),
            Value::Number(n) => match n.as_i64() {
                Some(i) => PropValue::Int(i),
                None => PropValue::Float(n.as_f64().unwrap_or_default()),
            },
            Value::String(s) => PropValue::Str(s),
            Value::Array(items) => PropValue::Array(items.into_iter().map(PropValue::from).collect()),
            Value::Object(map) if map.len() == 1 && map.get(CODE_KEY).is_some_and(Value::is_string) => {
                match map.into_iter().next() {
                    Some((_, Value::String(source))) => PropValue::Code(source),
                    _ => PropValue::Null,
                }
            }
            Value::Object(map) => PropValue::Object(
                map.into_iter()
                    .map(|(key, value)| (key, PropValue::from(value)))
                    .collect(),
            ),
        }
    }
}

fn serialize_code<S: Serializer>(source: &str, serializer: S) -> std::result::Result<S::Ok, S::Error> {
    let mut map = serializer.serialize_map(Some(1))?;
    map.serialize_entry(CODE_KEY, source)?;
    map.end()
}

impl<'de> Deserialize<'de> for PropValue {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        serde_json::Value::deserialize(deserializer).map(PropValue::from)
    }
}

/// Build a `Props` from `key => value` pairs.
#[macro_export]
macro_rules! props {
    () => { $crate::props::Props::new() };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut props = $crate::props::Props::new();
        $(props.insert($key.to_string(), $crate::props::PropValue::from($value));)+
        props
    }};
}

/// Overlay `overrides` onto `base`; later keys replace earlier ones in place.
pub fn merge(base: &Props, overrides: Option<&Props>) -> Props {
    let mut merged = base.clone();
    if let Some(overrides) = overrides {
        for (key, value) in overrides {
            merged.insert(key.clone(), value.clone());
        }
    }
    merged
}
