//! Request-side selectors: object keys, output fields and return modes.

use serde::{Serialize, Serializer};
use serde_json::{Map, Value};
use std::convert::Infallible;
use std::str::FromStr;

/// Identifies the object(s) an operation targets.
///
/// iTop accepts all shapes on the same `key` field and resolves them itself;
/// the client never interprets the key.
#[derive(Debug, Clone, PartialEq)]
pub enum ObjectKey {
    /// Numeric object id
    Id(i64),
    /// Scalar identifier sent as a string
    Name(String),
    /// Attribute filter, e.g. `{ "name": "Doe", "org_id": 2 }`
    Filter(Map<String, Value>),
    /// Free-form OQL query, e.g. `SELECT Person WHERE id = 1`
    Query(String),
    /// Any other JSON value (`null`, booleans, fractional numbers), sent as is
    Raw(Value),
}

impl ObjectKey {
    pub fn query(oql: impl Into<String>) -> Self {
        ObjectKey::Query(oql.into())
    }

    pub fn to_value(&self) -> Value {
        match self {
            ObjectKey::Id(id) => Value::from(*id),
            ObjectKey::Name(s) | ObjectKey::Query(s) => Value::String(s.clone()),
            ObjectKey::Filter(map) => Value::Object(map.clone()),
            ObjectKey::Raw(value) => value.clone(),
        }
    }
}

impl Serialize for ObjectKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ObjectKey::Id(id) => serializer.serialize_i64(*id),
            ObjectKey::Name(s) | ObjectKey::Query(s) => serializer.serialize_str(s),
            ObjectKey::Filter(map) => map.serialize(serializer),
            ObjectKey::Raw(value) => value.serialize(serializer),
        }
    }
}

impl From<i64> for ObjectKey {
    fn from(id: i64) -> Self {
        ObjectKey::Id(id)
    }
}

impl From<i32> for ObjectKey {
    fn from(id: i32) -> Self {
        ObjectKey::Id(id.into())
    }
}

impl From<u32> for ObjectKey {
    fn from(id: u32) -> Self {
        ObjectKey::Id(id.into())
    }
}

impl From<&str> for ObjectKey {
    fn from(s: &str) -> Self {
        ObjectKey::Name(s.to_string())
    }
}

impl From<String> for ObjectKey {
    fn from(s: String) -> Self {
        ObjectKey::Name(s)
    }
}

impl From<Map<String, Value>> for ObjectKey {
    fn from(map: Map<String, Value>) -> Self {
        ObjectKey::Filter(map)
    }
}

impl From<Value> for ObjectKey {
    /// Integers become ids, strings names, objects filters; anything else
    /// travels unchanged.
    fn from(value: Value) -> Self {
        match value {
            Value::Object(map) => ObjectKey::Filter(map),
            Value::String(s) => ObjectKey::Name(s),
            Value::Number(n) => match n.as_i64() {
                Some(id) => ObjectKey::Id(id),
                None => ObjectKey::Raw(Value::Number(n)),
            },
            other => ObjectKey::Raw(other),
        }
    }
}

pub const WILDCARD: &str = "*";

/// Output field selector.
///
/// Defaults to the wildcard `["*"]`. An empty selection is treated as the
/// wildcard too.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputFields(Vec<String>);

impl OutputFields {
    pub fn all() -> Self {
        OutputFields(vec![WILDCARD.to_string()])
    }

    pub fn new<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let fields: Vec<String> = fields.into_iter().map(Into::into).collect();
        if fields.is_empty() {
            Self::all()
        } else {
            OutputFields(fields)
        }
    }

    /// True unless at least one entry names a concrete field.
    pub fn is_wildcard(&self) -> bool {
        self.0.iter().all(|f| f == WILDCARD)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// Comma-joined form sent as `output_fields`.
    pub fn to_wire(&self) -> String {
        self.0.join(",")
    }
}

impl Default for OutputFields {
    fn default() -> Self {
        Self::all()
    }
}

impl<S: Into<String>> From<Vec<S>> for OutputFields {
    fn from(fields: Vec<S>) -> Self {
        OutputFields::new(fields)
    }
}

impl<S: Into<String>, const N: usize> From<[S; N]> for OutputFields {
    fn from(fields: [S; N]) -> Self {
        OutputFields::new(fields)
    }
}

/// Shape of the value returned to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReturnMode {
    /// Ordered sequence of records (or of their fields)
    #[default]
    Array,
    /// The `objects` map as returned, keyed by iTop's composite keys
    Object,
    /// The whole envelope
    All,
}

impl ReturnMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReturnMode::Array => "array",
            ReturnMode::Object => "object",
            ReturnMode::All => "all",
        }
    }
}

impl FromStr for ReturnMode {
    type Err = Infallible;

    /// Unrecognized names fall back to [`ReturnMode::All`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "array" => ReturnMode::Array,
            "object" => ReturnMode::Object,
            _ => ReturnMode::All,
        })
    }
}

impl From<&str> for ReturnMode {
    fn from(s: &str) -> Self {
        match s.parse() {
            Ok(mode) => mode,
            Err(never) => match never {},
        }
    }
}
