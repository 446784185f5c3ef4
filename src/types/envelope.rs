//! Response envelope returned by every iTop REST call.

use indexmap::IndexMap;
use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Objects keyed by iTop's composite `Class::id` keys, in wire order.
pub type ObjectMap = IndexMap<String, ObjectRecord>;

/// Top-level response body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    pub code: i64,
    /// Empty when the server sent `null` or omitted the field.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub message: String,
    /// `None` when the server sent `null` or omitted the field. PHP encodes
    /// an empty object set as `[]`, which decodes as an empty map.
    #[serde(default, deserialize_with = "optional_map")]
    pub objects: Option<ObjectMap>,
    /// Operation-specific members such as `authorized`, `version` or `operations`.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Envelope {
    pub fn success(objects: ObjectMap) -> Self {
        Self {
            code: 0,
            message: String::new(),
            objects: Some(objects),
            extra: Map::new(),
        }
    }

    /// The `authorized` flag of a credential check; false when absent.
    pub fn authorized(&self) -> bool {
        self.extra
            .get("authorized")
            .and_then(Value::as_bool)
            .unwrap_or(false)
    }

    pub fn get(&self, member: &str) -> Option<&Value> {
        self.extra.get(member)
    }
}

/// One object inside `objects`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectRecord {
    pub class: String,
    /// Object id; iTop sends it as a string or a number depending on the version.
    pub key: Value,
    #[serde(default, deserialize_with = "map_or_empty")]
    pub fields: Map<String, Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ObjectRecord {
    pub fn new(class: impl Into<String>, key: impl Into<Value>, fields: Map<String, Value>) -> Self {
        Self {
            class: class.into(),
            key: key.into(),
            fields,
            code: Some(0),
            message: Some(String::new()),
            extra: Map::new(),
        }
    }

    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// `null` and `[]` decode as `None` and an empty map respectively.
fn optional_map<'de, D, M>(deserializer: D) -> Result<Option<M>, D::Error>
where
    D: Deserializer<'de>,
    M: DeserializeOwned + Default,
{
    match Option::<Value>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Value::Array(items)) if items.is_empty() => Ok(Some(M::default())),
        Some(value) => serde_json::from_value(value).map(Some).map_err(D::Error::custom),
    }
}

fn map_or_empty<'de, D, M>(deserializer: D) -> Result<M, D::Error>
where
    D: Deserializer<'de>,
    M: DeserializeOwned + Default,
{
    Ok(optional_map(deserializer)?.unwrap_or_default())
}
