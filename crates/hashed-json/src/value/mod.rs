//! The closed JSON value model.
//!
//! A [`Value`] can only be built from the recognized kinds, so code working
//! on `Value` never needs to reject anything. Object nodes come in two
//! shapes: a plain [`Map`] and a [`HashedObject`] carrying the reserved
//! content digest stored under [`HASH_KEY`] on the wire.

mod hashed;

pub use hashed::HashedObject;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use crate::types::ValueType;

/// Wire name of the reserved digest field.
pub const HASH_KEY: &str = "_hash";

/// Object fields, keyed by string. Order is kept for round-tripping only.
pub type Map = IndexMap<String, Value>;

/// A node in a JSON-shaped tree.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "JsonValue", into = "JsonValue")]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    Array(Vec<Value>),
    /// An object without a digest.
    Object(Map),
    /// An object carrying the reserved digest field.
    Hashed(HashedObject),
}

impl Value {
    /// Kind of this node. Total on the closed model.
    pub fn value_type(&self) -> ValueType {
        match self {
            Value::Null => ValueType::Null,
            Value::Bool(_) => ValueType::Boolean,
            Value::Number(_) => ValueType::Number,
            Value::String(_) => ValueType::String,
            Value::Array(_) => ValueType::Array,
            Value::Object(_) | Value::Hashed(_) => ValueType::Object,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn is_object(&self) -> bool {
        matches!(self, Value::Object(_) | Value::Hashed(_))
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Ordinary fields of an object node, without the reserved one.
    pub fn fields(&self) -> Option<&Map> {
        match self {
            Value::Object(map) => Some(map),
            Value::Hashed(obj) => Some(obj.fields()),
            _ => None,
        }
    }

    /// Looks up an ordinary field of an object node.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields().and_then(|map| map.get(key))
    }

    /// The trusted digest of a hashed object node.
    pub fn hash(&self) -> Option<&str> {
        match self {
            Value::Hashed(obj) => obj.trusted_hash(),
            _ => None,
        }
    }

    /// Returns true if every object node in the tree, at any depth and
    /// including objects nested in arrays, carries a non-empty digest.
    pub fn is_deeply_hashed(&self) -> bool {
        match self {
            Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_) => true,
            Value::Array(items) => items.iter().all(Value::is_deeply_hashed),
            Value::Object(_) => false,
            Value::Hashed(obj) => {
                obj.trusted_hash().is_some() && obj.fields().values().all(Value::is_deeply_hashed)
            }
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(n.into())
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Array(items)
    }
}

impl From<Map> for Value {
    fn from(map: Map) -> Self {
        Value::Object(map)
    }
}

impl From<HashedObject> for Value {
    fn from(obj: HashedObject) -> Self {
        Value::Hashed(obj)
    }
}

impl From<JsonValue> for Value {
    /// Converts a `serde_json` tree, lifting string `_hash` fields into
    /// [`HashedObject`] nodes.
    fn from(value: JsonValue) -> Self {
        match value {
            JsonValue::Null => Value::Null,
            JsonValue::Bool(b) => Value::Bool(b),
            JsonValue::Number(n) => n.as_f64().map_or(Value::Null, Value::Number),
            JsonValue::String(s) => Value::String(s),
            JsonValue::Array(arr) => Value::Array(arr.into_iter().map(Value::from).collect()),
            JsonValue::Object(obj) => {
                let mut hash = None;
                let mut map = Map::with_capacity(obj.len());
                for (key, val) in obj {
                    match val {
                        JsonValue::String(h) if key == HASH_KEY => hash = Some(h),
                        val => {
                            map.insert(key, Value::from(val));
                        }
                    }
                }
                match hash {
                    Some(h) => Value::Hashed(HashedObject::new(h, map)),
                    None => Value::Object(map),
                }
            }
        }
    }
}

impl From<&Value> for JsonValue {
    /// Converts back to `serde_json`, writing digests under `_hash`.
    ///
    /// Integral numbers in the `i64` range become integers and non-finite
    /// numbers become `null`.
    fn from(value: &Value) -> Self {
        match value {
            Value::Null => JsonValue::Null,
            Value::Bool(b) => JsonValue::Bool(*b),
            Value::Number(n) => number_to_json(*n),
            Value::String(s) => JsonValue::String(s.clone()),
            Value::Array(items) => JsonValue::Array(items.iter().map(JsonValue::from).collect()),
            Value::Object(map) => JsonValue::Object(fields_to_json(map)),
            Value::Hashed(obj) => {
                let mut out = fields_to_json(obj.fields());
                out.insert(HASH_KEY.to_string(), JsonValue::String(obj.hash().to_string()));
                JsonValue::Object(out)
            }
        }
    }
}

impl From<Value> for JsonValue {
    fn from(value: Value) -> Self {
        JsonValue::from(&value)
    }
}

fn fields_to_json(map: &Map) -> serde_json::Map<String, JsonValue> {
    map.iter()
        .map(|(key, val)| (key.clone(), JsonValue::from(val)))
        .collect()
}

fn number_to_json(n: f64) -> JsonValue {
    if n.fract() == 0.0 && n >= i64::MIN as f64 && n <= i64::MAX as f64 {
        return JsonValue::Number((n as i64).into());
    }
    serde_json::Number::from_f64(n).map_or(JsonValue::Null, JsonValue::Number)
}
