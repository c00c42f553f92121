use std::borrow::Cow;

use serde_json::Value as JsonValue;

use super::{Dynamic, Fields, Node};
use crate::value::HASH_KEY;

impl Dynamic for JsonValue {
    fn node(&self) -> Node<'_, Self> {
        match self {
            JsonValue::Null => Node::Null,
            JsonValue::Bool(b) => Node::Bool(*b),
            JsonValue::Number(n) => n.as_f64().map_or(Node::Foreign, Node::Number),
            JsonValue::String(s) => Node::String(s),
            JsonValue::Array(arr) => Node::Array(arr),
            JsonValue::Object(obj) => {
                let hash = obj.get(HASH_KEY).and_then(JsonValue::as_str);
                let entries = obj
                    .iter()
                    .filter(move |(k, _)| hash.is_none() || k.as_str() != HASH_KEY)
                    .map(|(k, v)| (k.as_str(), v));
                Node::Object(Fields::new(hash, entries))
            }
        }
    }

    fn type_name(&self) -> Cow<'_, str> {
        Cow::Borrowed(match self {
            JsonValue::Null => "null",
            JsonValue::Bool(_) => "boolean",
            JsonValue::Number(_) => "number",
            JsonValue::String(_) => "string",
            JsonValue::Array(_) => "array",
            JsonValue::Object(_) => "object",
        })
    }

    fn render(&self) -> String {
        self.to_string()
    }
}
