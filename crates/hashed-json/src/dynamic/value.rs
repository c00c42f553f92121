use std::borrow::Cow;

use super::{Dynamic, Fields, Node};
use crate::value::Value;

impl Dynamic for Value {
    fn node(&self) -> Node<'_, Self> {
        match self {
            Value::Null => Node::Null,
            Value::Bool(b) => Node::Bool(*b),
            Value::Number(n) => Node::Number(*n),
            Value::String(s) => Node::String(s),
            Value::Array(items) => Node::Array(items),
            // Plain maps pass through verbatim; only hashed nodes carry a digest.
            Value::Object(map) => {
                Node::Object(Fields::new(None, map.iter().map(|(k, v)| (k.as_str(), v))))
            }
            Value::Hashed(obj) => Node::Object(Fields::new(
                Some(obj.hash()),
                obj.fields().iter().map(|(k, v)| (k.as_str(), v)),
            )),
        }
    }

    fn type_name(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.value_type().as_str())
    }

    fn render(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}
