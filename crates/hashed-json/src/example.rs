//! Example values covering every supported kind.

use serde_json::json;

use crate::value::Value;

/// `{a: {b: 1}}`
pub fn example_json() -> Value {
    Value::from(json!({"a": {"b": 1}}))
}

/// [`example_json`] with a digest on every object node.
pub fn example_json_h() -> Value {
    Value::from(json!({"a": {"b": 1, "_hash": "hash1"}, "_hash": "hash0"}))
}

/// An object holding one field of every kind.
pub fn example_json_object() -> Value {
    Value::from(json!({
        "int": 5,
        "double": 5.5,
        "string": "a",
        "boolean": true,
        "null": null,
        "array": [1, "a", true, null, [1, "a", true, null], {"a": 1}],
        "object": {"a": 1, "b": {"c": 2}}
    }))
}

/// An array holding one element of every kind.
pub fn example_json_array() -> Value {
    Value::Array(vec![
        Value::from(1),
        Value::from("a"),
        Value::from(true),
        Value::Null,
        Value::from(json!([1, "a", true, null, [1, "a", true, null], {"a": 1}])),
        example_json_object(),
    ])
}
