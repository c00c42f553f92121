//! Deep copy into the closed value model.

use crate::dynamic::{Dynamic, Node};
use crate::error::{JsonError, Result};
use crate::value::{HashedObject, Map, Value};

/// Creates an independent deep copy of a tree.
///
/// The result owns all of its storage, so mutating either side afterwards
/// never affects the other. Any tree implementing [`Dynamic`] can be copied;
/// a string `_hash` field on an object becomes the digest of a
/// [`HashedObject`].
///
/// # Errors
///
/// Returns [`JsonError::UnsupportedType`] as soon as a node outside the
/// recognized kinds is found. Nothing is returned for the part that was
/// already copied.
///
/// # Examples
///
/// ```
/// use hashed_json::{copy, equals, Value};
/// use serde_json::json;
///
/// let original = json!({"a": [1, {"b": 2}]});
/// let copied = copy(&original).unwrap();
/// assert!(equals(&copied, &Value::from(original)));
/// ```
pub fn copy<T: Dynamic>(value: &T) -> Result<Value> {
    match value.node() {
        Node::Null => Ok(Value::Null),
        Node::Bool(b) => Ok(Value::Bool(b)),
        Node::Number(n) => Ok(Value::Number(n)),
        Node::String(s) => Ok(Value::String(s.to_string())),
        Node::Array(items) => copy_list(items).map(Value::Array),
        Node::Object(fields) => {
            let mut map = Map::new();
            for (key, val) in fields.entries {
                map.insert(key.to_string(), copy(val)?);
            }
            Ok(match fields.hash {
                Some(hash) => Value::Hashed(HashedObject::new(hash, map)),
                None => Value::Object(map),
            })
        }
        Node::Foreign => {
            let type_name = value.type_name().into_owned();
            tracing::debug!(type_name = %type_name, "json copy rejected node");
            Err(JsonError::UnsupportedType { type_name })
        }
    }
}

/// Copies every element of a list, see [`copy`].
pub fn copy_list<T: Dynamic>(list: &[T]) -> Result<Vec<Value>> {
    list.iter().map(copy).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ciborium::value::Value as CborValue;
    use serde_json::json;

    fn copy_json(value: serde_json::Value) -> serde_json::Value {
        serde_json::Value::from(copy(&value).unwrap())
    }

    #[test]
    fn test_copy_empty() {
        assert_eq!(copy_json(json!({})), json!({}));
    }

    #[test]
    fn test_copy_simple() {
        assert_eq!(copy_json(json!({"a": 1})), json!({"a": 1}));
    }

    #[test]
    fn test_copy_nested() {
        assert_eq!(copy_json(json!({"a": {"b": 1}})), json!({"a": {"b": 1}}));
    }

    #[test]
    fn test_copy_lists() {
        assert_eq!(copy_json(json!({"a": [1, 2]})), json!({"a": [1, 2]}));
        assert_eq!(copy_json(json!({"a": [[1, 2]]})), json!({"a": [[1, 2]]}));
        assert_eq!(copy_json(json!({"a": [{"b": 1}]})), json!({"a": [{"b": 1}]}));
    }

    #[test]
    fn test_copy_nulls() {
        assert_eq!(
            copy_json(json!({"a": null, "b": [1, null, 2]})),
            json!({"a": null, "b": [1, null, 2]})
        );
    }

    #[test]
    fn test_copy_scalar_root() {
        assert_eq!(copy(&json!("x")), Ok(Value::from("x")));
        assert_eq!(copy(&json!(null)), Ok(Value::Null));
    }

    #[test]
    fn test_copy_keeps_hashes() {
        let copied = copy(&json!({"a": {"b": 1, "_hash": "hash1"}, "_hash": "hash0"})).unwrap();
        assert_eq!(copied.hash(), Some("hash0"));
        assert_eq!(copied.get("a").and_then(Value::hash), Some("hash1"));
        assert!(copied.is_deeply_hashed());
    }

    #[test]
    fn test_copy_value_is_identical() {
        let original = Value::from(json!({"a": [1, {"b": 2, "_hash": ""}], "_hash": null}));
        assert_eq!(copy(&original), Ok(original));
    }

    #[test]
    fn test_copy_is_independent() {
        let original = Value::from(json!({"arr": [1, 2, 3]}));
        let mut copied = copy(&original).unwrap();
        if let Value::Object(map) = &mut copied {
            map.insert("arr".to_string(), Value::Null);
        }
        assert_eq!(original.get("arr"), Some(&Value::from(json!([1, 2, 3]))));
        assert_eq!(copied.get("arr"), Some(&Value::Null));
    }

    #[test]
    fn test_copy_rejects_in_map() {
        let value = CborValue::Map(vec![(
            CborValue::Text("a".to_string()),
            CborValue::Bytes(vec![1]),
        )]);
        let err = copy(&value).unwrap_err();
        assert_eq!(err.to_string(), "Unsupported type: Bytes");
    }

    #[test]
    fn test_copy_rejects_in_list() {
        let value = CborValue::Map(vec![(
            CborValue::Text("a".to_string()),
            CborValue::Array(vec![CborValue::Tag(1, Box::new(CborValue::Integer(0.into())))]),
        )]);
        assert_eq!(
            copy(&value),
            Err(JsonError::UnsupportedType {
                type_name: "Date".to_string()
            })
        );
    }

    #[test]
    fn test_copy_list() {
        let list = [json!(1), json!([true]), json!({"a": null})];
        assert_eq!(
            copy_list(&list),
            Ok(vec![
                Value::from(1),
                Value::from(vec![Value::Bool(true)]),
                Value::from(json!({"a": null})),
            ])
        );

        let bad = [CborValue::Null, CborValue::Bytes(vec![])];
        assert!(copy_list(&bad).is_err());
    }
}
