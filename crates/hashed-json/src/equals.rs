//! Hash-aware structural equality.

use serde::{Deserialize, Serialize};

use crate::value::{HashedObject, Map, Value, HASH_KEY};

/// Options for [`equals_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EqualsOptions {
    /// `None` trusts digests, `Some(true)` ignores them, `Some(false)`
    /// compares the reserved field like any other field.
    pub ignore_hashes: Option<bool>,
}

impl EqualsOptions {
    pub fn ignore_hashes(ignore: bool) -> Self {
        Self {
            ignore_hashes: Some(ignore),
        }
    }

    pub fn policy(&self) -> HashPolicy {
        match self.ignore_hashes {
            None => HashPolicy::Trust,
            Some(true) => HashPolicy::Ignore,
            Some(false) => HashPolicy::Compare,
        }
    }
}

/// How the reserved digest field takes part in object comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HashPolicy {
    /// Two non-empty digests decide equality on their own. Otherwise the
    /// reserved field is left out and the fields are compared.
    #[default]
    Trust,
    /// The reserved field is always left out.
    Ignore,
    /// The reserved field is an ordinary field.
    Compare,
}

/// Compares two trees with the default [`HashPolicy::Trust`] policy.
///
/// Arrays compare element by element in order, objects compare by key set
/// and value regardless of key order. When both sides of an object pair
/// carry a non-empty digest, only the digests are compared and the rest of
/// the objects is not looked at.
///
/// A plain map holding a string `_hash` entry is treated the same as a
/// hashed object carrying that digest.
///
/// The relation is symmetric but not transitive: with `a` and `c` carrying
/// different digests and `b` carrying none, `a == b` and `b == c` can both
/// hold structurally while `a != c`. It is reflexive only for trees without
/// NaN numbers, since NaN is unequal to itself (a shared reference still
/// compares equal through the identity check).
///
/// # Examples
///
/// ```
/// use hashed_json::{equals, Value};
/// use serde_json::json;
///
/// let a = Value::from(json!({"a": 1, "_hash": "h0"}));
/// let b = Value::from(json!({"a": 2, "_hash": "h0"}));
/// assert!(equals(&a, &b));
/// ```
pub fn equals(a: &Value, b: &Value) -> bool {
    equals_with(a, b, &EqualsOptions::default())
}

/// Compares two trees, see [`equals`]. Never fails.
pub fn equals_with(a: &Value, b: &Value, options: &EqualsOptions) -> bool {
    deep_equal(a, b, options.policy())
}

fn deep_equal(a: &Value, b: &Value, policy: HashPolicy) -> bool {
    if std::ptr::eq(a, b) {
        return true;
    }
    match (a, b) {
        (Value::Null, Value::Null) => true,
        (Value::Bool(a), Value::Bool(b)) => a == b,
        (Value::Number(a), Value::Number(b)) => a == b,
        (Value::String(a), Value::String(b)) => a == b,

        (Value::Array(arr_a), Value::Array(arr_b)) => {
            arr_a.len() == arr_b.len()
                && arr_a
                    .iter()
                    .zip(arr_b)
                    .all(|(x, y)| deep_equal(x, y, policy))
        }

        // Objects of either shape, anything else is a kind mismatch
        _ => match (ObjectRef::of(a), ObjectRef::of(b)) {
            (Some(obj_a), Some(obj_b)) => objects_equal(obj_a, obj_b, policy),
            _ => false,
        },
    }
}

/// Borrowed view over either object shape.
#[derive(Clone, Copy)]
struct ObjectRef<'a> {
    hash: Option<&'a str>,
    fields: &'a Map,
}

impl<'a> ObjectRef<'a> {
    fn of(value: &'a Value) -> Option<Self> {
        match value {
            Value::Hashed(obj) => Some(Self::hashed(obj)),
            // A string reserved field on a plain map counts as its digest
            Value::Object(map) => Some(Self {
                hash: map.get(HASH_KEY).and_then(Value::as_str),
                fields: map,
            }),
            _ => None,
        }
    }

    fn hashed(obj: &'a HashedObject) -> Self {
        Self {
            hash: Some(obj.hash()),
            fields: obj.fields(),
        }
    }

    fn trusted_hash(&self) -> Option<&'a str> {
        self.hash.filter(|h| !h.is_empty())
    }

    /// The reserved field as it would appear on the wire.
    fn reserved(&self) -> Option<Reserved<'a>> {
        match self.hash {
            Some(h) => Some(Reserved::Digest(h)),
            None => self.fields.get(HASH_KEY).map(Reserved::Field),
        }
    }

    fn ordinary_fields(&self) -> impl Iterator<Item = (&'a String, &'a Value)> {
        self.fields.iter().filter(|(k, _)| k.as_str() != HASH_KEY)
    }

    fn ordinary_len(&self) -> usize {
        self.fields.len() - usize::from(self.fields.contains_key(HASH_KEY))
    }
}

enum Reserved<'a> {
    Digest(&'a str),
    Field(&'a Value),
}

fn reserved_equal(a: Reserved<'_>, b: Reserved<'_>, policy: HashPolicy) -> bool {
    match (a, b) {
        (Reserved::Digest(x), Reserved::Digest(y)) => x == y,
        (Reserved::Digest(d), Reserved::Field(v)) | (Reserved::Field(v), Reserved::Digest(d)) => {
            v.as_str() == Some(d)
        }
        (Reserved::Field(x), Reserved::Field(y)) => deep_equal(x, y, policy),
    }
}

fn objects_equal(a: ObjectRef<'_>, b: ObjectRef<'_>, policy: HashPolicy) -> bool {
    match policy {
        HashPolicy::Trust => {
            if let (Some(x), Some(y)) = (a.trusted_hash(), b.trusted_hash()) {
                return x == y;
            }
        }
        HashPolicy::Ignore => {}
        HashPolicy::Compare => {
            let reserved_match = match (a.reserved(), b.reserved()) {
                (None, None) => true,
                (Some(x), Some(y)) => reserved_equal(x, y, policy),
                _ => false,
            };
            if !reserved_match {
                return false;
            }
        }
    }
    fields_equal(a, b, policy)
}

fn fields_equal(a: ObjectRef<'_>, b: ObjectRef<'_>, policy: HashPolicy) -> bool {
    if a.ordinary_len() != b.ordinary_len() {
        return false;
    }
    a.ordinary_fields()
        .all(|(key, val_a)| match b.fields.get(key) {
            Some(val_b) => deep_equal(val_a, val_b, policy),
            None => false,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn v(json: serde_json::Value) -> Value {
        Value::from(json)
    }

    fn eq(a: serde_json::Value, b: serde_json::Value) -> bool {
        equals(&v(a), &v(b))
    }

    fn eq_with(a: serde_json::Value, b: serde_json::Value, ignore_hashes: bool) -> bool {
        equals_with(&v(a), &v(b), &EqualsOptions::ignore_hashes(ignore_hashes))
    }

    #[test]
    fn test_equal_primitives() {
        assert!(eq(json!(1), json!(1)));
        assert!(eq(json!("a"), json!("a")));
        assert!(eq(json!(true), json!(true)));
        assert!(eq(json!(null), json!(null)));
    }

    #[test]
    fn test_different_primitives() {
        assert!(!eq(json!(1), json!(2)));
        assert!(!eq(json!("a"), json!("b")));
        assert!(!eq(json!(true), json!(false)));
        assert!(!eq(json!(null), json!(0)));
        assert!(!eq(json!(1), json!(true)));
        assert!(!eq(json!(""), json!(null)));
    }

    #[test]
    fn test_arrays() {
        assert!(eq(json!([1, 2, 3]), json!([1, 2, 3])));
        assert!(eq(json!(["a", "b"]), json!(["a", "b"])));
        assert!(!eq(json!([1, 2, 3]), json!([1, 2, 4])));
        assert!(!eq(json!([1, 2]), json!([1, 2, 3])));
        assert!(!eq(json!([1, 2, 3]), json!([1, 2])));
        assert!(!eq(json!([1, 2]), json!([2, 1])));
    }

    #[test]
    fn test_objects() {
        assert!(eq(json!({"a": 1, "b": 2}), json!({"a": 1, "b": 2})));
        assert!(eq(json!({"a": 1, "b": 2}), json!({"b": 2, "a": 1})));
        assert!(eq(json!({"a": {"b": 1}}), json!({"a": {"b": 1}})));
        assert!(!eq(json!({"a": 1, "b": 2}), json!({"a": 1, "b": 3})));
        assert!(!eq(json!({"a": {"b": 1}}), json!({"a": {"b": 2}})));
        assert!(!eq(json!({"a": 1}), json!({"a": 1, "b": 2})));
        assert!(!eq(json!({"a": 1, "c": 3}), json!({"a": 1, "d": 3})));
    }

    #[test]
    fn test_object_and_array_never_equal() {
        assert!(!eq(json!({"a": 1}), json!([1])));
        assert!(!eq(json!([1, 2]), json!({"0": 1, "1": 2})));
        assert!(!eq(json!({"0": 1, "1": 2}), json!([1, 2])));
        assert!(!eq(json!({}), json!([])));
    }

    #[test]
    fn test_nested_structures() {
        assert!(eq(json!({"a": [1, {"b": 2}]}), json!({"a": [1, {"b": 2}]})));
        assert!(eq(json!([[1, 2], {"a": 3}]), json!([[1, 2], {"a": 3}])));
        assert!(!eq(json!({"a": [1, {"b": 2}]}), json!({"a": [1, {"b": 3}]})));
        assert!(!eq(json!([[1, 2], {"a": 3}]), json!([[1, 2], {"a": 4}])));
    }

    #[test]
    fn test_hash_shortcut() {
        assert!(eq(json!({"a": 1, "_hash": "h0"}), json!({"a": 2, "_hash": "h0"})));
        assert!(!eq(json!({"a": 1, "_hash": "h0"}), json!({"a": 1, "_hash": "h1"})));
    }

    #[test]
    fn test_one_sided_hash_is_ignored() {
        assert!(eq(json!({"a": 1, "_hash": "h0"}), json!({"a": 1})));
        assert!(eq(json!({"a": 1}), json!({"a": 1, "_hash": "h0"})));
        assert!(!eq(json!({"a": 1, "_hash": "h0"}), json!({"a": 2})));
        assert!(eq(json!({"a": 1, "_hash": "h0"}), json!({"a": 1, "_hash": ""})));
        assert!(eq(json!({"a": 1, "_hash": "h0"}), json!({"a": 1, "_hash": null})));
    }

    #[test]
    fn test_nested_hash_shortcut() {
        assert!(eq(
            json!({"x": {"a": 1, "_hash": "h"}}),
            json!({"x": {"a": 99, "_hash": "h"}})
        ));
    }

    #[test]
    fn test_ignore_hashes_true() {
        assert!(eq_with(
            json!({"a": 1, "_hash": "hash"}),
            json!({"a": 1, "_hash": "different"}),
            true
        ));
        assert!(!eq_with(
            json!({"a": 1, "_hash": "hash"}),
            json!({"a": 2, "_hash": "hash"}),
            true
        ));
    }

    #[test]
    fn test_ignore_hashes_false() {
        assert!(!eq_with(
            json!({"a": 1, "_hash": "hash"}),
            json!({"a": 1, "_hash": "different"}),
            false
        ));
        assert!(!eq_with(json!({"a": 1, "_hash": "x"}), json!({"a": 2, "_hash": "x"}), false));
        assert!(eq_with(json!({"a": 1, "_hash": "x"}), json!({"a": 1, "_hash": "x"}), false));
        assert!(!eq_with(json!({"a": 1, "_hash": "x"}), json!({"a": 1}), false));
        assert!(!eq_with(json!({"a": 1, "_hash": ""}), json!({"a": 1, "_hash": null}), false));
        assert!(eq_with(json!({"a": 1, "_hash": null}), json!({"a": 1, "_hash": null}), false));
    }

    #[test]
    fn test_compare_plain_reserved_field_against_digest() {
        let mut map = Map::new();
        map.insert("a".to_string(), Value::from(1));
        map.insert(HASH_KEY.to_string(), Value::from("x"));
        let plain = Value::Object(map);
        let hashed = v(json!({"a": 1, "_hash": "x"}));
        let options = EqualsOptions::ignore_hashes(false);
        assert!(equals_with(&plain, &hashed, &options));
        assert!(equals_with(&hashed, &plain, &options));
    }

    fn plain(a: i32, hash: Value) -> Value {
        let mut map = Map::new();
        map.insert("a".to_string(), Value::from(a));
        map.insert(HASH_KEY.to_string(), hash);
        Value::Object(map)
    }

    #[test]
    fn test_plain_map_string_hash_shortcut() {
        let a = plain(1, Value::from("h0"));
        let b = plain(2, Value::from("h0"));
        assert!(equals(&a, &b));
        assert!(!equals(&a, &plain(1, Value::from("h1"))));

        // Same answer once the maps went through the wire and came back hashed
        let a_wire = Value::from(serde_json::Value::from(&a));
        let b_wire = Value::from(serde_json::Value::from(&b));
        assert!(a_wire.hash().is_some());
        assert!(equals(&a_wire, &b_wire));
        assert!(equals(&a, &b_wire));
        assert!(equals(&a_wire, &b));
    }

    #[test]
    fn test_plain_map_other_hash_is_a_field() {
        assert!(equals(&plain(1, Value::from("")), &plain(1, Value::from("h0"))));
        assert!(!equals(&plain(1, Value::from("")), &plain(2, Value::from("h0"))));
        assert!(equals(&plain(1, Value::Null), &plain(1, Value::from(3))));
        assert!(!equals(&plain(1, Value::Null), &plain(2, Value::Null)));
        let options = EqualsOptions::ignore_hashes(false);
        assert!(!equals_with(&plain(1, Value::Null), &plain(1, Value::from(3)), &options));
        assert!(equals_with(&plain(1, Value::from("h0")), &plain(1, Value::from("h0")), &options));
    }

    #[test]
    fn test_nan_is_not_reflexive() {
        let nan = Value::Number(f64::NAN);
        assert!(!equals(&nan, &Value::Number(f64::NAN)));
        assert!(equals(&nan, &nan));
        let tree = Value::Array(vec![Value::Number(f64::NAN)]);
        assert!(!equals(&tree, &tree.clone()));
    }

    #[test]
    fn test_not_transitive_with_hashes() {
        let a = v(json!({"a": 1, "_hash": "h0"}));
        let b = v(json!({"a": 1}));
        let c = v(json!({"a": 1, "_hash": "h1"}));
        assert!(equals(&a, &b));
        assert!(equals(&b, &c));
        assert!(!equals(&a, &c));
    }

    #[test]
    fn test_options_policy() {
        assert_eq!(EqualsOptions::default().policy(), HashPolicy::Trust);
        assert_eq!(EqualsOptions::ignore_hashes(true).policy(), HashPolicy::Ignore);
        assert_eq!(EqualsOptions::ignore_hashes(false).policy(), HashPolicy::Compare);
    }

    #[test]
    fn test_options_from_json() {
        let options: EqualsOptions = serde_json::from_str(r#"{"ignoreHashes": false}"#).unwrap();
        assert_eq!(options, EqualsOptions::ignore_hashes(false));
        let options: EqualsOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(options, EqualsOptions::default());
    }

    #[test]
    fn test_big_object() {
        let a = json!({
            "prop1": "value1",
            "prop2": "value2",
            "prop3": "value3",
            "prop4": {
                "subProp1": "sub value1",
                "subProp2": {
                    "subSubProp1": "sub sub value1",
                    "subSubProp2": [1, 2, {"prop2": 1, "prop": 2}, 4, 5]
                }
            },
            "prop5": 1000
        });
        let b = json!({
            "prop5": 1000,
            "prop3": "value3",
            "prop1": "value1",
            "prop2": "value2",
            "prop4": {
                "subProp2": {
                    "subSubProp1": "sub sub value1",
                    "subSubProp2": [1, 2, {"prop2": 1, "prop": 2}, 4, 5]
                },
                "subProp1": "sub value1"
            }
        });
        assert!(eq(a, b));
    }
}
