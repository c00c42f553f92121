//! Classification and validation of dynamically typed trees.

use crate::dynamic::{Dynamic, Node};
use crate::error::{JsonError, Result};
use crate::types::{TypeTag, ValueType};

/// Returns the kind of a node.
///
/// # Errors
///
/// Returns [`JsonError::TypeClassification`] when the node is outside the
/// recognized kinds. The error carries the node's runtime type name and a
/// rendering of it.
///
/// # Examples
///
/// ```
/// use hashed_json::{classify, ValueType};
/// use serde_json::json;
///
/// assert_eq!(classify(&json!([1, 2])).unwrap(), ValueType::Array);
/// ```
pub fn classify<T: Dynamic>(value: &T) -> Result<ValueType> {
    match value.node() {
        Node::Null => Ok(ValueType::Null),
        Node::Bool(_) => Ok(ValueType::Boolean),
        Node::Number(_) => Ok(ValueType::Number),
        Node::String(_) => Ok(ValueType::String),
        Node::Array(_) => Ok(ValueType::Array),
        Node::Object(_) => Ok(ValueType::Object),
        Node::Foreign => Err(JsonError::TypeClassification {
            type_name: value.type_name().into_owned(),
            value: value.render(),
        }),
    }
}

/// Walks the whole tree and fails on the first node that cannot be
/// classified.
///
/// The error is the one [`classify`] produced for the offending node, at
/// whatever depth it sits.
pub fn validate<T: Dynamic>(value: &T) -> Result<()> {
    classify(value).inspect_err(|err| {
        tracing::debug!(error = %err, "json validation failed");
    })?;
    match value.node() {
        Node::Array(items) => items.iter().try_for_each(validate),
        Node::Object(fields) => fields.entries.map(|(_, v)| v).try_for_each(validate),
        _ => Ok(()),
    }
}

/// Returns true if the node classifies as `tag`, or as anything at all when
/// `tag` is [`TypeTag::Any`]. Never fails: an unclassifiable node simply
/// does not match.
pub fn matches_type<T: Dynamic>(value: &T, tag: impl Into<TypeTag>) -> bool {
    let tag = tag.into();
    classify(value).is_ok_and(|actual| tag.accepts(actual))
}

/// Returns true for string, number and boolean nodes.
///
/// Null, arrays, objects and foreign nodes are not basic.
pub fn is_basic_type<T: Dynamic>(value: &T) -> bool {
    value.node().is_basic()
}
