use std::borrow::Cow;

use ciborium::value::Value as CborValue;

use super::{Dynamic, Fields, Node};
use crate::value::HASH_KEY;

/// Standard date/time string tag.
const TAG_DATE_TIME: u64 = 0;
/// Epoch-based date/time tag.
const TAG_EPOCH: u64 = 1;

impl Dynamic for CborValue {
    fn node(&self) -> Node<'_, Self> {
        match self {
            CborValue::Null => Node::Null,
            CborValue::Bool(b) => Node::Bool(*b),
            CborValue::Integer(i) => Node::Number(i128::from(*i) as f64),
            CborValue::Float(f) => Node::Number(*f),
            CborValue::Text(s) => Node::String(s),
            CborValue::Array(items) => Node::Array(items),
            CborValue::Map(entries) => {
                // A map keyed by anything but text is not a JSON object.
                if !entries.iter().all(|(k, _)| k.is_text()) {
                    return Node::Foreign;
                }
                let hash = entries.iter().find_map(|(k, v)| match (k, v) {
                    (CborValue::Text(k), CborValue::Text(h)) if k == HASH_KEY => Some(h.as_str()),
                    _ => None,
                });
                let entries = entries.iter().filter_map(move |(k, v)| {
                    let key = k.as_text()?;
                    if hash.is_some() && key == HASH_KEY {
                        None
                    } else {
                        Some((key, v))
                    }
                });
                Node::Object(Fields::new(hash, entries))
            }
            _ => Node::Foreign,
        }
    }

    fn type_name(&self) -> Cow<'_, str> {
        Cow::Borrowed(match self {
            CborValue::Null => "Null",
            CborValue::Bool(_) => "Bool",
            CborValue::Integer(_) => "Integer",
            CborValue::Float(_) => "Float",
            CborValue::Text(_) => "Text",
            CborValue::Bytes(_) => "Bytes",
            CborValue::Array(_) => "Array",
            CborValue::Map(_) => "Map",
            CborValue::Tag(TAG_DATE_TIME | TAG_EPOCH, _) => "Date",
            CborValue::Tag(..) => "Tag",
            _ => "Unknown",
        })
    }

    fn render(&self) -> String {
        match self {
            CborValue::Tag(TAG_DATE_TIME, inner) => match inner.as_ref() {
                CborValue::Text(s) => format!("{s:?}"),
                other => format!("{other:?}"),
            },
            CborValue::Tag(TAG_EPOCH, inner) => match inner.as_ref() {
                CborValue::Integer(i) => i128::from(*i).to_string(),
                CborValue::Float(f) => f.to_string(),
                other => format!("{other:?}"),
            },
            other => format!("{other:?}"),
        }
    }
}
