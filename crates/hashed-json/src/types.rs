//! Type tags for JSON values.
//!
//! [`ValueType`] names the six kinds a node can take. [`TypeTag`] is what a
//! declared field type is checked against: either one exact kind or the
//! [`TypeTag::Any`] wildcard, which accepts every kind.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::JsonError;

/// One of the recognized kinds of a JSON value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueType {
    String,
    Number,
    Boolean,
    Null,
    Object,
    Array,
}

impl ValueType {
    /// Kinds that terminate a walk.
    pub const BASIC: [ValueType; 4] = [
        ValueType::String,
        ValueType::Number,
        ValueType::Boolean,
        ValueType::Null,
    ];

    /// Kinds that contain other values.
    pub const COMPLEX: [ValueType; 2] = [ValueType::Object, ValueType::Array];

    /// Every recognized kind, basic kinds first.
    pub const ALL: [ValueType; 6] = [
        ValueType::String,
        ValueType::Number,
        ValueType::Boolean,
        ValueType::Null,
        ValueType::Object,
        ValueType::Array,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ValueType::String => "string",
            ValueType::Number => "number",
            ValueType::Boolean => "boolean",
            ValueType::Null => "null",
            ValueType::Object => "object",
            ValueType::Array => "array",
        }
    }

    /// Returns true for string, number, boolean and null.
    pub fn is_basic(self) -> bool {
        !self.is_complex()
    }

    /// Returns true for object and array.
    pub fn is_complex(self) -> bool {
        matches!(self, ValueType::Object | ValueType::Array)
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ValueType {
    type Err = JsonError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ValueType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| JsonError::UnknownType(s.to_string()))
    }
}

/// Target of a type check.
///
/// `Any` is never the result of classifying a value; it only appears on the
/// declared side of [`matches_type`](crate::matches_type).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum TypeTag {
    Kind(ValueType),
    Any,
}

impl TypeTag {
    pub const ANY_NAME: &'static str = "any";

    /// Returns true if a value classified as `actual` satisfies this tag.
    pub fn accepts(self, actual: ValueType) -> bool {
        match self {
            TypeTag::Kind(expected) => expected == actual,
            TypeTag::Any => true,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TypeTag::Kind(t) => t.as_str(),
            TypeTag::Any => Self::ANY_NAME,
        }
    }
}

impl From<ValueType> for TypeTag {
    fn from(t: ValueType) -> Self {
        TypeTag::Kind(t)
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TypeTag {
    type Err = JsonError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == Self::ANY_NAME {
            return Ok(TypeTag::Any);
        }
        s.parse().map(TypeTag::Kind)
    }
}

impl TryFrom<String> for TypeTag {
    type Error = JsonError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<TypeTag> for String {
    fn from(tag: TypeTag) -> Self {
        tag.as_str().to_string()
    }
}
