//! hashed-json - JSON value model for hash-linked data structures
//!
//! This crate provides a closed, in-memory JSON value model together with a
//! deep copy engine and a structural equality engine that understands the
//! reserved `_hash` content digest:
//!
//! - [`Value`] - the value tree, with plain and hashed object nodes
//! - [`classify`], [`validate`], [`matches_type`], [`is_basic_type`] - type
//!   checks over any [`Dynamic`] tree (`Value`, `serde_json::Value`,
//!   `ciborium::Value`)
//! - [`copy`], [`copy_list`] - independent clones into the value model
//! - [`equals`], [`equals_with`] - hash-aware comparison
//!
//! # Example
//!
//! ```
//! use hashed_json::{copy, equals, equals_with, EqualsOptions, Value};
//! use serde_json::json;
//!
//! let a = copy(&json!({"a": 1, "_hash": "x"})).unwrap();
//! let b = Value::from(json!({"a": 2, "_hash": "x"}));
//!
//! // Same digest: the contents are not inspected.
//! assert!(equals(&a, &b));
//! // Treating `_hash` as an ordinary field disables the shortcut.
//! assert!(!equals_with(&a, &b, &EqualsOptions::ignore_hashes(false)));
//! ```

pub mod classify;
pub mod copy;
pub mod dynamic;
pub mod equals;
pub mod error;
pub mod example;
pub mod types;
pub mod value;

// Re-exports for convenience
pub use classify::{classify, is_basic_type, matches_type, validate};
pub use copy::{copy, copy_list};
pub use dynamic::{Dynamic, Fields, Node};
pub use equals::{equals, equals_with, EqualsOptions, HashPolicy};
pub use error::{JsonError, Result};
pub use example::{example_json, example_json_array, example_json_h, example_json_object};
pub use types::{TypeTag, ValueType};
pub use value::{HashedObject, Map, Value, HASH_KEY};
