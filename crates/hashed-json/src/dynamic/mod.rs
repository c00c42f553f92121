//! Runtime shape inspection.
//!
//! Trees that arrive from outside the crate (a decoded `serde_json` tree, a
//! CBOR item) can hold nodes the closed [`Value`](crate::Value) model has no
//! room for. [`Dynamic`] is the seam through which the classifier, the
//! validator and the copy engine look at such trees: each node reports its
//! [`Node`] shape, and anything the model cannot represent reports
//! [`Node::Foreign`].

mod cbor;
mod json;
mod value;

use std::borrow::Cow;

/// Shape of a single node of a dynamically typed tree.
pub enum Node<'a, T: 'a> {
    Null,
    Bool(bool),
    Number(f64),
    String(&'a str),
    Array(&'a [T]),
    Object(Fields<'a, T>),
    /// A node outside the recognized kinds.
    Foreign,
}

impl<T> Node<'_, T> {
    /// String, number and boolean nodes.
    pub fn is_basic(&self) -> bool {
        matches!(self, Node::Bool(_) | Node::Number(_) | Node::String(_))
    }
}

/// Entries of an object node.
pub struct Fields<'a, T: 'a> {
    /// Digest lifted from the reserved field, when the node carries one.
    pub hash: Option<&'a str>,
    /// Remaining entries. The lifted reserved field is not repeated here.
    pub entries: Box<dyn Iterator<Item = (&'a str, &'a T)> + 'a>,
}

impl<'a, T: 'a> Fields<'a, T> {
    pub fn new(
        hash: Option<&'a str>,
        entries: impl Iterator<Item = (&'a str, &'a T)> + 'a,
    ) -> Self {
        Self {
            hash,
            entries: Box::new(entries),
        }
    }
}

/// A tree node whose kind is only known at runtime.
pub trait Dynamic: Sized {
    /// Shape of this node.
    fn node(&self) -> Node<'_, Self>;

    /// Runtime type name used in diagnostics.
    fn type_name(&self) -> Cow<'_, str>;

    /// Diagnostic rendering of this node.
    fn render(&self) -> String;
}
