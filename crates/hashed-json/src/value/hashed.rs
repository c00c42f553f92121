use super::{Map, HASH_KEY};

/// An object node carrying the reserved content digest.
///
/// The digest lives only in `hash`; the constructor drops any `_hash` entry
/// from `fields`. An empty digest is the "no trusted digest yet" sentinel and
/// never enables the equality shortcut.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct HashedObject {
    hash: String,
    fields: Map,
}

impl HashedObject {
    pub fn new(hash: impl Into<String>, mut fields: Map) -> Self {
        fields.shift_remove(HASH_KEY);
        Self {
            hash: hash.into(),
            fields,
        }
    }

    /// The raw reserved field, possibly empty.
    pub fn hash(&self) -> &str {
        &self.hash
    }

    /// The digest, if one has been attached.
    pub fn trusted_hash(&self) -> Option<&str> {
        if self.hash.is_empty() {
            None
        } else {
            Some(&self.hash)
        }
    }

    pub fn set_hash(&mut self, hash: impl Into<String>) {
        self.hash = hash.into();
    }

    /// The ordinary fields, without the reserved one.
    pub fn fields(&self) -> &Map {
        &self.fields
    }

    pub fn into_parts(self) -> (String, Map) {
        (self.hash, self.fields)
    }
}
