use std::fmt;

use serde::{Deserialize, Serialize};

/// The name under which a concrete type is registered with the object model.
///
/// A `TypeTag` is what records carry on the wire in place of a type: the
/// decoder hands it back to the model's registry to pick a construction path.
/// Tags are plain strings; the registry, not the tag, decides what resolves.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TypeTag(String);

impl TypeTag {
    /// Create a tag from any string-like value.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The tag as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TypeTag({:?})", self.0)
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TypeTag {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl From<String> for TypeTag {
    fn from(name: String) -> Self {
        Self(name)
    }
}
