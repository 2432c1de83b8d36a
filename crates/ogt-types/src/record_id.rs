use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier for one record within a single transcoding session.
///
/// Ids are dense and sequential, assigned in first-discovery order by the
/// encoder. They are unique within one encoded document but carry no meaning
/// across sessions; two encodes of the same graph may number it differently.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RecordId(u64);

impl RecordId {
    /// The first id a session hands out.
    pub const FIRST: Self = Self(0);

    /// Wrap a raw id value.
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// The raw id value.
    pub const fn value(&self) -> u64 {
        self.0
    }

    /// The id following this one.
    pub const fn next(&self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Debug for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RecordId({})", self.0)
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl From<u64> for RecordId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl From<RecordId> for u64 {
    fn from(id: RecordId) -> Self {
        id.0
    }
}
