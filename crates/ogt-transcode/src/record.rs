//! The flat record format produced by encode and consumed by decode.

use serde::{Deserialize, Serialize};

use ogt_types::{RecordId, TypeTag};

use crate::error::{TranscodeError, TranscodeResult};

/// An encoded field value.
///
/// Mirrors the live value model, with one difference: instance references are
/// [`Encoded::Ref`] markers carrying a [`RecordId`] instead of embedded data.
/// Maps stay ordered pair lists so keyed collections round-trip in insertion
/// order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Encoded {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    /// Reference marker: stands in for the instance encoded under this id.
    Ref(RecordId),
    List(Vec<Encoded>),
    Map(Vec<(String, Encoded)>),
}

impl Encoded {
    /// Collect every reference marker id in this value, depth first.
    pub fn collect_references(&self, out: &mut Vec<RecordId>) {
        match self {
            Self::Ref(id) => out.push(*id),
            Self::List(items) => {
                for item in items {
                    item.collect_references(out);
                }
            }
            Self::Map(entries) => {
                for (_, item) in entries {
                    item.collect_references(out);
                }
            }
            _ => {}
        }
    }
}

/// Flat encoding of one instance: its id, type tag, and encoded fields in
/// declared order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub id: RecordId,
    pub type_tag: TypeTag,
    pub fields: Vec<(String, Encoded)>,
}

impl Record {
    /// Create a record.
    pub fn new(id: RecordId, type_tag: TypeTag, fields: Vec<(String, Encoded)>) -> Self {
        Self {
            id,
            type_tag,
            fields,
        }
    }

    /// Every record id this record references.
    pub fn references(&self) -> Vec<RecordId> {
        let mut out = Vec::new();
        for (_, value) in &self.fields {
            value.collect_references(&mut out);
        }
        out
    }
}

/// A complete encoded graph: the record sequence plus the ids of the roots
/// the encode was asked for.
///
/// Records appear in first-discovery order, but nothing downstream depends
/// on that: ids are explicit, and decode accepts any permutation.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub roots: Vec<RecordId>,
    pub records: Vec<Record>,
}

impl Document {
    /// Create a document.
    pub fn new(roots: Vec<RecordId>, records: Vec<Record>) -> Self {
        Self { roots, records }
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if the document has no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Find a record by id.
    pub fn record(&self, id: RecordId) -> Option<&Record> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Check structural integrity: ids unique, every reference marker and
    /// every root resolves to a record in this document.
    pub fn validate(&self) -> TranscodeResult<()> {
        let mut seen = std::collections::HashSet::new();
        for record in &self.records {
            if !seen.insert(record.id) {
                return Err(TranscodeError::DuplicateRecord(record.id));
            }
        }
        for record in &self.records {
            for target in record.references() {
                if !seen.contains(&target) {
                    return Err(TranscodeError::UnresolvedReference(target));
                }
            }
        }
        for root in &self.roots {
            if !seen.contains(root) {
                return Err(TranscodeError::UnresolvedReference(*root));
            }
        }
        Ok(())
    }
}
