//! Two-phase decoder.
//!
//! Phase 1 allocates a placeholder instance for every record and binds its
//! id. Phase 2 populates fields, resolving reference markers against the
//! bindings. Because every id is bound before any marker is resolved, record
//! order is irrelevant and cycles decode like anything else.

use std::collections::HashMap;

use tracing::{debug, trace};

use ogt_model::ObjectModel;
use ogt_types::{Instance, RecordId, Value};

use crate::error::TranscodeResult;
use crate::index::Bindings;
use crate::record::{Document, Encoded};

/// The result of a decode: every reconstructed instance, addressable by
/// record id, plus the resolved roots in the order the encoder was given
/// them.
#[derive(Debug)]
pub struct Decoded {
    roots: Vec<Instance>,
    instances: HashMap<RecordId, Instance>,
}

impl Decoded {
    /// The reconstructed roots.
    pub fn roots(&self) -> &[Instance] {
        &self.roots
    }

    /// The sole root, for the common single-root encode.
    pub fn root(&self) -> Option<&Instance> {
        self.roots.first()
    }

    /// Look up a reconstructed instance by its record id.
    pub fn get(&self, id: RecordId) -> Option<&Instance> {
        self.instances.get(&id)
    }

    /// The full id → instance map.
    pub fn instances(&self) -> &HashMap<RecordId, Instance> {
        &self.instances
    }

    /// Number of reconstructed instances.
    pub fn len(&self) -> usize {
        self.instances.len()
    }

    /// Returns `true` if nothing was decoded.
    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }
}

/// Reconstruct the object graph encoded in `document`.
///
/// Accepts records in any order. Fails with
/// [`TranscodeError::UnresolvedReference`] on markers without a matching
/// record, [`TranscodeError::UnknownType`] on unresolvable tags, and
/// [`TranscodeError::CyclicConstruction`] when a type refuses placeholder
/// allocation. All-or-nothing: on failure nothing decoded is retained.
///
/// [`TranscodeError::UnresolvedReference`]: crate::error::TranscodeError::UnresolvedReference
/// [`TranscodeError::UnknownType`]: crate::error::TranscodeError::UnknownType
/// [`TranscodeError::CyclicConstruction`]: crate::error::TranscodeError::CyclicConstruction
pub fn decode(model: &dyn ObjectModel, document: &Document) -> TranscodeResult<Decoded> {
    let mut bindings = Bindings::new();

    // Phase 1: allocate and bind every record before touching any field, so
    // forward references and cycles resolve during population.
    for record in &document.records {
        let instance = model.allocate(&record.type_tag)?;
        bindings.bind(record.id, instance)?;
        trace!(id = %record.id, tag = %record.type_tag, "allocated placeholder");
    }

    // Phase 2: populate.
    for record in &document.records {
        let instance = bindings.resolve(record.id)?;
        let fields = record
            .fields
            .iter()
            .map(|(name, value)| Ok((name.clone(), decode_value(&bindings, value)?)))
            .collect::<TranscodeResult<Vec<_>>>()?;
        model.populate(&instance, fields)?;
    }

    let roots = document
        .roots
        .iter()
        .map(|id| bindings.resolve(*id))
        .collect::<TranscodeResult<Vec<_>>>()?;
    debug!(
        roots = roots.len(),
        records = document.len(),
        "decoded object graph"
    );

    Ok(Decoded {
        roots,
        instances: bindings.into_map(),
    })
}

fn decode_value(bindings: &Bindings, value: &Encoded) -> TranscodeResult<Value> {
    Ok(match value {
        Encoded::Null => Value::Null,
        Encoded::Bool(v) => Value::Bool(*v),
        Encoded::Int(v) => Value::Int(*v),
        Encoded::Float(v) => Value::Float(*v),
        Encoded::Str(v) => Value::Str(v.clone()),
        Encoded::Ref(id) => Value::Ref(bindings.resolve(*id)?),
        Encoded::List(items) => Value::List(
            items
                .iter()
                .map(|item| decode_value(bindings, item))
                .collect::<TranscodeResult<Vec<_>>>()?,
        ),
        Encoded::Map(entries) => Value::Map(
            entries
                .iter()
                .map(|(key, item)| Ok((key.clone(), decode_value(bindings, item)?)))
                .collect::<TranscodeResult<Vec<_>>>()?,
        ),
    })
}
