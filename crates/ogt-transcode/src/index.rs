//! Session-scoped maps between instance identity and record ids.
//!
//! [`RefIndex`] serves the encode side (identity → id), [`Bindings`] the
//! decode side (id → instance). Both are owned by a single call and
//! discarded with it; nothing is shared across calls.

use std::collections::HashMap;

use ogt_types::{Instance, RecordId};

use crate::error::{TranscodeError, TranscodeResult};

/// Encode-side index assigning each distinct instance a sequential id.
///
/// Lookup is by storage identity, never value equality, so two structurally
/// identical but distinct instances get distinct ids.
#[derive(Debug, Default)]
pub struct RefIndex {
    ids: HashMap<usize, RecordId>,
    next: RecordId,
}

impl RefIndex {
    /// Create an empty index.
    pub fn new() -> Self {
        Self {
            ids: HashMap::new(),
            next: RecordId::FIRST,
        }
    }

    /// Register an instance. Returns its id and whether it was newly seen.
    ///
    /// The first registration of an instance assigns the next sequential id;
    /// repeats return the id assigned at first discovery.
    pub fn register(&mut self, instance: &Instance) -> (RecordId, bool) {
        match self.ids.get(&instance.identity()) {
            Some(id) => (*id, false),
            None => {
                let id = self.next;
                self.next = id.next();
                self.ids.insert(instance.identity(), id);
                (id, true)
            }
        }
    }

    /// Number of registered instances.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Returns `true` if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

/// Decode-side map from record id to reconstructed instance.
///
/// Instances are bound at allocation time, before their fields are
/// populated, so markers into not-yet-populated records still resolve.
#[derive(Debug, Default)]
pub struct Bindings {
    instances: HashMap<RecordId, Instance>,
}

impl Bindings {
    /// Create an empty binding table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind an id to an instance. Fails if the id is already bound.
    pub fn bind(&mut self, id: RecordId, instance: Instance) -> TranscodeResult<()> {
        if self.instances.contains_key(&id) {
            return Err(TranscodeError::DuplicateRecord(id));
        }
        self.instances.insert(id, instance);
        Ok(())
    }

    /// Resolve an id to its bound instance.
    pub fn resolve(&self, id: RecordId) -> TranscodeResult<Instance> {
        self.instances
            .get(&id)
            .cloned()
            .ok_or(TranscodeError::UnresolvedReference(id))
    }

    /// Returns `true` if the id is bound.
    pub fn contains(&self, id: RecordId) -> bool {
        self.instances.contains_key(&id)
    }

    /// Number of bound ids.
    pub fn len(&self) -> usize {
        self.instances.len()
    }

    /// Returns `true` if nothing is bound.
    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    /// Consume the table, yielding the full id → instance map.
    pub fn into_map(self) -> HashMap<RecordId, Instance> {
        self.instances
    }
}
