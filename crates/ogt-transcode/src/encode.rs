//! Graph walker and encoder.
//!
//! A breadth-first work queue seeded with the roots. Every instance gets its
//! id at the moment it is first discovered, which may be while a referrer's
//! fields are still being encoded; that is what makes cycles and shared
//! references safe, the marker always carries the first-discovery id.

use std::collections::VecDeque;

use tracing::debug;

use ogt_model::ObjectModel;
use ogt_types::{Instance, RecordId, Value};

use crate::error::TranscodeResult;
use crate::index::RefIndex;
use crate::record::{Document, Encoded, Record};

/// Encode the closure of one or more root instances into a [`Document`].
///
/// Roots may be of heterogeneous types. Every instance transitively
/// reachable through reference-typed fields is captured exactly once, as one
/// record, in first-discovery order. Inputs are read-only.
pub fn encode(model: &dyn ObjectModel, roots: &[Instance]) -> TranscodeResult<Document> {
    let mut walker = Walker::new(model);
    let root_ids = roots.iter().map(|root| walker.discover(root)).collect();
    walker.drain()?;
    let document = Document::new(root_ids, walker.records);
    debug!(
        roots = document.roots.len(),
        records = document.len(),
        "encoded object graph"
    );
    Ok(document)
}

struct Walker<'a> {
    model: &'a dyn ObjectModel,
    index: RefIndex,
    queue: VecDeque<Instance>,
    records: Vec<Record>,
}

impl<'a> Walker<'a> {
    fn new(model: &'a dyn ObjectModel) -> Self {
        Self {
            model,
            index: RefIndex::new(),
            queue: VecDeque::new(),
            records: Vec::new(),
        }
    }

    /// Register an instance, enqueueing it for emission when newly seen.
    /// Returns the id assigned at first discovery.
    fn discover(&mut self, instance: &Instance) -> RecordId {
        let (id, is_new) = self.index.register(instance);
        if is_new {
            self.queue.push_back(instance.clone());
        }
        id
    }

    /// Emit one record per queued instance until the queue runs dry.
    fn drain(&mut self) -> TranscodeResult<()> {
        while let Some(instance) = self.queue.pop_front() {
            // Already registered by discovery; this lookup cannot allocate.
            let (id, _) = self.index.register(&instance);
            let tag = self.model.type_tag_for(&instance)?;
            let fields = self
                .model
                .list_fields(&instance)?
                .into_iter()
                .map(|(name, value)| (name, self.encode_value(&value)))
                .collect();
            debug!(%id, %tag, "emitted record");
            self.records.push(Record::new(id, tag, fields));
        }
        Ok(())
    }

    fn encode_value(&mut self, value: &Value) -> Encoded {
        match value {
            Value::Null => Encoded::Null,
            Value::Bool(v) => Encoded::Bool(*v),
            Value::Int(v) => Encoded::Int(*v),
            Value::Float(v) => Encoded::Float(*v),
            Value::Str(v) => Encoded::Str(v.clone()),
            Value::Ref(target) => Encoded::Ref(self.discover(target)),
            Value::List(items) => {
                Encoded::List(items.iter().map(|item| self.encode_value(item)).collect())
            }
            Value::Map(entries) => Encoded::Map(
                entries
                    .iter()
                    .map(|(key, item)| (key.clone(), self.encode_value(item)))
                    .collect(),
            ),
        }
    }
}
