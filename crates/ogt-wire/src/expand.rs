//! Reference-expanding debug view.
//!
//! Rebuilds a nested, human-readable tree from a flat document by inlining
//! each referenced record at its point of use. Shared references are
//! duplicated; a reference back into a record currently being expanded is
//! cut with a `{"$cycle": id}` marker instead of recursing forever. The
//! output is a display format, not a decodable encoding.

use std::collections::HashSet;

use serde_json::{json, Map, Value as Json};

use ogt_transcode::{Document, Encoded};
use ogt_types::RecordId;

use crate::error::{WireError, WireResult};

/// Expand the record with the given id into a nested JSON tree.
pub fn expand(document: &Document, id: RecordId) -> WireResult<Json> {
    let mut in_progress = HashSet::new();
    expand_record(document, id, &mut in_progress)
}

fn expand_record(
    document: &Document,
    id: RecordId,
    in_progress: &mut HashSet<RecordId>,
) -> WireResult<Json> {
    let record = document
        .record(id)
        .ok_or(WireError::UnknownRecord(id))?;
    in_progress.insert(id);
    let mut fields = Map::new();
    for (name, value) in &record.fields {
        fields.insert(name.clone(), expand_value(document, value, in_progress)?);
    }
    in_progress.remove(&id);
    Ok(json!({
        "id": id.value(),
        "type": record.type_tag.as_str(),
        "fields": fields,
    }))
}

fn expand_value(
    document: &Document,
    value: &Encoded,
    in_progress: &mut HashSet<RecordId>,
) -> WireResult<Json> {
    Ok(match value {
        Encoded::Null => Json::Null,
        Encoded::Bool(v) => Json::Bool(*v),
        Encoded::Int(v) => json!(*v),
        Encoded::Float(v) => Json::from(*v),
        Encoded::Str(v) => Json::String(v.clone()),
        Encoded::Ref(id) => {
            if in_progress.contains(id) {
                json!({ "$cycle": id.value() })
            } else {
                expand_record(document, *id, in_progress)?
            }
        }
        Encoded::List(items) => Json::Array(
            items
                .iter()
                .map(|item| expand_value(document, item, in_progress))
                .collect::<WireResult<Vec<_>>>()?,
        ),
        Encoded::Map(entries) => {
            let mut map = Map::new();
            for (key, item) in entries {
                map.insert(key.clone(), expand_value(document, item, in_progress)?);
            }
            Json::Object(map)
        }
    })
}
