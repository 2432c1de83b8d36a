//! Identity-preserving object graph transcoding.
//!
//! `ogt` flattens an arbitrary directed graph of typed objects, cyclic and
//! aliased graphs included, into a flat record sequence and reconstructs it
//! with referential identity preserved: shared nodes are never duplicated,
//! and encoding one terminal node transitively captures everything reachable
//! from it.
//!
//! This crate is the facade: convenience functions composing the core with
//! the wire formats, plus re-exports of the key types. Embedders with their
//! own object system implement [`ObjectModel`]; everyone else declares types
//! in a [`TypeRegistry`] and uses [`DynamicModel`].
//!
//! # Example
//!
//! ```
//! use ogt::{DynamicModel, TypeRegistry, TypeSpec, Value};
//!
//! let mut registry = TypeRegistry::new();
//! registry.register(TypeSpec::new("Node", &["name", "next"])).unwrap();
//! let model = DynamicModel::new(registry);
//!
//! // A two-node cycle.
//! let a = model.new_instance("Node", vec![("name".to_string(), Value::str("a"))]).unwrap();
//! let b = model.new_instance("Node", vec![
//!     ("name".to_string(), Value::str("b")),
//!     ("next".to_string(), Value::reference(&a)),
//! ]).unwrap();
//! a.set_field("next", Value::reference(&b));
//!
//! let text = ogt::to_string(&model, &[a]).unwrap();
//! let decoded = ogt::from_string(&model, &text).unwrap();
//! let a2 = decoded.root().unwrap();
//! assert_eq!(a2.field("name"), Some(Value::str("a")));
//! ```

pub mod error;

pub use error::{OgtError, OgtResult};

// Re-export key types.
pub use ogt_model::{DynamicModel, ModelError, ObjectModel, TypeRegistry, TypeSpec};
pub use ogt_transcode::{Decoded, Document, Encoded, Record, TranscodeError};
pub use ogt_types::{Instance, RecordId, TypeTag, Value};
pub use ogt_wire::{expand, WireError};

use std::path::Path;

/// Encode the closure of the given roots into a [`Document`].
pub fn encode(model: &dyn ObjectModel, roots: &[Instance]) -> OgtResult<Document> {
    Ok(ogt_transcode::encode(model, roots)?)
}

/// Reconstruct the object graph encoded in a [`Document`].
pub fn decode(model: &dyn ObjectModel, document: &Document) -> OgtResult<Decoded> {
    Ok(ogt_transcode::decode(model, document)?)
}

/// Encode the roots and render the document as a JSON string.
pub fn to_string(model: &dyn ObjectModel, roots: &[Instance]) -> OgtResult<String> {
    let document = ogt_transcode::encode(model, roots)?;
    Ok(ogt_wire::to_json(&document)?)
}

/// Parse a JSON document and reconstruct the graph it encodes.
pub fn from_string(model: &dyn ObjectModel, text: &str) -> OgtResult<Decoded> {
    let document = ogt_wire::from_json(text)?;
    Ok(ogt_transcode::decode(model, &document)?)
}

/// Encode the roots and write the document to a JSON file.
pub fn to_file(
    model: &dyn ObjectModel,
    roots: &[Instance],
    path: impl AsRef<Path>,
) -> OgtResult<()> {
    let document = ogt_transcode::encode(model, roots)?;
    Ok(ogt_wire::to_file(&document, path)?)
}

/// Read a JSON document from a file and reconstruct the graph it encodes.
pub fn from_file(model: &dyn ObjectModel, path: impl AsRef<Path>) -> OgtResult<Decoded> {
    let document = ogt_wire::from_file(path)?;
    Ok(ogt_transcode::decode(model, &document)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model() -> DynamicModel {
        let mut registry = TypeRegistry::new();
        registry
            .register(TypeSpec::new("Node", &["name", "upstream"]))
            .unwrap();
        DynamicModel::new(registry)
    }

    fn node(m: &DynamicModel, name: &str, upstream: &[&Instance]) -> Instance {
        m.new_instance(
            "Node",
            vec![
                ("name".to_string(), Value::str(name)),
                (
                    "upstream".to_string(),
                    Value::List(upstream.iter().map(|i| Value::reference(i)).collect()),
                ),
            ],
        )
        .unwrap()
    }

    fn upstream_of(instance: &Instance) -> Vec<Instance> {
        match instance.field("upstream") {
            Some(Value::List(items)) => items
                .into_iter()
                .map(|v| match v {
                    Value::Ref(i) => i,
                    other => panic!("expected reference, got {other:?}"),
                })
                .collect(),
            other => panic!("expected list, got {other:?}"),
        }
    }

    fn name_of(instance: &Instance) -> String {
        match instance.field("name") {
            Some(Value::Str(s)) => s,
            other => panic!("expected string name, got {other:?}"),
        }
    }

    /// Two layers over a shared root, a shared middle node, one terminal.
    /// Encoding the terminal alone must capture all six instances.
    fn diamond_terminal(m: &DynamicModel) -> Instance {
        let root = node(m, "root", &[]);
        let l1a = node(m, "l1a", &[&root]);
        let l1b = node(m, "l1b", &[&root]);
        let l2a = node(m, "l2a", &[&l1a, &l1b]);
        let l2b = node(m, "l2b", &[&l1b]);
        node(m, "terminal", &[&l2a, &l2b])
    }

    #[test]
    fn dag_scenario_roundtrips_with_identity() {
        let m = model();
        let terminal = diamond_terminal(&m);

        let document = encode(&m, &[terminal]).unwrap();
        assert_eq!(document.len(), 6);
        document.validate().unwrap();

        let decoded = decode(&m, &document).unwrap();
        assert_eq!(decoded.len(), 6);

        let terminal2 = decoded.root().unwrap();
        assert_eq!(name_of(terminal2), "terminal");

        let layer2 = upstream_of(terminal2);
        let l2a = &layer2[0];
        let l2b = &layer2[1];

        // The shared layer-1 node is one instance reachable via both paths.
        let l1b_via_a = &upstream_of(l2a)[1];
        let l1b_via_b = &upstream_of(l2b)[0];
        assert!(l1b_via_a.same_as(l1b_via_b));
        assert_eq!(name_of(l1b_via_a), "l1b");

        // Both layer-1 nodes reference the same reconstructed root.
        let l1a = &upstream_of(l2a)[0];
        let root_via_a = &upstream_of(l1a)[0];
        let root_via_b = &upstream_of(l1b_via_a)[0];
        assert!(root_via_a.same_as(root_via_b));
        assert_eq!(name_of(root_via_a), "root");
    }

    #[test]
    fn shuffled_records_decode_to_the_same_graph() {
        let m = model();
        let terminal = diamond_terminal(&m);
        let mut document = encode(&m, &[terminal]).unwrap();

        document.records.reverse();
        document.records.rotate_left(2);

        let decoded = decode(&m, &document).unwrap();
        let terminal2 = decoded.root().unwrap();
        let layer2 = upstream_of(terminal2);
        let l1b_via_a = &upstream_of(&layer2[0])[1];
        let l1b_via_b = &upstream_of(&layer2[1])[0];
        assert!(l1b_via_a.same_as(l1b_via_b));
    }

    #[test]
    fn repeated_ids_resolve_to_one_instance() {
        let m = model();
        let shared = node(&m, "shared", &[]);
        let top = node(&m, "top", &[&shared, &shared]);

        let decoded = decode(&m, &encode(&m, &[top]).unwrap()).unwrap();
        let deps = upstream_of(decoded.root().unwrap());
        assert_eq!(deps.len(), 2);
        assert!(deps[0].same_as(&deps[1]));
        assert_eq!(decoded.len(), 2);
    }

    #[test]
    fn string_roundtrip_preserves_identity() {
        let m = model();
        let terminal = diamond_terminal(&m);
        let text = to_string(&m, &[terminal]).unwrap();

        let decoded = from_string(&m, &text).unwrap();
        assert_eq!(decoded.len(), 6);
        let layer2 = upstream_of(decoded.root().unwrap());
        assert!(upstream_of(&layer2[0])[1].same_as(&upstream_of(&layer2[1])[0]));
    }

    #[test]
    fn file_roundtrip() {
        let m = model();
        let a = node(&m, "a", &[]);
        let b = node(&m, "b", &[&a]);

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("graph.json");
        to_file(&m, &[b], &path).unwrap();

        let decoded = from_file(&m, &path).unwrap();
        assert_eq!(decoded.len(), 2);
        assert_eq!(name_of(decoded.root().unwrap()), "b");
    }

    #[test]
    fn cycle_survives_the_full_pipeline() {
        let m = model();
        let a = node(&m, "a", &[]);
        let b = node(&m, "b", &[&a]);
        a.set_field("upstream", Value::List(vec![Value::reference(&b)]));

        let decoded = from_string(&m, &to_string(&m, &[a]).unwrap()).unwrap();
        let a2 = decoded.root().unwrap();
        let b2 = &upstream_of(a2)[0];
        assert!(upstream_of(b2)[0].same_as(a2));
    }

    #[test]
    fn decode_failure_surfaces_transcode_error() {
        let m = model();
        let text = r#"{"roots":[0],"records":[{"id":0,"type_tag":"Ghost","fields":[]}]}"#;
        let result = from_string(&m, text);
        assert!(matches!(
            result,
            Err(OgtError::Transcode(TranscodeError::UnknownType { .. }))
        ));
    }

    #[test]
    fn expanded_view_inlines_the_graph() {
        let m = model();
        let a = node(&m, "a", &[]);
        let b = node(&m, "b", &[&a]);
        let document = encode(&m, &[b]).unwrap();

        let tree = expand(&document, document.roots[0]).unwrap();
        assert_eq!(tree["fields"]["name"], "b");
        assert_eq!(tree["fields"]["upstream"][0]["fields"]["name"], "a");
    }
}
