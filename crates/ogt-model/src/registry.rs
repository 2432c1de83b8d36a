//! Explicit type registry mapping tags to declared type layouts.
//!
//! Registration is always explicit: nothing is registered implicitly from
//! arbitrary code paths, and lookup of an unregistered tag is an error. The
//! registry is the strict allow-list for what a decode session may build.

use std::collections::HashMap;

use tracing::debug;

use ogt_types::TypeTag;

use crate::error::{ModelError, ModelResult};

/// Declared layout of one registered type.
///
/// Field order here is the authoritative declared order. Composition across
/// a type hierarchy, default values, and similar concerns are resolved by
/// whoever builds the spec; by the time a `TypeSpec` exists, the field list
/// is flat and final.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypeSpec {
    /// The tag this type is addressed by.
    pub tag: TypeTag,
    /// Declared field names, in order.
    pub fields: Vec<String>,
    /// Whether instances may be allocated empty and populated later.
    /// Types with `two_phase = false` cannot be decoded at all: allocation
    /// fails with [`ModelError::CyclicConstruction`].
    pub two_phase: bool,
}

impl TypeSpec {
    /// Declare a type with the given ordered field names.
    pub fn new(tag: impl Into<TypeTag>, fields: &[&str]) -> Self {
        Self {
            tag: tag.into(),
            fields: fields.iter().map(|f| f.to_string()).collect(),
            two_phase: true,
        }
    }

    /// Mark the type as refusing placeholder allocation.
    pub fn without_placeholders(mut self) -> Self {
        self.two_phase = false;
        self
    }

    /// Returns `true` if `name` is a declared field.
    pub fn declares(&self, name: &str) -> bool {
        self.fields.iter().any(|f| f == name)
    }
}

/// Registry of declared types, keyed by tag.
#[derive(Clone, Debug, Default)]
pub struct TypeRegistry {
    specs: HashMap<TypeTag, TypeSpec>,
}

impl TypeRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a type spec. Fails if the tag is already taken.
    pub fn register(&mut self, spec: TypeSpec) -> ModelResult<()> {
        if self.specs.contains_key(&spec.tag) {
            return Err(ModelError::DuplicateType {
                tag: spec.tag.clone(),
            });
        }
        debug!(tag = %spec.tag, fields = spec.fields.len(), "registered type");
        self.specs.insert(spec.tag.clone(), spec);
        Ok(())
    }

    /// Look up a spec by tag.
    pub fn get(&self, tag: &TypeTag) -> ModelResult<&TypeSpec> {
        self.specs
            .get(tag)
            .ok_or_else(|| ModelError::UnknownType { tag: tag.clone() })
    }

    /// Returns `true` if the tag is registered.
    pub fn contains(&self, tag: &TypeTag) -> bool {
        self.specs.contains_key(tag)
    }

    /// Number of registered types.
    pub fn len(&self) -> usize {
        self.specs.len()
    }

    /// Returns `true` if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }

    /// All registered tags, sorted.
    pub fn tags(&self) -> Vec<TypeTag> {
        let mut tags: Vec<TypeTag> = self.specs.keys().cloned().collect();
        tags.sort();
        tags
    }
}
