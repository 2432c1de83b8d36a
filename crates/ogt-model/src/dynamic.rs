//! Registry-backed dynamic object model.
//!
//! Instances are plain ordered field maps tagged with their type. Intended
//! for tests and for embedders whose types are declared at runtime rather
//! than generated per type.

use tracing::trace;

use ogt_types::{Instance, TypeTag, Value};

use crate::error::{ModelError, ModelResult};
use crate::registry::TypeRegistry;
use crate::traits::ObjectModel;

/// An [`ObjectModel`] whose objects are dynamic field maps validated against
/// a [`TypeRegistry`].
#[derive(Clone, Debug, Default)]
pub struct DynamicModel {
    registry: TypeRegistry,
}

impl DynamicModel {
    /// Create a model over the given registry.
    pub fn new(registry: TypeRegistry) -> Self {
        Self { registry }
    }

    /// The underlying registry.
    pub fn registry(&self) -> &TypeRegistry {
        &self.registry
    }

    /// Construct a fully initialized instance directly.
    ///
    /// Unlike the two-phase [`ObjectModel::construct`] path, this works for
    /// types declared `without_placeholders`, since the instance never exists
    /// in an uninitialized state. Declared fields not named in `fields` start
    /// as [`Value::Null`].
    pub fn new_instance(
        &self,
        tag: impl Into<TypeTag>,
        fields: Vec<(String, Value)>,
    ) -> ModelResult<Instance> {
        let tag = tag.into();
        let spec = self.registry.get(&tag)?;
        let ordered = Self::order_fields(spec.tag.clone(), &spec.fields, fields, None)?;
        Ok(Instance::new(tag, ordered))
    }

    /// Arrange provided values into declared order, rejecting undeclared
    /// names. Declared fields without a provided value fall back to `base`'s
    /// current value, or `Null` when there is no base instance.
    fn order_fields(
        tag: TypeTag,
        declared: &[String],
        provided: Vec<(String, Value)>,
        base: Option<&Instance>,
    ) -> ModelResult<Vec<(String, Value)>> {
        for (name, _) in &provided {
            if !declared.iter().any(|f| f == name) {
                return Err(ModelError::UnknownField {
                    tag,
                    field: name.clone(),
                });
            }
        }
        Ok(declared
            .iter()
            .map(|name| {
                let value = provided
                    .iter()
                    .find(|(n, _)| n == name)
                    .map(|(_, v)| v.clone())
                    .or_else(|| base.and_then(|b| b.field(name)))
                    .unwrap_or(Value::Null);
                (name.clone(), value)
            })
            .collect())
    }
}

impl ObjectModel for DynamicModel {
    fn type_tag_for(&self, instance: &Instance) -> ModelResult<TypeTag> {
        let tag = instance.tag();
        if !self.registry.contains(&tag) {
            return Err(ModelError::UnknownType { tag });
        }
        Ok(tag)
    }

    fn list_fields(&self, instance: &Instance) -> ModelResult<Vec<(String, Value)>> {
        Ok(instance.fields())
    }

    fn allocate(&self, tag: &TypeTag) -> ModelResult<Instance> {
        let spec = self.registry.get(tag)?;
        if !spec.two_phase {
            return Err(ModelError::CyclicConstruction { tag: tag.clone() });
        }
        trace!(%tag, "allocated placeholder instance");
        let fields = spec
            .fields
            .iter()
            .map(|name| (name.clone(), Value::Null))
            .collect();
        Ok(Instance::new(tag.clone(), fields))
    }

    fn populate(&self, instance: &Instance, fields: Vec<(String, Value)>) -> ModelResult<()> {
        let tag = instance.tag();
        let spec = self.registry.get(&tag)?;
        let ordered = Self::order_fields(tag, &spec.fields, fields, Some(instance))?;
        instance.set_fields(ordered);
        Ok(())
    }
}
