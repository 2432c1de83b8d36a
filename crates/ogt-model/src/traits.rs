//! The [`ObjectModel`] trait defining the adapter interface.
//!
//! Any object system (a dynamic field-map model, generated per-type code,
//! reflection over host data) implements this trait to let the transcoder
//! enumerate and construct its objects.

use ogt_types::{Instance, TypeTag, Value};

use crate::error::ModelResult;

/// Adapter between the transcoding core and an object system.
///
/// The core only needs four capabilities: name an instance's type, enumerate
/// its fields, allocate an uninitialized instance of a type, and populate
/// field values after allocation. The allocate/populate split is what makes
/// cyclic graphs decodable: every record's instance exists and is addressable
/// before any record's references are resolved.
///
/// Implementations that cannot allocate a given type empty must fail
/// `allocate` with [`ModelError::CyclicConstruction`]; the decoder has no
/// single-phase fallback, since falling back would make decoding sensitive
/// to record order.
///
/// [`ModelError::CyclicConstruction`]: crate::error::ModelError::CyclicConstruction
pub trait ObjectModel {
    /// The tag under which this instance's type is registered.
    fn type_tag_for(&self, instance: &Instance) -> ModelResult<TypeTag>;

    /// The instance's fields in declared order.
    fn list_fields(&self, instance: &Instance) -> ModelResult<Vec<(String, Value)>>;

    /// Allocate an uninitialized instance of the tagged type (phase 1).
    fn allocate(&self, tag: &TypeTag) -> ModelResult<Instance>;

    /// Assign field values to a previously allocated instance (phase 2).
    ///
    /// Fields not named keep their allocation-time values.
    fn populate(&self, instance: &Instance, fields: Vec<(String, Value)>) -> ModelResult<()>;

    /// Allocate and populate in one step.
    fn construct(&self, tag: &TypeTag, fields: Vec<(String, Value)>) -> ModelResult<Instance> {
        let instance = self.allocate(tag)?;
        self.populate(&instance, fields)?;
        Ok(instance)
    }
}
