//! Object model adapter for the graph transcoder.
//!
//! The transcoding core never constructs or inspects objects directly; it
//! goes through the [`ObjectModel`] trait. This crate provides that trait,
//! the explicit [`TypeRegistry`] mapping type tags to declared field lists,
//! and [`DynamicModel`], a registry-backed implementation whose instances are
//! plain field maps. `DynamicModel` is the default model for tests and
//! embedders that do not generate per-type code.

pub mod dynamic;
pub mod error;
pub mod registry;
pub mod traits;

pub use dynamic::DynamicModel;
pub use error::{ModelError, ModelResult};
pub use registry::{TypeRegistry, TypeSpec};
pub use traits::ObjectModel;
