//! Error types for object model operations.

use ogt_types::TypeTag;
use thiserror::Error;

/// Errors that can occur during object model operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    /// The type tag does not resolve to a registered type.
    #[error("unknown type tag: {tag}")]
    UnknownType { tag: TypeTag },

    /// A type with this tag is already registered.
    #[error("type tag already registered: {tag}")]
    DuplicateType { tag: TypeTag },

    /// A field name is not declared by the instance's type.
    #[error("type {tag} declares no field named {field:?}")]
    UnknownField { tag: TypeTag, field: String },

    /// The type forbids placeholder allocation, so it cannot take part in
    /// two-phase construction.
    #[error("type {tag} does not support two-phase construction")]
    CyclicConstruction { tag: TypeTag },
}

/// Convenience type alias for model operations.
pub type ModelResult<T> = std::result::Result<T, ModelError>;
