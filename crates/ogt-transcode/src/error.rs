//! Error types for transcoding operations.

use ogt_model::ModelError;
use ogt_types::{RecordId, TypeTag};
use thiserror::Error;

/// Errors that can occur during encode or decode.
///
/// All are fatal: the operation is abandoned and no partial result escapes.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TranscodeError {
    /// A reference marker's id has no matching record. The document is
    /// malformed or truncated.
    #[error("no record for reference {0}")]
    UnresolvedReference(RecordId),

    /// A record's type tag does not resolve through the object model.
    #[error("unknown type tag: {tag}")]
    UnknownType { tag: TypeTag },

    /// A record's type refuses placeholder allocation, so it cannot be
    /// reconstructed through the two-phase path.
    #[error("type {tag} does not support two-phase construction")]
    CyclicConstruction { tag: TypeTag },

    /// Two records carry the same id.
    #[error("duplicate record id {0}")]
    DuplicateRecord(RecordId),

    /// Any other failure surfaced by the object model adapter.
    #[error("object model error: {0}")]
    Model(#[source] ModelError),
}

impl From<ModelError> for TranscodeError {
    fn from(err: ModelError) -> Self {
        match err {
            ModelError::UnknownType { tag } => Self::UnknownType { tag },
            ModelError::CyclicConstruction { tag } => Self::CyclicConstruction { tag },
            other => Self::Model(other),
        }
    }
}

/// Convenience type alias for transcoding operations.
pub type TranscodeResult<T> = std::result::Result<T, TranscodeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn model_errors_map_to_their_own_variants() {
        let tag = TypeTag::new("Node");
        assert_eq!(
            TranscodeError::from(ModelError::UnknownType { tag: tag.clone() }),
            TranscodeError::UnknownType { tag: tag.clone() }
        );
        assert_eq!(
            TranscodeError::from(ModelError::CyclicConstruction { tag: tag.clone() }),
            TranscodeError::CyclicConstruction { tag: tag.clone() }
        );
        assert_eq!(
            TranscodeError::from(ModelError::UnknownField {
                tag,
                field: "x".to_string()
            }),
            TranscodeError::Model(ModelError::UnknownField {
                tag: TypeTag::new("Node"),
                field: "x".to_string()
            })
        );
    }
}
