//! Compact binary format via bincode.

use ogt_transcode::Document;

use crate::error::{WireError, WireResult};

/// Serialize a document to bincode bytes.
pub fn to_bytes(document: &Document) -> WireResult<Vec<u8>> {
    bincode::serialize(document).map_err(|e| WireError::Binary(e.to_string()))
}

/// Deserialize a document from bincode bytes.
pub fn from_bytes(data: &[u8]) -> WireResult<Document> {
    bincode::deserialize(data).map_err(|e| WireError::Binary(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ogt_transcode::{Encoded, Record};
    use ogt_types::{RecordId, TypeTag};

    #[test]
    fn binary_roundtrip() {
        let doc = Document::new(
            vec![RecordId::new(0)],
            vec![Record::new(
                RecordId::new(0),
                TypeTag::new("Node"),
                vec![("next".to_string(), Encoded::Ref(RecordId::new(0)))],
            )],
        );
        let bytes = to_bytes(&doc).unwrap();
        assert_eq!(from_bytes(&bytes).unwrap(), doc);
    }

    #[test]
    fn truncated_bytes_are_rejected() {
        let doc = Document::new(vec![], vec![]);
        let bytes = to_bytes(&doc).unwrap();
        let result = from_bytes(&bytes[..bytes.len() - 1]);
        assert!(matches!(result, Err(WireError::Binary(_))));
    }
}
