//! JSON text format and file helpers.

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use tracing::debug;

use ogt_transcode::Document;

use crate::error::WireResult;

/// Serialize a document to a compact JSON string.
pub fn to_json(document: &Document) -> WireResult<String> {
    Ok(serde_json::to_string(document)?)
}

/// Serialize a document to an indented JSON string.
pub fn to_json_pretty(document: &Document) -> WireResult<String> {
    Ok(serde_json::to_string_pretty(document)?)
}

/// Parse a document from JSON text.
pub fn from_json(text: &str) -> WireResult<Document> {
    Ok(serde_json::from_str(text)?)
}

/// Write a document to a JSON file, replacing any existing content.
pub fn to_file(document: &Document, path: impl AsRef<Path>) -> WireResult<()> {
    let path = path.as_ref();
    let file = File::create(path)?;
    serde_json::to_writer(BufWriter::new(file), document)?;
    debug!(path = %path.display(), records = document.len(), "wrote document");
    Ok(())
}

/// Read a document from a JSON file.
pub fn from_file(path: impl AsRef<Path>) -> WireResult<Document> {
    let file = File::open(path.as_ref())?;
    Ok(serde_json::from_reader(BufReader::new(file))?)
}
