//! Input loading: YAML/JSON text to document lists, plus file-extension
//! dispatch for the CLI.
//!
//! Parse failures surface as structured errors; they are never coerced
//! into an empty document list.

use std::path::Path;

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::value::Document;

/// Parses a YAML stream. Every `---`-separated document becomes one
/// [`Document`]; an empty stream yields an empty list.
pub fn parse_yaml_documents(input: &str) -> Result<Vec<Document>> {
    let mut documents = Vec::new();
    for de in serde_yaml::Deserializer::from_str(input) {
        let value = serde_yaml::Value::deserialize(de)?;
        documents.push(Document::from(value));
    }
    tracing::debug!(count = documents.len(), "parsed YAML stream");
    Ok(documents)
}

/// Parses one JSON value. A top-level array is treated as a document
/// list (each element renders under its own index prefix); any other
/// value is a single document.
pub fn parse_json_documents(input: &str) -> Result<Vec<Document>> {
    let value: serde_json::Value = serde_json::from_str(input)?;
    Ok(match Document::from(value) {
        Document::Sequence(items) => items,
        other => vec![other],
    })
}

/// Loads documents from a file, dispatching on its extension.
/// Unsupported extensions are reported distinctly from parse errors.
pub fn load_path(path: &Path) -> Result<Vec<Document>> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or_default()
        .to_ascii_lowercase();

    match extension.as_str() {
        "yaml" | "yml" => parse_yaml_documents(&std::fs::read_to_string(path)?),
        "json" => parse_json_documents(&std::fs::read_to_string(path)?),
        _ => Err(Error::UnsupportedExtension { extension }),
    }
}
