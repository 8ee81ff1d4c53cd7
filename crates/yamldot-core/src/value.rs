//! The unified input model: one parsed YAML or JSON document.
//!
//! Both loaders funnel into [`Document`] so the renderer only ever sees the
//! three structural kinds it recognizes: mappings, sequences and scalars.
//! Mapping entries keep document order (`IndexMap`; the JSON loader relies
//! on `serde_json`'s `preserve_order`).

use indexmap::IndexMap;
use std::fmt;

/// A leaf value, rendered into a path segment via its `Display` impl.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    String(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    Null,
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::String(s) => f.write_str(s),
            Scalar::Int(i) => write!(f, "{i}"),
            Scalar::Float(x) => write!(f, "{x}"),
            Scalar::Bool(b) => write!(f, "{b}"),
            Scalar::Null => f.write_str("null"),
        }
    }
}

/// One parsed top-level value, or any subtree of one.
#[derive(Debug, Clone, PartialEq)]
pub enum Document {
    Mapping(IndexMap<String, Document>),
    Sequence(Vec<Document>),
    Scalar(Scalar),
}

impl Document {
    pub fn is_container(&self) -> bool {
        matches!(self, Document::Mapping(_) | Document::Sequence(_))
    }
}

impl From<serde_yaml::Value> for Document {
    fn from(value: serde_yaml::Value) -> Self {
        match value {
            serde_yaml::Value::Null => Document::Scalar(Scalar::Null),
            serde_yaml::Value::Bool(b) => Document::Scalar(Scalar::Bool(b)),
            serde_yaml::Value::Number(n) => Document::Scalar(number_from_yaml(&n)),
            serde_yaml::Value::String(s) => Document::Scalar(Scalar::String(s)),
            serde_yaml::Value::Sequence(items) => {
                Document::Sequence(items.into_iter().map(Document::from).collect())
            }
            serde_yaml::Value::Mapping(entries) => Document::Mapping(
                entries
                    .into_iter()
                    .map(|(k, v)| (yaml_key_to_string(k), Document::from(v)))
                    .collect(),
            ),
            // `!tag value` carries no structure of its own; unwrap to the inner value.
            serde_yaml::Value::Tagged(tagged) => Document::from(tagged.value),
        }
    }
}

impl From<serde_json::Value> for Document {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Document::Scalar(Scalar::Null),
            serde_json::Value::Bool(b) => Document::Scalar(Scalar::Bool(b)),
            serde_json::Value::Number(n) => Document::Scalar(number_from_json(&n)),
            serde_json::Value::String(s) => Document::Scalar(Scalar::String(s)),
            serde_json::Value::Array(items) => {
                Document::Sequence(items.into_iter().map(Document::from).collect())
            }
            serde_json::Value::Object(entries) => Document::Mapping(
                entries
                    .into_iter()
                    .map(|(k, v)| (k, Document::from(v)))
                    .collect(),
            ),
        }
    }
}

fn number_from_yaml(n: &serde_yaml::Number) -> Scalar {
    if let Some(i) = n.as_i64() {
        Scalar::Int(i)
    } else {
        Scalar::Float(n.as_f64().unwrap_or(f64::NAN))
    }
}

fn number_from_json(n: &serde_json::Number) -> Scalar {
    if let Some(i) = n.as_i64() {
        Scalar::Int(i)
    } else {
        Scalar::Float(n.as_f64().unwrap_or(f64::NAN))
    }
}

/// YAML permits non-string mapping keys; path segments need strings.
/// Scalars use the canonical conversion, containers fall back to their
/// YAML flow form.
fn yaml_key_to_string(key: serde_yaml::Value) -> String {
    if let serde_yaml::Value::String(s) = key {
        return s;
    }
    match Document::from(key.clone()) {
        Document::Scalar(s) => s.to_string(),
        _ => serde_yaml::to_string(&key)
            .map(|s| s.trim_end().to_string())
            .unwrap_or_default(),
    }
}
