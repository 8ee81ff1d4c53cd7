//! Structural path construction.
//!
//! A node's identity is the separator-joined chain of its ancestor keys and
//! values. Equal labels under different parents therefore never collide,
//! and equal subtrees under the same parent collapse onto one node.

/// Joins path segments. Not expected to appear inside ordinary keys.
pub const SEPARATOR: &str = "__";

/// Stand-in for `:` inside a segment. DOT gives colons port semantics in
/// node ids, so they are escaped before a path is used as a graph key and
/// restored (quoted) only in display labels.
pub const COLON_MARKER: &str = "---";

/// Extends `parent` with one more segment, escaping colons. An empty
/// parent (document root in multi-view mode) contributes no separator; an
/// empty segment is a legitimate, distinct segment and is kept.
pub fn child_path(parent: &str, segment: &str) -> String {
    let segment = segment.replace(':', COLON_MARKER);
    if parent.is_empty() {
        segment
    } else {
        format!("{parent}{SEPARATOR}{segment}")
    }
}

/// The human-readable label for a path: its final segment, with escaped
/// colons restored and the result double-quoted so DOT keeps it intact.
pub fn display_label(path: &str) -> String {
    let last = path.rsplit(SEPARATOR).next().unwrap_or(path);
    if last.contains(COLON_MARKER) {
        format!("\"{}\"", last.replace(COLON_MARKER, ":"))
    } else {
        last.to_string()
    }
}
