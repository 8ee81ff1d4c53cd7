//! Graphviz DOT serialization.
//!
//! Statements are emitted in the graph's insertion order, so identical
//! input produces byte-identical DOT text; downstream consumers diff the
//! output.

use std::fmt::Write;

use yamldot_core::TreeGraph;

/// Escape special characters for a double-quoted DOT string.
fn escape(input: &str) -> String {
    input
        .replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
}

/// Quote a label for DOT. Labels that arrive already wrapped in double
/// quotes (restored colon segments) keep their wrapping instead of
/// having the quotes escaped into visible characters.
fn quote_label(label: &str) -> String {
    let pre_quoted = label.len() >= 2 && label.starts_with('"') && label.ends_with('"');
    let inner = if pre_quoted {
        &label[1..label.len() - 1]
    } else {
        label
    };
    format!("\"{}\"", escape(inner))
}

fn write_attrs<'a>(out: &mut String, attrs: impl Iterator<Item = (&'a str, &'a str)>) {
    out.push_str(" [");
    for (i, (key, value)) in attrs.enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        let _ = write!(out, "{}=\"{}\"", key, escape(value));
    }
    out.push(']');
}

/// Render the graph as DOT source.
pub fn render_dot(graph: &TreeGraph) -> String {
    let mut out = String::with_capacity(4096);
    out.push_str("digraph {\n");
    let _ = writeln!(out, "  graph [rankdir=\"{}\"];", graph.graph().rankdir.as_str());

    for (id, node) in graph.nodes() {
        let _ = write!(out, "  \"{}\" [label={}", escape(id), quote_label(&node.label));
        for (key, value) in node.attrs.iter() {
            let _ = write!(out, ", {}=\"{}\"", key, escape(value));
        }
        out.push_str("];\n");
    }

    for (key, attrs) in graph.edges() {
        let _ = write!(out, "  \"{}\" -> \"{}\"", escape(&key.v), escape(&key.w));
        if !attrs.is_empty() {
            write_attrs(&mut out, attrs.iter().map(|(k, v)| (k.as_str(), v.as_str())));
        }
        out.push_str(";\n");
    }

    out.push_str("}\n");
    out
}
