//! Utilities for records output format
//!
//! One record per line, prefixed by its kind:
//! - `H` header: format version, mode and summary fields
//! - `N` vertex: index and quoted label
//! - `E` edge: quoted endpoints and weight
//! - `D` derived data such as a distance

/// Escape double quotes in a string for records format.
/// Replaces `"` with `\"` to allow safe embedding in quoted fields.
pub fn escape_quotes(s: &str) -> String {
    s.replace('\"', r#"\""#)
}

/// Quote a label for embedding in a record
pub fn quoted(s: &str) -> String {
    format!("\"{}\"", escape_quotes(s))
}

/// Format the header line
///
/// Field values are written as given; quote labels with [`quoted`] first.
pub fn format_header(source: &str, mode: &str, fields: &[(&str, String)]) -> String {
    let mut line = format!(
        "H graphwalk=1 records=1 graph={} mode={}",
        quoted(source),
        mode
    );
    for (key, value) in fields {
        line.push_str(&format!(" {}={}", key, value));
    }
    line
}

pub fn format_vertex_record(index: usize, label: &str) -> String {
    format!("N {} {}", index, quoted(label))
}

pub fn format_edge_record(from: &str, to: &str, weight: f64) -> String {
    format!("E {} {} weight={}", quoted(from), quoted(to), weight)
}

/// Format a derived-data line: `D <kind> <subject> key=value...`
pub fn format_data_record(kind: &str, subject: &str, fields: &[(&str, String)]) -> String {
    let mut line = format!("D {} {}", kind, quoted(subject));
    for (key, value) in fields {
        line.push_str(&format!(" {}={}", key, value));
    }
    line
}
