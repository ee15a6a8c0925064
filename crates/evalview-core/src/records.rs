//! Utilities for records output format
//!
//! Every records document starts with an `H` header line followed by one line
//! per item, each carrying a single-letter prefix.

/// Records format version emitted in every header
pub const RECORDS_VERSION: u32 = 1;

/// Escape double quotes in a string for records format.
/// Replaces `"` with `\"` to allow safe embedding in quoted fields.
pub fn escape_quotes(s: &str) -> String {
    s.replace('\"', r#"\""#)
}

/// Quote a free-text field, flattening newlines so each record stays on one line
pub fn quote(s: &str) -> String {
    format!("\"{}\"", escape_quotes(&s.replace(['\n', '\r'], " ")))
}

/// Format the header line for a records document
///
/// `fields` are appended as `key=value` pairs in the order given.
pub fn format_header(mode: &str, fields: &[(&str, String)]) -> String {
    let mut line = format!("H evalview={} records=1 mode={}", RECORDS_VERSION, mode);
    for (key, value) in fields {
        line.push_str(&format!(" {}={}", key, value));
    }
    line
}

/// Format a metric record line (`M` prefix)
pub fn format_metric_record(metric: &str, count: usize, mean: &str, extra: &[(&str, String)]) -> String {
    let mut line = format!("M {} count={} mean={}", metric, count, mean);
    for (key, value) in extra {
        line.push_str(&format!(" {}={}", key, value));
    }
    line
}

/// Format a diagnostic record line (`D` prefix)
pub fn format_diagnostic(severity: &str, category: &str, message: &str, field: Option<&str>) -> String {
    let field_part = field.map(|f| format!(" field={}", f)).unwrap_or_default();
    format!("D {} {} {}{}", severity, category, quote(message), field_part)
}
