/// Sanitize a line for use in Rust doc comments
pub fn sanitize_doc_line(line: &str) -> String {
    // Collapse internal runs of whitespace; descriptions are wrapped for XML, not for rustdoc.
    line.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Format a summary as `///` lines, one per non-empty input line.
///
/// Returns an empty string when there is nothing to document.
pub fn format_doc_comment(text: &str) -> String {
    let mut doc = String::new();
    for line in text.lines() {
        let line = sanitize_doc_line(line);
        if !line.is_empty() {
            doc.push_str(&format!("/// {}\n", line));
        }
    }
    doc
}
