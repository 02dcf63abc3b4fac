/// Sanitize a line for use inside a block comment
pub fn sanitize_doc_line(line: &str) -> String { line.replace("*/", "*\\/") }

/// Format a documentation string as a JSDoc block.
///
/// Returns an empty string when `description` holds no text. Single-line
/// descriptions collapse to `/** text */`.
pub fn format_jsdoc(description: &str, indent: &str) -> String {
    let lines: Vec<String> = description.lines().map(|l| sanitize_doc_line(l.trim_end())).collect();

    let first = lines.iter().position(|l| !l.trim().is_empty());
    let last = lines.iter().rposition(|l| !l.trim().is_empty());
    let (first, last) = match (first, last) {
        (Some(first), Some(last)) => (first, last),
        _ => return String::new(),
    };
    let body = &lines[first..=last];

    if let [only] = body {
        return format!("{indent}/** {} */\n", only.trim());
    }

    let mut doc = format!("{indent}/**\n");
    for line in body {
        if line.trim().is_empty() {
            doc.push_str(&format!("{indent} *\n"));
        } else {
            doc.push_str(&format!("{indent} * {line}\n"));
        }
    }
    doc.push_str(&format!("{indent} */\n"));
    doc
}

/// Format optional documentation, yielding an empty string when absent
pub fn format_optional_jsdoc(description: Option<&str>, indent: &str) -> String {
    description.map(|d| format_jsdoc(d, indent)).unwrap_or_default()
}
