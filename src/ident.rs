/// Quote a column name for embedding in generated script text.
///
/// Bare identifiers - an ASCII letter or underscore followed by ASCII
/// letters, digits or underscores - pass through unchanged. Anything else is
/// wrapped in double quotes with embedded double quotes doubled. Every
/// column name in generated text goes through this function so that a name
/// is spelled the same way wherever it appears.
pub(crate) fn quote(name: &str) -> String {
    if is_bare(name) {
        name.to_string()
    } else {
        format!("\"{}\"", name.replace('"', "\"\""))
    }
}

fn is_bare(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
