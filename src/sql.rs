//! SQL text utilities
//!
//! Identifier quoting for generated preview queries and the
//! multi-statement guard applied to ad-hoc input.

/// Quote an identifier for safe interpolation into a statement.
///
/// Identifiers that are already valid unquoted lowercase names
/// (`^[a-z_][a-z0-9_]*$`) pass through unchanged. Everything else is
/// wrapped in double quotes with embedded quotes doubled, which also
/// preserves case-sensitive names like `"Orders"`.
///
/// Empty input is returned unchanged; catalog metadata never produces
/// empty names.
pub fn quote_ident(name: &str) -> String {
    if name.is_empty() {
        return String::new();
    }
    let mut chars = name.chars();
    let plain = chars
        .next()
        .is_some_and(|c| c.is_ascii_lowercase() || c == '_')
        && chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_');
    if plain {
        return name.to_string();
    }
    format!("\"{}\"", name.replace('"', "\"\""))
}

/// Build a schema-qualified, quoted table reference.
pub fn qualified_table(schema: &str, table: &str) -> String {
    format!("{}.{}", quote_ident(schema), quote_ident(table))
}

/// Detect whether query text contains more than one statement.
///
/// A semicolon followed (after optional whitespace) by any non-whitespace
/// character counts as a statement boundary. This deliberately ignores
/// string and comment literals: a semicolon inside `'a;b'` is still treated
/// as a separator. Callers depend on this exact behavior; swapping in a
/// real tokenizer changes what gets refused.
pub fn has_multiple_statements(query: &str) -> bool {
    let mut rest = query;
    while let Some(pos) = rest.find(';') {
        let after = &rest[pos + 1..];
        if after.trim_start().chars().next().is_some() {
            return true;
        }
        rest = after;
    }
    false
}
