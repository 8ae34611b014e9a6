//! Common utilities for PropTypes code generation.
//!
//! Name formatting and property-key quoting shared by normalization and
//! emission.

/// Suffix appended to every generated declaration name.
pub const DECL_SUFFIX: &str = "PropTypes";

/// Indent character used in generated output.
pub const INDENT_CHAR: char = '\t';

/// Build the indentation prefix for a nesting depth.
pub fn indent(depth: usize) -> String {
    std::iter::repeat(INDENT_CHAR).take(depth).collect()
}

/// Format a schema name into a declaration name.
///
/// Strips colon characters, uppercases the first character and appends the
/// `PropTypes` suffix: `news:teaser` becomes `NewsteaserPropTypes`.
pub fn format_decl_name(name: &str) -> String {
    let sanitized: String = name.chars().filter(|c| *c != ':').collect();
    format!("{}{}", capitalize_first(&sanitized), DECL_SUFFIX)
}

/// Capitalize the first letter of a string.
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().chain(chars).collect(),
    }
}

/// Check if a property name is a valid unquoted identifier.
///
/// Valid means: starts with an ASCII letter, and every character is an
/// ASCII letter, digit or underscore.
pub fn is_plain_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}

/// Quote a property key if it is not a valid identifier.
///
/// Uses single quotes, matching the generated JavaScript style:
/// `2prop` becomes `'2prop'`, `:type` becomes `':type'`.
pub fn quote_if_needed(name: &str) -> String {
    if is_plain_identifier(name) {
        name.to_string()
    } else {
        format!("'{}'", name.replace('\\', "\\\\").replace('\'', "\\'"))
    }
}

/// Escape a string for use inside a double-quoted JavaScript literal.
pub fn escape_js_string(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}
