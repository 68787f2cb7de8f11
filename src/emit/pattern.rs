//! Literal rewrites from vim regex syntax to GtkSourceView regex syntax.
//!
//! Only a handful of substitutions are applied; this is not a regex translator.

/// Substitutions applied, in order, to `syn match` patterns.
const MATCH_REWRITES: &[(&str, &str)] = &[(r"\<", ""), (r"\>", ""), (r"\+", "+")];

/// Drop vim word-boundary markers and unescape `\+`.
pub fn clean_match_pattern(pattern: &str) -> String {
    MATCH_REWRITES
        .iter()
        .fold(pattern.to_string(), |acc, (from, to)| acc.replace(from, to))
}

/// A cleaned match pattern that still contains `<` is not emitted.
pub fn is_renderable(cleaned: &str) -> bool {
    !cleaned.contains('<')
}

/// Escape forward slashes for region start/end patterns.
pub fn escape_slashes(pattern: &str) -> String {
    pattern.replace('/', r"\/")
}

/// Remove all backslashes, turning escaped comment delimiters into literals.
pub fn strip_backslashes(pattern: &str) -> String {
    pattern.replace('\\', "")
}
