//! Search-term helpers for name filtering on list pages.

/// Normalize a `?search=` value: drop NUL characters (PostgreSQL text cannot
/// hold them), trim, and treat a blank term as no filter.
pub fn normalize_term(raw: Option<&str>) -> Option<String> {
    raw.map(|t| t.replace('\0', ""))
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
}

/// Escape `LIKE` metacharacters so the term matches literally.
///
/// Uses backslash, PostgreSQL's default `LIKE` escape character.
pub fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Build a `LIKE` pattern matching names that contain `term`.
pub fn contains_pattern(term: &str) -> String {
    format!("%{}%", escape_like(term))
}
