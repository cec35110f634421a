//! Best-effort removal of angle-bracket markup from free text.
//!
//! This is not an HTML parser. It deletes every shortest `<...>` run on a
//! single line and leaves everything else alone: entities stay encoded,
//! text between tags is kept, and a `<` without a closing `>` on the same
//! line survives.

use std::sync::LazyLock;

use regex::Regex;

/// Shortest `<` to `>` span. `.` does not cross newlines.
static TAG_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    // SAFETY: the pattern is a fixed literal, so compilation cannot fail at runtime
    Regex::new(r"<.*?>").expect("static tag pattern")
});

/// Remove every tag-like `<...>` substring from `text`.
///
/// Total over all inputs, including the empty string.
///
/// # Examples
///
/// ```
/// assert_eq!(saam_sparql::strip_markup("<b>Hello</b> world"), "Hello world");
/// ```
pub fn strip_markup(text: &str) -> String {
    TAG_PATTERN.replace_all(text, "").into_owned()
}
