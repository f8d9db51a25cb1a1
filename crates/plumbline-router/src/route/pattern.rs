/// Placeholder scanning for route templates
///
/// Pure functional parsing of `{name}`, `{name:type}` and `{name:regex}`
/// tokens. All functions are **pure**: same input → same output, no side effects.

use once_cell::sync::Lazy;
use regex::Regex;

/// Shape of a placeholder: an identifier of letters, digits, `_` or `-`,
/// optionally followed by `:` and any text without braces.
pub(crate) static PLACEHOLDER_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\{[A-Za-z0-9_-]+(?::[^{}]*)?\}").expect("placeholder regex is valid")
});

/// A placeholder found in a route template
///
/// # Examples
///
/// ```
/// use plumbline_router::route::pattern::scan_placeholders;
///
/// let found = scan_placeholders("/posts/{year:d}/{slug}");
/// assert_eq!(found[0].raw, "{year:d}");
/// assert_eq!(found[0].name, "year");
/// assert_eq!(found[0].tag, "d");
/// assert_eq!(found[1].tag, "");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholder {
    /// Exact text of the token, braces included
    pub raw: String,
    /// Capture group name
    pub name: String,
    /// Type tag or inline regex; empty when absent
    pub tag: String,
}

impl Placeholder {
    /// Builds a placeholder from its full `{...}` text
    pub fn from_raw(raw: &str) -> Self {
        let inner = raw.trim_start_matches('{').trim_end_matches('}');
        let (name, tag) = parse_placeholder(inner);
        Self {
            raw: raw.to_string(),
            name: name.to_string(),
            tag: tag.to_string(),
        }
    }
}

/// Splits the inside of a placeholder into `(name, tag)` (pure function)
///
/// Only the first `:` separates, so inline regexes may contain colons.
///
/// ```
/// use plumbline_router::route::pattern::parse_placeholder;
///
/// assert_eq!(parse_placeholder("id"), ("id", ""));
/// assert_eq!(parse_placeholder("id:d"), ("id", "d"));
/// assert_eq!(parse_placeholder("t:(?:am|pm)"), ("t", "(?:am|pm)"));
/// ```
pub fn parse_placeholder(inner: &str) -> (&str, &str) {
    inner.split_once(':').unwrap_or((inner, ""))
}

/// Finds every placeholder in a template, left to right
///
/// Matches never overlap. Repeated tokens are reported each time they occur.
pub fn scan_placeholders(pattern: &str) -> Vec<Placeholder> {
    PLACEHOLDER_REGEX
        .find_iter(pattern)
        .map(|m| Placeholder::from_raw(m.as_str()))
        .collect()
}
