/// Request path normalization
///
/// All functions are **pure**: given same input, always produce same output with no side effects.

use std::borrow::Cow;

/// Checks whether a path is already in canonical form
///
/// Canonical means: starts with `/`, has no `//` and no `\`, and does not end
/// with `/` unless it is the root.
///
/// ```
/// use plumbline_router::path::is_canonical;
///
/// assert!(is_canonical("/"));
/// assert!(is_canonical("/users/42"));
/// assert!(!is_canonical("users/42"));
/// assert!(!is_canonical("/users/42/"));
/// assert!(!is_canonical("/users//42"));
/// ```
pub fn is_canonical(path: &str) -> bool {
    if !path.starts_with('/') || path.contains("//") || path.contains('\\') {
        return false;
    }

    path == "/" || !path.ends_with('/')
}

/// Normalizes a request path before it is matched
///
/// Returns `Cow::Borrowed` when the input is already canonical.
///
/// ```
/// use plumbline_router::path::normalize_path;
/// use std::borrow::Cow;
///
/// assert!(matches!(normalize_path("/about"), Cow::Borrowed("/about")));
/// assert_eq!(normalize_path("/about/"), "/about");
/// assert_eq!(normalize_path("\\users\\42"), "/users/42");
/// assert_eq!(normalize_path(""), "/");
/// ```
pub fn normalize_path(path: &str) -> Cow<'_, str> {
    if is_canonical(path) {
        return Cow::Borrowed(path);
    }

    let mut normalized = String::with_capacity(path.len() + 1);
    for segment in path.split(['/', '\\']).filter(|s| !s.is_empty()) {
        normalized.push('/');
        normalized.push_str(segment);
    }

    if normalized.is_empty() {
        Cow::Borrowed("/")
    } else {
        Cow::Owned(normalized)
    }
}
