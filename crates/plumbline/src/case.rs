// File: src/case.rs
// Purpose: Word case conversion for stage and handler names

/// Converts `foo_bar`, `foo-bar` or `foo bar` to `FooBar`
pub fn classify(word: &str) -> String {
    let mut result = String::with_capacity(word.len());
    let mut upper_next = true;

    for c in word.chars() {
        if matches!(c, ' ' | '_' | '-') {
            upper_next = true;
            continue;
        }

        if upper_next {
            result.extend(c.to_uppercase());
            upper_next = false;
        } else {
            result.push(c);
        }
    }

    result
}

/// Converts `foo_bar`, `foo-bar` or `foo bar` to `fooBar`
pub fn camelize(word: &str) -> String {
    let classified = classify(word);
    let mut chars = classified.chars();

    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Converts `fooBar` to `foo_bar` (or `foo-bar`, `foo.bar`, ... for other delimiters)
///
/// A delimiter goes between any character other than `.` and a following
/// uppercase ASCII letter; the result is lowercased and URL-encoded.
pub fn snake(word: &str, delimiter: &str) -> String {
    let mut result = String::with_capacity(word.len() + 4);
    let mut chars = word.chars().peekable();

    while let Some(c) = chars.next() {
        result.push(c);
        if c != '.' && chars.peek().is_some_and(char::is_ascii_uppercase) {
            result.push_str(delimiter);
        }
    }

    urlencoding::encode(&result.to_lowercase()).into_owned()
}

/// Converts `fooBar` to `foo-bar`
pub fn kebab(word: &str) -> String {
    snake(word, "-")
}
