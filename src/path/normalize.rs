use std::borrow::Cow;

/// Forces exactly one leading slash and no trailing slash; an empty or
/// all-slash input becomes `/`.
///
/// Inner duplicate slashes are preserved and nothing is percent-decoded.
#[inline]
pub fn normalize_uri(path: &str) -> Cow<'_, str> {
    let trimmed = path.trim_matches('/');
    let already_normal = path.len() == trimmed.len() + 1 && path.starts_with('/');
    if already_normal || path == "/" {
        return Cow::Borrowed(path);
    }

    let mut output = String::with_capacity(trimmed.len() + 1);
    output.push('/');
    output.push_str(trimmed);
    Cow::Owned(output)
}

/// Group prefixes additionally ignore surrounding whitespace.
pub fn normalize_prefix(prefix: &str) -> String {
    let prefix = prefix.trim();
    if prefix.is_empty() {
        return "/".to_string();
    }
    normalize_uri(prefix).into_owned()
}

pub fn join_prefix(prefix: &str, uri: &str) -> String {
    let uri = normalize_uri(uri);
    normalize_uri(&format!("{prefix}{uri}")).into_owned()
}

/// Folds one character at a time, so a character never expands into
/// several and the comparison lines up with the regex `(?i)` flag.
#[inline]
fn char_eq_folded(left: char, right: char) -> bool {
    left == right || left.to_lowercase().eq(right.to_lowercase())
}

/// Text equality used for routes without variables.
pub fn eq_folded(left: &str, right: &str, case_sensitive: bool) -> bool {
    if case_sensitive {
        return left == right;
    }
    if left.is_ascii() && right.is_ascii() {
        return left.eq_ignore_ascii_case(right);
    }

    let mut right = right.chars();
    left.chars()
        .all(|l| right.next().is_some_and(|r| char_eq_folded(l, r)))
        && right.next().is_none()
}

/// Prefix test used ahead of regex evaluation.
pub fn starts_with_folded(haystack: &str, prefix: &str, case_sensitive: bool) -> bool {
    if case_sensitive {
        return haystack.starts_with(prefix);
    }
    if haystack.is_ascii() && prefix.is_ascii() {
        return haystack.len() >= prefix.len()
            && haystack.as_bytes()[..prefix.len()].eq_ignore_ascii_case(prefix.as_bytes());
    }

    let mut haystack = haystack.chars();
    prefix
        .chars()
        .all(|p| haystack.next().is_some_and(|h| char_eq_folded(h, p)))
}
