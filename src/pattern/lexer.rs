use memchr::memchr;

use super::{PatternError, PatternResult};

/// A `{name}` / `{name?}` occurrence inside a route pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariableMarker {
    pub name: String,
    pub optional: bool,
    /// Byte offset of the opening brace.
    pub offset: usize,
    /// Byte length of the whole marker, braces included.
    pub len: usize,
}

impl VariableMarker {
    #[inline]
    pub fn end(&self) -> usize {
        self.offset + self.len
    }
}

/// Scans `pattern` left to right for variable markers and validates their names.
///
/// Braces that do not enclose a word-character name are kept as literal text.
#[tracing::instrument(level = "trace", skip_all, fields(pattern = %pattern))]
pub fn scan_markers(pattern: &str) -> PatternResult<Vec<VariableMarker>> {
    let markers = find_markers(pattern);

    for (idx, marker) in markers.iter().enumerate() {
        let name = marker.name.as_str();
        if name.bytes().all(|b| b.is_ascii_digit()) {
            return Err(PatternError::NumericVariableName {
                pattern: pattern.to_string(),
                name: name.to_string(),
            });
        }
        if name.as_bytes()[0].is_ascii_digit() {
            return Err(PatternError::InvalidVariableName {
                pattern: pattern.to_string(),
                name: name.to_string(),
            });
        }
        if markers[..idx].iter().any(|prev| prev.name == marker.name) {
            return Err(PatternError::DuplicateVariableName {
                pattern: pattern.to_string(),
                name: name.to_string(),
            });
        }
    }

    Ok(markers)
}

/// Marker positions only, no name validation.
pub(crate) fn find_markers(text: &str) -> Vec<VariableMarker> {
    let bytes = text.as_bytes();
    let mut markers = Vec::new();
    let mut cursor = 0usize;

    while let Some(rel) = memchr(b'{', &bytes[cursor..]) {
        let start = cursor + rel;
        match read_marker(bytes, start) {
            Some((name_end, optional, end)) => {
                markers.push(VariableMarker {
                    name: text[start + 1..name_end].to_string(),
                    optional,
                    offset: start,
                    len: end - start,
                });
                cursor = end;
            }
            None => cursor = start + 1,
        }
    }

    markers
}

/// Returns `(name_end, optional, marker_end)` for a marker opening at `start`.
fn read_marker(bytes: &[u8], start: usize) -> Option<(usize, bool, usize)> {
    let mut idx = start + 1;
    while idx < bytes.len() && is_word_byte(bytes[idx]) {
        idx += 1;
    }
    if idx == start + 1 {
        return None;
    }

    let name_end = idx;
    let optional = bytes.get(idx) == Some(&b'?');
    if optional {
        idx += 1;
    }

    (bytes.get(idx) == Some(&b'}')).then_some((name_end, optional, idx + 1))
}

#[inline]
fn is_word_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

/// Removes every marker from `text`, leaving only the literal characters.
pub(crate) fn strip_markers(text: &str) -> String {
    let mut output = String::with_capacity(text.len());
    let mut pos = 0usize;
    for marker in find_markers(text) {
        output.push_str(&text[pos..marker.offset]);
        pos = marker.end();
    }
    output.push_str(&text[pos..]);
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_required_and_optional_markers_with_offsets() {
        let markers = scan_markers("/foo/{bar}/{biz?}").unwrap();
        assert_eq!(markers.len(), 2);
        assert_eq!(markers[0].name, "bar");
        assert!(!markers[0].optional);
        assert_eq!(markers[0].offset, 5);
        assert_eq!(markers[0].len, 5);
        assert_eq!(markers[1].name, "biz");
        assert!(markers[1].optional);
        assert_eq!(markers[1].offset, 11);
        assert_eq!(markers[1].end(), 17);
    }

    #[test]
    fn ignores_braces_without_a_word_name() {
        let markers = scan_markers("/a/{}/{x-y}/{ok}/{{z}}").unwrap();
        let names: Vec<_> = markers.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["ok", "z"]);
    }

    #[test]
    fn rejects_numeric_names() {
        let err = scan_markers("/foo/{123}").unwrap_err();
        assert_eq!(
            err,
            PatternError::NumericVariableName {
                pattern: "/foo/{123}".to_string(),
                name: "123".to_string(),
            }
        );
    }

    #[test]
    fn rejects_names_starting_with_digit() {
        let err = scan_markers("/foo/{1abc}").unwrap_err();
        assert!(matches!(err, PatternError::InvalidVariableName { name, .. } if name == "1abc"));
    }

    #[test]
    fn rejects_duplicate_names() {
        let err = scan_markers("/{id}/x/{id?}").unwrap_err();
        assert!(matches!(err, PatternError::DuplicateVariableName { name, .. } if name == "id"));
    }

    #[test]
    fn strips_markers_from_text() {
        assert_eq!(strip_markers("{a}.{b}/c"), "./c");
        assert_eq!(strip_markers("/plain"), "/plain");
    }
}
