use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

use super::email::is_valid_email;
use super::ip::is_valid_ip;
use super::{FilterError, FilterResult};

static ZH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\p{Han}+$").expect("han pattern should compile"));

static ZH_NICK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[\p{Han}a-zA-Z0-9_]+$").expect("han nickname pattern should compile")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AlphaCase {
    #[default]
    Any,
    Upper,
    Lower,
}

impl From<Option<bool>> for AlphaCase {
    /// `Some(true)` is uppercase only, `Some(false)` lowercase only.
    fn from(value: Option<bool>) -> Self {
        match value {
            None => AlphaCase::Any,
            Some(true) => AlphaCase::Upper,
            Some(false) => AlphaCase::Lower,
        }
    }
}

/// A caller-supplied expression matched against the whole value.
///
/// Both case variants are built up front so the owning route may flip its
/// case sensitivity after the filter was attached.
#[derive(Debug, Clone)]
pub struct RegexFilter {
    source: String,
    sensitive: Regex,
    insensitive: Regex,
}

impl RegexFilter {
    pub fn new(key: &str, raw: &str) -> FilterResult<Self> {
        let source = sanitize_regex(raw);
        if source.is_empty() {
            return Err(FilterError::EmptyRegex {
                key: key.to_string(),
            });
        }

        let anchored = format!("^(?:{source})$");
        let build = |case_insensitive: bool| {
            RegexBuilder::new(&anchored)
                .case_insensitive(case_insensitive)
                .dot_matches_new_line(true)
                .build()
                .map_err(|err| FilterError::InvalidRegex {
                    key: key.to_string(),
                    error: err.to_string(),
                })
        };

        Ok(Self {
            sensitive: build(false)?,
            insensitive: build(true)?,
            source: source.to_string(),
        })
    }

    /// The expression with its anchors stripped.
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn is_match(&self, value: &str, case_sensitive: bool) -> bool {
        if case_sensitive {
            self.sensitive.is_match(value)
        } else {
            self.insensitive.is_match(value)
        }
    }
}

impl PartialEq for RegexFilter {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source
    }
}

impl Eq for RegexFilter {}

fn sanitize_regex(raw: &str) -> &str {
    let stripped = raw.strip_prefix('^').unwrap_or(raw);
    stripped.strip_suffix('$').unwrap_or(stripped)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterRule {
    /// Printable ASCII, no spaces.
    Graph,
    Alpha(AlphaCase),
    Digit,
    Alnum { allow_underscore: bool },
    Ip { allow_ipv6: bool, allow_special: bool },
    Email,
    /// CJK ideographs only.
    Zh,
    /// CJK ideographs, ASCII letters, digits and underscore.
    ZhNick,
    Regex(RegexFilter),
}

impl FilterRule {
    pub fn name(&self) -> &'static str {
        match self {
            FilterRule::Graph => "graph",
            FilterRule::Alpha(_) => "alpha",
            FilterRule::Digit => "digit",
            FilterRule::Alnum { .. } => "alnum",
            FilterRule::Ip { .. } => "ip",
            FilterRule::Email => "email",
            FilterRule::Zh => "zh",
            FilterRule::ZhNick => "zhNick",
            FilterRule::Regex(_) => "regex",
        }
    }

    pub fn check(&self, value: &str, case_sensitive: bool) -> bool {
        check(value, self, case_sensitive)
    }
}

/// Evaluates one rule against a captured value. Empty values never pass.
pub fn check(value: &str, rule: &FilterRule, case_sensitive: bool) -> bool {
    if value.is_empty() {
        return false;
    }

    match rule {
        FilterRule::Graph => value.bytes().all(|b| b.is_ascii_graphic()),
        FilterRule::Alpha(AlphaCase::Any) => value.bytes().all(|b| b.is_ascii_alphabetic()),
        FilterRule::Alpha(AlphaCase::Upper) => value.bytes().all(|b| b.is_ascii_uppercase()),
        FilterRule::Alpha(AlphaCase::Lower) => value.bytes().all(|b| b.is_ascii_lowercase()),
        FilterRule::Digit => value.bytes().all(|b| b.is_ascii_digit()),
        FilterRule::Alnum { allow_underscore } => value
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || (*allow_underscore && b == b'_')),
        FilterRule::Ip {
            allow_ipv6,
            allow_special,
        } => is_valid_ip(value, *allow_ipv6, *allow_special),
        FilterRule::Email => is_valid_email(value),
        FilterRule::Zh => ZH.is_match(value),
        FilterRule::ZhNick => ZH_NICK.is_match(value),
        FilterRule::Regex(filter) => filter.is_match(value, case_sensitive),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitizes_anchors_once() {
        assert_eq!(sanitize_regex("^\\d+$"), "\\d+");
        assert_eq!(sanitize_regex("\\d+"), "\\d+");
        assert_eq!(sanitize_regex("^$"), "");
        assert_eq!(sanitize_regex("^^a$$"), "^a$");
    }

    #[test]
    fn regex_filter_rejects_empty_source() {
        let err = RegexFilter::new("bar", "^$").unwrap_err();
        assert_eq!(err, FilterError::EmptyRegex { key: "bar".into() });
    }

    #[test]
    fn regex_filter_rejects_unparsable_source() {
        let err = RegexFilter::new("bar", "([").unwrap_err();
        assert!(matches!(err, FilterError::InvalidRegex { key, .. } if key == "bar"));
    }

    #[test]
    fn regex_filter_anchors_alternations() {
        let filter = RegexFilter::new("bar", "ab|cd").unwrap();
        assert!(filter.is_match("ab", true));
        assert!(filter.is_match("cd", true));
        assert!(!filter.is_match("abx", true));
        assert!(!filter.is_match("xcd", true));
    }

    #[test]
    fn regex_filter_follows_case_flag() {
        let filter = RegexFilter::new("bar", "abc").unwrap();
        assert!(filter.is_match("ABC", false));
        assert!(!filter.is_match("ABC", true));
    }
}
