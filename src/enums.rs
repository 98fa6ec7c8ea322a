use std::fmt;
use std::str::FromStr;

use crate::errors::RouterError;

#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum HttpMethod {
    Any = 0,
    Get = 1,
    Head = 2,
    Post = 3,
    Put = 4,
    Patch = 5,
    Delete = 6,
    Options = 7,
}

impl HttpMethod {
    pub const ALL: [HttpMethod; 8] = [
        HttpMethod::Any,
        HttpMethod::Get,
        HttpMethod::Head,
        HttpMethod::Post,
        HttpMethod::Put,
        HttpMethod::Patch,
        HttpMethod::Delete,
        HttpMethod::Options,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Any => "ANY",
            HttpMethod::Get => "GET",
            HttpMethod::Head => "HEAD",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
            HttpMethod::Options => "OPTIONS",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HttpMethod {
    type Err = RouterError;

    /// Case-insensitive; surrounding whitespace is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        HttpMethod::ALL
            .into_iter()
            .find(|method| method.as_str().eq_ignore_ascii_case(token))
            .ok_or_else(|| RouterError::UnsupportedMethod {
                method: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_tokens_case_insensitively() {
        assert_eq!("get".parse::<HttpMethod>().ok(), Some(HttpMethod::Get));
        assert_eq!(" Options ".parse::<HttpMethod>().ok(), Some(HttpMethod::Options));
        assert_eq!("any".parse::<HttpMethod>().ok(), Some(HttpMethod::Any));
    }

    #[test]
    fn rejects_unknown_token_with_router_error() {
        match "BREW".parse::<HttpMethod>().expect_err("BREW is not a method") {
            RouterError::UnsupportedMethod { method } => assert_eq!(method, "BREW"),
            other => panic!("unexpected error: {other:?}"),
        }
        match "".parse::<HttpMethod>().expect_err("empty token is not a method") {
            RouterError::UnsupportedMethod { method } => assert!(method.is_empty()),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn displays_uppercase_token() {
        assert_eq!(HttpMethod::Delete.to_string(), "DELETE");
    }
}
