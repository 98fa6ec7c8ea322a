use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FilterError {
    #[error("filter key must not be empty")]
    EmptyKey,
    #[error("regex filter for '{key}' cannot be empty")]
    EmptyRegex { key: String },
    #[error("regex filter for '{key}' is invalid: {error}")]
    InvalidRegex { key: String, error: String },
}

pub type FilterResult<T> = Result<T, FilterError>;
