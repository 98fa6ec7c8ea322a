use crate::filter::FilterError;
use crate::pattern::PatternError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RouterError {
    #[error("router is sealed; cannot add route '{path}'")]
    AddWhileSealed { path: String },
    #[error("router is sealed; route table can no longer be configured")]
    ConfigureWhileSealed,
    #[error("router is not sealed; readonly snapshot is unavailable")]
    ReadOnlyUnavailable,
    #[error("http method '{method}' is not supported")]
    UnsupportedMethod { method: String },
    #[error("route for '{path}' must declare at least one http method")]
    EmptyMethods { path: String },
    #[error(transparent)]
    Pattern(#[from] PatternError),
    #[error(transparent)]
    Filter(#[from] FilterError),
}

pub type RouterResult<T> = Result<T, RouterError>;
