use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PatternError {
    #[error("variable name '{name}' cannot be numeric in route pattern '{pattern}'")]
    NumericVariableName { pattern: String, name: String },
    #[error(
        "variable name '{name}' in route pattern '{pattern}' must start with an alphabetic character or underscore"
    )]
    InvalidVariableName { pattern: String, name: String },
    #[error("route pattern '{pattern}' cannot reference variable name '{name}' more than once")]
    DuplicateVariableName { pattern: String, name: String },
    #[error("route pattern '{pattern}' failed to compile: {error}")]
    RegexBuild { pattern: String, error: String },
}

pub type PatternResult<T> = Result<T, PatternError>;
