pub use crate::enums::HttpMethod;

/// A captured parameter value; `None` for an optional variable that was omitted.
pub type ParamValue = Option<String>;
pub type ParamEntry = (String, ParamValue);

/// Character set that may precede (and be swallowed with) a path variable.
pub const SEPARATORS: &str = "/,;.:-_~+*=@|";

#[inline]
pub fn is_separator(ch: char) -> bool {
    SEPARATORS.contains(ch)
}
