mod compiled;
mod error;
mod lexer;
mod token;

pub use compiled::{CaptureList, CompiledPattern, compile_markers, compile_pattern, tokenize};
pub use error::{PatternError, PatternResult};
pub use lexer::{VariableMarker, scan_markers};
pub use token::{ANYTHING_VALUE_REGEX, Token, VariableToken, render_tokens};
