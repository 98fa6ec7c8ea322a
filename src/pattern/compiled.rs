use hashbrown::HashSet;
use regex::{Regex, RegexBuilder};
use smallvec::SmallVec;

use super::lexer::{VariableMarker, scan_markers, strip_markers};
use super::token::{ANYTHING_VALUE_REGEX, Token, VariableToken};
use super::{PatternError, PatternResult};
use crate::path::{eq_folded, starts_with_folded};
use crate::types::is_separator;

/// Declared variables paired with their non-empty capture, in declaration order.
pub type CaptureList<'p, 'h> = SmallVec<[(&'p VariableToken, Option<&'h str>); 4]>;

/// A route pattern lowered to tokens and a single anchored regular expression.
///
/// Patterns without variables carry no regex and are compared as plain text.
#[derive(Debug, Clone)]
pub struct CompiledPattern {
    pattern: String,
    tokens: Vec<Token>,
    variables: Vec<String>,
    prefix: Option<String>,
    regex: Option<Regex>,
    case_sensitive: bool,
}

impl CompiledPattern {
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn variables(&self) -> &[String] {
        &self.variables
    }

    pub fn prefix(&self) -> Option<&str> {
        self.prefix.as_deref()
    }

    pub fn regex(&self) -> Option<&Regex> {
        self.regex.as_ref()
    }

    pub fn is_case_sensitive(&self) -> bool {
        self.case_sensitive
    }

    pub fn is_static(&self) -> bool {
        self.regex.is_none()
    }

    /// Runs the pattern against an already normalized subject.
    ///
    /// On success every declared variable is reported; `None` values are
    /// variables whose capture was absent or empty.
    pub fn captures<'p, 'h>(&'p self, subject: &'h str) -> Option<CaptureList<'p, 'h>> {
        let Some(regex) = self.regex.as_ref() else {
            return self.static_eq(subject).then(SmallVec::new);
        };

        if let Some(prefix) = self.prefix.as_deref()
            && !starts_with_folded(subject, prefix, self.case_sensitive)
        {
            return None;
        }

        let caps = regex.captures(subject)?;
        let list = self
            .tokens
            .iter()
            .filter_map(Token::as_variable)
            .map(|var| {
                let value = caps
                    .name(&var.name)
                    .map(|m| m.as_str())
                    .filter(|value| !value.is_empty());
                (var, value)
            })
            .collect();
        Some(list)
    }

    fn static_eq(&self, subject: &str) -> bool {
        eq_folded(&self.pattern, subject, self.case_sensitive)
    }
}

/// Scans, tokenizes and compiles `pattern` in one step.
pub fn compile_pattern(
    pattern: &str,
    case_sensitive: bool,
    anything: &HashSet<String>,
) -> PatternResult<CompiledPattern> {
    let markers = scan_markers(pattern)?;
    compile_markers(pattern, &markers, case_sensitive, anything)
}

#[tracing::instrument(level = "trace", skip_all, fields(pattern = %pattern, variables = markers.len() as u64))]
pub fn compile_markers(
    pattern: &str,
    markers: &[VariableMarker],
    case_sensitive: bool,
    anything: &HashSet<String>,
) -> PatternResult<CompiledPattern> {
    let tokens = tokenize(pattern, markers, anything);
    let variables: Vec<String> = markers.iter().map(|m| m.name.clone()).collect();

    let regex = if variables.is_empty() {
        None
    } else {
        let source = build_regex_source(&tokens);
        tracing::trace!(regex = %source, "compiled route pattern");
        let regex = RegexBuilder::new(&source)
            .case_insensitive(!case_sensitive)
            .dot_matches_new_line(true)
            .build()
            .map_err(|err| PatternError::RegexBuild {
                pattern: pattern.to_string(),
                error: err.to_string(),
            })?;
        Some(regex)
    };

    let prefix = match tokens.first() {
        Some(Token::Literal(text)) if regex.is_some() => Some(text.clone()),
        _ => None,
    };

    Ok(CompiledPattern {
        pattern: pattern.to_string(),
        tokens,
        variables,
        prefix,
        regex,
        case_sensitive,
    })
}

/// Splits `pattern` into literal and variable tokens around `markers`.
pub fn tokenize(
    pattern: &str,
    markers: &[VariableMarker],
    anything: &HashSet<String>,
) -> Vec<Token> {
    let mut tokens = Vec::with_capacity(markers.len() * 2 + 1);
    let mut pos = 0usize;

    for marker in markers {
        let preceding = &pattern[pos..marker.offset];
        let separator = preceding.chars().next_back().filter(|ch| is_separator(*ch));
        let literal = match separator {
            Some(sep) => &preceding[..preceding.len() - sep.len_utf8()],
            None => preceding,
        };
        if !literal.is_empty() {
            tokens.push(Token::Literal(literal.to_string()));
        }

        pos = marker.end();
        let value_regex = if anything.contains(marker.name.as_str()) {
            ANYTHING_VALUE_REGEX.to_string()
        } else {
            value_class(&pattern[pos..])
        };

        tokens.push(Token::Variable(VariableToken {
            separator,
            value_regex,
            name: marker.name.clone(),
            optional: marker.optional,
        }));
    }

    if pos < pattern.len() {
        tokens.push(Token::Literal(pattern[pos..].to_string()));
    }

    tokens
}

/// Character class for a variable: never crosses `/`, nor the separator
/// that opens the literal text following it.
fn value_class(following: &str) -> String {
    let next_separator = strip_markers(following)
        .chars()
        .next()
        .filter(|ch| is_separator(*ch) && *ch != '/');

    match next_separator {
        Some(sep) => format!("[^/{}]+", regex::escape(sep.encode_utf8(&mut [0; 4]))),
        None => "[^/]+".to_string(),
    }
}

/// Index of the first token of the trailing run of optional variables.
fn first_optional_index(tokens: &[Token]) -> Option<usize> {
    let run = tokens
        .iter()
        .rev()
        .take_while(|token| token.is_optional_variable())
        .count();
    (run > 0).then(|| tokens.len() - run)
}

/// Literals stay verbatim; case folding is left to the regex flag.
fn build_regex_source(tokens: &[Token]) -> String {
    let first_optional = first_optional_index(tokens);
    let mut source = String::with_capacity(tokens.len() * 16 + 2);
    source.push('^');

    for (idx, token) in tokens.iter().enumerate() {
        match token {
            Token::Literal(text) => source.push_str(&regex::escape(text)),
            Token::Variable(var) => {
                push_variable_unit(&mut source, tokens.len(), idx, first_optional, var);
            }
        }
    }

    source.push('$');
    source
}

fn push_variable_unit(
    source: &mut String,
    token_count: usize,
    idx: usize,
    first_optional: Option<usize>,
    var: &VariableToken,
) {
    let separator = var
        .separator
        .map(|sep| regex::escape(sep.encode_utf8(&mut [0; 4])))
        .unwrap_or_default();

    // A lone leading optional keeps its separator mandatory.
    if idx == 0 && first_optional == Some(0) {
        source.push_str(&format!("{separator}(?P<{}>{})?", var.name, var.value_regex));
        return;
    }

    let Some(first) = first_optional.filter(|first| idx >= *first) else {
        source.push_str(&format!("{separator}(?P<{}>{})", var.name, var.value_regex));
        return;
    };

    source.push_str(&format!("(?:{separator}(?P<{}>{})", var.name, var.value_regex));
    if idx == token_count - 1 {
        let unopened = usize::from(first == 0);
        source.push_str(&")?".repeat(token_count - first - unopened));
    }
}
