/// Value expression for variables marked "match anything".
pub const ANYTHING_VALUE_REGEX: &str = ".*";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    Literal(String),
    Variable(VariableToken),
}

impl Token {
    pub fn as_variable(&self) -> Option<&VariableToken> {
        match self {
            Token::Variable(var) => Some(var),
            Token::Literal(_) => None,
        }
    }

    pub fn is_optional_variable(&self) -> bool {
        matches!(self, Token::Variable(var) if var.optional)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariableToken {
    /// Separator detached from the preceding literal, swallowed when the
    /// variable is omitted.
    pub separator: Option<char>,
    pub value_regex: String,
    pub name: String,
    pub optional: bool,
}

impl VariableToken {
    pub fn is_anything(&self) -> bool {
        self.value_regex == ANYTHING_VALUE_REGEX
    }
}

/// Rebuilds the textual pattern the tokens were produced from.
pub fn render_tokens(tokens: &[Token]) -> String {
    let mut output = String::new();
    for token in tokens {
        match token {
            Token::Literal(text) => output.push_str(text),
            Token::Variable(var) => {
                if let Some(sep) = var.separator {
                    output.push(sep);
                }
                output.push('{');
                output.push_str(&var.name);
                if var.optional {
                    output.push('?');
                }
                output.push('}');
            }
        }
    }
    output
}
