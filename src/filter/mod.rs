mod email;
mod error;
mod ip;
mod rule;

pub use email::is_valid_email;
pub use error::{FilterError, FilterResult};
pub use ip::{is_special_v4, is_special_v6, is_valid_ip};
pub use rule::{AlphaCase, FilterRule, RegexFilter, check};

use hashbrown::HashMap;
use smallvec::SmallVec;

pub type RuleList = SmallVec<[FilterRule; 2]>;

/// Filter rules keyed by variable name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSet {
    rules: HashMap<String, RuleList>,
}

impl FilterSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, key: &str, rule: FilterRule) -> FilterResult<()> {
        if key.is_empty() {
            return Err(FilterError::EmptyKey);
        }
        self.rules.entry(key.to_string()).or_default().push(rule);
        Ok(())
    }

    pub fn rules(&self, key: &str) -> &[FilterRule] {
        self.rules.get(key).map(|rules| rules.as_slice()).unwrap_or(&[])
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Any rule passing accepts the value; a key without rules accepts everything.
    pub fn accepts(&self, key: &str, value: &str, case_sensitive: bool) -> bool {
        let rules = self.rules(key);
        rules.is_empty() || rules.iter().any(|rule| rule.check(value, case_sensitive))
    }
}
