use smallvec::SmallVec;

use crate::types::{ParamEntry, ParamValue};

/// Variable values of a successful match, in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Parameters {
    entries: SmallVec<[ParamEntry; 4]>,
}

impl Parameters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: SmallVec::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.iter().any(|(name, _)| name == key)
    }

    /// `None` when `key` is not a variable of the match; `Some(None)` when it
    /// is an optional variable that was omitted.
    pub fn get(&self, key: &str) -> Option<Option<&str>> {
        self.entries
            .iter()
            .find(|(name, _)| name == key)
            .map(|(_, value)| value.as_deref())
    }

    pub fn value(&self, key: &str) -> Option<&str> {
        self.get(key).flatten()
    }

    /// `default` only applies to keys that are not part of the match.
    pub fn get_or<'a>(&'a self, key: &str, default: &'a str) -> Option<&'a str> {
        self.get(key).unwrap_or(Some(default))
    }

    /// Overwrites an existing entry or appends a new one.
    pub fn set<K, V>(&mut self, key: K, value: Option<V>)
    where
        K: Into<String>,
        V: Into<String>,
    {
        let key = key.into();
        let value: ParamValue = value.map(Into::into);
        match self.entries.iter_mut().find(|(name, _)| *name == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    pub(crate) fn push(&mut self, key: String, value: ParamValue) {
        self.entries.push((key, value));
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.entries
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_deref()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    /// Only the variables that captured a non-empty value.
    pub fn matches(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().filter_map(|(name, value)| {
            value
                .as_deref()
                .filter(|value| !value.is_empty())
                .map(|value| (name.as_str(), value))
        })
    }
}
