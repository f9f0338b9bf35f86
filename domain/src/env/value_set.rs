//! Environment value set (Value Object)

use std::collections::BTreeMap;

/// Key/value pairs produced by an external provisioning tool
///
/// The set is read-only to the materializer and re-queried on every run.
/// When the same key is offered more than once, the first value is kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvValueSet {
    values: BTreeMap<String, String>,
}

impl EnvValueSet {
    /// Create an empty value set
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value unless the key is already present
    ///
    /// Returns `true` if the value was stored.
    pub fn insert_first(&mut self, key: impl Into<String>, value: impl Into<String>) -> bool {
        let key = key.into();
        if self.values.contains_key(&key) {
            return false;
        }
        self.values.insert(key, value.into());
        true
    }

    /// Look up a value by exact key
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Check whether a key is present
    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for EnvValueSet
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut set = Self::new();
        for (key, value) in iter {
            set.insert_first(key, value);
        }
        set
    }
}
