//! Query parameter list.

use std::fmt::Display;

/// Ordered query parameters for a request.
///
/// Absent values are skipped rather than sent empty, so optional API
/// arguments can be passed straight through. Booleans render as `true` and
/// `false`.
///
/// # Example
///
/// ```
/// use wazuh_client::Params;
///
/// let params = Params::new()
///     .with("pretty", true)
///     .with_opt("agents_list", None::<&str>);
/// assert_eq!(params.get("pretty"), Some("true"));
/// assert_eq!(params.len(), 1);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Params(Vec<(String, String)>);

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a parameter.
    pub fn with(mut self, key: impl Into<String>, value: impl Display) -> Self {
        self.insert(key, value);
        self
    }

    /// Appends a parameter if a value is present.
    pub fn with_opt<V: Display>(mut self, key: impl Into<String>, value: Option<V>) -> Self {
        if let Some(value) = value {
            self.insert(key, value);
        }
        self
    }

    /// Sets a parameter, replacing any earlier value for the same key.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Display) {
        let key = key.into();
        let value = value.to_string();
        match self.0.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.0.push((key, value)),
        }
    }

    /// Returns the value for a key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub(crate) fn as_pairs(&self) -> &[(String, String)] {
        &self.0
    }
}

impl<K: Into<String>, V: Display> FromIterator<(K, V)> for Params {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Params::new();
        for (k, v) in iter {
            params.insert(k, v);
        }
        params
    }
}
