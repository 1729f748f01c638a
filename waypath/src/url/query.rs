//! Query parameter maps.

use std::collections::btree_map::{self, BTreeMap};
use std::fmt;

use serde::{Deserialize, Serialize};

use super::encoding::{decode_component, encode_component};

/// The value of one query key: a single string or several.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum QueryValue {
    /// `?key=value`
    Single(String),
    /// `?key=a&key=b`
    Multiple(Vec<String>),
}

impl QueryValue {
    /// All values in order.
    #[must_use]
    pub fn values(&self) -> Vec<&str> {
        match self {
            Self::Single(value) => vec![value.as_str()],
            Self::Multiple(values) => values.iter().map(String::as_str).collect(),
        }
    }

    /// The first value, if any.
    #[must_use]
    pub fn first(&self) -> Option<&str> {
        match self {
            Self::Single(value) => Some(value.as_str()),
            Self::Multiple(values) => values.first().map(String::as_str),
        }
    }

    /// Add another value for the same key, promoting a single value to a
    /// list.
    fn push(&mut self, value: String) {
        match self {
            Self::Single(first) => {
                let first = std::mem::take(first);
                *self = Self::Multiple(vec![first, value]);
            }
            Self::Multiple(values) => values.push(value),
        }
    }
}

impl From<&str> for QueryValue {
    fn from(value: &str) -> Self {
        Self::Single(value.to_owned())
    }
}

impl From<String> for QueryValue {
    fn from(value: String) -> Self {
        Self::Single(value)
    }
}

impl From<Vec<String>> for QueryValue {
    fn from(values: Vec<String>) -> Self {
        Self::Multiple(values)
    }
}

impl From<Vec<&str>> for QueryValue {
    fn from(values: Vec<&str>) -> Self {
        Self::Multiple(values.into_iter().map(str::to_owned).collect())
    }
}

impl<const N: usize> From<[&str; N]> for QueryValue {
    fn from(values: [&str; N]) -> Self {
        Self::Multiple(values.iter().map(|value| (*value).to_owned()).collect())
    }
}

/// Decoded query parameters.
///
/// Keys are kept sorted so serialization is deterministic. The absence of a
/// query is modelled by `Option<Query>` on the URL types; an empty `Query`
/// is a bare `?`.
///
/// # Examples
///
/// ```
/// use waypath::url::{Query, QueryValue};
///
/// let query = Query::parse("b=x&a=1&b=y");
/// assert_eq!(query.get("a"), Some(&QueryValue::from("1")));
/// assert_eq!(query.get("b"), Some(&QueryValue::from(["x", "y"])));
/// assert_eq!(query.to_string(), "a=1&b=x&b=y");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Query {
    params: BTreeMap<String, QueryValue>,
}

impl Query {
    /// An empty query.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse an encoded query string, without its leading `?`.
    ///
    /// Pairs split on `&` and then on the first `=`. Keys and values are
    /// percent-decoded; `+` stays a literal plus. Empty pairs are skipped
    /// and a pair without `=` gets an empty value. Repeated keys accumulate.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let mut query = Self::new();
        for pair in raw.split('&').filter(|pair| !pair.is_empty()) {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            query.append(decode_component(key), decode_component(value));
        }
        query
    }

    /// Add a value, accumulating with any existing value for the key.
    pub fn append(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let value = value.into();
        match self.params.entry(key.into()) {
            btree_map::Entry::Vacant(entry) => {
                entry.insert(QueryValue::Single(value));
            }
            btree_map::Entry::Occupied(mut entry) => entry.get_mut().push(value),
        }
    }

    /// Set a key, replacing any existing value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<QueryValue>) {
        self.params.insert(key.into(), value.into());
    }

    /// Remove a key.
    pub fn remove(&mut self, key: &str) -> Option<QueryValue> {
        self.params.remove(key)
    }

    /// Look up a key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&QueryValue> {
        self.params.get(key)
    }

    /// Whether the key is present.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.params.contains_key(key)
    }

    /// Number of distinct keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.params.len()
    }

    /// Whether there are no keys.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Iterate keys in sorted order.
    pub fn iter(&self) -> btree_map::Iter<'_, String, QueryValue> {
        self.params.iter()
    }

    /// Overwrite keys with those from `other`.
    ///
    /// A colliding key takes `other`'s value wholesale: a single value
    /// replaces a list and a list replaces a single value. Nothing is
    /// appended.
    ///
    /// # Examples
    ///
    /// ```
    /// use waypath::url::Query;
    ///
    /// let base = Query::parse("a=1&b=x");
    /// let merged = base.merge(&Query::from([("b", ["y", "z"])]));
    /// assert_eq!(merged.to_string(), "a=1&b=y&b=z");
    /// ```
    #[must_use]
    pub fn merge(&self, other: &Query) -> Self {
        let mut merged = self.clone();
        for (key, value) in other.iter() {
            merged.params.insert(key.clone(), value.clone());
        }
        merged
    }
}

impl fmt::Display for Query {
    /// Encoded `k=v` pairs joined by `&`, without a leading `?`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (key, value) in &self.params {
            let key = encode_component(key);
            for value in value.values() {
                if !first {
                    f.write_str("&")?;
                }
                first = false;
                write!(f, "{key}={}", encode_component(value))?;
            }
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a Query {
    type Item = (&'a String, &'a QueryValue);
    type IntoIter = btree_map::Iter<'a, String, QueryValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.params.iter()
    }
}

impl<K, V> FromIterator<(K, V)> for Query
where
    K: Into<String>,
    V: Into<QueryValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            params: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for Query
where
    K: Into<String>,
    V: Into<QueryValue>,
{
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}

impl From<BTreeMap<String, QueryValue>> for Query {
    fn from(params: BTreeMap<String, QueryValue>) -> Self {
        Self { params }
    }
}
