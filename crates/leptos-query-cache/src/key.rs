//! Query keys and invalidation filters.

use std::fmt;

/// Ordered tuple of string segments identifying a cached query
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct QueryKey(Vec<String>);

impl QueryKey {
    pub fn new<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(segments.into_iter().map(Into::into).collect())
    }

    pub fn segments(&self) -> &[String] {
        &self.0
    }

    /// True when `prefix` segments equal the leading segments of this key
    pub fn starts_with(&self, prefix: &QueryKey) -> bool {
        self.0.starts_with(&prefix.0)
    }
}

impl fmt::Display for QueryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.0.join(", "))
    }
}

impl<const N: usize> From<[&str; N]> for QueryKey {
    fn from(segments: [&str; N]) -> Self {
        Self::new(segments)
    }
}

/// Selects cache entries for invalidation
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QueryFilter {
    key: QueryKey,
    exact: bool,
}

impl QueryFilter {
    /// Every key that starts with `key`
    pub fn prefix(key: impl Into<QueryKey>) -> Self {
        Self { key: key.into(), exact: false }
    }

    /// Only `key` itself
    pub fn exact(key: impl Into<QueryKey>) -> Self {
        Self { key: key.into(), exact: true }
    }

    pub fn matches(&self, key: &QueryKey) -> bool {
        if self.exact {
            *key == self.key
        } else {
            key.starts_with(&self.key)
        }
    }
}
