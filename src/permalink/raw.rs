//! Raw permalink values as authored in front matter.
//!
//! A permalink is one of:
//!
//! ```text
//! permalink: false                    # skip output
//! permalink: "posts/hello/"           # build link
//! permalink:                          # named variants, declaration order kept
//!   serverless: "/s/:id/"
//!   build: "/b/"
//! ```

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Key of the variant used for on-disk output.
pub const BUILD_KEY: &str = "build";

/// Value of a single permalink variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PermalinkValue {
    Bool(bool),
    Url(String),
    Urls(Vec<String>),
}

impl PermalinkValue {
    /// `false` marks a variant as disabled.
    #[inline]
    pub const fn is_disabled(&self) -> bool {
        matches!(self, Self::Bool(false))
    }

    /// Every URL pattern declared by this value.
    pub fn urls(&self) -> &[String] {
        match self {
            Self::Url(url) => std::slice::from_ref(url),
            Self::Urls(urls) => urls,
            Self::Bool(_) => &[],
        }
    }
}

impl From<&str> for PermalinkValue {
    fn from(s: &str) -> Self {
        Self::Url(s.to_string())
    }
}

impl From<String> for PermalinkValue {
    fn from(s: String) -> Self {
        Self::Url(s)
    }
}

impl From<bool> for PermalinkValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<Vec<String>> for PermalinkValue {
    fn from(urls: Vec<String>) -> Self {
        Self::Urls(urls)
    }
}

impl From<Vec<&str>> for PermalinkValue {
    fn from(urls: Vec<&str>) -> Self {
        Self::Urls(urls.into_iter().map(str::to_string).collect())
    }
}

// ============================================================================
// VariantMap
// ============================================================================

/// Insertion-ordered mapping of variant name to value.
///
/// Lookups are linear; a permalink rarely declares more than a handful of keys.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VariantMap(Vec<(String, PermalinkValue)>);

impl VariantMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a variant. An existing key keeps its position and takes the new value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<PermalinkValue>) {
        let key = key.into();
        let value = value.into();
        match self.0.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => *slot = value,
            None => self.0.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&PermalinkValue> {
        self.0.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Iterate in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &PermalinkValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(k, _)| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Copy of this map without `key`, order of the remaining keys kept.
    pub fn without(&self, key: &str) -> Self {
        Self(self.0.iter().filter(|(k, _)| k != key).cloned().collect())
    }
}

impl<K, V> FromIterator<(K, V)> for VariantMap
where
    K: Into<String>,
    V: Into<PermalinkValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (key, value) in iter {
            map.insert(key, value);
        }
        map
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for VariantMap
where
    K: Into<String>,
    V: Into<PermalinkValue>,
{
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}

impl Serialize for VariantMap {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (key, value) in &self.0 {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for VariantMap {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct VariantMapVisitor;

        impl<'de> Visitor<'de> for VariantMapVisitor {
            type Value = VariantMap;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of permalink variants")
            }

            fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut map = VariantMap::new();
                while let Some((key, value)) = access.next_entry::<String, PermalinkValue>()? {
                    map.insert(key, value);
                }
                Ok(map)
            }
        }

        deserializer.deserialize_map(VariantMapVisitor)
    }
}

// ============================================================================
// RawPermalink
// ============================================================================

/// Permalink value before interpretation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawPermalink {
    Bool(bool),
    Path(String),
    Map(VariantMap),
}

impl From<bool> for RawPermalink {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<&str> for RawPermalink {
    fn from(s: &str) -> Self {
        Self::Path(s.to_string())
    }
}

impl From<String> for RawPermalink {
    fn from(s: String) -> Self {
        Self::Path(s)
    }
}

impl From<VariantMap> for RawPermalink {
    fn from(map: VariantMap) -> Self {
        Self::Map(map)
    }
}
