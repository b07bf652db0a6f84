//! Serverless content map.
//!
//! Every declared serverless pattern of every page maps back to the input
//! file that declared it, so a request router can find what to render:
//!
//! ```json
//! { "/s/:id/": "./src/item.md", "/about/": "./src/about.md" }
//! ```

use rustc_hash::FxHashMap;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use super::RouteEntry;
use crate::log;

/// A pattern declared by more than one input. The first declaration is kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternConflict {
    pub pattern: String,
    pub kept: String,
    pub ignored: String,
}

/// Ordered url pattern -> input path table.
#[derive(Debug, Clone, Default)]
pub struct ContentMap {
    entries: Vec<(String, String)>,
    index: FxHashMap<String, usize>,
    conflicts: Vec<PatternConflict>,
}

impl ContentMap {
    pub fn from_entries<'a>(entries: impl IntoIterator<Item = &'a RouteEntry>) -> Self {
        let mut map = Self::default();
        for entry in entries {
            map.add(entry);
        }
        map
    }

    /// Register all serverless patterns of `entry`, disabled variants skipped.
    pub fn add(&mut self, entry: &RouteEntry) {
        for (_, value) in entry.permalink.serverless_urls().iter() {
            for pattern in value.urls() {
                self.insert(pattern, &entry.input_path);
            }
        }
    }

    fn insert(&mut self, pattern: &str, input_path: &str) {
        if let Some(&pos) = self.index.get(pattern) {
            let kept = &self.entries[pos].1;
            if kept != input_path {
                self.conflicts.push(PatternConflict {
                    pattern: pattern.to_string(),
                    kept: kept.clone(),
                    ignored: input_path.to_string(),
                });
            }
            return;
        }
        self.index.insert(pattern.to_string(), self.entries.len());
        self.entries
            .push((pattern.to_string(), input_path.to_string()));
    }

    pub fn get(&self, pattern: &str) -> Option<&str> {
        self.index
            .get(pattern)
            .map(|&pos| self.entries[pos].1.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(p, i)| (p.as_str(), i.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn conflicts(&self) -> &[PatternConflict] {
        &self.conflicts
    }

    /// Warn about every pattern declared twice.
    pub fn print_conflicts(&self) {
        for conflict in &self.conflicts {
            log!("warning"; "`{}` declared by {} and {}, keeping {}",
                conflict.pattern, conflict.kept, conflict.ignored, conflict.kept);
        }
    }
}

impl Serialize for ContentMap {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (pattern, input) in &self.entries {
            map.serialize_entry(pattern, input)?;
        }
        map.end()
    }
}
