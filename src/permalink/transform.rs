//! URL transform pipeline.
//!
//! Transforms rewrite a candidate href before index collapsing. Each one
//! returns `Some(replacement)` or `None` to leave the running value alone:
//!
//! ```text
//! "/x/index.es/index.html" ─▶ t0: None ─▶ t1: Some("/abc/index.html") ─▶ "/abc/index.html"
//! ```
//!
//! Every registered transform runs exactly once, in registration order.

use std::fmt;
use std::sync::Arc;

use anyhow::Result;
use regex::Regex;

use super::error::ResolveError;
use crate::debug;

/// A pure rewrite applied to a candidate href.
pub trait UrlTransform: Send + Sync {
    fn transform(&self, output_path: &str) -> Result<Option<String>>;
}

struct FnTransform<F>(F);

impl<F> UrlTransform for FnTransform<F>
where
    F: Fn(&str) -> Result<Option<String>> + Send + Sync,
{
    fn transform(&self, output_path: &str) -> Result<Option<String>> {
        (self.0)(output_path)
    }
}

/// Shared, read-only transform list.
///
/// Cloning is cheap; one list is built per site and handed to every permalink.
#[derive(Clone, Default)]
pub struct UrlTransforms(Arc<[Box<dyn UrlTransform>]>);

impl UrlTransforms {
    pub fn builder() -> UrlTransformsBuilder {
        UrlTransformsBuilder::default()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Fold all transforms over `candidate`.
    pub fn apply(&self, candidate: String) -> Result<String, ResolveError> {
        self.0
            .iter()
            .enumerate()
            .try_fold(candidate, |current, (index, transform)| {
                match transform
                    .transform(&current)
                    .map_err(|source| ResolveError::Transform { index, source })?
                {
                    Some(next) => {
                        debug!("transform"; "#{index}: {current} -> {next}");
                        Ok(next)
                    }
                    None => Ok(current),
                }
            })
    }
}

impl fmt::Debug for UrlTransforms {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("UrlTransforms").field(&self.0.len()).finish()
    }
}

#[derive(Default)]
pub struct UrlTransformsBuilder {
    list: Vec<Box<dyn UrlTransform>>,
}

impl UrlTransformsBuilder {
    pub fn push<T: UrlTransform + 'static>(mut self, transform: T) -> Self {
        self.list.push(Box::new(transform));
        self
    }

    pub fn push_fn<F>(self, f: F) -> Self
    where
        F: Fn(&str) -> Result<Option<String>> + Send + Sync + 'static,
    {
        self.push(FnTransform(f))
    }

    pub fn build(self) -> UrlTransforms {
        UrlTransforms(self.list.into())
    }
}

// ============================================================================
// Regex transform
// ============================================================================

/// Replace every match of `pattern`; no-op when the candidate doesn't match.
#[derive(Debug, Clone)]
pub struct RegexTransform {
    pattern: Regex,
    replace: String,
}

impl RegexTransform {
    pub fn new(pattern: Regex, replace: impl Into<String>) -> Self {
        Self {
            pattern,
            replace: replace.into(),
        }
    }
}

impl UrlTransform for RegexTransform {
    fn transform(&self, output_path: &str) -> Result<Option<String>> {
        if !self.pattern.is_match(output_path) {
            return Ok(None);
        }
        Ok(Some(
            self.pattern
                .replace_all(output_path, self.replace.as_str())
                .into_owned(),
        ))
    }
}
