//! Serverless variants and path parameter substitution.
//!
//! Patterns use named segments:
//!
//! ```text
//! /s/:id/          required, `{id: "42"}` -> /s/42/
//! /tags/:tag?/     optional, `{}`         -> /tags/
//! ```
//!
//! Values are percent-encoded the way `encodeURIComponent` does.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use rustc_hash::FxHashMap;

use super::Permalink;
use super::error::ResolveError;
use super::raw::{PermalinkValue, VariantMap};

/// Path parameter values supplied for a request.
pub type PathParams = FxHashMap<String, String>;

/// Characters left unescaped by `encodeURIComponent`.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

impl Permalink {
    /// Every declared non-build variant, for route table construction.
    #[inline]
    pub fn serverless_urls(&self) -> &VariantMap {
        &self.serverless_urls
    }

    /// Href of the primary serverless variant.
    pub(super) fn serverless_href(&self, name: &str) -> Result<Option<String>, ResolveError> {
        let Some(value) = self.serverless_urls.get(name) else {
            return Ok(None);
        };

        let Some(params) = self.serverless_path_data() else {
            return Ok(match value {
                PermalinkValue::Url(url) => Some(url.clone()),
                PermalinkValue::Urls(urls) => urls.first().cloned(),
                PermalinkValue::Bool(_) => None,
            });
        };

        match value {
            PermalinkValue::Url(pattern) => compile_pattern(pattern, params).map(Some),
            // Patterns the params don't satisfy are skipped.
            PermalinkValue::Urls(patterns) => Ok(patterns
                .iter()
                .find_map(|pattern| compile_pattern(pattern, params).ok())),
            PermalinkValue::Bool(_) => Ok(None),
        }
    }
}

/// Substitute `:name` segments in `pattern` with values from `params`.
pub fn compile_pattern(pattern: &str, params: &PathParams) -> Result<String, ResolveError> {
    let mut out = String::with_capacity(pattern.len());
    let mut rest = pattern;

    while let Some(pos) = rest.find(':') {
        out.push_str(&rest[..pos]);
        let after = &rest[pos + 1..];
        let name_len = after
            .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
            .unwrap_or(after.len());

        if name_len == 0 {
            out.push(':');
            rest = after;
            continue;
        }

        let name = &after[..name_len];
        let optional = after[name_len..].starts_with('?');
        rest = &after[name_len + usize::from(optional)..];

        match params.get(name).filter(|value| !value.is_empty()) {
            Some(value) => out.extend(utf8_percent_encode(value, COMPONENT)),
            None if optional => {
                // The segment's leading slash goes with it.
                if out.ends_with('/') {
                    out.pop();
                }
            }
            None => {
                return Err(ResolveError::MissingPathParam {
                    pattern: pattern.to_string(),
                    param: name.to_string(),
                });
            }
        }
    }

    out.push_str(rest);
    Ok(out)
}
