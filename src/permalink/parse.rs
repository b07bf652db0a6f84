//! Interpreting a raw permalink value.

use std::sync::OnceLock;

use super::Permalink;
use super::error::ConfigurationError;
use super::raw::{BUILD_KEY, PermalinkValue, RawPermalink, VariantMap};
use crate::debug;

impl Permalink {
    /// Resolve `raw` into a permalink.
    ///
    /// `extra_subdir` is the pagination subdirectory (`"1/"`, `"2/"`, ...)
    /// inserted before the output filename.
    ///
    /// # Errors
    ///
    /// `true` at the top level or under `build` is rejected, as is `true`
    /// for any other variant.
    pub fn new(
        raw: impl Into<RawPermalink>,
        extra_subdir: Option<&str>,
    ) -> Result<Self, ConfigurationError> {
        match raw.into() {
            RawPermalink::Bool(true) => Err(ConfigurationError::TopLevelTrue),
            RawPermalink::Bool(false) => Ok(Self::from_build_link(None, extra_subdir)),
            RawPermalink::Path(link) => Ok(Self::from_build_link(Some(link), extra_subdir)),
            RawPermalink::Map(map) => Self::from_variants(&map, extra_subdir),
        }
    }

    /// Permalink with only a build link. Empty links count as absent.
    pub(super) fn from_build_link(link: Option<String>, extra_subdir: Option<&str>) -> Self {
        let build_link = link.filter(|link| !link.is_empty());
        Self {
            write_to_file_system: build_link.is_some(),
            build_link,
            is_rendered: true,
            serverless_urls: VariantMap::new(),
            primary_serverless: None,
            extra_pagination_subdir: extra_subdir.unwrap_or_default().to_string(),
            url_transforms: OnceLock::new(),
            serverless_path_data: OnceLock::new(),
        }
    }

    fn from_variants(map: &VariantMap, extra_subdir: Option<&str>) -> Result<Self, ConfigurationError> {
        // A list under `build` names no single output file.
        let build_link = match map.get(BUILD_KEY) {
            Some(PermalinkValue::Bool(true)) => return Err(ConfigurationError::BuildTrue),
            Some(PermalinkValue::Url(link)) => Some(link.clone()),
            None | Some(PermalinkValue::Bool(false) | PermalinkValue::Urls(_)) => None,
        };

        if let Some((key, _)) = map
            .iter()
            .find(|(key, value)| *key != BUILD_KEY && **value == PermalinkValue::Bool(true))
        {
            return Err(ConfigurationError::VariantTrue(key.to_string()));
        }

        let mut permalink = Self::from_build_link(build_link, extra_subdir);
        // Only the first declared key can be the primary variant.
        permalink.primary_serverless = map
            .iter()
            .next()
            .filter(|(key, value)| *key != BUILD_KEY && !value.is_disabled())
            .map(|(key, _)| key.to_string());
        permalink.serverless_urls = map.without(BUILD_KEY);

        if !map.contains_key(BUILD_KEY) {
            permalink.write_to_file_system = false;
            permalink.is_rendered = false;
        }

        if let Some(name) = &permalink.primary_serverless {
            debug!("permalink"; "primary serverless variant: {name}");
        }

        Ok(permalink)
    }
}
