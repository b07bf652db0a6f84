//! Permalink resolution for a single rendered page.
//!
//! # Module Structure
//!
//! ```text
//! permalink/
//! ├── raw          # RawPermalink, PermalinkValue, VariantMap
//! ├── parse        # Permalink::new
//! ├── generate     # Permalink::generate (conventional build links)
//! ├── output       # to_output_path, to_path, to_path_from_root
//! ├── href         # to_href, index collapsing
//! ├── transform    # UrlTransforms pipeline
//! ├── serverless   # serverless variants, :param substitution
//! ├── factory      # PermalinkFactory (shared transforms)
//! └── error        # ConfigurationError, ResolveError
//! ```
//!
//! # Example
//!
//! ```
//! use tola_permalink::Permalink;
//!
//! let permalink = Permalink::generate(".", "test", Some("1/"), None, None);
//! assert_eq!(permalink.to_output_path().as_deref(), Some("test/1/index.html"));
//! assert_eq!(permalink.to_href().unwrap().as_deref(), Some("/test/1/"));
//! ```

mod error;
mod factory;
mod generate;
mod href;
mod output;
mod parse;
mod raw;
mod serverless;
mod transform;

use std::sync::OnceLock;

pub use error::{ConfigurationError, ResolveError};
pub use factory::PermalinkFactory;
pub use href::collapse_index;
pub use output::DEFAULT_FILENAME;
pub use raw::{BUILD_KEY, PermalinkValue, RawPermalink, VariantMap};
pub use serverless::{PathParams, compile_pattern};
pub use transform::{RegexTransform, UrlTransform, UrlTransforms, UrlTransformsBuilder};

/// Resolved permalink of one page (or one pagination entry).
///
/// Immutable once built, except for the url transforms and serverless path
/// data. Each of those can be set once, and is frozen the first time
/// `to_href` reads it.
#[derive(Debug, Clone)]
pub struct Permalink {
    build_link: Option<String>,
    write_to_file_system: bool,
    is_rendered: bool,
    serverless_urls: VariantMap,
    primary_serverless: Option<String>,
    extra_pagination_subdir: String,
    url_transforms: OnceLock<UrlTransforms>,
    serverless_path_data: OnceLock<Option<PathParams>>,
}

impl Permalink {
    /// Path template used for on-disk output.
    #[inline]
    pub fn build_link(&self) -> Option<&str> {
        self.build_link.as_deref()
    }

    #[inline]
    pub const fn write_to_file_system(&self) -> bool {
        self.write_to_file_system
    }

    /// `false` only for a variant map without a `build` key.
    #[inline]
    pub const fn is_rendered(&self) -> bool {
        self.is_rendered
    }

    /// First enabled non-build variant in declaration order.
    #[inline]
    pub fn primary_serverless_name(&self) -> Option<&str> {
        self.primary_serverless.as_deref()
    }

    #[inline]
    pub fn extra_pagination_subdir(&self) -> &str {
        &self.extra_pagination_subdir
    }

    pub fn set_url_transforms(&self, transforms: UrlTransforms) -> Result<(), ConfigurationError> {
        self.url_transforms
            .set(transforms)
            .map_err(|_| ConfigurationError::AlreadyConfigured("url transforms"))
    }

    pub fn set_serverless_path_data(&self, data: PathParams) -> Result<(), ConfigurationError> {
        self.serverless_path_data
            .set(Some(data))
            .map_err(|_| ConfigurationError::AlreadyConfigured("serverless path data"))
    }

    /// Consuming variant of `set_url_transforms` for freshly built permalinks.
    pub(crate) fn with_url_transforms(mut self, transforms: UrlTransforms) -> Self {
        self.url_transforms = OnceLock::from(transforms);
        self
    }

    pub(crate) fn url_transforms(&self) -> &UrlTransforms {
        self.url_transforms.get_or_init(UrlTransforms::default)
    }

    pub(crate) fn serverless_path_data(&self) -> Option<&PathParams> {
        self.serverless_path_data.get_or_init(|| None).as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw(value: serde_json::Value) -> RawPermalink {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Permalink>();
    }

    #[test]
    fn test_set_transforms_once() {
        let permalink = Permalink::new("a.html", None).unwrap();
        permalink.set_url_transforms(UrlTransforms::default()).unwrap();
        assert!(matches!(
            permalink.set_url_transforms(UrlTransforms::default()),
            Err(ConfigurationError::AlreadyConfigured(_))
        ));
    }

    #[test]
    fn test_transforms_frozen_after_href() {
        let permalink = Permalink::new("a.html", None).unwrap();
        assert_eq!(permalink.to_href().unwrap().as_deref(), Some("/a.html"));

        let late = UrlTransforms::builder()
            .push_fn(|_| Ok(Some("/late/".into())))
            .build();
        assert!(permalink.set_url_transforms(late).is_err());
        assert_eq!(permalink.to_href().unwrap().as_deref(), Some("/a.html"));
    }

    #[test]
    fn test_path_data_frozen_after_href() {
        let permalink = Permalink::new(raw(json!({ "serverless": "/s/:id/" })), None).unwrap();
        assert_eq!(permalink.to_href().unwrap().as_deref(), Some("/s/:id/"));

        let data = PathParams::from_iter([("id".to_string(), "42".to_string())]);
        assert!(permalink.set_serverless_path_data(data).is_err());
    }

    #[test]
    fn test_idempotent_resolution() {
        let permalink = Permalink::generate("posts", "hello", Some("2/"), None, None);
        let transforms = UrlTransforms::builder()
            .push_fn(|path| Ok(Some(path.replace("/posts/", "/blog/"))))
            .build();
        permalink.set_url_transforms(transforms).unwrap();

        let first = (permalink.to_output_path(), permalink.to_href().unwrap());
        let second = (permalink.to_output_path(), permalink.to_href().unwrap());
        assert_eq!(first, second);
        assert_eq!(first.1.as_deref(), Some("/blog/hello/2/"));
        assert_eq!(first.0.as_deref(), Some("posts/hello/2/index.html"));
    }
}
