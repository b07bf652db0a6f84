//! Permalinks sharing one site-wide transform list.

use super::error::ConfigurationError;
use super::raw::RawPermalink;
use super::transform::UrlTransforms;
use super::Permalink;

/// Builds permalinks that all carry the same `UrlTransforms`.
///
/// ```
/// use tola_permalink::{PermalinkFactory, UrlTransforms};
///
/// let transforms = UrlTransforms::builder()
///     .push_fn(|path| Ok(Some(path.replace(".es", ""))))
///     .build();
/// let factory = PermalinkFactory::new(transforms);
///
/// let permalink = factory.generate("", "about.es", None, None, None);
/// assert_eq!(permalink.to_href().unwrap().as_deref(), Some("/about/"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct PermalinkFactory {
    transforms: UrlTransforms,
}

impl PermalinkFactory {
    pub fn new(transforms: UrlTransforms) -> Self {
        Self { transforms }
    }

    pub fn transforms(&self) -> &UrlTransforms {
        &self.transforms
    }

    /// See [`Permalink::new`].
    pub fn create(
        &self,
        raw: impl Into<RawPermalink>,
        extra_subdir: Option<&str>,
    ) -> Result<Permalink, ConfigurationError> {
        Permalink::new(raw, extra_subdir).map(|p| p.with_url_transforms(self.transforms.clone()))
    }

    /// See [`Permalink::generate`].
    pub fn generate(
        &self,
        dir: &str,
        filename_no_ext: &str,
        extra_subdir: Option<&str>,
        suffix: Option<&str>,
        file_extension: Option<&str>,
    ) -> Permalink {
        Permalink::generate(dir, filename_no_ext, extra_subdir, suffix, file_extension)
            .with_url_transforms(self.transforms.clone())
    }
}
