//! Configuration for `permalink.toml`.
//!
//! # Sections
//!
//! | Section          | Purpose                                        |
//! |------------------|------------------------------------------------|
//! | `[build]`        | Output directory used by `to_path`             |
//! | `[[transforms]]` | Ordered regex url transforms, shared by pages  |
//!
//! ```toml
//! [build]
//! output = "_site"
//!
//! [[transforms]]
//! pattern = '\.[a-z]{2}\.html$'
//! replace = "/"
//! ```

mod error;
mod util;

pub use error::ConfigError;
pub use util::find_config_file;

use std::{
    fs,
    path::{Path, PathBuf},
};

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::log;
use crate::permalink::{RegexTransform, UrlTransforms};

/// Default config file name.
pub const CONFIG_FILE: &str = "permalink.toml";

/// Root configuration structure representing permalink.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PermalinkConfig {
    /// Absolute path to the config file (internal use only)
    #[serde(skip)]
    pub config_path: Option<PathBuf>,

    pub build: BuildConfig,

    /// Url transforms, applied in declaration order.
    pub transforms: Vec<TransformConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildConfig {
    /// Output directory the output paths are joined onto.
    pub output: PathBuf,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            output: PathBuf::from("_site"),
        }
    }
}

/// A regex rewrite of the candidate href.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TransformConfig {
    pub pattern: String,
    #[serde(default)]
    pub replace: String,
}

impl PermalinkConfig {
    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        let (config, ignored) = Self::parse_with_ignored(content)?;
        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored);
        }
        Ok(config)
    }

    /// Load `path`, searching upward from cwd for relative paths.
    ///
    /// A missing file yields the defaults unless `required` is set.
    pub fn load(path: &Path, required: bool) -> Result<Self, ConfigError> {
        let Some(found) = find_config_file(path) else {
            if required {
                return Err(ConfigError::Io(
                    path.to_path_buf(),
                    std::io::Error::from(std::io::ErrorKind::NotFound),
                ));
            }
            return Ok(Self::default());
        };

        let content =
            fs::read_to_string(&found).map_err(|err| ConfigError::Io(found.clone(), err))?;
        let mut config = Self::from_str(&content)?;
        crate::debug!("config"; "loaded {}", found.display());
        config.config_path = Some(found);
        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    fn print_unknown_fields_warning(fields: &[String]) {
        log!("warning"; "unknown fields in config, ignoring:");
        for field in fields {
            eprintln!("- {}", field);
        }
    }

    /// Compile the configured transforms into the shared list.
    pub fn url_transforms(&self) -> Result<UrlTransforms, ConfigError> {
        let mut builder = UrlTransforms::builder();
        for transform in &self.transforms {
            let pattern = Regex::new(&transform.pattern).map_err(|source| ConfigError::Regex {
                pattern: transform.pattern.clone(),
                source,
            })?;
            builder = builder.push(RegexTransform::new(pattern, transform.replace.clone()));
        }
        Ok(builder.build())
    }
}
