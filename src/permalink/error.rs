//! Permalink error types.

use thiserror::Error;

/// Invalid permalink input or setup, raised before any path is computed.
#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error("`permalink: true` is not a supported feature. Did you mean `permalink: false`?")]
    TopLevelTrue,

    #[error(
        "`permalink: build: true` is not a supported feature. Did you mean `permalink: build: false`?"
    )]
    BuildTrue,

    #[error("`permalink: {0}: true` is not a supported feature. Use a url pattern or `false`")]
    VariantTrue(String),

    #[error("{0} already configured for this permalink")]
    AlreadyConfigured(&'static str),
}

/// Failure while computing a public URL.
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("missing value for path parameter `:{param}` in `{pattern}`")]
    MissingPathParam { pattern: String, param: String },

    #[error("url transform #{index} failed")]
    Transform {
        index: usize,
        #[source]
        source: anyhow::Error,
    },
}
