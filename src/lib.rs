//! Permalink resolution for static site builds.
//!
//! Turns a page's permalink (as authored in front matter, or generated from
//! its file name) into the on-disk output path and the public URL.
//!
//! ```
//! use tola_permalink::{Permalink, RawPermalink};
//!
//! let raw: RawPermalink = serde_json::from_str(r#"{"serverless": "/s/", "build": "/b/"}"#).unwrap();
//! let permalink = Permalink::new(raw, None).unwrap();
//! assert_eq!(permalink.to_output_path().as_deref(), Some("/b/index.html"));
//! assert_eq!(permalink.to_href().unwrap().as_deref(), Some("/s/"));
//! ```

pub mod config;
pub mod logger;
pub mod permalink;
pub mod routes;
pub mod utils;

pub use permalink::{
    ConfigurationError, PathParams, Permalink, PermalinkFactory, PermalinkValue, RawPermalink,
    ResolveError, UrlTransform, UrlTransforms, VariantMap,
};
