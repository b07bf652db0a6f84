//! Public URL resolution.

use super::Permalink;
use super::error::ResolveError;

/// Suffixes collapsed to `/`, checked in order.
const INDEX_SUFFIXES: [&str; 3] = ["/index.html", "/index", "/index/"];

impl Permalink {
    /// Canonical public URL of the page, `None` when it has none.
    ///
    /// Resolution order:
    /// 1. primary serverless variant (path params substituted when supplied)
    /// 2. no build link: `None`
    /// 3. rooted output path, run through the url transforms, index collapsed
    pub fn to_href(&self) -> Result<Option<String>, ResolveError> {
        if let Some(name) = self.primary_serverless.as_deref() {
            return self.serverless_href(name);
        }

        let Some(output) = self.to_output_path() else {
            return Ok(None);
        };

        let candidate = if output.starts_with('/') {
            output
        } else {
            format!("/{output}")
        };

        let transformed = self.url_transforms().apply(candidate)?;
        Ok(Some(collapse_index(&transformed)))
    }
}

/// Replace a trailing `/index.html`, `/index` or `/index/` with `/`.
///
/// Only the first matching suffix is stripped.
pub fn collapse_index(url: &str) -> String {
    INDEX_SUFFIXES
        .iter()
        .find_map(|suffix| url.strip_suffix(suffix))
        .map_or_else(|| url.to_string(), |prefix| format!("{prefix}/"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::permalink::{PathParams, RawPermalink, UrlTransforms};
    use serde_json::json;

    fn href(link: &str) -> Option<String> {
        Permalink::new(link, None).unwrap().to_href().unwrap()
    }

    fn from_json(value: serde_json::Value) -> Permalink {
        Permalink::new(serde_json::from_value::<RawPermalink>(value).unwrap(), None).unwrap()
    }

    fn with_transform<F>(permalink: Permalink, f: F) -> Permalink
    where
        F: Fn(&str) -> anyhow::Result<Option<String>> + Send + Sync + 'static,
    {
        permalink
            .set_url_transforms(UrlTransforms::builder().push_fn(f).build())
            .unwrap();
        permalink
    }

    /// Strips a two-letter language code: `.es.html` -> `/` or ``.
    fn strip_lang(trailing_slash: bool) -> impl Fn(&str) -> anyhow::Result<Option<String>> {
        let pattern = regex::Regex::new(r"(?i).[a-z]{2}.html$").unwrap();
        move |path| {
            if !pattern.is_match(path) {
                return Ok(None);
            }
            let stem = &path[..path.len() - ".en.html".len()];
            Ok(Some(if trailing_slash {
                format!("{stem}/")
            } else {
                stem.to_string()
            }))
        }
    }

    #[test]
    fn test_collapse_index() {
        assert_eq!(collapse_index("/a/index.html"), "/a/");
        assert_eq!(collapse_index("/a/index"), "/a/");
        assert_eq!(collapse_index("/a/index/"), "/a/");
        assert_eq!(collapse_index("/index.html"), "/");
        assert_eq!(collapse_index("/a/testindex.html"), "/a/testindex.html");
        assert_eq!(collapse_index("/a/index.htm"), "/a/index.htm");
        // only one rule fires
        assert_eq!(collapse_index("/index/index.html"), "/index/");
    }

    #[test]
    fn test_simple_href() {
        assert_eq!(
            href("permalinksubfolder/test.html").as_deref(),
            Some("/permalinksubfolder/test.html")
        );
        assert_eq!(
            href("./permalinksubfolder/test.html").as_deref(),
            Some("/permalinksubfolder/test.html")
        );
        assert_eq!(href("./testindex.html").as_deref(), Some("/testindex.html"));
        assert_eq!(
            href("./permalinksubfolder/testindex.html").as_deref(),
            Some("/permalinksubfolder/testindex.html")
        );
    }

    #[test]
    fn test_href_without_filename() {
        for link in ["permalinksubfolder/", "./permalinksubfolder/", "/permalinksubfolder/"] {
            assert_eq!(href(link).as_deref(), Some("/permalinksubfolder/"), "{link}");
        }
    }

    #[test]
    fn test_href_pagination_subdir() {
        let permalink = Permalink::new("permalinksubfolder/test.html", Some("1/")).unwrap();
        assert_eq!(
            permalink.to_href().unwrap().as_deref(),
            Some("/permalinksubfolder/1/test.html")
        );
    }

    #[test]
    fn test_href_no_build_link() {
        assert_eq!(href(""), None);
        assert_eq!(Permalink::new(false, None).unwrap().to_href().unwrap(), None);
        assert_eq!(from_json(json!({})).to_href().unwrap(), None);
        assert_eq!(from_json(json!({ "build": false })).to_href().unwrap(), None);
    }

    #[test]
    fn test_serverless_only() {
        for (key, url) in [
            ("serverless", "permalinksubfolder/test.html"),
            ("request", "/url/"),
            ("rando", "/url/"),
        ] {
            let permalink = from_json(json!({ key: url }));
            assert_eq!(permalink.to_output_path(), None);
            assert_eq!(permalink.to_href().unwrap().as_deref(), Some(url));
        }
    }

    #[test]
    fn test_first_declared_variant_picks_href() {
        let permalink = from_json(json!({ "serverless": "/serverless/", "build": "/url/" }));
        assert_eq!(permalink.to_output_path().as_deref(), Some("/url/index.html"));
        assert_eq!(permalink.to_href().unwrap().as_deref(), Some("/serverless/"));

        let permalink = from_json(json!({ "build": "/url/", "serverless": "/serverless/" }));
        assert_eq!(permalink.to_output_path().as_deref(), Some("/url/index.html"));
        assert_eq!(permalink.to_href().unwrap().as_deref(), Some("/url/"));
    }

    #[test]
    fn test_disabled_variant_falls_back_to_build() {
        let permalink = from_json(json!({ "serverless": false, "build": "/url/" }));
        assert_eq!(permalink.to_href().unwrap().as_deref(), Some("/url/"));

        let permalink = from_json(json!({ "off": false, "on": "/on/", "build": "/b/" }));
        assert_eq!(permalink.to_href().unwrap().as_deref(), Some("/b/"));
    }

    #[test]
    fn test_serverless_path_params() {
        let permalink = from_json(json!({ "serverless": "/serverless/:test/" }));
        permalink
            .set_serverless_path_data(PathParams::from_iter([(
                "test".to_string(),
                "yeearg".to_string(),
            )]))
            .unwrap();
        assert_eq!(permalink.to_href().unwrap().as_deref(), Some("/serverless/yeearg/"));
    }

    #[test]
    fn test_serverless_path_params_missing() {
        let permalink = from_json(json!({ "serverless": "/s/:id/" }));
        permalink.set_serverless_path_data(PathParams::default()).unwrap();
        assert!(matches!(
            permalink.to_href(),
            Err(ResolveError::MissingPathParam { .. })
        ));
    }

    #[test]
    fn test_serverless_list() {
        let permalink = from_json(json!({ "serverless": ["/first/", "/second/"] }));
        assert_eq!(permalink.to_href().unwrap().as_deref(), Some("/first/"));

        let permalink = from_json(json!({ "serverless": ["/a/:missing/", "/b/:id/", "/c/"] }));
        permalink
            .set_serverless_path_data(PathParams::from_iter([("id".to_string(), "7".to_string())]))
            .unwrap();
        assert_eq!(permalink.to_href().unwrap().as_deref(), Some("/b/7/"));

        let permalink = from_json(json!({ "serverless": [] }));
        assert_eq!(permalink.to_href().unwrap(), None);
    }

    #[test]
    fn test_serverless_not_transformed() {
        let permalink = with_transform(from_json(json!({ "s": "/s/index.html" })), |_| {
            Ok(Some("/changed/".into()))
        });
        assert_eq!(permalink.to_href().unwrap().as_deref(), Some("/s/index.html"));
    }

    #[test]
    fn test_content_negotiation() {
        let permalink = with_transform(Permalink::new("index.es.html", None).unwrap(), |_| {
            Ok(Some("/".into()))
        });
        assert_eq!(permalink.to_href().unwrap().as_deref(), Some("/"));
        assert_eq!(permalink.to_output_path().as_deref(), Some("index.es.html"));

        let permalink = with_transform(Permalink::generate("", "index.es", None, None, None), |_| {
            Ok(Some("/".into()))
        });
        assert_eq!(permalink.to_href().unwrap().as_deref(), Some("/"));
        assert_eq!(permalink.to_output_path().as_deref(), Some("index.es/index.html"));
    }

    #[test]
    fn test_content_negotiation_subdirectory() {
        let permalink = with_transform(Permalink::new("test/index.es.html", None).unwrap(), |_| {
            Ok(Some("/test/".into()))
        });
        assert_eq!(permalink.to_href().unwrap().as_deref(), Some("/test/"));
        assert_eq!(permalink.to_output_path().as_deref(), Some("test/index.es.html"));

        let permalink = with_transform(
            Permalink::generate("test", "index.es", None, None, None),
            |_| Ok(Some("/test/".into())),
        );
        assert_eq!(permalink.to_href().unwrap().as_deref(), Some("/test/"));
        assert_eq!(permalink.to_output_path().as_deref(), Some("test/index.es/index.html"));
    }

    #[test]
    fn test_transform_skip_via_none() {
        let permalink = with_transform(
            Permalink::generate("permalinksubfolder", "index.es", None, None, None),
            |_| Ok(None),
        );
        assert_eq!(
            permalink.to_href().unwrap().as_deref(),
            Some("/permalinksubfolder/index.es/")
        );
        assert_eq!(
            permalink.to_output_path().as_deref(),
            Some("permalinksubfolder/index.es/index.html")
        );
    }

    #[test]
    fn test_two_transforms() {
        let permalink = Permalink::generate("permalinksubfolder", "index.es", None, None, None);
        permalink
            .set_url_transforms(
                UrlTransforms::builder()
                    .push_fn(|_| Ok(Some("/abc/".into())))
                    .push_fn(|_| Ok(Some("/def/".into())))
                    .build(),
            )
            .unwrap();
        assert_eq!(permalink.to_href().unwrap().as_deref(), Some("/def/"));
    }

    #[test]
    fn test_transform_result_is_collapsed() {
        let permalink = with_transform(
            Permalink::generate("permalinksubfolder", "index.es", None, None, None),
            |_| Ok(Some("/abc/index.html".into())),
        );
        assert_eq!(permalink.to_href().unwrap().as_deref(), Some("/abc/"));
    }

    #[test]
    fn test_transform_sees_rooted_candidate() {
        let permalink = with_transform(Permalink::new("x/index.es/", None).unwrap(), |path| {
            assert_eq!(path, "/x/index.es/index.html");
            Ok(None)
        });
        assert_eq!(permalink.to_href().unwrap().as_deref(), Some("/x/index.es/"));
    }

    #[test]
    fn test_lang_transform_index_file() {
        for (link, slash, expected) in [
            ("index.es.html", true, "/"),
            ("index.es.html", false, "/"),
            ("about.es.html", true, "/about/"),
            ("about.es.html", false, "/about"),
            ("subdir/index.es.html", true, "/subdir/"),
            ("subdir/index.es.html", false, "/subdir/"),
            ("subdir/about.es.html", true, "/subdir/about/"),
            ("subdir/about.es.html", false, "/subdir/about"),
        ] {
            let permalink = with_transform(Permalink::new(link, None).unwrap(), strip_lang(slash));
            assert_eq!(
                permalink.to_href().unwrap().as_deref(),
                Some(expected),
                "{link} (trailing slash: {slash})"
            );
        }
    }

    #[test]
    fn test_transform_error_propagates() {
        let permalink = with_transform(Permalink::new("a/", None).unwrap(), |_| {
            anyhow::bail!("broken transform")
        });
        assert!(matches!(
            permalink.to_href(),
            Err(ResolveError::Transform { index: 0, .. })
        ));
    }
}
