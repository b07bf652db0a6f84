//! `routes` command.
//!
//! Resolves a batch of pages in parallel and prints the serverless content
//! map along with each page's output path and href.

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result, bail};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tola_permalink::config::PermalinkConfig;
use tola_permalink::routes::{
    ContentMap, RouteEntry, detect_output_conflicts, print_output_conflicts,
};
use tola_permalink::utils::plural_s;
use tola_permalink::{PermalinkFactory, RawPermalink, log};

use super::args::RoutesArgs;
use super::report::print_json;

/// One page in the routes input file.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RouteInput {
    input_path: String,
    permalink: RawPermalink,
    #[serde(default)]
    subdir: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PageRow<'a> {
    input_path: &'a str,
    output_path: Option<String>,
    href: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RoutesReport<'a> {
    content_map: &'a ContentMap,
    pages: Vec<PageRow<'a>>,
}

pub fn run_routes(args: &RoutesArgs, config: &PermalinkConfig) -> Result<()> {
    let inputs: Vec<RouteInput> = serde_json::from_str(&read_input(&args.file)?)
        .with_context(|| format!("invalid routes file `{}`", args.file.display()))?;

    let factory = PermalinkFactory::new(config.url_transforms()?);
    let entries = resolve_entries(&factory, inputs)?;
    log!("routes"; "resolved {} page{}", entries.len(), plural_s(entries.len()));

    let content_map = ContentMap::from_entries(&entries);
    content_map.print_conflicts();

    let conflicts = detect_output_conflicts(&entries);
    print_output_conflicts(&conflicts);
    if !conflicts.is_empty() && !args.warn_only {
        bail!("{} conflicting output path{}", conflicts.len(), plural_s(conflicts.len()));
    }

    let pages = entries
        .iter()
        .map(|entry| {
            Ok(PageRow {
                input_path: &entry.input_path,
                output_path: entry.permalink.to_output_path(),
                href: entry
                    .permalink
                    .to_href()
                    .with_context(|| format!("failed to resolve href of {}", entry.input_path))?,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    print_json(
        &RoutesReport {
            content_map: &content_map,
            pages,
        },
        args.pretty,
    )
}

/// Build permalinks for all inputs, in parallel, keeping input order.
fn resolve_entries(factory: &PermalinkFactory, inputs: Vec<RouteInput>) -> Result<Vec<RouteEntry>> {
    inputs
        .into_par_iter()
        .map(|input| {
            let permalink = factory
                .create(input.permalink, input.subdir.as_deref())
                .with_context(|| format!("invalid permalink in {}", input.input_path))?;
            Ok(RouteEntry::new(input.input_path, permalink))
        })
        .collect()
}

fn read_input(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut content = String::new();
        std::io::stdin().read_to_string(&mut content)?;
        return Ok(content);
    }
    std::fs::read_to_string(path).with_context(|| format!("failed to read `{}`", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn inputs(value: serde_json::Value) -> Vec<RouteInput> {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_resolve_entries_keeps_order() {
        let entries = resolve_entries(
            &PermalinkFactory::default(),
            inputs(json!([
                { "inputPath": "a.md", "permalink": "a/" },
                { "inputPath": "b.md", "permalink": { "serverless": "/b/:id/" } },
                { "inputPath": "c.md", "permalink": "c/", "subdir": "2/" },
            ])),
        )
        .unwrap();

        let paths: Vec<_> = entries.iter().map(|e| e.input_path.as_str()).collect();
        assert_eq!(paths, ["a.md", "b.md", "c.md"]);
        assert_eq!(
            entries[2].permalink.to_output_path().as_deref(),
            Some("c/2/index.html")
        );
    }

    #[test]
    fn test_resolve_entries_reports_bad_input() {
        let err = resolve_entries(
            &PermalinkFactory::default(),
            inputs(json!([{ "inputPath": "bad.md", "permalink": true }])),
        )
        .unwrap_err();
        assert!(err.to_string().contains("bad.md"));
    }

    #[test]
    fn test_read_input_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("routes.json");
        std::fs::write(&path, "[]").unwrap();
        assert_eq!(read_input(&path).unwrap(), "[]");
    }
}
