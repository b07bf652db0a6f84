//! `resolve` and `generate` commands.

use anyhow::{Context, Result};
use tola_permalink::config::PermalinkConfig;
use tola_permalink::{Permalink, PermalinkFactory, RawPermalink};

use super::args::{GenerateArgs, ReportArgs, ResolveArgs};
use super::report::{PermalinkReport, apply_params, print_json};

pub fn run_resolve(args: &ResolveArgs, config: &PermalinkConfig) -> Result<()> {
    let factory = PermalinkFactory::new(config.url_transforms()?);
    let permalink = factory
        .create(parse_raw(&args.permalink), args.subdir.as_deref())
        .with_context(|| format!("invalid permalink `{}`", args.permalink))?;
    report(&permalink, &args.report, config)
}

pub fn run_generate(args: &GenerateArgs, config: &PermalinkConfig) -> Result<()> {
    let factory = PermalinkFactory::new(config.url_transforms()?);
    let permalink = factory.generate(
        &args.dir,
        &args.stem,
        args.subdir.as_deref(),
        args.suffix.as_deref(),
        args.ext.as_deref(),
    );
    report(&permalink, &args.report, config)
}

fn report(permalink: &Permalink, args: &ReportArgs, config: &PermalinkConfig) -> Result<()> {
    apply_params(permalink, &args.params)?;
    let report = PermalinkReport::new(permalink, config)?;
    print_json(&report, args.pretty)
}

/// JSON when it parses as a permalink, otherwise a plain path.
fn parse_raw(input: &str) -> RawPermalink {
    serde_json::from_str(input).unwrap_or_else(|_| RawPermalink::Path(input.to_string()))
}
