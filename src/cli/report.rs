//! JSON report of a resolved permalink.

use std::io::Write;

use anyhow::Result;
use serde::{Serialize, Serializer};
use tola_permalink::config::PermalinkConfig;
use tola_permalink::{PathParams, Permalink, ResolveError, VariantMap};

/// Everything a collaborator can ask a permalink for.
///
/// Absent values serialize as `false`, matching "not written" / "no url".
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PermalinkReport<'a> {
    #[serde(serialize_with = "or_false")]
    pub output_path: Option<String>,
    #[serde(serialize_with = "or_false")]
    pub href: Option<String>,
    #[serde(serialize_with = "or_false")]
    pub path: Option<String>,
    pub write_to_file_system: bool,
    pub is_rendered: bool,
    pub primary_serverless: Option<&'a str>,
    pub serverless_urls: &'a VariantMap,
}

impl<'a> PermalinkReport<'a> {
    pub fn new(permalink: &'a Permalink, config: &PermalinkConfig) -> Result<Self, ResolveError> {
        Ok(Self {
            output_path: permalink.to_output_path(),
            href: permalink.to_href()?,
            path: permalink.to_path(&config.build.output),
            write_to_file_system: permalink.write_to_file_system(),
            is_rendered: permalink.is_rendered(),
            primary_serverless: permalink.primary_serverless_name(),
            serverless_urls: permalink.serverless_urls(),
        })
    }
}

fn or_false<T, S>(value: &Option<T>, serializer: S) -> Result<S::Ok, S::Error>
where
    T: Serialize,
    S: Serializer,
{
    match value {
        Some(value) => value.serialize(serializer),
        None => serializer.serialize_bool(false),
    }
}

/// Hand `--param` values to the permalink, if any were given.
pub fn apply_params(permalink: &Permalink, params: &[(String, String)]) -> Result<()> {
    if params.is_empty() {
        return Ok(());
    }
    let data: PathParams = params.iter().cloned().collect();
    permalink.set_serverless_path_data(data)?;
    Ok(())
}

/// Write `value` as JSON to stdout.
pub fn print_json<T: Serialize>(value: &T, pretty: bool) -> Result<()> {
    let formatted = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{}", formatted)?;
    Ok(())
}
