//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::{Path, PathBuf};
use tola_permalink::config::CONFIG_FILE;

/// Resolve output paths and urls of static site pages
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: permalink.toml, searched upward from cwd)
    #[arg(short = 'C', long, global = true, value_hint = clap::ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Enable verbose output for debugging
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Resolve an authored permalink value
    #[command(visible_alias = "r")]
    Resolve {
        #[command(flatten)]
        args: ResolveArgs,
    },

    /// Resolve the conventional permalink of a file
    #[command(visible_alias = "g")]
    Generate {
        #[command(flatten)]
        args: GenerateArgs,
    },

    /// Build the serverless content map for many pages
    Routes {
        #[command(flatten)]
        args: RoutesArgs,
    },
}

/// Resolve command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct ResolveArgs {
    /// Permalink as JSON (`false`, `"posts/"`, `{"build": "/b/", "serverless": "/s/:id/"}`).
    /// Text that isn't valid JSON is taken as a plain path.
    pub permalink: String,

    /// Pagination subdirectory (e.g. `1/`)
    #[arg(short, long)]
    pub subdir: Option<String>,

    #[command(flatten)]
    pub report: ReportArgs,
}

/// Generate command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct GenerateArgs {
    /// Directory of the input file, relative to the input root
    pub dir: String,

    /// File name without extension
    pub stem: String,

    /// Pagination subdirectory (e.g. `1/`)
    #[arg(short, long)]
    pub subdir: Option<String>,

    /// Suffix appended to the file name (e.g. `-o`)
    #[arg(long)]
    pub suffix: Option<String>,

    /// Output file extension (default: html)
    #[arg(short, long)]
    pub ext: Option<String>,

    #[command(flatten)]
    pub report: ReportArgs,
}

/// Options shared by single-permalink commands.
#[derive(clap::Args, Debug, Clone)]
pub struct ReportArgs {
    /// Serverless path parameter, `name=value` (repeatable)
    #[arg(short = 'p', long = "param", value_parser = parse_param)]
    pub params: Vec<(String, String)>,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}

/// Routes command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct RoutesArgs {
    /// JSON file with `[{"inputPath": ..., "permalink": ..., "subdir": ...}]`.
    /// Use `-` to read from stdin.
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub file: PathBuf,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Report output conflicts as warnings instead of failing
    #[arg(long, short = 'w')]
    pub warn_only: bool,
}

impl Cli {
    /// Config path, with the default file name when none was given.
    pub fn config_path(&self) -> &Path {
        self.config.as_deref().unwrap_or(Path::new(CONFIG_FILE))
    }

    /// An explicit `--config` must exist.
    pub const fn config_is_explicit(&self) -> bool {
        self.config.is_some()
    }
}

fn parse_param(s: &str) -> Result<(String, String), String> {
    s.split_once('=')
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .ok_or_else(|| format!("invalid param `{s}`, expected `name=value`"))
}
