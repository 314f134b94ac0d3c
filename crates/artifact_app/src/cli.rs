use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Read-only viewer for runtime artifacts served from a static location.
#[derive(Debug, Parser)]
#[command(name = "artifact_viewer", version, about)]
pub struct CliArgs {
    /// Fetch artifacts over HTTP relative to this URL.
    #[arg(long, env = "ARTIFACT_VIEWER_BASE_URL", conflicts_with = "root")]
    pub base_url: Option<String>,

    /// Read artifacts from this directory instead of over HTTP.
    #[arg(long, default_value = "public")]
    pub root: PathBuf,

    /// RON file listing the artifacts to show. Defaults to the built-in list.
    #[arg(long)]
    pub registry: Option<PathBuf>,

    /// Where log output goes. The terminal option writes to stderr.
    #[arg(long, value_enum, default_value_t = LogTarget::File)]
    pub log: LogTarget,

    /// Log at debug level.
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogTarget {
    File,
    Terminal,
    Both,
}
