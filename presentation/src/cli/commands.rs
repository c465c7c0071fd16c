//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Log line format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Human-readable lines
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

/// CLI arguments for sitewright
#[derive(Parser, Debug)]
#[command(name = "sitewright")]
#[command(author, version, about = "LLM-backed website builder API server")]
#[command(long_about = r#"
Sitewright serves the HTTP API behind the site builder frontend.

A chat turn makes two model calls: one decides whether the request needs
images, the other proposes page changes. Finished sites can be published
and listed.

Configuration files are loaded from (later entries win):
1. ~/.config/sitewright/config.toml   Global config
2. ./sitewright.toml                  Project-level config
3. --config <path>                    Explicit config file
4. SITEWRIGHT_<SECTION>__<KEY>        Environment

Example:
  OPENROUTER_API_KEY=sk-... sitewright
  sitewright --port 8080 -vv
  sitewright --config prod.toml --log-format json
"#)]
pub struct Cli {
    /// Address to bind (overrides server.host)
    #[arg(long, value_name = "ADDR")]
    pub host: Option<String>,

    /// Port to listen on (overrides server.port)
    #[arg(short, long, value_name = "PORT")]
    pub port: Option<u16>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Log output format
    #[arg(long, value_enum, default_value = "text")]
    pub log_format: LogFormat,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files and environment overrides
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

impl Cli {
    /// Default tracing filter for the verbosity level
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn,sitewright=info",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
