use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use crate::mirror::{DEFAULT_OUTPUT_DIR, MirrorConfig};

pub const USAGE: &str = "page-mirror [options] URL1 [URL2 ...]";

/// Log levels as defined in log2 crate
#[derive(Debug, Serialize, Deserialize, Clone, ValueEnum)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

/// All program arguments. [`MirrorConfig`] describes only the pipeline
#[derive(Parser, Debug, Serialize, Deserialize)]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// Pages to mirror
    pub urls: Vec<String>,
    /// Fetch and display metadata
    #[arg(short, long)]
    pub metadata: bool,
    /// Directory pages and assets are written to
    #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR)]
    pub output_dir: PathBuf,
    /// Number of assets of a page downloaded at the same time
    #[arg(long, default_value = "1")]
    pub concurrency: usize,
    /// Request timeout in seconds, the HTTP client default when omitted
    #[arg(long)]
    pub timeout: Option<u64>,
    /// Logging level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info", value_enum)]
    pub log_level: LogLevel,
}

impl Config {
    pub fn new() -> Self {
        Self::parse()
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.urls.is_empty() {
            anyhow::bail!("No URLs provided. Usage: {}", USAGE);
        }
        if self.concurrency == 0 {
            anyhow::bail!("concurrency must be greater than 0");
        }
        Ok(())
    }

    pub fn mirror_config(&self) -> MirrorConfig {
        MirrorConfig::new(&self.output_dir)
            .with_metadata(self.metadata)
            .with_asset_concurrency(self.concurrency)
            .with_request_timeout(self.timeout.map(Duration::from_secs))
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        };
        write!(f, "{}", s)
    }
}
