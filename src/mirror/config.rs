use std::path::{Path, PathBuf};
use std::time::Duration;

/// Default directory pages and assets are written to
pub const DEFAULT_OUTPUT_DIR: &str = "web_pages";

/// Configuration of a mirroring run
#[derive(Debug, Clone)]
pub struct MirrorConfig {
    pub output_dir: PathBuf,
    pub report_metadata: bool,
    /// How many assets of one page may be downloaded at the same time
    pub asset_concurrency: usize,
    /// `None` leaves the HTTP client's own default in place
    pub request_timeout: Option<Duration>,
}

impl MirrorConfig {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            report_metadata: false,
            asset_concurrency: 1,
            request_timeout: None,
        }
    }

    pub fn with_metadata(mut self, report: bool) -> Self {
        self.report_metadata = report;
        self
    }

    pub fn with_asset_concurrency(mut self, concurrency: usize) -> Self {
        self.asset_concurrency = concurrency.max(1);
        self
    }

    pub fn with_request_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.request_timeout = timeout;
        self
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Creates the output directory if it doesn't exist yet.
    /// Has to run once before the first page is mirrored.
    pub async fn prepare_output_dir(&self) -> std::io::Result<()> {
        tokio::fs::create_dir_all(&self.output_dir).await
    }
}

impl Default for MirrorConfig {
    fn default() -> Self {
        Self::new(DEFAULT_OUTPUT_DIR)
    }
}
