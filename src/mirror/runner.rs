use std::fmt;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use log2::*;
use url::Url;

use super::config::MirrorConfig;
use super::error::MirrorError;
use super::metadata::{Metadata, MetadataReport};
use super::persist::save_encoded;
use super::rewrite::{AssetReport, Rewriter};
use super::transport::Transport;

/// Stages a page goes through. `Skipped` is only reachable from `Fetching`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageStage {
    Fetching,
    Rewriting,
    Persisting,
    Done,
    Skipped,
}

#[derive(Debug)]
pub enum PageOutcome {
    Saved(PathBuf),
    /// Page was fetched and rewritten but writing it failed
    SaveFailed(MirrorError),
    /// Page could not be fetched, nothing was rewritten or written
    Skipped(MirrorError),
}

impl PageOutcome {
    pub fn stage(&self) -> PageStage {
        match self {
            PageOutcome::Saved(_) | PageOutcome::SaveFailed(_) => PageStage::Done,
            PageOutcome::Skipped(_) => PageStage::Skipped,
        }
    }
}

/// Everything that happened to one page of a batch
#[derive(Debug)]
pub struct PageReport {
    pub url: String,
    pub outcome: PageOutcome,
    pub assets: Vec<AssetReport>,
    pub metadata: Option<Metadata>,
}

impl PageReport {
    fn skipped(url: &str, error: MirrorError) -> Self {
        Self {
            url: url.to_string(),
            outcome: PageOutcome::Skipped(error),
            assets: Vec::new(),
            metadata: None,
        }
    }

    pub fn saved_path(&self) -> Option<&Path> {
        match &self.outcome {
            PageOutcome::Saved(path) => Some(path),
            _ => None,
        }
    }

    pub fn is_skipped(&self) -> bool {
        self.outcome.stage() == PageStage::Skipped
    }
}

/// Mirrors pages into the configured output directory
pub struct Mirror {
    config: MirrorConfig,
    transport: Transport,
    /// Receives the progress, not-found and metadata lines, stdout by default
    console: Mutex<Box<dyn Write + Send>>,
}

impl Mirror {
    pub fn new(config: MirrorConfig) -> Self {
        let transport = Transport::new(config.request_timeout);
        Self::with_transport(config, transport)
    }

    pub fn with_transport(config: MirrorConfig, transport: Transport) -> Self {
        Self {
            config,
            transport,
            console: Mutex::new(Box::new(io::stdout())),
        }
    }

    pub fn with_console(mut self, console: impl Write + Send + 'static) -> Self {
        self.console = Mutex::new(Box::new(console));
        self
    }

    pub fn config(&self) -> &MirrorConfig {
        &self.config
    }

    /// Pages are handled one after another, a failing page never stops the batch
    pub async fn mirror_all(&self, urls: &[String]) -> Vec<PageReport> {
        let mut reports = Vec::with_capacity(urls.len());
        for url in urls {
            reports.push(self.mirror_page(url).await);
        }

        let saved = reports.iter().filter(|r| r.saved_path().is_some()).count();
        info!("Mirrored {} of {} pages", saved, reports.len());
        reports
    }

    pub async fn mirror_page(&self, url: &str) -> PageReport {
        debug!("{}: {:?}", url, PageStage::Fetching);
        let page_url = match Url::parse(url) {
            Ok(page_url) => page_url,
            Err(source) => {
                let e = MirrorError::Resolution { reference: url.to_string(), source };
                return self.skip(url, e);
            }
        };

        let fetched = match self.transport.fetch_text(&page_url).await {
            Ok(fetched) => fetched,
            Err(e) => return self.skip(url, e),
        };
        let raw_html = fetched.html;

        debug!("{}: {:?}", url, PageStage::Rewriting);
        self.say(format_args!("\nDownloading Assets for {}\n", url));
        let page = Rewriter::new(&self.transport, self.config.output_dir())
            .with_concurrency(self.config.asset_concurrency)
            .rewrite(&page_url, &raw_html)
            .await;

        let failed = page.failed_assets().count();
        if failed > 0 {
            warn!("{} of {} assets of {} were not saved", failed, page.assets.len(), url);
        }

        debug!("{}: {:?}", url, PageStage::Persisting);
        let saved = save_encoded(&page.html, fetched.encoding, &page_url, self.config.output_dir()).await;
        let outcome = match saved {
            Ok(path) => PageOutcome::Saved(path),
            Err(e) => {
                error!("Error saving {}: {}", url, e);
                PageOutcome::SaveFailed(e)
            }
        };

        let metadata = if self.config.report_metadata {
            self.report_metadata(url, &raw_html)
        } else {
            None
        };

        debug!("{}: {:?}", url, PageStage::Done);
        PageReport {
            url: url.to_string(),
            outcome,
            assets: page.assets,
            metadata,
        }
    }

    fn skip(&self, url: &str, error: MirrorError) -> PageReport {
        error!("Error fetching {}: {}", url, error);
        self.say(format_args!("Web page not found for {}", url));
        debug!("{}: {:?}", url, PageStage::Skipped);
        PageReport::skipped(url, error)
    }

    fn report_metadata(&self, url: &str, raw_html: &str) -> Option<Metadata> {
        match Metadata::from_html(raw_html) {
            Ok(metadata) => {
                self.say(format_args!("{}", MetadataReport { site: url, metadata: &metadata }));
                Some(metadata)
            }
            Err(e) => {
                warn!("Failed to collect metadata for {}: {}", url, e);
                None
            }
        }
    }

    fn say(&self, line: fmt::Arguments<'_>) {
        let mut console = self.console.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        if let Err(e) = writeln!(console, "{}", line).and_then(|_| console.flush()) {
            warn!("Failed to write to console: {}", e);
        }
    }
}
