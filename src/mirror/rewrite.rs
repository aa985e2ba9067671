use std::path::{Path, PathBuf};

use futures::stream::{self, StreamExt};
use kuchikiki::traits::TendrilSink;
use log2::{info, warn};
use url::Url;

use super::download::{AssetJob, download};
use super::error::MirrorError;
use super::locate::{AssetKind, locate_assets};
use super::resolve::{local_path, resolve};
use super::transport::Transport;

/// An asset found while planning, before anything is downloaded
#[derive(Debug)]
pub struct PlannedAsset {
    pub kind: AssetKind,
    pub reference: String,
    pub target: Result<AssetJob, MirrorError>,
}

/// Rewritten HTML plus the downloads it depends on, in document order
#[derive(Debug)]
pub struct RewritePlan {
    pub html: String,
    pub assets: Vec<PlannedAsset>,
}

/// Outcome of a single asset of a page
#[derive(Debug)]
pub struct AssetReport {
    pub kind: AssetKind,
    pub reference: String,
    pub url: Option<Url>,
    pub result: Result<PathBuf, MirrorError>,
}

impl AssetReport {
    pub fn is_saved(&self) -> bool {
        self.result.is_ok()
    }
}

#[derive(Debug)]
pub struct RewrittenPage {
    pub html: String,
    pub assets: Vec<AssetReport>,
}

impl RewrittenPage {
    pub fn failed_assets(&self) -> impl Iterator<Item = &AssetReport> {
        self.assets.iter().filter(|report| !report.is_saved())
    }
}

/// Parse `raw_html`, point its references at the mirrored copies and
/// serialize the result. No network or filesystem access happens here.
///
/// A reference that can't be resolved leaves its element untouched. For `src`
/// attributes a single leading `/` is removed so the saved page loads the
/// asset relative to itself, `href` values are never changed.
pub fn plan_rewrite(page_url: &Url, raw_html: &str, output_dir: &Path) -> RewritePlan {
    let document = kuchikiki::parse_html().one(raw_html);
    let mut assets = Vec::new();

    for located in locate_assets(&document) {
        let target = resolve(page_url, &located.reference).map(|url| AssetJob {
            local_path: local_path(output_dir, &url),
            url,
        });

        if target.is_ok() && located.kind.rewrites_reference() {
            if let Some(stripped) = located.reference.strip_prefix('/') {
                located
                    .element
                    .attributes
                    .borrow_mut()
                    .insert(located.attribute(), stripped.to_string());
            }
        }

        assets.push(PlannedAsset {
            kind: located.kind,
            reference: located.reference,
            target,
        });
    }

    RewritePlan {
        html: document.to_string(),
        assets,
    }
}

/// Runs [`plan_rewrite`] and then downloads every planned asset
pub struct Rewriter<'a> {
    transport: &'a Transport,
    output_dir: &'a Path,
    concurrency: usize,
}

impl<'a> Rewriter<'a> {
    pub fn new(transport: &'a Transport, output_dir: &'a Path) -> Self {
        Self {
            transport,
            output_dir,
            concurrency: 1,
        }
    }

    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }

    /// The returned HTML doesn't depend on which downloads succeeded.
    /// Reports keep document order whatever order downloads finish in.
    pub async fn rewrite(&self, page_url: &Url, raw_html: &str) -> RewrittenPage {
        let RewritePlan { html, assets } = plan_rewrite(page_url, raw_html, self.output_dir);
        let transport = self.transport;

        let assets = stream::iter(assets)
            .map(|planned| async move {
                let PlannedAsset { kind, reference, target } = planned;
                let url = target.as_ref().ok().map(|job| job.url.clone());
                let result = match target {
                    Ok(job) => download(transport, &job).await,
                    Err(e) => Err(e),
                };

                match &result {
                    Ok(path) => info!("Downloaded {} to {}", reference, path.display()),
                    Err(e) => warn!("Skipping asset {}: {}", reference, e),
                }

                AssetReport { kind, reference, url, result }
            })
            .buffered(self.concurrency)
            .collect::<Vec<_>>()
            .await;

        RewrittenPage { html, assets }
    }
}
