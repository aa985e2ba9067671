use std::path::PathBuf;

use log2::debug;
use url::Url;

use super::error::MirrorError;
use super::transport::Transport;

/// One asset to fetch and where to put it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetJob {
    pub url: Url,
    pub local_path: PathBuf,
}

/// Fetch `job.url` and store it at `job.local_path`.
///
/// Nothing is created on disk when the fetch fails. Parent directories are
/// created as needed and an existing file is overwritten.
pub async fn download(transport: &Transport, job: &AssetJob) -> Result<PathBuf, MirrorError> {
    let body = transport.fetch(&job.url).await?;

    if let Some(parent) = job.local_path.parent() {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|e| MirrorError::persistence(parent, e))?;
    }

    tokio::fs::write(&job.local_path, &body)
        .await
        .map_err(|e| MirrorError::persistence(&job.local_path, e))?;

    debug!("Saved {} to {}", job.url, job.local_path.display());
    Ok(job.local_path.clone())
}
