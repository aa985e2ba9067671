use std::path::{Path, PathBuf};

use encoding_rs::{Encoding, UTF_8};
use log2::debug;
use url::Url;

use super::charset::encode_page;
use super::error::MirrorError;

const PAGE_SUFFIX: &str = ".html";
const FALLBACK_PAGE_NAME: &str = "index";

/// File name a page is saved under: its last path segment plus `.html`.
/// Pages without a path segment are named after their host.
pub fn page_file_name(url: &Url) -> String {
    let stem = url
        .path_segments()
        .and_then(|segments| segments.filter(|s| !s.is_empty()).last())
        .or_else(|| url.host_str())
        .unwrap_or(FALLBACK_PAGE_NAME);

    format!("{stem}{PAGE_SUFFIX}")
}

/// Write `content` flat into `output_dir` as UTF-8, replacing an existing file
pub async fn save(content: &str, url: &Url, output_dir: &Path) -> Result<PathBuf, MirrorError> {
    save_encoded(content, UTF_8, url, output_dir).await
}

/// Like [`save`] but writes `content` in the encoding the page was served in
pub async fn save_encoded(
    content: &str,
    encoding: &'static Encoding,
    url: &Url,
    output_dir: &Path,
) -> Result<PathBuf, MirrorError> {
    let path = output_dir.join(page_file_name(url));
    tokio::fs::write(&path, encode_page(content, encoding))
        .await
        .map_err(|e| MirrorError::persistence(&path, e))?;

    debug!("Saved page {} to {}", url, path.display());
    Ok(path)
}
