use std::path::{Path, PathBuf};

use url::Url;

use super::error::MirrorError;

/// Resolve `reference` against the page it was found on.
/// Absolute, scheme-relative, path-absolute and path-relative references are
/// all accepted.
pub fn resolve(page_url: &Url, reference: &str) -> Result<Url, MirrorError> {
    page_url.join(reference).map_err(|source| MirrorError::Resolution {
        reference: reference.to_string(),
        source,
    })
}

/// Where the asset at `url` is stored under `output_dir`.
///
/// Only the URL path is used: scheme, host, query and fragment are dropped, so
/// two hosts serving the same path end up in the same file. Empty segments are
/// skipped which keeps the result inside `output_dir`; as a result `/a//b` and
/// `/a/b` share a file, and so do `/css/` and `/css`.
pub fn local_path(output_dir: &Path, url: &Url) -> PathBuf {
    let mut path = output_dir.to_path_buf();
    if let Some(segments) = url.path_segments() {
        for segment in segments.filter(|segment| !segment.is_empty()) {
            path.push(segment);
        }
    }
    path
}
