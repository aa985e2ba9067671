use std::io;
use std::path::PathBuf;

use reqwest::StatusCode;
use thiserror::Error;
use url::Url;

/// Coarse classification of a [`MirrorError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Network, protocol or non-success HTTP status
    Fetch,
    /// Reference that cannot be turned into an absolute URL
    Resolution,
    /// Failed mkdir or file write
    Persistence,
}

#[derive(Debug, Error)]
pub enum MirrorError {
    #[error("request to {url} failed: {source}")]
    Request {
        url: Url,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} responded with {status}")]
    Status { url: Url, status: StatusCode },

    #[error("unresolvable reference {reference:?}: {source}")]
    Resolution {
        reference: String,
        #[source]
        source: url::ParseError,
    },

    #[error("failed to write {}: {source}", .path.display())]
    Persistence {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl MirrorError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            MirrorError::Request { .. } | MirrorError::Status { .. } => ErrorKind::Fetch,
            MirrorError::Resolution { .. } => ErrorKind::Resolution,
            MirrorError::Persistence { .. } => ErrorKind::Persistence,
        }
    }

    pub(crate) fn persistence(path: impl Into<PathBuf>, source: io::Error) -> Self {
        MirrorError::Persistence { path: path.into(), source }
    }
}
