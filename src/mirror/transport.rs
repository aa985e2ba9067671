use std::time::Duration;

use bytes::Bytes;
use log2::debug;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Response};
use url::Url;

use super::charset::{PageText, decode_page};
use super::error::MirrorError;

/// Single-shot HTTP GET shared by page and asset fetches
#[derive(Debug, Clone)]
pub struct Transport {
    client: Client,
    timeout: Option<Duration>,
}

impl Transport {
    pub fn new(timeout: Option<Duration>) -> Self {
        Self::with_client(Client::new(), timeout)
    }

    pub fn with_client(client: Client, timeout: Option<Duration>) -> Self {
        Self { client, timeout }
    }

    /// Fetch the body of `url`.
    /// Any transport error and any non-2xx status is returned as an error,
    /// there are no retries.
    pub async fn fetch(&self, url: &Url) -> Result<Bytes, MirrorError> {
        let response = self.get(url).await?;
        read_body(url, response).await
    }

    /// Fetch `url` and decode it as an HTML page, keeping track of its encoding
    pub async fn fetch_text(&self, url: &Url) -> Result<PageText, MirrorError> {
        let response = self.get(url).await?;
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);

        let body = read_body(url, response).await?;
        let page = decode_page(&body, content_type.as_deref());
        debug!("Decoded {} as {}", url, page.encoding.name());
        Ok(page)
    }

    async fn get(&self, url: &Url) -> Result<Response, MirrorError> {
        let mut request = self.client.get(url.clone());
        if let Some(timeout) = self.timeout {
            request = request.timeout(timeout);
        }

        let response = request.send().await.map_err(|source| MirrorError::Request {
            url: url.clone(),
            source,
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(MirrorError::Status { url: url.clone(), status });
        }
        Ok(response)
    }
}

async fn read_body(url: &Url, response: Response) -> Result<Bytes, MirrorError> {
    let body = response.bytes().await.map_err(|source| MirrorError::Request {
        url: url.clone(),
        source,
    })?;
    debug!("Fetched {} bytes from {}", body.len(), url);
    Ok(body)
}

impl Default for Transport {
    fn default() -> Self {
        Self::new(None)
    }
}
