use std::fmt;

use anyhow::{Result, anyhow};
use chrono::{DateTime, Utc};
use scraper::{Html, Selector};
use serde::Serialize;

const FETCH_TIME_FORMAT: &str = "%a %b %d %Y %H:%M:%S UTC";

/// Counters describing a fetched page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Metadata {
    pub num_links: usize,
    pub images: usize,
    pub last_fetch: DateTime<Utc>,
}

impl Metadata {
    pub fn from_html(html: &str) -> Result<Self> {
        Self::from_html_at(html, Utc::now())
    }

    pub fn from_html_at(html: &str, fetched_at: DateTime<Utc>) -> Result<Self> {
        let document = Html::parse_document(html);
        Ok(Self {
            num_links: count(&document, "a")?,
            images: count(&document, "img")?,
            last_fetch: fetched_at,
        })
    }

    pub fn last_fetch_display(&self) -> String {
        self.last_fetch.format(FETCH_TIME_FORMAT).to_string()
    }
}

fn count(document: &Html, css: &str) -> Result<usize> {
    let selector = Selector::parse(css)
        .map_err(|e| anyhow!("Failed to parse <{}> selector: {}", css, e))?;
    Ok(document.select(&selector).count())
}

/// Metadata block of one page, printed after it has been mirrored
pub struct MetadataReport<'a> {
    pub site: &'a str,
    pub metadata: &'a Metadata,
}

impl fmt::Display for MetadataReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "site: {}", self.site)?;
        writeln!(f, "num_links: {}", self.metadata.num_links)?;
        writeln!(f, "images: {}", self.metadata.images)?;
        write!(f, "last_fetch: {}", self.metadata.last_fetch_display())
    }
}
