pub mod config;
pub mod mirror;

use std::io::Write;

use anyhow::{Context, Result};

pub use mirror::{Mirror, MirrorConfig, MirrorError, PageOutcome, PageReport};

/// Mirror every URL of `cfg`, writing progress lines to `console`.
///
/// Only an invalid configuration or an output directory that can't be created
/// is an error, failed pages and assets end up in the returned reports.
pub async fn run(cfg: &config::Config, console: impl Write + Send + 'static) -> Result<Vec<PageReport>> {
    cfg.validate()?;

    let mirror_config = cfg.mirror_config();
    mirror_config
        .prepare_output_dir()
        .await
        .with_context(|| format!("Failed to create {}", mirror_config.output_dir().display()))?;

    let mirror = Mirror::new(mirror_config).with_console(console);
    Ok(mirror.mirror_all(&cfg.urls).await)
}
