use anyhow::Result;
use log2::*;

use page_mirror::config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    let cfg = Config::new();
    cfg.validate()?;
    let _log2 = stdout()
        .module(true) // include module name
        .module_with_line(true) // include line number from module
        .module_filter(|module| module.starts_with("page_mirror")) // include only this crate
        .compress(false)
        .level(cfg.log_level.to_string())
        .start();

    let reports = page_mirror::run(&cfg, std::io::stdout()).await?;

    let skipped = reports.iter().filter(|r| r.is_skipped()).count();
    debug!("Run finished, {} of {} pages skipped", skipped, reports.len());

    Ok(())
}
