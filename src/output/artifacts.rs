//! Raw page-markup artifacts
//!
//! Each crawled page's markup is saved under the artifacts directory as
//! `page_{i}.html`, keyed by in-job page index. Names are not job-scoped, so
//! concurrent jobs overwrite each other's artifacts; this mirrors the shared
//! snapshot path and is accepted behavior.

use crate::Result;
use std::path::Path;

/// Saves one page's raw markup, creating the artifacts directory on demand
pub async fn save_page_markup(dir: &Path, page: u32, markup: &str) -> Result<()> {
    tokio::fs::create_dir_all(dir).await?;

    let path = dir.join(format!("page_{page}.html"));
    tokio::fs::write(&path, markup).await?;
    tracing::trace!("saved page artifact {}", path.display());
    Ok(())
}
