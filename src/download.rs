//! Resume download: copy the bundled document to a path the user picked.

use std::path::Path;

use anyhow::Context;

/// Copy the resume asset to `target`. Returns `Ok(false)` when the source
/// asset is not bundled, which the page treats as a silent no-op.
pub async fn save_resume(source: &Path, target: &Path) -> anyhow::Result<bool> {
    if tokio::fs::metadata(source).await.is_err() {
        tracing::warn!(source = %source.display(), "resume asset missing, skipping download");
        return Ok(false);
    }
    tokio::fs::copy(source, target)
        .await
        .with_context(|| format!("failed to copy resume to {}", target.display()))?;
    tracing::info!(target = %target.display(), "resume saved");
    Ok(true)
}
