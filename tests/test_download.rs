//! Integration tests for the resume download copy.

mod common;

use common::*;
use portfolio::download::save_resume;

#[tokio::test]
async fn test_copies_resume_when_present() -> anyhow::Result<()> {
    // 1. Bundle a resume under the base path.
    let (config, dir) = temp_site_config();
    let source = write_resume(&config);

    // 2. Copy it to a user-chosen target.
    let target = dir.path().join("downloaded.pdf");
    let saved = save_resume(&source, &target).await?;

    // 3. The copy happened and the bytes match.
    assert!(saved);
    assert_eq!(std::fs::read(&source)?, std::fs::read(&target)?);
    Ok(())
}

#[tokio::test]
async fn test_missing_resume_is_a_noop() -> anyhow::Result<()> {
    let (config, dir) = temp_site_config();
    let target = dir.path().join("downloaded.pdf");

    // No resume was bundled: not an error, and nothing is written.
    let saved = save_resume(&config.resume_path(), &target).await?;
    assert!(!saved);
    assert!(!target.exists());
    Ok(())
}
