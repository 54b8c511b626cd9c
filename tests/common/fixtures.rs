use std::path::PathBuf;
use std::time::Duration;

use portfolio::{SiteConfig, Typewriter, TypewriterConfig};
use tempfile::TempDir;

/// Typewriter tuned to the reference timeline: 100 ms per character in
/// both directions, 2 s hold.
pub fn reference_typewriter(phrases: &[&str]) -> Typewriter {
    Typewriter::new(
        phrases.iter().copied(),
        TypewriterConfig {
            type_delay: Duration::from_millis(100),
            delete_delay: Duration::from_millis(100),
            hold_delay: Duration::from_millis(2000),
        },
    )
}

/// Creates a SiteConfig rooted in a fresh temp directory.
/// Returns both so the directory outlives the test body.
pub fn temp_site_config() -> (SiteConfig, TempDir) {
    let dir = TempDir::new().expect("Failed to create temp directory");
    let config = SiteConfig {
        base_path: dir.path().to_path_buf(),
        ..SiteConfig::default()
    };
    (config, dir)
}

/// Writes a small stand-in resume under the config's base path and returns
/// its location.
pub fn write_resume(config: &SiteConfig) -> PathBuf {
    let path = config.resume_path();
    std::fs::write(&path, b"%PDF-1.4 stand-in resume").expect("Failed to write test resume");
    path
}
