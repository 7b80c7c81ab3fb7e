//! Artifact persistence
//!
//! Page artifacts go through [`ArtifactWriter`] so the page processor can be
//! exercised without touching the real filesystem layout.

use async_trait::async_trait;
use std::path::Path;

/// Persists converted pages
#[async_trait]
pub trait ArtifactWriter: Send + Sync {
    /// Creates `dir` and its parents; succeeds if it already exists
    async fn ensure_dir(&self, dir: &Path) -> std::io::Result<()>;

    /// Writes `contents` to `path`, replacing any previous file
    async fn write_file(&self, path: &Path, contents: &str) -> std::io::Result<()>;
}

/// [`ArtifactWriter`] backed by `tokio::fs`
#[derive(Debug, Clone, Copy, Default)]
pub struct FsWriter;

#[async_trait]
impl ArtifactWriter for FsWriter {
    async fn ensure_dir(&self, dir: &Path) -> std::io::Result<()> {
        tokio::fs::create_dir_all(dir).await
    }

    async fn write_file(&self, path: &Path, contents: &str) -> std::io::Result<()> {
        tokio::fs::write(path, contents).await
    }
}
