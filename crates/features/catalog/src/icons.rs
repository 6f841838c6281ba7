//! On-disk store for generated icon files.
//!
//! Writes use an atomic swap (unique temp file + rename) so a crash mid-write
//! never leaves a torn icon behind. Filenames are derived internally from the
//! target host and sanitized; no caller-controlled paths reach the filesystem.

use crate::error::{CatalogError, CatalogErrorExt};
use crate::fetch::badge;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::fs;
use tracing::debug;
use url::Url;

/// Route prefix the server mounts the icon directory under.
pub const ICONS_ROUTE: &str = "/icons";

#[derive(Debug, Clone)]
pub struct IconStore {
    root: PathBuf,
    tmp_counter: Arc<AtomicU64>,
}

impl IconStore {
    /// Opens (and creates if needed) the icon directory under `data_dir`.
    ///
    /// # Errors
    /// Returns [`CatalogError::Io`] if the directory cannot be created.
    pub fn open(data_dir: &Path) -> Result<Self, CatalogError> {
        let root = data_dir.join("icons");
        std::fs::create_dir_all(&root).context("Creating icon directory")?;

        Ok(Self { root, tmp_counter: Arc::new(AtomicU64::new(0)) })
    }

    /// The physical directory icons are written to.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Renders and stores the fallback badge for a URL's host, returning the
    /// public path (`/icons/<file>`).
    ///
    /// # Errors
    /// Returns [`CatalogError::Validation`] for URLs without a usable host and
    /// [`CatalogError::Io`] on write failures.
    pub async fn save_letter_badge(&self, url: &str) -> Result<String, CatalogError> {
        let parsed = Url::parse(url).map_err(|e| CatalogError::Validation {
            message: format!("Invalid URL '{url}': {e}").into(),
            context: None,
        })?;
        let host = parsed.host_str().ok_or_else(|| CatalogError::Validation {
            message: format!("URL '{url}' has no host").into(),
            context: None,
        })?;

        let svg = badge::render_badge_svg(badge::letter_for_host(host));
        self.save(&badge::badge_filename(host), svg.as_bytes()).await
    }

    /// Atomically writes an icon file and returns its public path.
    async fn save(&self, filename: &str, contents: &[u8]) -> Result<String, CatalogError> {
        let tmp_name =
            format!(".{filename}.{}.tmp", self.tmp_counter.fetch_add(1, Ordering::Relaxed));
        let tmp_path = self.root.join(tmp_name);
        let final_path = self.root.join(filename);

        fs::write(&tmp_path, contents).await.context("Writing icon temp file")?;
        if let Err(e) = fs::rename(&tmp_path, &final_path).await {
            // Leave no temp file behind on a failed swap.
            let _ = fs::remove_file(&tmp_path).await;
            return Err(CatalogError::Io { source: e, context: Some("Swapping icon file".into()) });
        }

        debug!(path = %final_path.display(), "Icon stored");
        Ok(format!("{ICONS_ROUTE}/{filename}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn badge_is_written_and_publicly_addressed() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let store = IconStore::open(tmp.path()).expect("open store");

        let public = store
            .save_letter_badge("https://example.com/some/page")
            .await
            .expect("save badge");
        assert_eq!(public, "/icons/example.com_default.svg");

        let on_disk = store.root().join("example.com_default.svg");
        let contents = std::fs::read_to_string(on_disk).expect("read badge");
        assert!(contents.contains(">E</text>"));

        // No temp files left behind.
        let leftovers: Vec<_> = std::fs::read_dir(store.root())
            .expect("read dir")
            .flatten()
            .filter(|entry| entry.file_name().to_string_lossy().ends_with(".tmp"))
            .collect();
        assert!(leftovers.is_empty());
    }

    #[tokio::test]
    async fn rewriting_the_same_host_is_idempotent() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let store = IconStore::open(tmp.path()).expect("open store");

        let first = store.save_letter_badge("https://example.com").await.expect("save");
        let second = store.save_letter_badge("https://example.com/other").await.expect("save");
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn urls_without_a_host_are_rejected() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let store = IconStore::open(tmp.path()).expect("open store");

        let err = store.save_letter_badge("not a url").await.unwrap_err();
        assert!(matches!(err, CatalogError::Validation { .. }));
    }
}
