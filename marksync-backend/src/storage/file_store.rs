//! FileStore — writes synchronized notes and their assets to disk.
//!
//! Path layout under the store root:
//!
//! ```text
//! output/note/<category>/<title>.md
//! output/note/<category>/images/<filename>
//! output/note/<category>/attachments/<filename>
//! output/export_image/<category>/<title>/<filename>
//! ```
//!
//! Writes overwrite unconditionally and directory creation is idempotent,
//! so re-running a sync converges on the same tree. Creation timestamps
//! are applied only after content is durable and never fail an operation.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::sanitize::sanitize_filename;
use super::timestamp::{CreateTime, apply_create_time};
use crate::config::{self, defaults};
use crate::record::SyncRecord;

/// Local artifact store rooted at a fixed directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Store rooted at the process-wide application root.
    pub fn new() -> Self {
        Self {
            root: config::app_root().to_path_buf(),
        }
    }

    /// Store rooted at an explicit directory.
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The directory all derived paths hang off.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Save note markdown under `output/note/<category>/<title>.md`.
    ///
    /// The title is sanitized before use; a title that already ends in
    /// `.md` keeps a single extension. Overwrites any previous file at
    /// that path.
    pub fn save_note(
        &self,
        category: &str,
        title: &str,
        content: &str,
        create_time: Option<&CreateTime>,
    ) -> io::Result<PathBuf> {
        log::info!(
            "[Store] Saving note {:?} in category {:?}",
            title,
            category
        );

        let dir = self.note_dir(category);
        fs::create_dir_all(&dir)?;

        let mut safe_title = sanitize_filename(title);
        if let Some(stem) = safe_title.strip_suffix(".md") {
            safe_title = stem.to_string();
        }

        let path = dir.join(format!("{}.md", safe_title));
        fs::write(&path, content)?;
        log::info!("[Store] Note written to {}", path.display());

        apply_create_time(&path, create_time);
        Ok(path)
    }

    /// Save image bytes under `output/export_image/<category>/<title>/<file_name>`.
    ///
    /// `file_name` comes from the remote export manifest and is used
    /// as-is; only the title is sanitized (it becomes a directory).
    pub fn save_image(
        &self,
        category: &str,
        title: &str,
        file_name: &str,
        content: &[u8],
        create_time: Option<&CreateTime>,
    ) -> io::Result<PathBuf> {
        let dir = self
            .root
            .join(defaults::OUTPUT_DIR)
            .join(defaults::EXPORT_IMAGE_DIR)
            .join(normalize_category(category))
            .join(sanitize_filename(title));
        fs::create_dir_all(&dir)?;

        let path = dir.join(file_name);
        fs::write(&path, content)?;
        log::info!("[Store] Image written to {}", path.display());

        apply_create_time(&path, create_time);
        Ok(path)
    }

    /// Image directory for a record: `images/` next to the note file.
    pub fn image_dir(&self, record: &SyncRecord) -> PathBuf {
        self.note_dir(&record.category)
            .join(defaults::IMAGES_SUBDIR)
    }

    /// Attachment directory for a record: `attachments/` next to the note file.
    pub fn attachment_dir(&self, record: &SyncRecord) -> PathBuf {
        self.note_dir(&record.category)
            .join(defaults::ATTACHMENTS_SUBDIR)
    }

    /// True when `file_name` has not been downloaded into the record's
    /// image directory yet.
    pub fn image_missing(&self, record: &SyncRecord, file_name: &str) -> bool {
        !self.image_dir(record).join(file_name).exists()
    }

    /// Download a remote image into the record's image directory.
    ///
    /// The file is written only after the full response body has been
    /// received, so an HTTP failure leaves no partial file behind.
    pub fn fetch_image(
        &self,
        record: &SyncRecord,
        file_name: &str,
        url: &str,
        create_time: Option<&CreateTime>,
    ) -> Result<PathBuf, String> {
        let dir = self.image_dir(record);
        fs::create_dir_all(&dir)
            .map_err(|e| format!("Failed to create image dir {}: {}", dir.display(), e))?;

        let path = dir.join(file_name);
        log::info!("[Store] Downloading {} -> {}", url, path.display());

        let response = crate::http::shared_client()
            .get(url)
            .send()
            .map_err(|e| format!("HTTP request to {} failed: {}", url, e))?;

        if !response.status().is_success() {
            return Err(format!(
                "Remote returned HTTP {} for {}",
                response.status(),
                url
            ));
        }

        let bytes = response
            .bytes()
            .map_err(|e| format!("Failed to read response body from {}: {}", url, e))?;

        fs::write(&path, &bytes)
            .map_err(|e| format!("Failed to write {}: {}", path.display(), e))?;
        log::info!(
            "[Store] Download complete: {} ({} bytes)",
            file_name,
            bytes.len()
        );

        apply_create_time(&path, create_time);
        Ok(path)
    }

    /// Store pre-fetched image bytes into the record's image directory.
    pub fn store_image_bytes(
        &self,
        record: &SyncRecord,
        file_name: &str,
        bytes: &[u8],
        create_time: Option<&CreateTime>,
    ) -> io::Result<PathBuf> {
        self.store_asset(self.image_dir(record), file_name, bytes, create_time)
    }

    /// Store pre-fetched attachment bytes into the record's attachment
    /// directory.
    pub fn store_attachment_bytes(
        &self,
        record: &SyncRecord,
        file_name: &str,
        bytes: &[u8],
        create_time: Option<&CreateTime>,
    ) -> io::Result<PathBuf> {
        self.store_asset(self.attachment_dir(record), file_name, bytes, create_time)
    }

    /// Filter `candidates` down to the image files not yet on disk,
    /// preserving input order.
    ///
    /// An empty candidate list short-circuits without touching the
    /// filesystem.
    pub fn filter_missing(&self, record: &SyncRecord, candidates: &[String]) -> Vec<String> {
        if candidates.is_empty() {
            return Vec::new();
        }

        let missing: Vec<String> = candidates
            .iter()
            .filter(|name| self.image_missing(record, name))
            .cloned()
            .collect();
        log::info!(
            "[Store] {} of {} candidate images missing locally",
            missing.len(),
            candidates.len()
        );
        missing
    }

    fn store_asset(
        &self,
        dir: PathBuf,
        file_name: &str,
        bytes: &[u8],
        create_time: Option<&CreateTime>,
    ) -> io::Result<PathBuf> {
        fs::create_dir_all(&dir)?;

        let path = dir.join(file_name);
        fs::write(&path, bytes)?;
        log::info!("[Store] Asset written to {}", path.display());

        apply_create_time(&path, create_time);
        Ok(path)
    }

    fn note_dir(&self, category: &str) -> PathBuf {
        self.root
            .join(defaults::OUTPUT_DIR)
            .join(defaults::NOTE_DIR)
            .join(normalize_category(category))
    }
}

impl Default for FileStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Translate a slash-delimited category like "/a/b/" into a relative
/// path, dropping empty segments.
fn normalize_category(category: &str) -> PathBuf {
    category
        .split('/')
        .filter(|segment| !segment.is_empty())
        .collect()
}
