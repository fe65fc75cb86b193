//! File-backed storage for uploaded item images.
//!
//! Uploaded files land in a configured directory under a stored name of the
//! form `<millisecond-timestamp>-<original-filename>`:
//!
//! ```text
//! photo.jpg  →  1735689600123-photo.jpg
//! ```
//!
//! The timestamp prefix is collision-resistant, not collision-proof: two
//! uploads of the same original name within the same millisecond collide.
//! That probability is treated as negligible here rather than eliminated.
//!
//! The original filename is reduced to its final path component before use,
//! so a client-supplied name can never escape the upload directory.

use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::UploadError;

/// Fallback stored-name stem when the client supplies no usable filename.
const FALLBACK_FILENAME: &str = "upload";

/// Writes uploaded files into a fixed directory.
#[derive(Debug, Clone)]
pub struct UploadStore {
    dir: PathBuf,
}

impl UploadStore {
    /// Create a store rooted at the given directory.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The upload directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Create the upload directory if it does not exist yet.
    pub async fn ensure_dir(&self) -> Result<(), UploadError> {
        tokio::fs::create_dir_all(&self.dir)
            .await
            .map_err(|e| UploadError::Io(e.to_string()))
    }

    /// Write uploaded bytes to disk and return the stored filename.
    ///
    /// The file is on disk once this returns; callers that fail afterwards
    /// (for example on the database insert) do not remove it.
    pub async fn save(&self, original_name: &str, data: &[u8]) -> Result<String, UploadError> {
        let stored = stored_filename(original_name, timestamp_millis());
        let path = self.dir.join(&stored);

        tokio::fs::write(&path, data)
            .await
            .map_err(|e| UploadError::Io(e.to_string()))?;

        Ok(stored)
    }
}

/// Build the stored filename for an upload.
pub fn stored_filename(original_name: &str, timestamp: u64) -> String {
    format!("{}-{}", timestamp, sanitize_filename(original_name))
}

/// Reduce a client-supplied filename to its final path component.
///
/// Both separator styles are handled because the name comes from an
/// arbitrary client. Names that reduce to nothing (empty, `.`, `..`) fall
/// back to a fixed stem.
fn sanitize_filename(name: &str) -> String {
    let last = name
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(FALLBACK_FILENAME);

    match last {
        "" | "." | ".." => FALLBACK_FILENAME.to_string(),
        other => other.to_string(),
    }
}

/// Milliseconds since the UNIX epoch.
fn timestamp_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

// =============================================================================
// Tests
// =============================================================================
