/**
 * Profile Picture Storage
 *
 * Binary storage sits outside the auth core: the core hands over the bytes
 * and records whatever reference string comes back. `DiskPictureStorage`
 * keeps files in a local directory that the router also serves under
 * `/uploads`.
 */

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::backend::error::BackendError;

/// Storage collaborator for uploaded profile pictures
#[async_trait]
pub trait PictureStorage: Send + Sync {
    /// Persist `bytes` and return the reference to record against the user.
    async fn store(&self, original_name: &str, bytes: &[u8]) -> Result<String, BackendError>;
}

/// Stores pictures as `<dir>/<unix-millis>-<random>-<name>`
#[derive(Debug, Clone)]
pub struct DiskPictureStorage {
    dir: PathBuf,
}

impl DiskPictureStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Create the upload directory if it does not exist yet
    pub async fn ensure_dir(&self) -> std::io::Result<()> {
        tokio::fs::create_dir_all(&self.dir).await
    }
}

/// Reduce a client-supplied filename to a safe basename.
///
/// Directory components are dropped and anything outside `[A-Za-z0-9._-]`
/// becomes `_`. An empty result falls back to `upload`.
pub fn sanitize_file_name(name: &str) -> String {
    let base = name.rsplit(['/', '\\']).next().unwrap_or_default();
    let cleaned: String = base
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                c
            } else {
                '_'
            }
        })
        .collect();
    let cleaned = cleaned.trim_start_matches('.');
    if cleaned.is_empty() {
        "upload".to_string()
    } else {
        cleaned.to_string()
    }
}

#[async_trait]
impl PictureStorage for DiskPictureStorage {
    async fn store(&self, original_name: &str, bytes: &[u8]) -> Result<String, BackendError> {
        // The random part keeps same-millisecond uploads of one name apart.
        let file_name = format!(
            "{}-{}-{}",
            Utc::now().timestamp_millis(),
            &Uuid::new_v4().simple().to_string()[..8],
            sanitize_file_name(original_name)
        );
        let path = self.dir.join(&file_name);

        tokio::fs::write(&path, bytes).await.map_err(|e| {
            tracing::error!("Failed to write upload {}: {:?}", path.display(), e);
            BackendError::internal(format!("failed to store upload: {e}"))
        })?;

        tracing::debug!("Stored upload at {}", path.display());
        Ok(format!("uploads/{file_name}"))
    }
}
