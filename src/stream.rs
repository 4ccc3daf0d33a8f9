use std::path::Path;
use tokio::fs;
use tokio::fs::{File, OpenOptions};
use crate::error::DownloadError;

/// Creates (or truncates) the destination file, creating missing parent
/// directories first.
pub(crate) async fn create(path: &Path) -> crate::error::Result<File> {
    if let Some(parent) = path.parent() {
        if parent.symlink_metadata().is_err() {
            let _ = fs::create_dir_all(parent).await;
        }
    }
    match OpenOptions::new().
        create(true).
        write(true).
        truncate(true).
        open(path).await {
        Ok(file) => Ok(file),
        Err(_e) => {
            Err(DownloadError::OpenOrCreateFile)
        }
    }
}
