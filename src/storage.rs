//! On-disk article store: a flat directory of `.html` files.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tokio::fs::{self, OpenOptions};
use tokio::io::AsyncWriteExt;

use crate::error::AppError;
use crate::models::article::SavedArticle;
use crate::utils::filename::{derive_filename, next_stamp};

/// URL prefix under which the store directory is served.
pub const PUBLIC_PREFIX: &str = "/articles";

/// Fresh names tried before giving up on an exclusive create.
const MAX_CREATE_ATTEMPTS: usize = 8;

#[derive(Debug, Clone)]
pub struct ArticleStore {
    dir: PathBuf,
}

impl ArticleStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn public_url(&self, filename: &str) -> String {
        format!("{}/{}", PUBLIC_PREFIX, filename)
    }

    /// Creates the store directory (and parents) if it does not exist yet.
    pub async fn ensure_dir(&self) -> Result<(), AppError> {
        fs::create_dir_all(&self.dir)
            .await
            .map_err(|e| AppError::StorageUnavailable(format!("{}: {}", self.dir.display(), e)))
    }

    /// Writes `document` under a freshly derived, never-before-used filename.
    pub async fn persist(
        &self,
        display_name: Option<&str>,
        lowercase: bool,
        document: &str,
    ) -> Result<SavedArticle, AppError> {
        self.persist_with(display_name, lowercase, document, next_stamp)
            .await
    }

    async fn persist_with(
        &self,
        display_name: Option<&str>,
        lowercase: bool,
        document: &str,
        mut stamp: impl FnMut() -> i64,
    ) -> Result<SavedArticle, AppError> {
        for _ in 0..MAX_CREATE_ATTEMPTS {
            let filename = derive_filename(display_name, lowercase, stamp());
            let file_path = self.dir.join(&filename);

            // create_new makes the existence check and the creation one step.
            let mut file = match OpenOptions::new()
                .write(true)
                .create_new(true)
                .open(&file_path)
                .await
            {
                Ok(file) => file,
                Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                    tracing::warn!("Article name collision on {}, retrying", filename);
                    continue;
                }
                Err(e) => {
                    return Err(AppError::PersistenceFailure(format!(
                        "{}: {}",
                        file_path.display(),
                        e
                    )));
                }
            };

            let written = async {
                file.write_all(document.as_bytes()).await?;
                file.sync_all().await
            }
            .await;

            if let Err(e) = written {
                drop(file);
                if let Err(cleanup) = fs::remove_file(&file_path).await {
                    tracing::warn!("Failed to remove partial article {}: {}", file_path.display(), cleanup);
                }
                return Err(AppError::PersistenceFailure(format!(
                    "{}: {}",
                    file_path.display(),
                    e
                )));
            }

            let public_url = self.public_url(&filename);
            return Ok(SavedArticle {
                filename,
                file_path,
                public_url,
            });
        }

        Err(AppError::PersistenceFailure(format!(
            "no free filename in {} after {} attempts",
            self.dir.display(),
            MAX_CREATE_ATTEMPTS
        )))
    }
}
