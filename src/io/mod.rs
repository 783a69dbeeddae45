use crate::domain::{Page, Title};
use async_trait::async_trait;
use std::path::{Component, Path, PathBuf};

pub mod local;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// No backing file exists for the title.
    #[error("page not found: {0}")]
    NotFound(Title),

    /// The title resolved to a location outside the data directory.
    #[error("path escapes the data directory: {0}")]
    OutsideRoot(String),

    #[error("i/o error on page {title}: {source}")]
    Io {
        title: Title,
        #[source]
        source: std::io::Error,
    },
}

impl StoreError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound(_))
    }
}

// a page store can be shared between request tasks
// every call goes straight to the backing storage, there is no cache
#[async_trait]
pub trait PageStore: Send + Sync {
    async fn load(&self, title: &Title) -> Result<Page, StoreError>;
    async fn save(&self, page: &Page) -> Result<(), StoreError>;
}

/// Maps a filename onto `root`, refusing anything that is not a single plain
/// component directly inside it.
///
/// `root` is expected to be canonical already (see `WikiConfig::from_env`).
pub async fn verify_page_path(root: &Path, filename: &str) -> Result<PathBuf, StoreError> {
    let mut components = Path::new(filename).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) => {}
        _ => return Err(StoreError::OutsideRoot(filename.to_owned())),
    }

    let joined = root.join(filename);
    if joined.parent() != Some(root) {
        return Err(StoreError::OutsideRoot(filename.to_owned()));
    }

    // an existing file could be a symlink pointing somewhere else
    if let Ok(resolved) = tokio::fs::canonicalize(&joined).await {
        if !resolved.starts_with(root) {
            return Err(StoreError::OutsideRoot(filename.to_owned()));
        }
    }

    Ok(joined)
}
