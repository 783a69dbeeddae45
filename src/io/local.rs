use crate::domain::{Page, Title};
use crate::io::{verify_page_path, PageStore, StoreError};
use async_trait::async_trait;
use std::path::PathBuf;
use tokio::io::AsyncWriteExt;

/// Stores each page as `<title>.txt` directly inside `root_path`.
pub struct FilePageStore {
    pub root_path: PathBuf,
}

impl FilePageStore {
    pub fn new(root_path: PathBuf) -> Self {
        Self { root_path }
    }

    async fn page_path(&self, title: &Title) -> Result<PathBuf, StoreError> {
        verify_page_path(&self.root_path, &title.filename()).await
    }
}

#[async_trait]
impl PageStore for FilePageStore {
    async fn load(&self, title: &Title) -> Result<Page, StoreError> {
        let path = self.page_path(title).await?;

        match tokio::fs::read(&path).await {
            Ok(body) => {
                tracing::debug!(title = %title, bytes = body.len(), "page loaded");
                Ok(Page::new(title.clone(), body))
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(StoreError::NotFound(title.clone()))
            }
            Err(source) => Err(StoreError::Io {
                title: title.clone(),
                source,
            }),
        }
    }

    // create or truncate, no temp file + rename
    async fn save(&self, page: &Page) -> Result<(), StoreError> {
        let path = self.page_path(&page.title).await?;
        let io_err = |source: std::io::Error| StoreError::Io {
            title: page.title.clone(),
            source,
        };

        let mut options = tokio::fs::OpenOptions::new();
        options.write(true).create(true).truncate(true);
        #[cfg(unix)]
        options.mode(0o600);

        let mut file = options.open(&path).await.map_err(io_err)?;
        file.write_all(&page.body).await.map_err(io_err)?;
        file.flush().await.map_err(io_err)?;

        tracing::debug!(title = %page.title, bytes = page.body.len(), "page saved");
        Ok(())
    }
}
