use crate::domain::Title;
use anyhow::{anyhow, Context, Result};
use std::path::PathBuf;

#[derive(Clone, Debug)]
pub struct WikiConfig {
    pub bind_addr: String,
    /// Canonical directory holding the `<title>.txt` files.
    pub data_dir: PathBuf,
    pub template_dir: PathBuf,
    /// Where `/` redirects to.
    pub front_page: Title,
}

impl WikiConfig {
    /// Load configuration from environment variables.
    ///
    /// - `WIKI_BIND_ADDR`: listen address (default: "0.0.0.0:8080")
    /// - `WIKI_DATA_DIR`: page directory, created if missing (default: ".")
    /// - `WIKI_TEMPLATE_DIR`: directory with view.html and edit.html (default: "./tmpl")
    /// - `WIKI_FRONT_PAGE`: title served at `/` (default: "FrontPage")
    pub fn from_env() -> Result<Self> {
        let bind_addr =
            std::env::var("WIKI_BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());

        let raw_data_dir = std::env::var("WIKI_DATA_DIR").unwrap_or_else(|_| ".".to_string());
        std::fs::create_dir_all(&raw_data_dir)
            .with_context(|| format!("Failed to create WIKI_DATA_DIR {}", raw_data_dir))?;
        let data_dir = std::fs::canonicalize(&raw_data_dir).with_context(|| {
            format!("Failed to resolve WIKI_DATA_DIR {} to an absolute path", raw_data_dir)
        })?;

        let template_dir = PathBuf::from(
            std::env::var("WIKI_TEMPLATE_DIR").unwrap_or_else(|_| "./tmpl".to_string()),
        );

        let raw_front_page =
            std::env::var("WIKI_FRONT_PAGE").unwrap_or_else(|_| "FrontPage".to_string());
        let front_page = Title::parse(&raw_front_page)
            .ok_or_else(|| anyhow!("WIKI_FRONT_PAGE {:?} is not a valid title", raw_front_page))?;

        tracing::info!(
            bind_addr = %bind_addr,
            data_dir = %data_dir.display(),
            template_dir = %template_dir.display(),
            front_page = %front_page,
            "configuration loaded"
        );

        Ok(Self {
            bind_addr,
            data_dir,
            template_dir,
            front_page,
        })
    }
}
