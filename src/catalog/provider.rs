//! Catalog providers
//!
//! A provider hands out the raw room documents; the remote document store of
//! the live site sits behind this trait. A JSON file provider and an in-memory
//! provider are included.

use crate::catalog::raw::RawRoomDocument;
use std::future::Future;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Errors raised while fetching raw room documents
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Catalog file not found
    #[error("Catalog file not found: {0}")]
    NotFound(String),

    /// Catalog file read error
    #[error("Failed to read catalog: {0}")]
    Io(#[from] std::io::Error),

    /// Catalog is not a JSON array of objects
    #[error("Failed to parse catalog: {0}")]
    Json(#[from] serde_json::Error),

    /// Provider-specific failure
    #[error("Catalog provider failed: {0}")]
    Provider(String),
}

/// Source of raw room documents
pub trait CatalogProvider {
    /// Fetch every room document
    fn fetch_rooms(&self) -> impl Future<Output = Result<Vec<RawRoomDocument>, CatalogError>> + Send;
}

/// Provider reading a JSON array of room documents from disk
#[derive(Debug, Clone)]
pub struct JsonFileCatalogProvider {
    path: PathBuf,
}

impl JsonFileCatalogProvider {
    /// Create a provider for the given file
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self { path: path.as_ref().to_path_buf() }
    }

    /// Path of the catalog file
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CatalogProvider for JsonFileCatalogProvider {
    async fn fetch_rooms(&self) -> Result<Vec<RawRoomDocument>, CatalogError> {
        let content = tokio::fs::read_to_string(&self.path).await.map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => CatalogError::NotFound(self.path.display().to_string()),
            _ => CatalogError::Io(e),
        })?;
        let documents: Vec<RawRoomDocument> = serde_json::from_str(&content)?;

        debug!(path = %self.path.display(), count = documents.len(), "read catalog file");
        Ok(documents)
    }
}

/// Provider serving a fixed set of documents
#[derive(Debug, Clone, Default)]
pub struct StaticCatalogProvider {
    documents: Vec<RawRoomDocument>,
}

impl StaticCatalogProvider {
    /// Create a provider over the given documents
    pub fn new(documents: Vec<RawRoomDocument>) -> Self {
        Self { documents }
    }
}

impl CatalogProvider for StaticCatalogProvider {
    async fn fetch_rooms(&self) -> Result<Vec<RawRoomDocument>, CatalogError> {
        Ok(self.documents.clone())
    }
}
