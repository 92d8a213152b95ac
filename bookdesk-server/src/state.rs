//! Application state

use anyhow::Result;
use bookdesk_core::model::Book;
use bookdesk_core::MemoryCollection;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::Mutex;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// The collection served over HTTP
    pub collection: Arc<MemoryCollection>,

    /// Where the collection is persisted, if anywhere
    pub data_file: Option<PathBuf>,

    /// Serializes writes to the data file
    save_lock: Arc<Mutex<()>>,
}

/// Load a collection from a JSON file, treating a missing file as empty
pub async fn load_books(path: &Path) -> Result<Vec<Book>> {
    // Read file directly, handle NotFound as empty collection
    match tokio::fs::read_to_string(path).await {
        Ok(data) => Ok(serde_json::from_str(&data)?),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Vec::new()),
        Err(e) => Err(e.into()),
    }
}

/// Save a collection to a JSON file atomically
/// Writes to a temp file then renames to avoid partial writes
pub async fn save_books(path: &Path, books: &[Book]) -> Result<()> {
    let data = serde_json::to_string_pretty(books)?;

    // Write to temp file in same directory (ensures same filesystem for rename)
    let temp_path = path.with_extension("json.tmp");
    tokio::fs::write(&temp_path, &data).await?;

    // Atomic rename
    tokio::fs::rename(&temp_path, path).await?;
    Ok(())
}

impl AppState {
    /// State with an empty, unpersisted collection
    pub fn in_memory() -> Self {
        Self::with_collection(Arc::new(MemoryCollection::new()), None)
    }

    pub fn with_collection(collection: Arc<MemoryCollection>, data_file: Option<PathBuf>) -> Self {
        Self {
            collection,
            data_file,
            save_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Create state, loading the collection from `data_file` when given
    pub async fn load(data_file: Option<PathBuf>) -> Result<Self> {
        let books = match &data_file {
            Some(path) => match load_books(path).await {
                Ok(books) => books,
                Err(e) => {
                    tracing::warn!("Failed to load {}, starting empty: {}", path.display(), e);
                    Vec::new()
                }
            },
            None => Vec::new(),
        };
        tracing::info!("Serving {} books", books.len());

        Ok(Self::with_collection(
            Arc::new(MemoryCollection::with_books(books)),
            data_file,
        ))
    }

    /// Write the collection to the data file, if one is configured
    pub async fn persist(&self) -> Result<()> {
        let Some(path) = &self.data_file else {
            return Ok(());
        };
        let _guard = self.save_lock.lock().await;
        let books = self.collection.snapshot().await;
        save_books(path, &books).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bookdesk_core::model::{BookFormData, Genre};
    use bookdesk_core::Collection;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let books = load_books(&dir.path().join("absent.json")).await.unwrap();
        assert!(books.is_empty());
    }

    #[tokio::test]
    async fn test_persist_and_reload() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("books.json");

        let state = AppState::load(Some(path.clone())).await.unwrap();
        state
            .collection
            .create(&BookFormData::new("Emma", "Jane Austen", Genre::Romance, 1815))
            .await
            .unwrap();
        state.persist().await.unwrap();
        assert!(!path.with_extension("json.tmp").exists());

        let reloaded = AppState::load(Some(path)).await.unwrap();
        let books = reloaded.collection.snapshot().await;
        assert_eq!(books.len(), 1);
        assert_eq!(books[0].title, "Emma");
    }

    #[tokio::test]
    async fn test_corrupt_file_starts_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("books.json");
        tokio::fs::write(&path, "not json").await.unwrap();

        let state = AppState::load(Some(path)).await.unwrap();
        assert!(state.collection.snapshot().await.is_empty());
    }
}
