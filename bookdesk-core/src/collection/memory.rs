//! In-memory collection (for testing and the development server)

use super::Collection;
use crate::error::{CollectionError, CollectionResult};
use crate::model::{Book, BookFormData, RemoteBook};
use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::RwLock;
use uuid::Uuid;

/// Collection held in process memory, in insertion order
#[derive(Default)]
pub struct MemoryCollection {
    books: RwLock<Vec<Book>>,
    offline: AtomicBool,
}

impl MemoryCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a collection pre-populated with `books`
    pub fn with_books(books: Vec<Book>) -> Self {
        Self {
            books: RwLock::new(books),
            offline: AtomicBool::new(false),
        }
    }

    /// While offline every call fails with a transport error
    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    /// Copy of the stored documents
    pub async fn snapshot(&self) -> Vec<Book> {
        self.books.read().await.clone()
    }

    fn ensure_online(&self) -> CollectionResult<()> {
        if self.offline.load(Ordering::SeqCst) {
            Err(CollectionError::Transport("collection is offline".to_string()))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl Collection for MemoryCollection {
    async fn list(&self) -> CollectionResult<Vec<RemoteBook>> {
        self.ensure_online()?;
        Ok(self
            .books
            .read()
            .await
            .iter()
            .map(|book| RemoteBook {
                id: Some(book.id.clone()),
                data: book.form_data(),
            })
            .collect())
    }

    async fn create(&self, data: &BookFormData) -> CollectionResult<RemoteBook> {
        self.ensure_online()?;
        let id = Uuid::new_v4().simple().to_string();
        self.books
            .write()
            .await
            .push(Book::from_parts(id.clone(), data.clone()));
        Ok(RemoteBook {
            id: Some(id),
            data: data.clone(),
        })
    }

    async fn update(&self, id: &str, data: &BookFormData) -> CollectionResult<RemoteBook> {
        self.ensure_online()?;
        let mut books = self.books.write().await;
        let book = books
            .iter_mut()
            .find(|b| b.id == id)
            .ok_or(CollectionError::Status(404))?;
        *book = Book::from_parts(id, data.clone());
        Ok(RemoteBook {
            id: None,
            data: data.clone(),
        })
    }

    async fn remove(&self, id: &str) -> CollectionResult<()> {
        self.ensure_online()?;
        let mut books = self.books.write().await;
        let before = books.len();
        books.retain(|b| b.id != id);
        if books.len() == before {
            return Err(CollectionError::Status(404));
        }
        Ok(())
    }
}
