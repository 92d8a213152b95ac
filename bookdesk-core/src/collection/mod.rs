//! Remote collection abstraction
//!
//! Books are persisted in a document collection reachable over HTTP. The store only
//! talks to it through the [`Collection`] trait, so tests and the development server
//! can swap in [`MemoryCollection`].

mod http;
mod memory;

pub use http::HttpCollection;
pub use memory::MemoryCollection;

use crate::error::CollectionResult;
use crate::model::{BookFormData, RemoteBook};
use async_trait::async_trait;

/// A remote collection of book documents
#[async_trait]
pub trait Collection: Send + Sync {
    /// Fetch every document in the collection
    async fn list(&self) -> CollectionResult<Vec<RemoteBook>>;

    /// Create a document; the result carries the assigned identifier
    async fn create(&self, data: &BookFormData) -> CollectionResult<RemoteBook>;

    /// Replace the document at `id`
    ///
    /// The returned record is not guaranteed to carry the identifier.
    async fn update(&self, id: &str, data: &BookFormData) -> CollectionResult<RemoteBook>;

    /// Delete the document at `id`
    async fn remove(&self, id: &str) -> CollectionResult<()>;
}
