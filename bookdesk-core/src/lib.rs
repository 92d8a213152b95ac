//! Bookdesk Core Library
//!
//! This crate provides the client-side book store for the Bookdesk book management system.
//! Books live in a remote document collection; the store keeps an in-memory copy, derives
//! filtered and paginated views from it, and reports the outcome of every change through
//! a queue of short-lived notifications.

pub mod collection;
pub mod config;
pub mod debounce;
pub mod error;
pub mod model;
pub mod notify;
pub mod store;
pub mod validation;
pub mod view;

pub use collection::{Collection, HttpCollection, MemoryCollection};
pub use config::ClientConfig;
pub use error::{CollectionError, CollectionResult, ConfigError};
pub use model::{Book, BookFormData, BookStatus, Genre, RemoteBook};
pub use notify::{Notification, NotificationId, NotificationKind, NotificationQueue};
pub use store::{BookStore, StoreOptions, StoreSnapshot};
pub use validation::{BookDraft, FieldErrors};
pub use view::{derive_view, page_window, Filters, PageLink, PageView, PAGE_SIZE};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_data_creation() {
        let data = BookFormData::new("Dune", "Frank Herbert", Genre::ScienceFiction, 1965);
        assert_eq!(data.title, "Dune");
        assert_eq!(data.status, BookStatus::Available);
    }
}
