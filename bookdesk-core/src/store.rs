//! The book store: local copy of the remote collection plus view state
//!
//! A [`BookStore`] is built once and handed to every consumer by cloning the
//! handle; all clones share the same state. Mutations go to the remote
//! collection first and touch the local set only after the remote call
//! succeeded. Failures never escape the store: they fall back to leaving the
//! local set alone (or emptying it, for a failed fetch) and raise an error
//! notification.
//!
//! Operations are not serialized against each other. Two mutations that are in
//! flight at the same time apply their local effects in completion order.

use crate::collection::Collection;
use crate::debounce::Debouncer;
use crate::model::{Book, BookFormData, BookStatus, Genre, RemoteBook};
use crate::notify::{Notification, NotificationId, NotificationKind, NotificationQueue};
use crate::view::{derive_view, Filters, PAGE_SIZE};
use serde::Serialize;
use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;
use tokio::sync::RwLock;

/// Quiet period before a debounced search term is applied
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(300);

const FETCH_FAILED: &str = "Failed to fetch books";
const ADDED: &str = "Book added successfully";
const ADD_FAILED: &str = "Failed to add book";
const UPDATED: &str = "Book updated successfully";
const UPDATE_FAILED: &str = "Failed to update book";
const DELETED: &str = "Book deleted successfully";
const DELETE_FAILED: &str = "Failed to delete book";
const BUSY: &str = "Another change to this book is still in progress";

/// Store behaviour switches
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StoreOptions {
    /// Reject an update or delete on a book that already has one in flight
    pub guard_in_flight: bool,
}

#[derive(Debug, Clone)]
struct ViewState {
    filters: Filters,
    page: usize,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            filters: Filters::default(),
            page: 1,
        }
    }
}

/// Everything a consumer needs to render the current state
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StoreSnapshot {
    /// Books on the current page
    pub books: Vec<Book>,
    pub loading: bool,
    pub error: Option<String>,
    pub notifications: Vec<Notification>,
    pub current_page: usize,
    pub total_pages: usize,
    pub total_matches: usize,
    pub page_size: usize,
    pub filters: Filters,
}

/// Shared handle to the book store
#[derive(Clone)]
pub struct BookStore {
    collection: Arc<dyn Collection>,
    options: StoreOptions,
    books: Arc<RwLock<Vec<Book>>>,
    view: Arc<RwLock<ViewState>>,
    last_error: Arc<RwLock<Option<String>>>,
    in_flight: Arc<AtomicUsize>,
    busy_ids: Arc<Mutex<HashSet<String>>>,
    notifications: NotificationQueue,
    search_debounce: Debouncer,
}

/// Marks the store as loading for as long as it lives
struct LoadingGuard(Arc<AtomicUsize>);

impl LoadingGuard {
    fn new(counter: &Arc<AtomicUsize>) -> Self {
        counter.fetch_add(1, Ordering::SeqCst);
        Self(counter.clone())
    }
}

impl Drop for LoadingGuard {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}

/// Holds a book id in the busy set until dropped
struct BusyGuard {
    ids: Option<Arc<Mutex<HashSet<String>>>>,
    id: String,
}

impl Drop for BusyGuard {
    fn drop(&mut self) {
        if let Some(ids) = &self.ids {
            ids.lock()
                .unwrap_or_else(PoisonError::into_inner)
                .remove(&self.id);
        }
    }
}

impl BookStore {
    /// Create a store on top of `collection` with default options
    pub fn new(collection: Arc<dyn Collection>) -> Self {
        Self::with_options(collection, StoreOptions::default())
    }

    pub fn with_options(collection: Arc<dyn Collection>, options: StoreOptions) -> Self {
        Self {
            collection,
            options,
            books: Arc::new(RwLock::new(Vec::new())),
            view: Arc::new(RwLock::new(ViewState::default())),
            last_error: Arc::new(RwLock::new(None)),
            in_flight: Arc::new(AtomicUsize::new(0)),
            busy_ids: Arc::new(Mutex::new(HashSet::new())),
            notifications: NotificationQueue::new(),
            search_debounce: Debouncer::new(SEARCH_DEBOUNCE),
        }
    }

    fn begin(&self) -> LoadingGuard {
        LoadingGuard::new(&self.in_flight)
    }

    /// Reserve `id` for one mutation; `None` if the guard is on and it is taken
    fn claim(&self, id: &str) -> Option<BusyGuard> {
        if !self.options.guard_in_flight {
            return Some(BusyGuard {
                ids: None,
                id: id.to_string(),
            });
        }

        let mut busy = self.busy_ids.lock().unwrap_or_else(PoisonError::into_inner);
        if !busy.insert(id.to_string()) {
            return None;
        }
        Some(BusyGuard {
            ids: Some(self.busy_ids.clone()),
            id: id.to_string(),
        })
    }

    // ========================================================================
    // Mutations
    // ========================================================================

    /// Replace the local set with the remote collection's contents
    ///
    /// A failed fetch empties the local set, records the error and raises an
    /// error notification. Returns whether the fetch succeeded.
    pub async fn refresh(&self) -> bool {
        let _loading = self.begin();
        *self.last_error.write().await = None;

        match self.collection.list().await {
            Ok(remote) => {
                let books: Vec<Book> = remote.into_iter().filter_map(persisted).collect();
                tracing::debug!("Fetched {} books", books.len());
                *self.books.write().await = books;
                self.settle_page().await;
                true
            }
            Err(e) => {
                tracing::error!("Error fetching books: {}", e);
                self.books.write().await.clear();
                self.settle_page().await;
                *self.last_error.write().await = Some(FETCH_FAILED.to_string());
                self.notify(NotificationKind::Error, FETCH_FAILED).await;
                false
            }
        }
    }

    /// Create a book remotely and append it locally
    pub async fn add(&self, data: BookFormData) -> Option<Book> {
        let _loading = self.begin();

        let created = match self.collection.create(&data).await {
            Ok(remote) => persisted(remote),
            Err(e) => {
                tracing::error!("Error creating book: {}", e);
                None
            }
        };
        let Some(book) = created else {
            self.notify(NotificationKind::Error, ADD_FAILED).await;
            return None;
        };

        {
            let mut books = self.books.write().await;
            match books.iter_mut().find(|b| b.id == book.id) {
                Some(existing) => *existing = book.clone(),
                None => books.push(book.clone()),
            }
        }
        self.notify(NotificationKind::Success, ADDED).await;
        Some(book)
    }

    /// Replace a book remotely, then locally
    pub async fn update(&self, id: &str, data: BookFormData) -> Option<Book> {
        let Some(_busy) = self.claim(id) else {
            tracing::debug!("Update of {} rejected, another change is in flight", id);
            self.notify(NotificationKind::Info, BUSY).await;
            return None;
        };
        let _loading = self.begin();

        let book = match self.collection.update(id, &data).await {
            // The response does not always echo the id
            Ok(remote) => remote.with_id(id),
            Err(e) => {
                tracing::error!("Error updating book {}: {}", id, e);
                self.notify(NotificationKind::Error, UPDATE_FAILED).await;
                return None;
            }
        };

        {
            let mut books = self.books.write().await;
            if let Some(existing) = books.iter_mut().find(|b| b.id == id) {
                *existing = book.clone();
            }
        }
        self.settle_page().await;
        self.notify(NotificationKind::Success, UPDATED).await;
        Some(book)
    }

    /// Delete a book remotely, then locally. Returns whether it was deleted.
    pub async fn remove(&self, id: &str) -> bool {
        let Some(_busy) = self.claim(id) else {
            tracing::debug!("Delete of {} rejected, another change is in flight", id);
            self.notify(NotificationKind::Info, BUSY).await;
            return false;
        };
        let _loading = self.begin();

        if let Err(e) = self.collection.remove(id).await {
            tracing::error!("Error deleting book {}: {}", id, e);
            self.notify(NotificationKind::Error, DELETE_FAILED).await;
            return false;
        }

        self.books.write().await.retain(|b| b.id != id);
        self.settle_page().await;
        self.notify(NotificationKind::Success, DELETED).await;
        true
    }

    // ========================================================================
    // Filters and paging
    // ========================================================================

    pub async fn set_search_term(&self, term: impl Into<String>) {
        self.view.write().await.filters.search = term.into();
        self.settle_page().await;
    }

    /// Apply a search term once typing has paused for [`SEARCH_DEBOUNCE`]
    ///
    /// Must be called from within a tokio runtime.
    pub fn search(&self, term: impl Into<String>) {
        let store = self.clone();
        let term = term.into();
        self.search_debounce.schedule(async move {
            store.set_search_term(term).await;
        });
    }

    pub async fn set_genre_filter(&self, genre: Option<Genre>) {
        self.view.write().await.filters.genre = genre;
        self.settle_page().await;
    }

    pub async fn set_status_filter(&self, status: Option<BookStatus>) {
        self.view.write().await.filters.status = status;
        self.settle_page().await;
    }

    /// Select a page (1-indexed), clamped to the pages the current filters produce
    pub async fn set_current_page(&self, page: usize) {
        self.view.write().await.page = page;
        self.settle_page().await;
    }

    /// Pull the stored page back into `1..=total_pages`
    async fn settle_page(&self) {
        let mut view = self.view.write().await;
        let matches = self
            .books
            .read()
            .await
            .iter()
            .filter(|b| view.filters.matches(b))
            .count();
        let total_pages = matches.div_ceil(PAGE_SIZE);
        view.page = view.page.clamp(1, total_pages.max(1));
    }

    pub async fn filters(&self) -> Filters {
        self.view.read().await.filters.clone()
    }

    // ========================================================================
    // Notifications
    // ========================================================================

    /// Raise a notification; it expires on its own
    pub async fn notify(&self, kind: NotificationKind, message: impl Into<String>) -> NotificationId {
        self.notifications.push(kind, message).await
    }

    pub async fn dismiss(&self, id: NotificationId) -> bool {
        self.notifications.dismiss(id).await
    }

    pub async fn notifications(&self) -> Vec<Notification> {
        self.notifications.list().await
    }

    // ========================================================================
    // Reads
    // ========================================================================

    /// Whether any operation is waiting on the remote collection
    pub fn is_loading(&self) -> bool {
        self.in_flight.load(Ordering::SeqCst) > 0
    }

    pub async fn last_error(&self) -> Option<String> {
        self.last_error.read().await.clone()
    }

    /// The full local set, in fetch and insertion order
    pub async fn books(&self) -> Vec<Book> {
        self.books.read().await.clone()
    }

    pub async fn find(&self, id: &str) -> Option<Book> {
        self.books.read().await.iter().find(|b| b.id == id).cloned()
    }

    /// Derive the current page and collect the rest of the visible state
    pub async fn snapshot(&self) -> StoreSnapshot {
        let ViewState { filters, page } = self.view.read().await.clone();
        let view = derive_view(&self.books.read().await, &filters, page, PAGE_SIZE);

        StoreSnapshot {
            books: view.books,
            loading: self.is_loading(),
            error: self.last_error().await,
            notifications: self.notifications().await,
            current_page: view.page,
            total_pages: view.total_pages,
            total_matches: view.total_matches,
            page_size: PAGE_SIZE,
            filters,
        }
    }
}

/// Keep only records the remote has assigned an id to
fn persisted(remote: RemoteBook) -> Option<Book> {
    let title = remote.data.title.clone();
    let book = remote.into_book();
    if book.is_none() {
        tracing::warn!("Dropping record without identifier: {}", title);
    }
    book
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collection::MemoryCollection;
    use crate::error::{CollectionError, CollectionResult};
    use async_trait::async_trait;
    use tokio::sync::Semaphore;

    fn data(title: &str, author: &str) -> BookFormData {
        BookFormData::new(title, author, Genre::Fiction, 1990)
    }

    async fn seeded(n: usize) -> (BookStore, Arc<MemoryCollection>) {
        let collection = Arc::new(MemoryCollection::new());
        for i in 0..n {
            collection
                .create(&data(&format!("Book {}", i), "Author"))
                .await
                .unwrap();
        }
        let store = BookStore::new(collection.clone());
        assert!(store.refresh().await);
        (store, collection)
    }

    fn kinds(notifications: &[Notification]) -> Vec<NotificationKind> {
        notifications.iter().map(|n| n.kind).collect()
    }

    /// Collection whose list answer is fixed
    struct FixedList(Vec<RemoteBook>);

    #[async_trait]
    impl Collection for FixedList {
        async fn list(&self) -> CollectionResult<Vec<RemoteBook>> {
            Ok(self.0.clone())
        }
        async fn create(&self, data: &BookFormData) -> CollectionResult<RemoteBook> {
            Ok(RemoteBook {
                id: None,
                data: data.clone(),
            })
        }
        async fn update(&self, _id: &str, _data: &BookFormData) -> CollectionResult<RemoteBook> {
            Err(CollectionError::Status(500))
        }
        async fn remove(&self, _id: &str) -> CollectionResult<()> {
            Err(CollectionError::Status(500))
        }
    }

    /// Holds calls for books titled `held` until a permit is released
    struct Gated {
        inner: MemoryCollection,
        held: String,
        gate: Semaphore,
    }

    impl Gated {
        async fn wait(&self, title: &str) {
            if title == self.held {
                self.gate.acquire().await.unwrap().forget();
            }
        }
    }

    #[async_trait]
    impl Collection for Gated {
        async fn list(&self) -> CollectionResult<Vec<RemoteBook>> {
            self.inner.list().await
        }
        async fn create(&self, data: &BookFormData) -> CollectionResult<RemoteBook> {
            self.wait(&data.title).await;
            self.inner.create(data).await
        }
        async fn update(&self, id: &str, data: &BookFormData) -> CollectionResult<RemoteBook> {
            self.wait(&data.title).await;
            self.inner.update(id, data).await
        }
        async fn remove(&self, id: &str) -> CollectionResult<()> {
            self.inner.remove(id).await
        }
    }

    async fn until_loading(store: &BookStore) {
        for _ in 0..100 {
            if store.is_loading() {
                return;
            }
            tokio::task::yield_now().await;
        }
        panic!("store never started loading");
    }

    #[tokio::test]
    async fn test_refresh_replaces_set() {
        let (store, collection) = seeded(3).await;
        assert_eq!(store.books().await.len(), 3);

        collection
            .create(&data("Fresh", "Someone"))
            .await
            .unwrap();
        assert!(store.refresh().await);
        let titles: Vec<_> = store.books().await.into_iter().map(|b| b.title).collect();
        assert_eq!(titles, vec!["Book 0", "Book 1", "Book 2", "Fresh"]);
        assert!(!store.is_loading());
    }

    #[tokio::test]
    async fn test_refresh_drops_records_without_id() {
        let with_id = RemoteBook {
            id: Some("a".to_string()),
            data: data("Kept", "X"),
        };
        let without_id = RemoteBook {
            id: None,
            data: data("Dropped", "X"),
        };
        let store = BookStore::new(Arc::new(FixedList(vec![with_id, without_id])));
        store.refresh().await;

        let books = store.books().await;
        assert_eq!(books.len(), 1);
        assert_eq!(books[0].title, "Kept");
    }

    #[tokio::test]
    async fn test_refresh_failure_empties_set_and_notifies() {
        let (store, collection) = seeded(2).await;
        collection.set_offline(true);

        assert!(!store.refresh().await);
        assert!(store.books().await.is_empty());
        assert_eq!(store.last_error().await.as_deref(), Some("Failed to fetch books"));
        let notifications = store.notifications().await;
        assert_eq!(kinds(&notifications), vec![NotificationKind::Error]);
        assert_eq!(notifications[0].message, "Failed to fetch books");
        assert!(!store.is_loading());

        // The error clears on the next successful fetch
        collection.set_offline(false);
        assert!(store.refresh().await);
        assert_eq!(store.last_error().await, None);
        assert_eq!(store.books().await.len(), 2);
    }

    #[tokio::test]
    async fn test_add_appends_once_at_end() {
        let (store, _collection) = seeded(2).await;

        let book = store.add(data("New", "Writer")).await.unwrap();
        let books = store.books().await;
        assert_eq!(books.len(), 3);
        assert_eq!(books.last(), Some(&book));
        assert_eq!(books.iter().filter(|b| b.id == book.id).count(), 1);

        let notifications = store.notifications().await;
        assert_eq!(kinds(&notifications), vec![NotificationKind::Success]);
        assert_eq!(notifications[0].message, "Book added successfully");
    }

    #[tokio::test]
    async fn test_add_failure_leaves_set_unchanged() {
        let (store, collection) = seeded(2).await;
        let before = store.books().await;
        collection.set_offline(true);

        assert!(store.add(data("Lost", "Nobody")).await.is_none());
        assert_eq!(store.books().await, before);
        let notifications = store.notifications().await;
        assert_eq!(kinds(&notifications), vec![NotificationKind::Error]);
        assert_eq!(notifications[0].message, "Failed to add book");
        assert!(!store.is_loading());
    }

    #[tokio::test]
    async fn test_add_without_assigned_id_is_a_failure() {
        let store = BookStore::new(Arc::new(FixedList(Vec::new())));
        assert!(store.add(data("Ghost", "Nobody")).await.is_none());
        assert!(store.books().await.is_empty());
        assert_eq!(
            kinds(&store.notifications().await),
            vec![NotificationKind::Error]
        );
    }

    #[tokio::test]
    async fn test_update_keeps_id_and_other_records() {
        let (store, _collection) = seeded(3).await;
        let before = store.books().await;
        let target = before[1].id.clone();

        let changed = data("Renamed", "Other Author").with_status(BookStatus::Issued);
        let book = store.update(&target, changed.clone()).await.unwrap();
        assert_eq!(book.id, target);

        let after = store.books().await;
        assert_eq!(after[0], before[0]);
        assert_eq!(after[2], before[2]);
        assert_eq!(after[1], Book::from_parts(target, changed));
        assert_eq!(
            kinds(&store.notifications().await),
            vec![NotificationKind::Success]
        );
    }

    #[tokio::test]
    async fn test_update_failure_leaves_local_record() {
        let (store, collection) = seeded(1).await;
        let before = store.books().await;
        collection.set_offline(true);

        assert!(store.update(&before[0].id, data("Edit", "X")).await.is_none());
        assert_eq!(store.books().await, before);
        let notifications = store.notifications().await;
        assert_eq!(notifications[0].message, "Failed to update book");
    }

    #[tokio::test]
    async fn test_remove_keeps_order_of_others() {
        let (store, _collection) = seeded(4).await;
        let before = store.books().await;

        assert!(store.remove(&before[1].id).await);
        let after = store.books().await;
        assert!(after.iter().all(|b| b.id != before[1].id));
        assert_eq!(after, vec![before[0].clone(), before[2].clone(), before[3].clone()]);
        assert_eq!(
            store.notifications().await[0].message,
            "Book deleted successfully"
        );
    }

    #[tokio::test]
    async fn test_not_found_and_unreachable_look_the_same() {
        // Known imprecision: the user cannot tell a missing record from an outage
        let (store, collection) = seeded(1).await;
        assert!(!store.remove("no-such-id").await);

        collection.set_offline(true);
        let id = store.books().await[0].id.clone();
        assert!(!store.remove(&id).await);

        let notifications = store.notifications().await;
        assert_eq!(notifications.len(), 2);
        assert_eq!(notifications[0].kind, notifications[1].kind);
        assert_eq!(notifications[0].message, notifications[1].message);
        assert_eq!(store.books().await.len(), 1);
    }

    #[tokio::test]
    async fn test_loading_lasts_for_the_call() {
        let collection = Arc::new(Gated {
            inner: MemoryCollection::new(),
            held: "Slow".to_string(),
            gate: Semaphore::new(0),
        });
        let store = BookStore::new(collection.clone());
        assert!(!store.is_loading());

        let task = tokio::spawn({
            let store = store.clone();
            async move { store.add(data("Slow", "X")).await }
        });
        until_loading(&store).await;
        assert!(store.snapshot().await.loading);

        collection.gate.add_permits(1);
        assert!(task.await.unwrap().is_some());
        assert!(!store.is_loading());
    }

    #[tokio::test]
    async fn test_concurrent_updates_apply_in_completion_order() {
        let collection = Arc::new(Gated {
            inner: MemoryCollection::new(),
            held: "Slow".to_string(),
            gate: Semaphore::new(0),
        });
        let store = BookStore::new(collection.clone());
        let id = store.add(data("Original", "X")).await.unwrap().id;

        let slow = tokio::spawn({
            let store = store.clone();
            let id = id.clone();
            async move { store.update(&id, data("Slow", "X")).await }
        });
        until_loading(&store).await;

        // Issued later, finishes first
        store.update(&id, data("Fast", "X")).await.unwrap();
        assert_eq!(store.find(&id).await.unwrap().title, "Fast");

        collection.gate.add_permits(1);
        slow.await.unwrap().unwrap();
        assert_eq!(store.find(&id).await.unwrap().title, "Slow");
    }

    #[tokio::test]
    async fn test_in_flight_guard_rejects_second_mutation() {
        let collection = Arc::new(Gated {
            inner: MemoryCollection::new(),
            held: "Slow".to_string(),
            gate: Semaphore::new(0),
        });
        let store = BookStore::with_options(
            collection.clone(),
            StoreOptions {
                guard_in_flight: true,
            },
        );
        let id = store.add(data("Original", "X")).await.unwrap().id;

        let slow = tokio::spawn({
            let store = store.clone();
            let id = id.clone();
            async move { store.update(&id, data("Slow", "X")).await }
        });
        until_loading(&store).await;

        assert!(store.update(&id, data("Fast", "X")).await.is_none());
        assert!(!store.remove(&id).await);
        let last = store.notifications().await.pop().unwrap();
        assert_eq!(last.kind, NotificationKind::Info);
        assert_eq!(last.message, "Another change to this book is still in progress");

        collection.gate.add_permits(1);
        slow.await.unwrap().unwrap();

        // Released once the first mutation finished
        assert!(store.remove(&id).await);
        assert!(store.books().await.is_empty());
    }

    #[tokio::test]
    async fn test_snapshot_applies_filters_and_paging() {
        let (store, _collection) = seeded(23).await;

        store.set_current_page(3).await;
        let snapshot = store.snapshot().await;
        assert_eq!(snapshot.books.len(), 3);
        assert_eq!(snapshot.total_pages, 3);
        assert_eq!(snapshot.current_page, 3);
        assert_eq!(snapshot.page_size, PAGE_SIZE);

        // Narrowing the filter clamps the page
        store.set_search_term("book 1").await;
        let snapshot = store.snapshot().await;
        assert_eq!(snapshot.total_matches, 11);
        assert_eq!(snapshot.total_pages, 2);
        assert_eq!(snapshot.current_page, 2);
        assert_eq!(snapshot.books.len(), 1);

        store.set_genre_filter(Some(Genre::Fantasy)).await;
        let snapshot = store.snapshot().await;
        assert!(snapshot.books.is_empty());
        assert_eq!(snapshot.total_pages, 0);

        store.set_genre_filter(None).await;
        store.set_status_filter(Some(BookStatus::Available)).await;
        assert_eq!(store.snapshot().await.total_matches, 11);
        assert_eq!(
            store.filters().await.status,
            Some(BookStatus::Available)
        );
    }

    #[tokio::test]
    async fn test_page_stays_clamped_when_filter_widens_again() {
        let (store, collection) = seeded(25).await;

        store.set_current_page(3).await;
        assert_eq!(store.snapshot().await.current_page, 3);

        store.set_search_term("book 1").await;
        assert_eq!(store.snapshot().await.current_page, 2);

        store.set_search_term("").await;
        let snapshot = store.snapshot().await;
        assert_eq!(snapshot.total_pages, 3);
        assert_eq!(snapshot.current_page, 2);

        store.set_current_page(99).await;
        assert_eq!(store.snapshot().await.current_page, 3);

        // Emptying the last page moves back a page, and refilling it does not return
        for book in collection.snapshot().await.into_iter().skip(20) {
            assert!(store.remove(&book.id).await);
        }
        assert_eq!(store.snapshot().await.current_page, 2);

        store.add(data("Late arrival", "Author")).await.unwrap();
        let snapshot = store.snapshot().await;
        assert_eq!(snapshot.total_pages, 3);
        assert_eq!(snapshot.current_page, 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_debounced_search() {
        let (store, _collection) = seeded(3).await;

        store.search("Book");
        store.search("Book 2");
        assert_eq!(store.filters().await.search, "");

        tokio::time::sleep(SEARCH_DEBOUNCE + Duration::from_millis(1)).await;
        assert_eq!(store.filters().await.search, "Book 2");
        assert_eq!(store.snapshot().await.total_matches, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_notifications_expire_or_dismiss() {
        let (store, collection) = seeded(1).await;
        collection.set_offline(true);
        store.add(data("A", "X")).await;
        store.add(data("B", "X")).await;

        let notifications = store.notifications().await;
        assert_eq!(notifications.len(), 2);
        assert!(store.dismiss(notifications[0].id).await);
        assert!(!store.dismiss(notifications[0].id).await);
        assert_eq!(store.notifications().await.len(), 1);

        tokio::time::sleep(Duration::from_millis(5001)).await;
        assert!(store.notifications().await.is_empty());
    }
}
