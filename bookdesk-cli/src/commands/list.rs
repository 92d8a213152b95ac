//! List command implementation

use crate::output;
use anyhow::{bail, Result};
use bookdesk_core::model::{BookStatus, Genre};
use bookdesk_core::BookStore;

/// Search, filters and page requested on the command line
pub struct ListQuery {
    pub search: Option<String>,
    pub genre: Option<Genre>,
    pub status: Option<BookStatus>,
    pub page: usize,
}

/// Fetch the collection and print one filtered page of it
pub async fn list(store: &BookStore, query: ListQuery, json: bool) -> Result<()> {
    if !store.refresh().await {
        output::print_notifications(&store.notifications().await);
        bail!("Could not fetch books");
    }

    store
        .set_search_term(query.search.unwrap_or_default())
        .await;
    store.set_genre_filter(query.genre).await;
    store.set_status_filter(query.status).await;
    store.set_current_page(query.page).await;

    let snapshot = store.snapshot().await;
    tracing::debug!(
        "{} matches, page {} of {}",
        snapshot.total_matches,
        snapshot.current_page,
        snapshot.total_pages
    );

    if json {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
    } else {
        output::print_table(&snapshot.books);
        output::print_pager(snapshot.current_page, snapshot.total_pages);
    }

    Ok(())
}
