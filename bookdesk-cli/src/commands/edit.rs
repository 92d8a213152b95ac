//! Edit command implementation

use crate::output;
use anyhow::{bail, Result};
use bookdesk_core::{BookDraft, BookStore};

/// Fields to change; `None` keeps the current value
#[derive(Debug, Default)]
pub struct Changes {
    pub title: Option<String>,
    pub author: Option<String>,
    pub genre: Option<String>,
    pub published_year: Option<i32>,
    pub status: Option<String>,
}

impl Changes {
    /// Overlay the changes on a draft of the current record
    fn apply(self, mut draft: BookDraft) -> BookDraft {
        if let Some(title) = self.title {
            draft.title = title;
        }
        if let Some(author) = self.author {
            draft.author = author;
        }
        if let Some(genre) = self.genre {
            draft.genre = genre;
        }
        if let Some(year) = self.published_year {
            draft.published_year = Some(year);
        }
        if let Some(status) = self.status {
            draft.status = status;
        }
        draft
    }
}

/// Replace a book with its current fields plus `changes`
pub async fn edit(store: &BookStore, id: &str, changes: Changes) -> Result<()> {
    if !store.refresh().await {
        output::print_notifications(&store.notifications().await);
        bail!("Could not fetch books");
    }

    let Some(current) = store.find(id).await else {
        bail!("No book with id {}", id);
    };

    let draft = changes.apply(BookDraft::from(&current.form_data()));
    let data = match draft.validate_now() {
        Ok(data) => data,
        Err(errors) => {
            output::print_field_errors(&errors);
            bail!("Invalid book");
        }
    };

    let updated = store.update(id, data).await;
    output::print_notifications(&store.notifications().await);

    if updated.is_none() {
        bail!("Book was not updated");
    }
    Ok(())
}
