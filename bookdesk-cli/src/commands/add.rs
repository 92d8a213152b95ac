//! Add command implementation

use crate::output;
use anyhow::{bail, Result};
use bookdesk_core::{BookDraft, BookStore};

/// Validate a draft and add it to the collection
pub async fn add(store: &BookStore, draft: BookDraft) -> Result<()> {
    let data = match draft.validate_now() {
        Ok(data) => data,
        Err(errors) => {
            output::print_field_errors(&errors);
            bail!("Invalid book");
        }
    };

    let added = store.add(data).await;
    output::print_notifications(&store.notifications().await);

    match added {
        Some(book) => {
            println!("{}", book.id);
            Ok(())
        }
        None => bail!("Book was not added"),
    }
}
