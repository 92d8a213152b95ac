//! Delete command implementation

use crate::output;
use anyhow::{bail, Context, Result};
use bookdesk_core::BookStore;
use std::io::{self, BufRead, Write};

/// Ask before deleting; anything but y/yes declines
fn confirm(title: &str, author: &str) -> Result<bool> {
    print!(
        "Are you sure you want to delete \"{}\" by {}? This action cannot be undone. [y/N] ",
        title, author
    );
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin()
        .lock()
        .read_line(&mut answer)
        .context("Failed to read confirmation")?;
    Ok(matches!(
        answer.trim().to_ascii_lowercase().as_str(),
        "y" | "yes"
    ))
}

/// Delete a book after confirmation
pub async fn delete(store: &BookStore, id: &str, yes: bool) -> Result<()> {
    if !store.refresh().await {
        output::print_notifications(&store.notifications().await);
        bail!("Could not fetch books");
    }

    let Some(book) = store.find(id).await else {
        bail!("No book with id {}", id);
    };

    if !yes && !confirm(&book.title, &book.author)? {
        println!("Cancelled");
        return Ok(());
    }

    let removed = store.remove(id).await;
    output::print_notifications(&store.notifications().await);

    if !removed {
        bail!("Book was not deleted");
    }
    Ok(())
}
