//! Terminal rendering of store state

use bookdesk_core::model::Book;
use bookdesk_core::validation::Field;
use bookdesk_core::{page_window, FieldErrors, Notification, NotificationKind, PageLink};

/// Print notifications; errors go to stderr
pub fn print_notifications(notifications: &[Notification]) {
    for n in notifications {
        match n.kind {
            NotificationKind::Error => eprintln!("[{}] {}", n.kind, n.message),
            NotificationKind::Success | NotificationKind::Info => {
                println!("[{}] {}", n.kind, n.message)
            }
        }
    }
}

/// Print one message per invalid field
pub fn print_field_errors(errors: &FieldErrors) {
    for (field, message) in errors.iter() {
        let label = match field {
            Field::Title => "--title",
            Field::Author => "--author",
            Field::Genre => "--genre",
            Field::PublishedYear => "--year",
            Field::Status => "--status",
        };
        eprintln!("{}: {}", label, message);
    }
}

fn clip(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        text.to_string()
    } else {
        let mut clipped: String = text.chars().take(width.saturating_sub(1)).collect();
        clipped.push('…');
        clipped
    }
}

/// Print books as an aligned table
pub fn print_table(books: &[Book]) {
    if books.is_empty() {
        println!("No books found");
        return;
    }

    println!(
        "{:<32}  {:<24}  {:<15}  {:>4}  {:<9}  {}",
        "TITLE", "AUTHOR", "GENRE", "YEAR", "STATUS", "ID"
    );
    for book in books {
        println!(
            "{:<32}  {:<24}  {:<15}  {:>4}  {:<9}  {}",
            clip(&book.title, 32),
            clip(&book.author, 24),
            book.genre,
            book.published_year,
            book.status,
            book.id
        );
    }
}

/// Render the compact pager, marking the current page
pub fn pager_line(current: usize, total: usize) -> String {
    page_window(current, total)
        .into_iter()
        .map(|link| match link {
            PageLink::Page(p) if p == current => format!("[{}]", p),
            PageLink::Page(p) => p.to_string(),
            PageLink::Ellipsis => "...".to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Print the page position; nothing when everything fits on one page
pub fn print_pager(current: usize, total: usize) {
    if total <= 1 {
        return;
    }
    println!();
    println!("Showing page {} of {}", current, total);
    println!("{}", pager_line(current, total));
}
