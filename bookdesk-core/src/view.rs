//! Filtered, paginated views over the book set

use crate::model::{Book, BookStatus, Genre};
use serde::Serialize;

/// Number of books per page
pub const PAGE_SIZE: usize = 10;

/// Pagers with at most this many pages list every page
const MAX_PAGE_LINKS: usize = 5;

/// Active search and filter criteria
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Filters {
    /// Case-insensitive substring matched against title and author
    pub search: String,
    pub genre: Option<Genre>,
    pub status: Option<BookStatus>,
}

impl Filters {
    /// Whether `book` satisfies every active criterion
    pub fn matches(&self, book: &Book) -> bool {
        let matches_search = self.search.is_empty() || {
            let needle = self.search.to_lowercase();
            book.title.to_lowercase().contains(&needle)
                || book.author.to_lowercase().contains(&needle)
        };
        let matches_genre = self.genre.map_or(true, |g| book.genre == g);
        let matches_status = self.status.map_or(true, |s| book.status == s);

        matches_search && matches_genre && matches_status
    }
}

/// One page of filtered books
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageView {
    pub books: Vec<Book>,
    /// Page actually shown, after clamping
    pub page: usize,
    pub total_pages: usize,
    pub total_matches: usize,
}

/// Filter `books` and cut out one page
///
/// Pages are 1-indexed. Page 0 is treated as page 1 and a page past the end is
/// clamped to the last page. Order follows `books`.
pub fn derive_view(books: &[Book], filters: &Filters, page: usize, page_size: usize) -> PageView {
    let page_size = page_size.max(1);
    let matching: Vec<&Book> = books.iter().filter(|b| filters.matches(b)).collect();

    let total_matches = matching.len();
    let total_pages = total_matches.div_ceil(page_size);
    let page = page.clamp(1, total_pages.max(1));

    let books = matching
        .into_iter()
        .skip((page - 1) * page_size)
        .take(page_size)
        .cloned()
        .collect();

    PageView {
        books,
        page,
        total_pages,
        total_matches,
    }
}

/// Entry in a compact pager
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PageLink {
    Page(usize),
    Ellipsis,
}

/// Pages to offer around `current`: first, last, neighbours, ellipses for gaps
pub fn page_window(current: usize, total: usize) -> Vec<PageLink> {
    if total <= MAX_PAGE_LINKS {
        return (1..=total).map(PageLink::Page).collect();
    }

    let mut start = current.saturating_sub(1).max(2);
    let mut end = (current + 1).min(total - 1);
    if current <= 2 {
        end = 4;
    } else if current >= total - 1 {
        start = total - 3;
    }

    let mut links = vec![PageLink::Page(1)];
    if start > 2 {
        links.push(PageLink::Ellipsis);
    }
    links.extend((start..=end).map(PageLink::Page));
    if end < total - 1 {
        links.push(PageLink::Ellipsis);
    }
    links.push(PageLink::Page(total));
    links
}
