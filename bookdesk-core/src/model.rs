//! Book records and their wire representation

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Genre of a book, one of a fixed set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Genre {
    Fiction,
    #[serde(rename = "Non-Fiction")]
    NonFiction,
    #[serde(rename = "Science Fiction")]
    ScienceFiction,
    Fantasy,
    Biography,
    History,
    Romance,
    Thriller,
}

impl Genre {
    /// Every genre, in the order forms list them
    pub const ALL: [Genre; 8] = [
        Genre::Fiction,
        Genre::NonFiction,
        Genre::ScienceFiction,
        Genre::Fantasy,
        Genre::Biography,
        Genre::History,
        Genre::Romance,
        Genre::Thriller,
    ];

    /// Wire spelling of the genre
    pub fn as_str(&self) -> &'static str {
        match self {
            Genre::Fiction => "Fiction",
            Genre::NonFiction => "Non-Fiction",
            Genre::ScienceFiction => "Science Fiction",
            Genre::Fantasy => "Fantasy",
            Genre::Biography => "Biography",
            Genre::History => "History",
            Genre::Romance => "Romance",
            Genre::Thriller => "Thriller",
        }
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown genre: {0}")]
pub struct ParseGenreError(pub String);

impl FromStr for Genre {
    type Err = ParseGenreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Genre::ALL
            .into_iter()
            .find(|g| g.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ParseGenreError(s.to_string()))
    }
}

/// Lending status of a book
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum BookStatus {
    #[default]
    Available,
    Issued,
}

impl BookStatus {
    pub const ALL: [BookStatus; 2] = [BookStatus::Available, BookStatus::Issued];

    pub fn as_str(&self) -> &'static str {
        match self {
            BookStatus::Available => "Available",
            BookStatus::Issued => "Issued",
        }
    }
}

impl fmt::Display for BookStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown status: {0}")]
pub struct ParseStatusError(pub String);

impl FromStr for BookStatus {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        BookStatus::ALL
            .into_iter()
            .find(|st| st.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ParseStatusError(s.to_string()))
    }
}

/// Book fields as sent to the remote collection (no identifier)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookFormData {
    pub title: String,
    pub author: String,
    pub genre: Genre,
    pub published_year: i32,
    pub status: BookStatus,
}

impl BookFormData {
    /// Create form data for an available book
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        genre: Genre,
        published_year: i32,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            genre,
            published_year,
            status: BookStatus::Available,
        }
    }

    /// Set the lending status
    pub fn with_status(mut self, status: BookStatus) -> Self {
        self.status = status;
        self
    }
}

/// A book record as decoded from the remote collection
///
/// The identifier is optional on the wire: create responses carry it, update
/// responses may not.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteBook {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(flatten)]
    pub data: BookFormData,
}

impl RemoteBook {
    /// Promote to a persisted book if the remote assigned an identifier
    pub fn into_book(self) -> Option<Book> {
        let id = self.id?;
        Some(Book::from_parts(id, self.data))
    }

    /// Attach a known identifier, ignoring whatever the wire carried
    pub fn with_id(self, id: impl Into<String>) -> Book {
        Book::from_parts(id, self.data)
    }
}

/// A persisted book record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub author: String,
    pub genre: Genre,
    pub published_year: i32,
    pub status: BookStatus,
}

impl Book {
    /// Combine an identifier with form data
    pub fn from_parts(id: impl Into<String>, data: BookFormData) -> Self {
        Self {
            id: id.into(),
            title: data.title,
            author: data.author,
            genre: data.genre,
            published_year: data.published_year,
            status: data.status,
        }
    }

    /// The editable fields of this record
    pub fn form_data(&self) -> BookFormData {
        BookFormData {
            title: self.title.clone(),
            author: self.author.clone(),
            genre: self.genre,
            published_year: self.published_year,
            status: self.status,
        }
    }
}
