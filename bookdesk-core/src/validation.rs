//! Field-level validation of book form input
//!
//! Validation runs before anything is sent to the store; a draft that fails it
//! never reaches the remote collection.

use crate::model::{BookFormData, BookStatus, Genre};
use chrono::Datelike;
use std::fmt;
use thiserror::Error;

/// Earliest accepted publication year
pub const MIN_YEAR: i32 = 1000;

/// Form field a message belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    Title,
    Author,
    Genre,
    PublishedYear,
    Status,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Field::Title => "title",
            Field::Author => "author",
            Field::Genre => "genre",
            Field::PublishedYear => "publishedYear",
            Field::Status => "status",
        })
    }
}

/// Messages for every field that failed validation, in form order
#[derive(Debug, Clone, Default, PartialEq, Eq, Error)]
#[error("{}", summarize(.errors))]
pub struct FieldErrors {
    errors: Vec<(Field, String)>,
}

impl FieldErrors {
    fn add(&mut self, field: Field, message: impl Into<String>) {
        self.errors.push((field, message.into()));
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Message for a single field, if it failed
    pub fn get(&self, field: Field) -> Option<&str> {
        self.errors
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, m)| m.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.errors.iter().map(|(f, m)| (*f, m.as_str()))
    }
}

fn summarize(errors: &[(Field, String)]) -> String {
    errors
        .iter()
        .map(|(f, m)| format!("{}: {}", f, m))
        .collect::<Vec<_>>()
        .join("; ")
}

/// Raw, unvalidated form input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookDraft {
    pub title: String,
    pub author: String,
    pub genre: String,
    pub published_year: Option<i32>,
    pub status: String,
}

impl Default for BookDraft {
    /// Empty form: no genre chosen, current year, available
    fn default() -> Self {
        Self {
            title: String::new(),
            author: String::new(),
            genre: String::new(),
            published_year: Some(current_year()),
            status: BookStatus::Available.to_string(),
        }
    }
}

impl From<&BookFormData> for BookDraft {
    fn from(data: &BookFormData) -> Self {
        Self {
            title: data.title.clone(),
            author: data.author.clone(),
            genre: data.genre.to_string(),
            published_year: Some(data.published_year),
            status: data.status.to_string(),
        }
    }
}

impl BookDraft {
    /// Check every field, returning form data only if all pass
    pub fn validate(&self, current_year: i32) -> Result<BookFormData, FieldErrors> {
        let mut errors = FieldErrors::default();

        let title = self.title.trim();
        if title.is_empty() {
            errors.add(Field::Title, "Title is required");
        }

        let author = self.author.trim();
        if author.is_empty() {
            errors.add(Field::Author, "Author is required");
        }

        let genre = if self.genre.trim().is_empty() {
            errors.add(Field::Genre, "Genre is required");
            None
        } else {
            match self.genre.parse::<Genre>() {
                Ok(genre) => Some(genre),
                Err(_) => {
                    errors.add(Field::Genre, "Unknown genre");
                    None
                }
            }
        };

        let year = self
            .published_year
            .filter(|y| (MIN_YEAR..=current_year).contains(y));
        if year.is_none() {
            errors.add(
                Field::PublishedYear,
                format!("Year must be between {} and {}", MIN_YEAR, current_year),
            );
        }

        let status = match self.status.parse::<BookStatus>() {
            Ok(status) => Some(status),
            Err(_) => {
                errors.add(Field::Status, "Unknown status");
                None
            }
        };

        match (genre, year, status) {
            (Some(genre), Some(published_year), Some(status)) if errors.is_empty() => {
                Ok(BookFormData {
                    title: title.to_string(),
                    author: author.to_string(),
                    genre,
                    published_year,
                    status,
                })
            }
            _ => Err(errors),
        }
    }

    /// Validate against the current calendar year
    pub fn validate_now(&self) -> Result<BookFormData, FieldErrors> {
        self.validate(current_year())
    }
}

/// Current calendar year in local time
pub fn current_year() -> i32 {
    chrono::Local::now().year()
}
