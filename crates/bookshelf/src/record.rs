use serde::Serialize;
use std::cmp::Ordering;
use std::fmt;

/// An immutable literary work: title, author, and year of publication.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Record {
    pub title: String,
    pub author: String,
    pub year_published: i32,
}

impl Record {
    pub fn new(title: impl Into<String>, author: impl Into<String>, year_published: i32) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            year_published,
        }
    }

    /// Lowercased title, used as the key for the natural (case-insensitive)
    /// ordering. Not an `Ord` impl: records with titles differing only in
    /// case are not equal.
    pub fn title_key(&self) -> String {
        self.title.to_lowercase()
    }

    /// Case-insensitive comparison by title.
    pub fn cmp_by_title(&self, other: &Record) -> Ordering {
        self.title_key().cmp(&other.title_key())
    }

    /// Title length in characters, not bytes.
    pub fn title_len(&self) -> usize {
        self.title.chars().count()
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "\"{}\" written by {} in {}",
            self.title, self.author, self.year_published
        )
    }
}
