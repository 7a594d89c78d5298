use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::errors::LibraryError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Author {
    pub id: i32,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Book {
    pub id: i32,
    pub title: String,
    pub genre: String,
    pub published_year: i32,
    pub author_id: Option<i32>,
}

impl Book {
    /// Parses the stored genre label.
    pub fn genre(&self) -> Result<Genre, LibraryError> {
        self.genre.parse()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Borrower {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub borrowed_book_id: Option<i32>,
}

/// Row counts of the three library tables.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableCounts {
    pub authors: i64,
    pub books: i64,
    pub borrowers: i64,
}

/// Literary genre of a book, stored as its display label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Genre {
    Novel,
    ScienceFiction,
    Poetry,
    Detective,
    Nonfiction,
    Adventure,
    Fantasy,
    HistoricalFiction,
}

impl Genre {
    pub const ALL: [Genre; 8] = [
        Genre::Novel,
        Genre::ScienceFiction,
        Genre::Poetry,
        Genre::Detective,
        Genre::Nonfiction,
        Genre::Adventure,
        Genre::Fantasy,
        Genre::HistoricalFiction,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Genre::Novel => "Novel",
            Genre::ScienceFiction => "Science Fiction",
            Genre::Poetry => "Poetry",
            Genre::Detective => "Detective",
            Genre::Nonfiction => "Nonfiction",
            Genre::Adventure => "Adventure",
            Genre::Fantasy => "Fantasy",
            Genre::HistoricalFiction => "Historical Fiction",
        }
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Genre {
    type Err = LibraryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Genre::ALL
            .into_iter()
            .find(|genre| genre.as_str() == s)
            .ok_or_else(|| LibraryError::UnknownGenre(s.to_string()))
    }
}
