use sqlx::PgPool;

use crate::errors::LibraryError;
use crate::models::{Author, Book, Borrower, TableCounts};

/// Read-side access to the library tables.
#[derive(Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn table_counts(&self) -> Result<TableCounts, LibraryError> {
        let (authors, books, borrowers): (i64, i64, i64) = sqlx::query_as(
            r#"
            SELECT
                (SELECT COUNT(*) FROM authors),
                (SELECT COUNT(*) FROM books),
                (SELECT COUNT(*) FROM borrowers)
            "#,
        )
        .fetch_one(&self.pool)
        .await?;

        Ok(TableCounts {
            authors,
            books,
            borrowers,
        })
    }

    pub async fn get_authors(&self) -> Result<Vec<Author>, LibraryError> {
        let authors = sqlx::query_as("SELECT id, name FROM authors ORDER BY id")
            .fetch_all(&self.pool)
            .await?;

        Ok(authors)
    }

    pub async fn get_books(&self) -> Result<Vec<Book>, LibraryError> {
        let books = sqlx::query_as(
            r#"
            SELECT id, title, genre, published_year, author_id
            FROM books
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(books)
    }

    pub async fn get_borrowers(&self) -> Result<Vec<Borrower>, LibraryError> {
        let borrowers = sqlx::query_as(
            r#"
            SELECT id, name, email, borrowed_book_id
            FROM borrowers
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(borrowers)
    }
}
