//! Database seeding utilities.

use std::time::Instant;

use rand::Rng;
use serde::Serialize;
use sqlx::{PgConnection, PgPool};
use thiserror::Error;
use tracing::{debug, info};

use crate::config::SeedConfig;
use crate::generators::{
    AuthorGenerator, BookGenerator, BorrowerGenerator, ContentGenerator, GeneratedAuthor,
    GeneratedBook, GeneratedBorrower,
};

/// Tables wiped before seeding, dependents first.
const SEEDED_TABLES: [&str; 3] = ["borrowers", "books", "authors"];

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Rows inserted by a seeding run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SeedSummary {
    pub authors: u64,
    pub books: u64,
    pub borrowers: u64,
    /// Wall-clock time of the run (milliseconds).
    pub elapsed_ms: u64,
}

/// Database seeder for the library tables.
pub struct Seeder {
    pool: PgPool,
}

impl Seeder {
    /// Creates a new seeder with the given database pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Wipes the library tables and fills them with generated rows.
    ///
    /// Everything runs in one transaction. On error the transaction is
    /// dropped without committing, so the tables keep their previous
    /// contents.
    ///
    /// **WARNING**: This deletes all data from the tables.
    pub async fn run(
        &self,
        config: &SeedConfig,
        content: &impl ContentGenerator,
        rng: &mut impl Rng,
    ) -> Result<SeedSummary, SeedError> {
        let started = Instant::now();
        let mut tx = self.pool.begin().await?;

        clear_tables(&mut tx).await?;

        let authors = AuthorGenerator::new().generate_batch(config.authors_count, content, rng);
        let added_authors = insert_authors(&mut tx, &authors).await?;

        let books = BookGenerator::new(to_id(added_authors)).generate_batch(
            config.books_count,
            content,
            rng,
        );
        let added_books = insert_books(&mut tx, &books).await?;

        let borrowers = BorrowerGenerator::new(to_id(config.books_count as u64)).generate_batch(
            config.borrowers_count,
            content,
            rng,
        );
        let added_borrowers = insert_borrowers(&mut tx, &borrowers).await?;

        tx.commit().await?;

        let summary = SeedSummary {
            authors: added_authors,
            books: added_books,
            borrowers: added_borrowers,
            elapsed_ms: started.elapsed().as_millis() as u64,
        };
        info!(
            "Seeded {} authors, {} books, {} borrowers in {}ms",
            summary.authors, summary.books, summary.borrowers, summary.elapsed_ms
        );

        Ok(summary)
    }
}

/// Empties the seeded tables and restarts their id sequences at 1.
async fn clear_tables(conn: &mut PgConnection) -> Result<(), SeedError> {
    for table in SEEDED_TABLES {
        sqlx::query(&format!("TRUNCATE TABLE {table} RESTART IDENTITY CASCADE"))
            .execute(&mut *conn)
            .await?;
    }

    info!("Old data deleted and ids reset");
    Ok(())
}

async fn insert_authors(
    conn: &mut PgConnection,
    authors: &[GeneratedAuthor],
) -> Result<u64, SeedError> {
    info!("Seeding {} authors...", authors.len());

    let mut added = 0;
    for author in authors {
        added += sqlx::query("INSERT INTO authors (name) VALUES ($1)")
            .bind(&author.name)
            .execute(&mut *conn)
            .await?
            .rows_affected();
    }

    debug!("Inserted {added} authors");
    Ok(added)
}

async fn insert_books(conn: &mut PgConnection, books: &[GeneratedBook]) -> Result<u64, SeedError> {
    info!("Seeding {} books...", books.len());

    let mut added = 0;
    for book in books {
        added += sqlx::query(
            r#"
            INSERT INTO books (title, genre, published_year, author_id)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(&book.title)
        .bind(book.genre.as_str())
        .bind(book.published_year)
        .bind(book.author_id)
        .execute(&mut *conn)
        .await?
        .rows_affected();
    }

    debug!("Inserted {added} books");
    Ok(added)
}

async fn insert_borrowers(
    conn: &mut PgConnection,
    borrowers: &[GeneratedBorrower],
) -> Result<u64, SeedError> {
    info!("Seeding {} borrowers...", borrowers.len());

    let mut added = 0;
    for borrower in borrowers {
        added += sqlx::query(
            r#"
            INSERT INTO borrowers (name, email, borrowed_book_id)
            VALUES ($1, $2, $3)
            "#,
        )
        .bind(&borrower.name)
        .bind(&borrower.email)
        .bind(borrower.borrowed_book_id)
        .execute(&mut *conn)
        .await?
        .rows_affected();
    }

    debug!("Inserted {added} borrowers");
    Ok(added)
}

/// Converts a row count into the largest id it covers.
fn to_id(count: u64) -> i32 {
    i32::try_from(count).unwrap_or(i32::MAX)
}
