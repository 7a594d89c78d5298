//! Library domain types and read-side database access.
//!
//! The seeder in `seed-data` writes these tables; this crate describes their
//! rows and provides the queries used to report on and verify their contents.

pub mod database;
pub mod errors;
pub mod models;

pub use database::Database;
pub use errors::LibraryError;
pub use models::{Author, Book, Borrower, Genre, TableCounts};
