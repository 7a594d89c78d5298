//! Database integration for seeding sample data.
//!
//! The [`Seeder`] wipes the library tables and repopulates them inside a
//! single transaction.

mod seeder;

pub use seeder::{SeedError, SeedSummary, Seeder};
