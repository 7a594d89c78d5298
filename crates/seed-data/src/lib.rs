//! Sample data seeding for the library database.
//!
//! This crate wipes the `authors`, `books`, and `borrowers` tables and fills
//! them with localized fake rows, all inside one transaction.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use rand::SeedableRng;
//! use seed_data::prelude::*;
//!
//! let config = SeedConfig {
//!     authors_count: 5,
//!     books_count: 10,
//!     borrowers_count: 20,
//!     ..SeedConfig::default()
//! };
//! let mut rng = rand::rngs::StdRng::seed_from_u64(42);
//!
//! let summary = Seeder::new(pool)
//!     .run(&config, &FakeContent::new(config.locale), &mut rng)
//!     .await?;
//! ```

pub mod config;
pub mod db;
pub mod generators;

pub use library::{Author, Book, Borrower, Genre, TableCounts};

pub mod prelude {
    //! Convenient re-exports for common usage.

    pub use crate::config::{ContentLocale, DatabaseConfig, SeedConfig};
    pub use crate::db::{SeedError, SeedSummary, Seeder};
    pub use crate::generators::{
        AuthorGenerator, BookGenerator, BorrowerGenerator, ContentGenerator, FakeContent,
    };
    pub use crate::Genre;
}
