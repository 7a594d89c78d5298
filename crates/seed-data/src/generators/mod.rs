//! Row generators for sample data.
//!
//! This module provides generators for creating library rows:
//! - [`AuthorGenerator`]: Generate authors with localized names
//! - [`BookGenerator`]: Generate books with genre, year, and author reference
//! - [`BorrowerGenerator`]: Generate borrowers with an optional borrowed book
//!
//! Free text comes from a [`ContentGenerator`]; every other field is drawn from
//! the RNG passed in by the caller.

pub mod author;
pub mod book;
pub mod borrower;
pub mod content;
mod titles;

pub use author::{AuthorGenerator, GeneratedAuthor};
pub use book::{BookGenConfig, BookGenerator, GeneratedBook};
pub use borrower::{BorrowerGenConfig, BorrowerGenerator, GeneratedBorrower};
pub use content::{ContentGenerator, FakeContent};
