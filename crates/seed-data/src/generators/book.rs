//! Book generation.

use std::ops::RangeInclusive;

use rand::Rng;
use rand::seq::SliceRandom;

use library::Genre;

use super::content::ContentGenerator;

/// Generated book data ready for database insertion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedBook {
    pub title: String,
    pub genre: Genre,
    pub published_year: i32,
    /// `None` only when no authors were available to reference.
    pub author_id: Option<i32>,
}

/// Configuration for book generation.
#[derive(Debug, Clone)]
pub struct BookGenConfig {
    /// Inclusive range of publication years.
    pub year_range: RangeInclusive<i32>,
    /// Genres to draw from uniformly.
    pub genres: Vec<Genre>,
}

impl Default for BookGenConfig {
    fn default() -> Self {
        Self {
            year_range: 1900..=2021,
            genres: Genre::ALL.to_vec(),
        }
    }
}

/// Generates books referencing authors with ids `1..=authors_available`.
pub struct BookGenerator {
    config: BookGenConfig,
    authors_available: i32,
}

impl BookGenerator {
    /// Creates a generator with default configuration.
    pub fn new(authors_available: i32) -> Self {
        Self::with_config(authors_available, BookGenConfig::default())
    }

    /// Creates a generator with custom configuration.
    pub fn with_config(authors_available: i32, config: BookGenConfig) -> Self {
        Self {
            config,
            authors_available,
        }
    }

    /// Generates a single book.
    pub fn generate(&self, content: &impl ContentGenerator, rng: &mut impl Rng) -> GeneratedBook {
        let title = content.book_title(rng);
        let genre = self
            .config
            .genres
            .choose(rng)
            .copied()
            .unwrap_or(Genre::Novel);
        let published_year = rng.gen_range(self.config.year_range.clone());
        let author_id =
            (self.authors_available > 0).then(|| rng.gen_range(1..=self.authors_available));

        GeneratedBook {
            title,
            genre,
            published_year,
            author_id,
        }
    }

    /// Generates multiple books.
    pub fn generate_batch(
        &self,
        count: usize,
        content: &impl ContentGenerator,
        rng: &mut impl Rng,
    ) -> Vec<GeneratedBook> {
        (0..count).map(|_| self.generate(content, rng)).collect()
    }
}
