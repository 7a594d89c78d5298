//! Borrower generation.

use rand::Rng;

use super::content::ContentGenerator;

/// Generated borrower data ready for database insertion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedBorrower {
    pub name: String,
    pub email: String,
    pub borrowed_book_id: Option<i32>,
}

/// Configuration for borrower generation.
#[derive(Debug, Clone)]
pub struct BorrowerGenConfig {
    /// Probability that a borrower currently holds a book.
    pub borrow_probability: f64,
}

impl Default for BorrowerGenConfig {
    fn default() -> Self {
        Self {
            borrow_probability: 0.5,
        }
    }
}

/// Generates borrowers holding books with ids `1..=books_available`.
pub struct BorrowerGenerator {
    config: BorrowerGenConfig,
    books_available: i32,
}

impl BorrowerGenerator {
    /// Creates a generator with default configuration.
    pub fn new(books_available: i32) -> Self {
        Self::with_config(books_available, BorrowerGenConfig::default())
    }

    /// Creates a generator with custom configuration.
    pub fn with_config(books_available: i32, config: BorrowerGenConfig) -> Self {
        Self {
            config,
            books_available,
        }
    }

    /// Generates a single borrower.
    pub fn generate(
        &self,
        content: &impl ContentGenerator,
        rng: &mut impl Rng,
    ) -> GeneratedBorrower {
        let name = content.person_name(rng);
        let email = content.email_address(rng);
        let borrowed_book_id = if rng.gen_bool(self.borrow_probability())
            && self.books_available > 0
        {
            Some(rng.gen_range(1..=self.books_available))
        } else {
            None
        };

        GeneratedBorrower {
            name,
            email,
            borrowed_book_id,
        }
    }

    /// Configured probability clamped to `[0, 1]`; non-finite values never borrow.
    fn borrow_probability(&self) -> f64 {
        let p = self.config.borrow_probability;
        if p.is_finite() {
            p.clamp(0.0, 1.0)
        } else {
            0.0
        }
    }

    /// Generates multiple borrowers.
    pub fn generate_batch(
        &self,
        count: usize,
        content: &impl ContentGenerator,
        rng: &mut impl Rng,
    ) -> Vec<GeneratedBorrower> {
        (0..count).map(|_| self.generate(content, rng)).collect()
    }
}
