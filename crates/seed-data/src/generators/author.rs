//! Author generation.

use rand::Rng;

use super::content::ContentGenerator;

/// Generated author data ready for database insertion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedAuthor {
    pub name: String,
}

/// Generates authors.
#[derive(Debug, Default)]
pub struct AuthorGenerator;

impl AuthorGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Generates a single author.
    pub fn generate(&self, content: &impl ContentGenerator, rng: &mut impl Rng) -> GeneratedAuthor {
        GeneratedAuthor {
            name: content.person_name(rng),
        }
    }

    /// Generates multiple authors.
    pub fn generate_batch(
        &self,
        count: usize,
        content: &impl ContentGenerator,
        rng: &mut impl Rng,
    ) -> Vec<GeneratedAuthor> {
        (0..count).map(|_| self.generate(content, rng)).collect()
    }
}
