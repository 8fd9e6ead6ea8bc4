use crate::Generator;
use linkstash_core::{Slug, SLUG_ALPHABET, SLUG_LEN};
use rand::Rng;

/// Samples every character uniformly from the base-36 alphabet.
#[derive(Debug, Clone, Default)]
pub struct RandomGenerator;

impl RandomGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl Generator for RandomGenerator {
    fn generate(&self) -> Slug {
        let mut rng = rand::rng();
        let slug: String = (0..SLUG_LEN)
            .map(|_| SLUG_ALPHABET[rng.random_range(0..SLUG_ALPHABET.len())] as char)
            .collect();
        Slug::new_unchecked(slug)
    }
}
