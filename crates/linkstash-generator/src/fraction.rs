use crate::Generator;
use linkstash_core::{Slug, SLUG_ALPHABET, SLUG_LEN};

/// Renders a random fraction in `[0, 1)` as base-36 digits after the radix
/// point and keeps the first six.
///
/// Characters are not uniformly distributed: the leading digit carries the
/// bias of the float source.
#[derive(Debug, Clone, Default)]
pub struct FractionGenerator;

impl FractionGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Base-36 fractional digits of `fraction`, which must be in `[0, 1)`.
    fn digits(mut fraction: f64) -> Slug {
        let mut slug = String::with_capacity(SLUG_LEN);
        for _ in 0..SLUG_LEN {
            fraction *= 36.0;
            let digit = (fraction.trunc() as usize).min(SLUG_ALPHABET.len() - 1);
            fraction -= digit as f64;
            slug.push(SLUG_ALPHABET[digit] as char);
        }
        Slug::new_unchecked(slug)
    }
}

impl Generator for FractionGenerator {
    fn generate(&self) -> Slug {
        Self::digits(rand::random::<f64>())
    }
}
