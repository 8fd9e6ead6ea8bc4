use crate::Generator;
use linkstash_core::{Slug, SLUG_ALPHABET, SLUG_LEN};
use std::sync::atomic::{AtomicU64, Ordering};

/// Number of distinct slugs of `SLUG_LEN` base-36 characters.
const SLUG_SPACE: u64 = 36_u64.pow(SLUG_LEN as u32);

/// A deterministic generator using a sequential counter.
///
/// This generator produces codes like "000000", "000001", ... "00000z",
/// "000010". The counter wraps around after `36^6` slugs, so on its own it
/// only guarantees uniqueness within a single run.
#[derive(Debug)]
pub struct SeqGenerator {
    counter: AtomicU64,
}

impl Clone for SeqGenerator {
    fn clone(&self) -> Self {
        Self {
            counter: AtomicU64::new(self.counter.load(Ordering::SeqCst)),
        }
    }
}

impl Default for SeqGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl SeqGenerator {
    pub fn new() -> Self {
        Self::with_offset(0)
    }

    /// Creates a generator starting from a specific counter value.
    ///
    /// Useful for resuming after a restart, e.g. from the number of
    /// mappings already stored.
    pub fn with_offset(offset: u64) -> Self {
        Self {
            counter: AtomicU64::new(offset),
        }
    }

    fn encode(mut value: u64) -> Slug {
        let mut digits = [b'0'; SLUG_LEN];
        for digit in digits.iter_mut().rev() {
            *digit = SLUG_ALPHABET[(value % 36) as usize];
            value /= 36;
        }
        Slug::new_unchecked(String::from_utf8_lossy(&digits))
    }
}

impl Generator for SeqGenerator {
    fn generate(&self) -> Slug {
        let count = self.counter.fetch_add(1, Ordering::SeqCst);
        Self::encode(count % SLUG_SPACE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seq_generator_produces_sequential_codes() {
        let generator = SeqGenerator::new();

        assert_eq!(generator.generate().as_str(), "000000");
        assert_eq!(generator.generate().as_str(), "000001");
        assert_eq!(generator.generate().as_str(), "000002");
    }

    #[test]
    fn seq_generator_uses_base36_digits() {
        let generator = SeqGenerator::with_offset(10);
        assert_eq!(generator.generate().as_str(), "00000a");

        let generator = SeqGenerator::with_offset(36 * 36);
        assert_eq!(generator.generate().as_str(), "000100");
    }

    #[test]
    fn seq_generator_wraps_at_slug_space() {
        let generator = SeqGenerator::with_offset(SLUG_SPACE - 1);

        assert_eq!(generator.generate().as_str(), "zzzzzz");
        assert_eq!(generator.generate().as_str(), "000000");
    }

    #[test]
    fn generator_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SeqGenerator>();
    }

    #[test]
    fn clone_preserves_counter_state() {
        let generator = SeqGenerator::new();
        generator.generate();
        generator.generate();

        let cloned = generator.clone();

        assert_eq!(generator.generate().as_str(), "000002");
        assert_eq!(cloned.generate().as_str(), "000002");
    }
}
