pub mod fraction;
pub mod random;
pub mod seq;

pub use fraction::FractionGenerator;
pub use random::RandomGenerator;
pub use seq::SeqGenerator;

use linkstash_core::Slug;

/// Trait for generating slugs.
///
/// Implementations are pure generators that don't interact with storage.
/// A generated slug is only a candidate: the mapping store is responsible
/// for rejecting slugs that are already in use.
pub trait Generator: Send + Sync + 'static {
    /// Generates a candidate slug. Generation cannot fail.
    fn generate(&self) -> Slug;
}

/// A generator chosen at runtime.
#[derive(Debug, Clone)]
pub enum AnyGenerator {
    Random(RandomGenerator),
    Fraction(FractionGenerator),
    Seq(SeqGenerator),
}

impl Generator for AnyGenerator {
    fn generate(&self) -> Slug {
        match self {
            AnyGenerator::Random(generator) => generator.generate(),
            AnyGenerator::Fraction(generator) => generator.generate(),
            AnyGenerator::Seq(generator) => generator.generate(),
        }
    }
}

impl From<RandomGenerator> for AnyGenerator {
    fn from(value: RandomGenerator) -> Self {
        AnyGenerator::Random(value)
    }
}

impl From<FractionGenerator> for AnyGenerator {
    fn from(value: FractionGenerator) -> Self {
        AnyGenerator::Fraction(value)
    }
}

impl From<SeqGenerator> for AnyGenerator {
    fn from(value: SeqGenerator) -> Self {
        AnyGenerator::Seq(value)
    }
}
