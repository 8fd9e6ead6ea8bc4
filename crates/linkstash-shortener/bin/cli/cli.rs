use clap::{Parser, Subcommand, ValueEnum};
use linkstash_generator::{AnyGenerator, FractionGenerator, RandomGenerator, SeqGenerator};
use linkstash_core::SnapshotStore;
use linkstash_shortener::{
    MappingStore, ShortenerError, StoreSettings, DEFAULT_BASE_URL, DEFAULT_MAX_ATTEMPTS,
};
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

pub const DATA_DIR_ENV: &str = "LINKSTASH_DATA_DIR";
pub const BASE_URL_ENV: &str = "LINKSTASH_BASE_URL";
pub const GENERATOR_ENV: &str = "LINKSTASH_GENERATOR";
pub const MAX_ATTEMPTS_ENV: &str = "LINKSTASH_MAX_ATTEMPTS";
pub const LOG_JSON_ENV: &str = "LINKSTASH_LOG_JSON";

pub const DEFAULT_DATA_DIR: &str = ".linkstash";
pub const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum GeneratorArg {
    /// Uniform sampling from [0-9a-z]
    #[value(name = "random")]
    Random,
    /// Base-36 digits of a random fraction
    #[value(name = "fraction")]
    Fraction,
    /// Sequential base-36 counter, resumed from the stored mapping count
    #[value(name = "seq")]
    Seq,
}

impl GeneratorArg {
    /// `stored` is the number of mappings already persisted; the sequential
    /// generator resumes from it.
    pub fn build(self, stored: usize) -> AnyGenerator {
        match self {
            GeneratorArg::Random => RandomGenerator::new().into(),
            GeneratorArg::Fraction => FractionGenerator::new().into(),
            GeneratorArg::Seq => SeqGenerator::with_offset(stored as u64).into(),
        }
    }
}

/// Opens the store with the selected generator. `seq` resumes after the
/// mappings that survived loading.
pub async fn open_store<S: SnapshotStore>(
    backend: S,
    generator: GeneratorArg,
    settings: StoreSettings,
) -> Result<MappingStore<S, AnyGenerator>, ShortenerError> {
    MappingStore::open_with(backend, settings, |stored| generator.build(stored)).await
}

impl Display for GeneratorArg {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            GeneratorArg::Random => write!(f, "random"),
            GeneratorArg::Fraction => write!(f, "fraction"),
            GeneratorArg::Seq => write!(f, "seq"),
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "linkstash", about = "Shorten URLs into a local slug store")]
pub struct CLI {
    /// Directory holding the urlList snapshot
    #[arg(long, env = DATA_DIR_ENV, default_value = DEFAULT_DATA_DIR)]
    pub data_dir: PathBuf,

    /// Address short URLs are built on
    #[arg(long, env = BASE_URL_ENV, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    #[arg(
        long,
        env = GENERATOR_ENV,
        value_enum,
        default_value_t = GeneratorArg::Random
    )]
    pub generator: GeneratorArg,

    /// Generator draws per create before giving up
    #[arg(
        long,
        env = MAX_ATTEMPTS_ENV,
        default_value_t = DEFAULT_MAX_ATTEMPTS,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub max_attempts: u32,

    /// Emit logs as JSON lines
    #[arg(long, env = LOG_JSON_ENV)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Shorten a long URL and print the short URL
    Create { url: String },
    /// Print every stored mapping in creation order
    List,
    /// Print the long URL a slug resolves to
    Resolve { slug: String },
    /// Follow an in-app `/short/<slug>` path
    Visit { path: String },
}
