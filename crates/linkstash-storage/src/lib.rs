//! Snapshot backends for the mapping store.
//!
//! Both backends persist the collection as a single JSON array, rewritten
//! wholesale on every save.

pub mod file;
pub mod memory;

pub use file::{JsonFileSnapshot, DEFAULT_KEY};
pub use linkstash_core::{SnapshotStore, StorageError};
pub use memory::InMemorySnapshot;
