//! Mapping store implementation.
//!
//! This crate provides [`MappingStore`], which owns the mapping collection,
//! assigns slugs through a [`Generator`](linkstash_generator::Generator) and
//! persists every change through a
//! [`SnapshotStore`](linkstash_core::SnapshotStore). Core types are
//! re-exported from `linkstash_core`.

pub mod store;

pub use linkstash_core::{ReadMappings, Shortener, ShortenerError, UrlMapping};
pub use store::{MappingStore, StoreSettings, DEFAULT_BASE_URL, DEFAULT_MAX_ATTEMPTS};
