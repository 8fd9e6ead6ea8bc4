//! Core types and traits for the linkstash URL shortener.
//!
//! This crate provides the types shared by the mapping store and the
//! redirect resolver: the validated [`Slug`], the persisted [`UrlMapping`]
//! record, the ordered [`MappingCollection`], the URL validator and the
//! persistence / lookup traits.

pub mod error;
pub mod mapping;
pub mod shortener;
pub mod slug;
pub mod snapshot;
pub mod validator;

pub use error::{CoreError, ShortenerError, StorageError};
pub use mapping::{MappingCollection, UrlMapping};
pub use shortener::{ReadMappings, Shortener};
pub use slug::{Slug, SLUG_ALPHABET, SLUG_LEN};
pub use snapshot::SnapshotStore;
pub use validator::{is_valid, validate_url};
