use crate::error::{CoreError, Result};
use crate::slug::Slug;
use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use smol_str::SmolStr;
use std::collections::HashMap;

/// The persisted association between a slug and its original URL.
///
/// A mapping is created once and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UrlMapping {
    long_url: String,
    short_url: String,
    slug: Slug,
    /// Absent in snapshots written before creation times were recorded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    created_at: Option<Timestamp>,
}

impl UrlMapping {
    /// Creates a mapping stamped with the current time.
    ///
    /// `short_url` is derived from `base_url` and the slug.
    pub fn new(slug: Slug, long_url: impl Into<String>, base_url: &str) -> Self {
        Self {
            short_url: slug.to_url(base_url),
            long_url: long_url.into(),
            slug,
            created_at: Some(Timestamp::now()),
        }
    }

    pub fn slug(&self) -> &Slug {
        &self.slug
    }

    pub fn long_url(&self) -> &str {
        &self.long_url
    }

    pub fn short_url(&self) -> &str {
        &self.short_url
    }

    pub fn created_at(&self) -> Option<Timestamp> {
        self.created_at
    }
}

/// Ordered collection of mappings, kept in creation order.
///
/// Holds at most one mapping per slug.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MappingCollection {
    mappings: Vec<UrlMapping>,
    index: HashMap<SmolStr, usize>,
}

impl MappingCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds a collection from a loaded snapshot.
    ///
    /// Later entries reusing an already-seen slug are dropped, so the first
    /// mapping for a slug wins. Returns the collection together with the
    /// number of dropped entries.
    pub fn from_snapshot(snapshot: Vec<UrlMapping>) -> (Self, usize) {
        let mut collection = Self::new();
        let mut dropped = 0;

        for mapping in snapshot {
            if collection.push(mapping).is_err() {
                dropped += 1;
            }
        }

        (collection, dropped)
    }

    /// Appends a mapping. Fails with `DuplicateSlug` if the slug is taken.
    pub fn push(&mut self, mapping: UrlMapping) -> Result<()> {
        let key = SmolStr::new(mapping.slug.as_str());
        if self.index.contains_key(&key) {
            return Err(CoreError::DuplicateSlug(key.to_string()));
        }

        self.index.insert(key, self.mappings.len());
        self.mappings.push(mapping);
        Ok(())
    }

    pub fn find(&self, slug: &str) -> Option<&UrlMapping> {
        self.index.get(slug).map(|&position| &self.mappings[position])
    }

    pub fn contains(&self, slug: &str) -> bool {
        self.index.contains_key(slug)
    }

    pub fn len(&self) -> usize {
        self.mappings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mappings.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, UrlMapping> {
        self.mappings.iter()
    }

    pub fn as_slice(&self) -> &[UrlMapping] {
        &self.mappings
    }
}

impl<'a> IntoIterator for &'a MappingCollection {
    type Item = &'a UrlMapping;
    type IntoIter = std::slice::Iter<'a, UrlMapping>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
