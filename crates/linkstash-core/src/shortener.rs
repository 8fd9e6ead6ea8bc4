use crate::error::ShortenerError;
use crate::mapping::UrlMapping;
use async_trait::async_trait;
use std::sync::Arc;

type Result<T> = std::result::Result<T, ShortenerError>;

/// Read-only access to the mapping collection.
///
/// This allows consumers like the redirector to resolve slugs without
/// being able to create mappings.
#[async_trait]
pub trait ReadMappings: Send + Sync + 'static {
    /// Looks up the mapping with exactly this slug.
    /// Returns `None` if no mapping has it.
    async fn resolve(&self, slug: &str) -> Result<Option<UrlMapping>>;

    /// Returns all mappings in creation order.
    async fn list(&self) -> Result<Vec<UrlMapping>>;
}

#[async_trait]
pub trait Shortener: ReadMappings {
    /// Validates `long_url`, assigns it an unused slug and persists the
    /// updated collection before returning the new mapping.
    async fn create(&self, long_url: &str) -> Result<UrlMapping>;
}

#[async_trait]
impl<T: ReadMappings + ?Sized> ReadMappings for Arc<T> {
    async fn resolve(&self, slug: &str) -> Result<Option<UrlMapping>> {
        (**self).resolve(slug).await
    }

    async fn list(&self) -> Result<Vec<UrlMapping>> {
        (**self).list().await
    }
}

#[async_trait]
impl<T: Shortener + ?Sized> Shortener for Arc<T> {
    async fn create(&self, long_url: &str) -> Result<UrlMapping> {
        (**self).create(long_url).await
    }
}
