use crate::outcome::Outcome;
use crate::redirector::Redirector;
use crate::visit::Visit;
use crate::Result;
use async_trait::async_trait;
use linkstash_core::ReadMappings;
use tracing::{debug, trace};

/// Service for handling short-link visits.
///
/// Uses read-only access to the mapping collection, so resolving never
/// changes any state.
#[derive(Debug, Clone)]
pub struct RedirectorService<R> {
    mappings: R,
}

impl<R: ReadMappings> RedirectorService<R> {
    /// Creates a new RedirectorService reading from `mappings`.
    pub fn new(mappings: R) -> Self {
        Self { mappings }
    }

    /// Resolves a slug to a redirect outcome.
    ///
    /// # Returns
    ///
    /// * `Ok(Outcome::Redirect(url))` - The long URL to navigate to
    /// * `Ok(Outcome::NotFound)` - If no mapping has this slug
    /// * `Err(e)` - If the mappings could not be read
    pub async fn resolve(&self, slug: &str) -> Result<Outcome> {
        Redirector::resolve(self, slug).await
    }

    /// Drives a pending visit to a terminal state.
    pub async fn drive(&self, mut visit: Visit) -> Result<Visit> {
        if let Some(slug) = visit.pending_slug() {
            let outcome = Redirector::resolve(self, slug).await?;
            visit.advance(outcome);
        }
        Ok(visit)
    }

    /// Handles navigation to `path`.
    ///
    /// Returns `None` if `path` is not a `/short/<slug>` route, otherwise
    /// the terminal state of the visit.
    pub async fn visit(&self, path: &str) -> Result<Option<Visit>> {
        let Some(visit) = Visit::from_path(path) else {
            trace!(path, "not a short-link route");
            return Ok(None);
        };

        self.drive(visit).await.map(Some)
    }
}

#[async_trait]
impl<R: ReadMappings> Redirector for RedirectorService<R> {
    async fn resolve(&self, slug: &str) -> Result<Outcome> {
        trace!(slug, "resolving short link");

        let outcome = Outcome::from(self.mappings.resolve(slug).await?);
        match &outcome {
            Outcome::Redirect(url) => debug!(slug, url = %url, "resolved short link"),
            Outcome::NotFound => debug!(slug, "short link not found"),
        }

        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use linkstash_core::{ShortenerError, Slug, UrlMapping};
    use std::sync::Arc;

    /// Fixed set of mappings.
    #[derive(Debug, Default)]
    struct StaticMappings(Vec<UrlMapping>);

    impl StaticMappings {
        fn with(entries: &[(&str, &str)]) -> Self {
            Self(
                entries
                    .iter()
                    .map(|(slug, url)| {
                        UrlMapping::new(Slug::new(slug).unwrap(), *url, "https://short.ly")
                    })
                    .collect(),
            )
        }
    }

    #[async_trait]
    impl ReadMappings for StaticMappings {
        async fn resolve(&self, slug: &str) -> Result<Option<UrlMapping>> {
            Ok(self.0.iter().find(|m| m.slug().as_str() == slug).cloned())
        }

        async fn list(&self) -> Result<Vec<UrlMapping>> {
            Ok(self.0.clone())
        }
    }

    /// Mappings that cannot be read.
    #[derive(Debug)]
    struct Unreadable;

    #[async_trait]
    impl ReadMappings for Unreadable {
        async fn resolve(&self, _: &str) -> Result<Option<UrlMapping>> {
            Err(ShortenerError::Storage(
                linkstash_core::StorageError::Unavailable("gone".to_string()),
            ))
        }

        async fn list(&self) -> Result<Vec<UrlMapping>> {
            Ok(Vec::new())
        }
    }

    fn service() -> RedirectorService<StaticMappings> {
        RedirectorService::new(StaticMappings::with(&[
            ("abc123", "https://example.com/a"),
            ("def456", "https://example.com/b"),
        ]))
    }

    #[tokio::test]
    async fn resolve_existing_slug() {
        let outcome = service().resolve("abc123").await.unwrap();
        assert_eq!(
            outcome,
            Outcome::Redirect("https://example.com/a".to_string())
        );
    }

    #[tokio::test]
    async fn resolve_nonexistent_slug() {
        let outcome = service().resolve("zzzzzz").await.unwrap();
        assert_eq!(outcome, Outcome::NotFound);
    }

    #[tokio::test]
    async fn visit_redirects() {
        let visit = service().visit("/short/def456").await.unwrap();
        assert_eq!(
            visit,
            Some(Visit::Redirecting {
                url: "https://example.com/b".to_string()
            })
        );
    }

    #[tokio::test]
    async fn visit_unknown_slug_is_not_found() {
        let visit = service().visit("/short/zzzzzz").await.unwrap();
        assert_eq!(
            visit,
            Some(Visit::NotFound {
                slug: "zzzzzz".to_string()
            })
        );
    }

    #[tokio::test]
    async fn visit_outside_route_is_ignored() {
        assert_eq!(service().visit("/history").await.unwrap(), None);
    }

    #[tokio::test]
    async fn drive_leaves_terminal_visit_alone() {
        let terminal = Visit::NotFound {
            slug: "abc123".to_string(),
        };
        let driven = service().drive(terminal.clone()).await.unwrap();
        assert_eq!(driven, terminal);
    }

    #[tokio::test]
    async fn drive_after_retarget_resolves_new_slug() {
        let mut visit = Visit::begin("zzzzzz");
        visit.retarget("abc123");

        let driven = service().drive(visit).await.unwrap();
        assert_eq!(
            driven,
            Visit::Redirecting {
                url: "https://example.com/a".to_string()
            }
        );
    }

    #[tokio::test]
    async fn read_errors_propagate() {
        let service = RedirectorService::new(Unreadable);
        let err = service.resolve("abc123").await.unwrap_err();
        assert!(matches!(err, ShortenerError::Storage(_)));
    }

    #[tokio::test]
    async fn works_over_shared_mappings() {
        let shared = Arc::new(StaticMappings::with(&[("abc123", "https://example.com/a")]));
        let service = RedirectorService::new(Arc::clone(&shared));

        assert!(service.resolve("abc123").await.unwrap().is_redirect());
    }
}
