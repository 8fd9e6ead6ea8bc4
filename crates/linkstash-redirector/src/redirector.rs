use crate::outcome::Outcome;
use crate::Result;
use async_trait::async_trait;

#[async_trait]
pub trait Redirector: Send + Sync + 'static {
    /// Decides where a visit to `slug` should go.
    async fn resolve(&self, slug: &str) -> Result<Outcome>;
}
