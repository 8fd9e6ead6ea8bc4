use async_trait::async_trait;
use linkstash_core::{
    validate_url, MappingCollection, ReadMappings, Shortener, ShortenerError, Slug,
    SnapshotStore, StorageError, UrlMapping,
};
use linkstash_generator::Generator;
use tokio::sync::Mutex;
use tracing::{debug, info, trace, warn};
use typed_builder::TypedBuilder;

type Result<T> = std::result::Result<T, ShortenerError>;

pub const DEFAULT_BASE_URL: &str = "https://short.ly";
pub const DEFAULT_MAX_ATTEMPTS: u32 = 8;

/// Configures a [`MappingStore`].
#[derive(Debug, Clone, TypedBuilder)]
pub struct StoreSettings {
    /// Address short URLs are built on: `<base_url>/<slug>`.
    #[builder(default = DEFAULT_BASE_URL.to_string(), setter(into))]
    pub base_url: String,
    /// How many generator draws `create` makes before giving up.
    /// Values below 1 are treated as 1.
    #[builder(default = DEFAULT_MAX_ATTEMPTS)]
    pub max_attempts: u32,
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// Owns the authoritative mapping collection.
///
/// The store wraps a `SnapshotStore` and a `Generator` to handle:
/// - URL validation before anything is touched
/// - Slug uniqueness, retrying the generator up to `max_attempts` times
/// - Persisting the full collection before a create is acknowledged
///
/// The collection sits behind an async mutex, so the uniqueness check, the
/// insert and the save of one `create` never interleave with another.
#[derive(Debug)]
pub struct MappingStore<S, G> {
    backend: S,
    generator: G,
    settings: StoreSettings,
    mappings: Mutex<MappingCollection>,
}

impl<S: SnapshotStore, G: Generator> MappingStore<S, G> {
    /// Opens a store, loading whatever snapshot `backend` holds.
    ///
    /// A missing snapshot starts an empty collection. A corrupt snapshot is
    /// discarded with a warning and also starts empty. Only an unreachable
    /// backend is reported as an error.
    pub async fn open(backend: S, generator: G, settings: StoreSettings) -> Result<Self> {
        Self::open_with(backend, settings, |_| generator).await
    }

    /// Like [`open`](Self::open), but builds the generator from the number
    /// of mappings loaded (after duplicate slugs were dropped), so that
    /// counter-based generators can resume where the stored data ends.
    pub async fn open_with<F>(backend: S, settings: StoreSettings, make_generator: F) -> Result<Self>
    where
        F: FnOnce(usize) -> G,
    {
        let mappings = match backend.load().await {
            Ok(Some(snapshot)) => {
                let (collection, dropped) = MappingCollection::from_snapshot(snapshot);
                if dropped > 0 {
                    warn!(dropped, "snapshot contained duplicate slugs, keeping the first of each");
                }
                collection
            }
            Ok(None) => {
                debug!("no snapshot found, starting with an empty collection");
                MappingCollection::new()
            }
            Err(StorageError::InvalidData(reason)) => {
                warn!(error = %reason, "discarding corrupt snapshot");
                MappingCollection::new()
            }
            Err(err) => return Err(err.into()),
        };

        info!(
            mappings = mappings.len(),
            base_url = %settings.base_url,
            "mapping store opened"
        );

        let generator = make_generator(mappings.len());

        Ok(Self {
            backend,
            generator,
            settings,
            mappings: Mutex::new(mappings),
        })
    }

    pub fn settings(&self) -> &StoreSettings {
        &self.settings
    }

    /// Number of mappings currently held.
    pub async fn len(&self) -> usize {
        self.mappings.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.mappings.lock().await.is_empty()
    }

    /// Draws slugs until one is not in `mappings`.
    fn next_free_slug(&self, mappings: &MappingCollection) -> Result<Slug> {
        let attempts = self.settings.max_attempts.max(1);

        for attempt in 1..=attempts {
            let slug = self.generator.generate();
            if !mappings.contains(slug.as_str()) {
                return Ok(slug);
            }
            warn!(slug = %slug, attempt, "generated slug already in use, retrying");
        }

        Err(ShortenerError::SlugExhausted { attempts })
    }
}

#[async_trait]
impl<S: SnapshotStore, G: Generator> ReadMappings for MappingStore<S, G> {
    async fn resolve(&self, slug: &str) -> Result<Option<UrlMapping>> {
        trace!(slug, "resolving slug");
        let mappings = self.mappings.lock().await;
        Ok(mappings.find(slug).cloned())
    }

    async fn list(&self) -> Result<Vec<UrlMapping>> {
        let mappings = self.mappings.lock().await;
        Ok(mappings.as_slice().to_vec())
    }
}

#[async_trait]
impl<S: SnapshotStore, G: Generator> Shortener for MappingStore<S, G> {
    async fn create(&self, long_url: &str) -> Result<UrlMapping> {
        validate_url(long_url)?;

        let mut mappings = self.mappings.lock().await;
        let slug = self.next_free_slug(&mappings)?;
        let mapping = UrlMapping::new(slug, long_url, &self.settings.base_url);

        // persist the candidate first; memory only changes once the save succeeded
        let mut candidate = mappings.clone();
        candidate.push(mapping.clone())?;
        self.backend.save(candidate.as_slice()).await?;
        *mappings = candidate;

        debug!(
            slug = %mapping.slug(),
            long_url = %mapping.long_url(),
            "created mapping"
        );
        Ok(mapping)
    }
}
