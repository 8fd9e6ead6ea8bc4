use crate::error::{CoreError, Result};
use serde::{Deserialize, Serialize};
use smol_str::SmolStr;
use std::fmt::Display;
use std::str::FromStr;

/// Length of every slug produced by the bundled generators.
pub const SLUG_LEN: usize = 6;

/// The base-36 alphabet slugs are drawn from.
pub const SLUG_ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

const MAX_LENGTH: usize = 32;

/// A validated, URL-safe identifier standing in for a long URL.
///
/// Slugs are 1-32 characters long and contain only `[0-9a-z]`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Slug(SmolStr);

impl Slug {
    /// Creates a new `Slug` after validating the input.
    pub fn new(slug: impl AsRef<str>) -> Result<Self> {
        let slug = slug.as_ref();
        Self::validate(slug)?;
        Ok(Self(SmolStr::new(slug)))
    }

    /// Creates a `Slug` without validation.
    ///
    /// Use this only for slugs produced by trusted internal sources
    /// (e.g. generators that are guaranteed to produce valid output).
    pub fn new_unchecked(slug: impl AsRef<str>) -> Self {
        Self(SmolStr::new(slug))
    }

    /// Builds the full short URL by joining `base_url` and the slug.
    pub fn to_url(&self, base_url: &str) -> String {
        format!("{}/{}", base_url.trim_end_matches('/'), self.0)
    }

    /// Returns the slug as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn validate(slug: &str) -> Result<()> {
        if slug.is_empty() || slug.len() > MAX_LENGTH {
            return Err(CoreError::InvalidSlug(format!(
                "length must be between 1 and {}, got {}",
                MAX_LENGTH,
                slug.len()
            )));
        }

        if !slug.bytes().all(|b| SLUG_ALPHABET.contains(&b)) {
            return Err(CoreError::InvalidSlug(format!(
                "must contain only lower-case letters and digits: '{}'",
                slug
            )));
        }

        Ok(())
    }
}

impl Display for Slug {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Slug {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl TryFrom<String> for Slug {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Slug> for String {
    fn from(value: Slug) -> Self {
        value.0.into()
    }
}
