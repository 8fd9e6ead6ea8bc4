use linkstash_core::UrlMapping;

/// Result of resolving a slug for redirection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Navigate to this long URL.
    Redirect(String),
    /// No mapping has the slug.
    NotFound,
}

impl Outcome {
    pub fn is_redirect(&self) -> bool {
        matches!(self, Outcome::Redirect(_))
    }

    /// Returns the redirect target, if any.
    pub fn target(&self) -> Option<&str> {
        match self {
            Outcome::Redirect(url) => Some(url),
            Outcome::NotFound => None,
        }
    }
}

impl From<Option<UrlMapping>> for Outcome {
    fn from(mapping: Option<UrlMapping>) -> Self {
        match mapping {
            Some(mapping) => Outcome::Redirect(mapping.long_url().to_string()),
            None => Outcome::NotFound,
        }
    }
}
