use crate::outcome::Outcome;
use crate::route::parse_short_path;

/// One visit to a short link.
///
/// A visit starts in `Resolving` and moves exactly once into one of the
/// terminal states. Input arriving after that is ignored; there is no
/// retry from a terminal state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Visit {
    /// Waiting for the slug to be resolved.
    Resolving { slug: String },
    /// The caller should navigate to `url`.
    Redirecting { url: String },
    /// No mapping exists; the caller should show a not-found notice.
    NotFound { slug: String },
}

impl Visit {
    pub fn begin(slug: impl Into<String>) -> Self {
        Visit::Resolving { slug: slug.into() }
    }

    /// Starts a visit for a `/short/<slug>` path.
    /// Returns `None` if the path is not a short-link route.
    pub fn from_path(path: &str) -> Option<Self> {
        parse_short_path(path).map(Self::begin)
    }

    /// The slug still waiting to be resolved, if the visit is pending.
    pub fn pending_slug(&self) -> Option<&str> {
        match self {
            Visit::Resolving { slug } => Some(slug),
            _ => None,
        }
    }

    pub fn is_terminal(&self) -> bool {
        !matches!(self, Visit::Resolving { .. })
    }

    /// Points a pending visit at another slug, so it is re-evaluated.
    /// Has no effect once the visit is terminal.
    pub fn retarget(&mut self, new_slug: impl Into<String>) {
        if let Visit::Resolving { slug } = self {
            *slug = new_slug.into();
        }
    }

    /// Applies a resolution outcome. Has no effect once the visit is terminal.
    pub fn advance(&mut self, outcome: Outcome) {
        let slug = match self {
            Visit::Resolving { slug } => std::mem::take(slug),
            _ => return,
        };

        *self = match outcome {
            Outcome::Redirect(url) => Visit::Redirecting { url },
            Outcome::NotFound => Visit::NotFound { slug },
        };
    }
}
