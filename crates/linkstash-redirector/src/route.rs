use std::borrow::Cow;

/// Path prefix under which short links are resolved.
pub const SHORT_PREFIX: &str = "/short/";

/// Extracts the slug from a visited `/short/<slug>` path.
///
/// A single trailing `/` is allowed, and any query string or fragment is
/// ignored. The slug segment is percent-decoded. Returns `None` for paths
/// outside the short-link route or segments that do not decode to UTF-8.
pub fn parse_short_path(path: &str) -> Option<Cow<'_, str>> {
    let path = path
        .find(|c: char| c == '?' || c == '#')
        .map_or(path, |end| &path[..end]);

    let rest = path.strip_prefix(SHORT_PREFIX)?;
    let slug = rest.strip_suffix('/').unwrap_or(rest);

    if slug.is_empty() || slug.contains('/') {
        return None;
    }

    urlencoding::decode(slug).ok()
}

/// Builds the in-app path a short link is visited at.
pub fn short_path(slug: &str) -> String {
    format!("{}{}", SHORT_PREFIX, slug)
}
