use crate::error::ShortenerError;
use url::Url;

/// Checks that `candidate` is a well-formed absolute URL.
///
/// Any scheme the URL grammar accepts is allowed. Relative references,
/// empty input and unparseable strings are rejected.
pub fn validate_url(candidate: &str) -> Result<(), ShortenerError> {
    if candidate.trim().is_empty() {
        return Err(ShortenerError::InvalidUrl(
            "URL cannot be empty".to_string(),
        ));
    }

    let url = Url::parse(candidate)
        .map_err(|e| ShortenerError::InvalidUrl(format!("{}: {}", candidate, e)))?;

    if url.scheme().is_empty() {
        return Err(ShortenerError::InvalidUrl(format!(
            "URL must have a scheme: {}",
            candidate
        )));
    }

    Ok(())
}

/// Returns `true` iff `candidate` parses as an absolute URL. Never panics.
pub fn is_valid(candidate: &str) -> bool {
    validate_url(candidate).is_ok()
}
