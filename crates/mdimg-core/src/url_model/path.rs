//! Suffix extraction from URL paths.

/// Returns the suffix (text after the last `.`) of the URL's final path
/// segment, ignoring any query string or fragment.
///
/// Returns `None` if the last segment has no dot or nothing after it. A
/// fragment is never part of the path, so `/a#b.png` has no suffix.
pub fn path_suffix(url: &str) -> Option<String> {
    let path = match url::Url::parse(url) {
        Ok(parsed) => parsed.path().to_string(),
        Err(_) => url
            .split(['?', '#'])
            .next()
            .unwrap_or_default()
            .to_string(),
    };
    let segment = path.rsplit('/').next()?;
    let (_, suffix) = segment.rsplit_once('.')?;
    if suffix.is_empty() {
        return None;
    }
    Some(suffix.to_string())
}
