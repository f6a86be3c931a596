//! File suffix selection for downloaded images.

/// Suffix used when neither the URL nor the content type identify the format.
pub const DEFAULT_EXTENSION: &str = ".png";

/// Path suffixes accepted as-is (compared case-insensitively).
const KNOWN_SUFFIXES: &[(&str, &str)] = &[
    ("png", ".png"),
    ("jpg", ".jpg"),
    ("jpeg", ".jpeg"),
    ("gif", ".gif"),
    ("webp", ".webp"),
    ("svg", ".svg"),
    ("bmp", ".bmp"),
    ("ico", ".ico"),
];

/// Content-type fragments and the suffix each maps to. First match wins.
const CONTENT_TYPE_SUFFIXES: &[(&str, &str)] = &[
    ("png", ".png"),
    ("jpeg", ".jpg"),
    ("gif", ".gif"),
    ("webp", ".webp"),
    ("svg+xml", ".svg"),
    ("bmp", ".bmp"),
    ("x-icon", ".ico"),
];

/// Picks the suffix (with leading dot) for an image fetched from `url`.
///
/// Order: a recognized suffix on the URL path (query ignored), then the
/// declared `content_type`, then [`DEFAULT_EXTENSION`].
pub fn resolve_extension(url: &str, content_type: Option<&str>) -> &'static str {
    if let Some(suffix) = super::path_suffix(url) {
        if let Some((_, ext)) = KNOWN_SUFFIXES
            .iter()
            .find(|(known, _)| suffix.eq_ignore_ascii_case(known))
        {
            return ext;
        }
    }

    if let Some(ct) = content_type {
        let ct = ct.to_ascii_lowercase();
        if let Some((_, ext)) = CONTENT_TYPE_SUFFIXES
            .iter()
            .find(|(key, _)| ct.contains(key))
        {
            return ext;
        }
    }

    DEFAULT_EXTENSION
}
