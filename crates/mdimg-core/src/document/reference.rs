//! Extraction of remote image embeds (`![label](http...)`).

use regex::Regex;
use std::sync::LazyLock;

static IMAGE_REF: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"!\[([^\]]*)\]\((https?://[^)]+)\)").expect("image reference pattern is valid")
});

/// One remote image embed found in a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reference {
    /// Exact matched text, e.g. `![cat](https://x.test/cat.png)`.
    pub literal: String,
    pub label: String,
    pub url: String,
    /// Byte offset of the match in the document.
    pub offset: usize,
}

/// All remote image references in `text`, in document order.
pub fn extract_references(text: &str) -> Vec<Reference> {
    IMAGE_REF
        .captures_iter(text)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            Some(Reference {
                literal: whole.as_str().to_string(),
                label: caps.get(1)?.as_str().to_string(),
                url: caps.get(2)?.as_str().to_string(),
                offset: whole.start(),
            })
        })
        .collect()
}
