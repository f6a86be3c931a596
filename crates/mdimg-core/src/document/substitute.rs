//! Whole-document literal replacement.

/// Rewrite recorded for one successfully stored image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Substitution {
    /// Literal reference text as found in the document.
    pub original: String,
    /// Reference text pointing at the local copy.
    pub replacement: String,
}

/// Markdown image embed text for `label` and `target`.
pub fn image_markdown(label: &str, target: &str) -> String {
    format!("![{}]({})", label, target)
}

/// Applies `subs` in order, each replacing every occurrence of its original text.
///
/// Identical reference text anywhere in the document is rewritten by the
/// first substitution that names it, even if it was a separate embed.
pub fn apply_substitutions(text: &str, subs: &[Substitution]) -> String {
    subs.iter().fold(text.to_string(), |acc, sub| {
        acc.replace(&sub.original, &sub.replacement)
    })
}
