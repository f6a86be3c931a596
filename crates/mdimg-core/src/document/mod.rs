//! Markdown image references and literal text substitution.

mod reference;
mod substitute;

pub use reference::{extract_references, Reference};
pub use substitute::{apply_substitutions, image_markdown, Substitution};

/// Accepted document extension (compared case-insensitively).
pub const DOCUMENT_EXTENSION: &str = "md";

/// True if `path` carries the Markdown extension.
pub fn is_markdown_path(path: &std::path::Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case(DOCUMENT_EXTENSION))
        .unwrap_or(false)
}
