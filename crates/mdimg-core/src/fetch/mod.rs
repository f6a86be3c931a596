//! Image retrieval and storage.
//!
//! A [`Fetcher`] performs one network GET per URL and hands back the body and
//! declared content type. [`fetch_and_store`] then picks the final suffix and
//! writes the bytes under the run directory. Nothing touches the disk until
//! the whole body is in memory.

mod curl_fetcher;
mod error;
mod parse;

pub use curl_fetcher::{CurlFetcher, CurlOptions};
pub use error::FetchError;

use crate::storage;
use crate::url_model::resolve_extension;
use std::fs;
use std::path::{Path, PathBuf};

/// Body and declared type of a fetched image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedAsset {
    pub bytes: Vec<u8>,
    /// Value of the final response's `Content-Type`, if any.
    pub content_type: Option<String>,
}

/// Retrieves remote content. One call is one attempt.
pub trait Fetcher {
    fn fetch(&self, url: &str) -> Result<FetchedAsset, FetchError>;
}

impl<T: Fetcher + ?Sized> Fetcher for &T {
    fn fetch(&self, url: &str) -> Result<FetchedAsset, FetchError> {
        (**self).fetch(url)
    }
}

/// Fetches `url` and stores it at `base_path` plus the resolved suffix.
///
/// `base_path` carries no suffix (e.g. `<run dir>/img_01_1a2b3c4d`). Parent
/// directories are created as needed. Returns the finalized path.
pub fn fetch_and_store<F: Fetcher + ?Sized>(
    fetcher: &F,
    url: &str,
    base_path: &Path,
) -> Result<PathBuf, FetchError> {
    let asset = fetcher.fetch(url)?;
    let ext = resolve_extension(url, asset.content_type.as_deref());

    let mut name = base_path.as_os_str().to_owned();
    name.push(ext);
    let final_path = PathBuf::from(name);

    if let Some(parent) = final_path.parent() {
        fs::create_dir_all(parent)?;
    }
    storage::write_atomic(&final_path, &asset.bytes)?;
    tracing::debug!("stored {} bytes at {}", asset.bytes.len(), final_path.display());
    Ok(final_path)
}
