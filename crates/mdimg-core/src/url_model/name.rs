//! Base names for stored images and identifiers for run directories.

use sha2::{Digest, Sha256};

/// Number of hex characters in a run identifier.
pub const RUN_ID_LEN: usize = 12;

const DIGEST_PREFIX_LEN: usize = 8;

/// Base filename (no suffix) for the `index`-th (1-based) image of a document.
///
/// `img_<index:02>_<first 8 hex chars of sha256(url)>`, so names sort by
/// discovery order and same-named remote files do not collide.
pub fn asset_base_name(url: &str, index: usize) -> String {
    let digest = hex::encode(Sha256::digest(url.as_bytes()));
    format!("img_{:02}_{}", index, &digest[..DIGEST_PREFIX_LEN])
}

/// Fresh random identifier for a run directory (12 lowercase hex chars).
pub fn new_run_id() -> String {
    let mut id = uuid::Uuid::new_v4().simple().to_string();
    id.truncate(RUN_ID_LEN);
    id
}
