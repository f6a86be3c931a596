//! URL modeling and filename derivation for stored images.
//!
//! Decides the on-disk suffix of an image (from its URL path or declared
//! content type) and the short, sortable base name it is stored under.

mod extension;
mod name;
mod path;

pub use extension::{resolve_extension, DEFAULT_EXTENSION};
pub use name::{asset_base_name, new_run_id, RUN_ID_LEN};
pub use path::path_suffix;
