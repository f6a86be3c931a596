//! Where a run stores images on disk and how the site refers to them.

use crate::config::MdimgConfig;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetLayout {
    /// Directory that holds one subdirectory per run.
    pub storage_root: PathBuf,
    /// Site-root path matching `storage_root` (e.g. `/images/posts`).
    pub public_prefix: String,
}

impl AssetLayout {
    pub fn new(storage_root: impl Into<PathBuf>, public_prefix: impl Into<String>) -> Self {
        Self {
            storage_root: storage_root.into(),
            public_prefix: public_prefix.into(),
        }
    }

    /// `<project_root>/<static_dir>` with the configured public prefix.
    pub fn for_project(project_root: &Path, cfg: &MdimgConfig) -> Self {
        Self::new(project_root.join(&cfg.static_dir), cfg.public_prefix.clone())
    }

    pub fn run_dir(&self, run_id: &str) -> PathBuf {
        self.storage_root.join(run_id)
    }

    /// `/images/posts/<run_id>/<file_name>` for the default prefix.
    pub fn public_path(&self, run_id: &str, file_name: &str) -> String {
        format!(
            "{}/{}/{}",
            self.public_prefix.trim_end_matches('/'),
            run_id,
            file_name
        )
    }
}
